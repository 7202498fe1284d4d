// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Implements a client for the Direct Link API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use ibm_cloud_directlink_v1::client::DirectLink;
/// # use gax::credentials::bearer;
/// let client = DirectLink::builder()
///     .with_credentials(bearer::Builder::new("my-iam-access-token").build())
///     .build()
///     .await?;
/// // use `client` to make requests to the Direct Link API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Direct Link connects on-premises networks to IBM Cloud. A gateway is a
/// connection at an IBM Cloud location (`dedicated`) or through a provider
/// port (`connect`). Virtual connections attach a gateway to classic or VPC
/// networks.
///
/// # Configuration
///
/// To configure `DirectLink` use the `with_*` methods in the type returned
/// by [builder()][DirectLink::builder]. The default configuration should
/// work for most applications, but the client requires credentials. Common
/// configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://directlink.cloud.ibm.com/v1`). Applications can use the private
///   endpoints, or emulators, with this option.
/// * [with_credentials()]: the client sends these credentials with each request.
///
/// [with_endpoint()]: super::builder::direct_link::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::direct_link::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `DirectLink` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `DirectLink` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct DirectLink {
    inner: std::sync::Arc<dyn super::stub::dynamic::DirectLink>,
}

impl DirectLink {
    /// Returns a builder for [DirectLink].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_directlink_v1::client::DirectLink;
    /// # use gax::credentials::anonymous;
    /// let client = DirectLink::builder()
    ///     .with_credentials(anonymous::Builder::new().build())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::direct_link::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::direct_link::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::DirectLink + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gax::http_client::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = super::transport::DirectLink::new(config).await?;
        Ok(Self {
            inner: std::sync::Arc::new(inner),
        })
    }

    /// Lists the gateways in the account.
    pub fn list_gateways(&self) -> super::builder::direct_link::ListGateways {
        super::builder::direct_link::ListGateways::new(self.inner.clone())
    }

    /// Creates a gateway.
    ///
    /// The gateway is created asynchronously, use
    /// [wait_for_gateway][DirectLink::wait_for_gateway] to wait until it reaches a
    /// state such as `awaiting_loa` or `provisioned`.
    pub fn create_gateway(&self) -> super::builder::direct_link::CreateGateway {
        super::builder::direct_link::CreateGateway::new(self.inner.clone())
    }

    /// Gets a gateway.
    pub fn get_gateway(&self) -> super::builder::direct_link::GetGateway {
        super::builder::direct_link::GetGateway::new(self.inner.clone())
    }

    /// Updates a gateway.
    ///
    /// Also used to accept or reject the LOA and the completion notice of a
    /// `dedicated` gateway.
    pub fn update_gateway(&self) -> super::builder::direct_link::UpdateGateway {
        super::builder::direct_link::UpdateGateway::new(self.inner.clone())
    }

    /// Deletes a gateway.
    ///
    /// The gateway is deleted asynchronously, use
    /// [wait_for_gateway][DirectLink::wait_for_gateway] with
    /// [until_absent][crate::wait::WaitForGateway::until_absent] to wait until it
    /// is gone.
    pub fn delete_gateway(&self) -> super::builder::direct_link::DeleteGateway {
        super::builder::direct_link::DeleteGateway::new(self.inner.clone())
    }

    /// Approves or rejects a change requested by the provider of a `connect`
    /// gateway.
    pub fn create_gateway_action(&self) -> super::builder::direct_link::CreateGatewayAction {
        super::builder::direct_link::CreateGatewayAction::new(self.inner.clone())
    }

    /// Gets the statistics of a gateway.
    pub fn get_gateway_statistics(&self) -> super::builder::direct_link::GetGatewayStatistics {
        super::builder::direct_link::GetGatewayStatistics::new(self.inner.clone())
    }

    /// Downloads the Letter of Authorization (LOA) of a `dedicated` gateway.
    ///
    /// The response is a PDF document.
    pub fn list_gateway_letter_of_authorization(
        &self,
    ) -> super::builder::direct_link::ListGatewayLetterOfAuthorization {
        super::builder::direct_link::ListGatewayLetterOfAuthorization::new(self.inner.clone())
    }

    /// Downloads the completion notice of a `dedicated` gateway.
    ///
    /// The response is a PDF document.
    pub fn list_gateway_completion_notice(
        &self,
    ) -> super::builder::direct_link::ListGatewayCompletionNotice {
        super::builder::direct_link::ListGatewayCompletionNotice::new(self.inner.clone())
    }

    /// Uploads the completion notice of a `dedicated` gateway.
    pub fn create_gateway_completion_notice(
        &self,
    ) -> super::builder::direct_link::CreateGatewayCompletionNotice {
        super::builder::direct_link::CreateGatewayCompletionNotice::new(self.inner.clone())
    }

    /// Lists the locations where gateways of an offering type can be provisioned.
    pub fn list_offering_type_locations(
        &self,
    ) -> super::builder::direct_link::ListOfferingTypeLocations {
        super::builder::direct_link::ListOfferingTypeLocations::new(self.inner.clone())
    }

    /// Lists the cross connect routers in a `dedicated` location.
    pub fn list_offering_type_location_cross_connect_routers(
        &self,
    ) -> super::builder::direct_link::ListOfferingTypeLocationCrossConnectRouters {
        super::builder::direct_link::ListOfferingTypeLocationCrossConnectRouters::new(
            self.inner.clone(),
        )
    }

    /// Lists the link speeds supported by an offering type.
    pub fn list_offering_type_speeds(&self) -> super::builder::direct_link::ListOfferingTypeSpeeds {
        super::builder::direct_link::ListOfferingTypeSpeeds::new(self.inner.clone())
    }

    /// Lists the provider ports, used to create `connect` gateways.
    pub fn list_ports(&self) -> super::builder::direct_link::ListPorts {
        super::builder::direct_link::ListPorts::new(self.inner.clone())
    }

    /// Gets a provider port.
    pub fn get_port(&self) -> super::builder::direct_link::GetPort {
        super::builder::direct_link::GetPort::new(self.inner.clone())
    }

    /// Lists the virtual connections of a gateway.
    pub fn list_gateway_virtual_connections(
        &self,
    ) -> super::builder::direct_link::ListGatewayVirtualConnections {
        super::builder::direct_link::ListGatewayVirtualConnections::new(self.inner.clone())
    }

    /// Creates a virtual connection between a gateway and a network.
    pub fn create_gateway_virtual_connection(
        &self,
    ) -> super::builder::direct_link::CreateGatewayVirtualConnection {
        super::builder::direct_link::CreateGatewayVirtualConnection::new(self.inner.clone())
    }

    /// Gets a virtual connection.
    pub fn get_gateway_virtual_connection(
        &self,
    ) -> super::builder::direct_link::GetGatewayVirtualConnection {
        super::builder::direct_link::GetGatewayVirtualConnection::new(self.inner.clone())
    }

    /// Updates a virtual connection.
    pub fn update_gateway_virtual_connection(
        &self,
    ) -> super::builder::direct_link::UpdateGatewayVirtualConnection {
        super::builder::direct_link::UpdateGatewayVirtualConnection::new(self.inner.clone())
    }

    /// Deletes a virtual connection.
    pub fn delete_gateway_virtual_connection(
        &self,
    ) -> super::builder::direct_link::DeleteGatewayVirtualConnection {
        super::builder::direct_link::DeleteGatewayVirtualConnection::new(self.inner.clone())
    }

    /// Waits until a gateway reaches a state, or is deleted.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_directlink_v1::client::DirectLink;
    /// # use ibm_cloud_directlink_v1::model::gateway::operational_status;
    /// # async fn sample(client: &DirectLink, id: &str) -> gax::Result<()> {
    /// let outcome = client
    ///     .wait_for_gateway(id)
    ///     .until(operational_status::PROVISIONED)
    ///     .send()
    ///     .await?;
    /// println!("outcome = {outcome:?}");
    /// # Ok(()) }
    /// ```
    pub fn wait_for_gateway<T: Into<String>>(&self, id: T) -> super::wait::WaitForGateway {
        super::wait::WaitForGateway::new(self.clone(), id.into())
    }

    /// Waits until a virtual connection reaches a state, or is deleted.
    pub fn wait_for_virtual_connection<G, T>(
        &self,
        gateway_id: G,
        id: T,
    ) -> super::wait::WaitForVirtualConnection
    where
        G: Into<String>,
        T: Into<String>,
    {
        super::wait::WaitForVirtualConnection::new(self.clone(), gateway_id.into(), id.into())
    }
}
