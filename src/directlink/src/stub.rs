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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

pub(crate) mod dynamic;

/// Defines the trait used to implement [crate::client::DirectLink].
///
/// Application developers may need to implement this trait to mock
/// `client::DirectLink`. In other use-cases, application developers only
/// use `client::DirectLink` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait DirectLink: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::DirectLink::list_gateways].
    fn list_gateways(
        &self,
        _req: crate::model::ListGatewaysRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::GatewayCollection>> + Send {
        unimplemented_stub::<crate::model::GatewayCollection>()
    }

    /// Implements [super::client::DirectLink::create_gateway].
    fn create_gateway(
        &self,
        _req: crate::model::CreateGatewayRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::Gateway>> + Send {
        unimplemented_stub::<crate::model::Gateway>()
    }

    /// Implements [super::client::DirectLink::get_gateway].
    fn get_gateway(
        &self,
        _req: crate::model::GetGatewayRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::Gateway>> + Send {
        unimplemented_stub::<crate::model::Gateway>()
    }

    /// Implements [super::client::DirectLink::update_gateway].
    fn update_gateway(
        &self,
        _req: crate::model::UpdateGatewayRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::Gateway>> + Send {
        unimplemented_stub::<crate::model::Gateway>()
    }

    /// Implements [super::client::DirectLink::delete_gateway].
    fn delete_gateway(
        &self,
        _req: crate::model::DeleteGatewayRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<()>> + Send {
        unimplemented_stub::<()>()
    }

    /// Implements [super::client::DirectLink::create_gateway_action].
    fn create_gateway_action(
        &self,
        _req: crate::model::CreateGatewayActionRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::Gateway>> + Send {
        unimplemented_stub::<crate::model::Gateway>()
    }

    /// Implements [super::client::DirectLink::get_gateway_statistics].
    fn get_gateway_statistics(
        &self,
        _req: crate::model::GetGatewayStatisticsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<crate::model::GatewayStatisticCollection>,
    > + Send {
        unimplemented_stub::<crate::model::GatewayStatisticCollection>()
    }

    /// Implements [super::client::DirectLink::list_gateway_letter_of_authorization].
    fn list_gateway_letter_of_authorization(
        &self,
        _req: crate::model::ListGatewayLetterOfAuthorizationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<bytes::Bytes>> + Send {
        unimplemented_stub::<bytes::Bytes>()
    }

    /// Implements [super::client::DirectLink::list_gateway_completion_notice].
    fn list_gateway_completion_notice(
        &self,
        _req: crate::model::ListGatewayCompletionNoticeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<bytes::Bytes>> + Send {
        unimplemented_stub::<bytes::Bytes>()
    }

    /// Implements [super::client::DirectLink::create_gateway_completion_notice].
    fn create_gateway_completion_notice(
        &self,
        _req: crate::model::CreateGatewayCompletionNoticeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<()>> + Send {
        unimplemented_stub::<()>()
    }

    /// Implements [super::client::DirectLink::list_offering_type_locations].
    fn list_offering_type_locations(
        &self,
        _req: crate::model::ListOfferingTypeLocationsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::LocationCollection>> + Send {
        unimplemented_stub::<crate::model::LocationCollection>()
    }

    /// Implements [super::client::DirectLink::list_offering_type_location_cross_connect_routers].
    fn list_offering_type_location_cross_connect_routers(
        &self,
        _req: crate::model::ListOfferingTypeLocationCrossConnectRoutersRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<crate::model::LocationCrossConnectRouterCollection>,
    > + Send {
        unimplemented_stub::<crate::model::LocationCrossConnectRouterCollection>()
    }

    /// Implements [super::client::DirectLink::list_offering_type_speeds].
    fn list_offering_type_speeds(
        &self,
        _req: crate::model::ListOfferingTypeSpeedsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<crate::model::OfferingSpeedCollection>,
    > + Send {
        unimplemented_stub::<crate::model::OfferingSpeedCollection>()
    }

    /// Implements [super::client::DirectLink::list_ports].
    fn list_ports(
        &self,
        _req: crate::model::ListPortsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::PortCollection>> + Send {
        unimplemented_stub::<crate::model::PortCollection>()
    }

    /// Implements [super::client::DirectLink::get_port].
    fn get_port(
        &self,
        _req: crate::model::GetPortRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::Port>> + Send {
        unimplemented_stub::<crate::model::Port>()
    }

    /// Implements [super::client::DirectLink::list_gateway_virtual_connections].
    fn list_gateway_virtual_connections(
        &self,
        _req: crate::model::ListGatewayVirtualConnectionsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<crate::model::GatewayVirtualConnectionCollection>,
    > + Send {
        unimplemented_stub::<crate::model::GatewayVirtualConnectionCollection>()
    }

    /// Implements [super::client::DirectLink::create_gateway_virtual_connection].
    fn create_gateway_virtual_connection(
        &self,
        _req: crate::model::CreateGatewayVirtualConnectionRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<crate::model::GatewayVirtualConnection>,
    > + Send {
        unimplemented_stub::<crate::model::GatewayVirtualConnection>()
    }

    /// Implements [super::client::DirectLink::get_gateway_virtual_connection].
    fn get_gateway_virtual_connection(
        &self,
        _req: crate::model::GetGatewayVirtualConnectionRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<crate::model::GatewayVirtualConnection>,
    > + Send {
        unimplemented_stub::<crate::model::GatewayVirtualConnection>()
    }

    /// Implements [super::client::DirectLink::update_gateway_virtual_connection].
    fn update_gateway_virtual_connection(
        &self,
        _req: crate::model::UpdateGatewayVirtualConnectionRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<crate::model::GatewayVirtualConnection>,
    > + Send {
        unimplemented_stub::<crate::model::GatewayVirtualConnection>()
    }

    /// Implements [super::client::DirectLink::delete_gateway_virtual_connection].
    fn delete_gateway_virtual_connection(
        &self,
        _req: crate::model::DeleteGatewayVirtualConnectionRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<()>> + Send {
        unimplemented_stub::<()>()
    }
}

async fn unimplemented_stub<T>() -> crate::Result<T> {
    Err(gax::error::Error::other(UNIMPLEMENTED))
}

const UNIMPLEMENTED: &str = "this method is not implemented by the stub";
