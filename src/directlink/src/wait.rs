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
//! Waits until gateways and virtual connections reach a state.
//!
//! Gateways and virtual connections are created, updated, and deleted
//! asynchronously. The types in this module use [poller] to fetch the
//! resource status until it matches the desired state, or the resource is
//! gone.
//!
//! # Example
//! ```no_run
//! # use ibm_cloud_directlink_v1::client::DirectLink;
//! # use ibm_cloud_directlink_v1::model::gateway::operational_status;
//! # use poller::PollConfig;
//! # use std::time::Duration;
//! # async fn sample(client: &DirectLink) -> gax::Result<()> {
//! client.delete_gateway().set_id("my-gateway-id").send().await?;
//! let outcome = client
//!     .wait_for_gateway("my-gateway-id")
//!     .until_absent()
//!     .with_poll_config(PollConfig::default().with_interval(Duration::from_secs(10)))
//!     .send()
//!     .await?;
//! assert!(outcome.is_not_found(), "{outcome:?}");
//! # Ok(()) }
//! ```

use crate::Result;
use crate::client::DirectLink;
use poller::{DesiredState, FetchState, Observation, PollConfig, PollOutcome, PollTarget};
use tokio_util::sync::CancellationToken;

/// Fetches the `operational_status` of a gateway.
///
/// A gateway that does not exist is reported as [Observation::Absent].
#[derive(Clone, Debug)]
pub struct GatewayStatus {
    client: DirectLink,
}

impl GatewayStatus {
    pub fn new(client: DirectLink) -> Self {
        Self { client }
    }
}

impl FetchState for GatewayStatus {
    type State = String;

    async fn fetch(&self, id: &str) -> Result<Observation<String>> {
        let response = self.client.get_gateway().set_id(id).send().await;
        tracing::debug!(id, ok = response.is_ok(), "fetched gateway");
        observe(response.map(|g| g.operational_status.unwrap_or_default()))
    }
}

/// Fetches the `status` of a virtual connection.
///
/// The id used by the wait is the virtual connection id, the gateway id is
/// fixed when the fetcher is created.
#[derive(Clone, Debug)]
pub struct VirtualConnectionStatus {
    client: DirectLink,
    gateway_id: String,
}

impl VirtualConnectionStatus {
    pub fn new<T: Into<String>>(client: DirectLink, gateway_id: T) -> Self {
        Self {
            client,
            gateway_id: gateway_id.into(),
        }
    }
}

impl FetchState for VirtualConnectionStatus {
    type State = String;

    async fn fetch(&self, id: &str) -> Result<Observation<String>> {
        let response = self
            .client
            .get_gateway_virtual_connection()
            .set_gateway_id(&self.gateway_id)
            .set_id(id)
            .send()
            .await;
        tracing::debug!(
            gateway_id = %self.gateway_id,
            id,
            ok = response.is_ok(),
            "fetched virtual connection"
        );
        observe(response.map(|vc| vc.status.unwrap_or_default()))
    }
}

fn observe(response: Result<String>) -> Result<Observation<String>> {
    match response {
        Ok(state) => Ok(Observation::Present(state)),
        Err(e) if e.is_not_found() => Ok(Observation::Absent),
        Err(e) => Err(e),
    }
}

#[derive(Clone, Debug)]
struct WaitOptions {
    desired: DesiredState<String>,
    config: PollConfig,
    cancel: Option<CancellationToken>,
}

impl WaitOptions {
    fn new(desired: DesiredState<String>) -> Self {
        Self {
            desired,
            config: PollConfig::default(),
            cancel: None,
        }
    }

    async fn wait<F>(self, target: PollTarget<F>) -> Result<PollOutcome<String>>
    where
        F: FetchState<State = String>,
    {
        match self.cancel {
            None => poller::wait_for(target, self.desired, self.config).await,
            Some(token) => {
                poller::wait_for_with_cancellation(target, self.desired, self.config, token).await
            }
        }
    }
}

/// Waits for a gateway, see [DirectLink::wait_for_gateway].
///
/// By default the builder waits until the gateway is `provisioned`, using
/// [PollConfig::default].
#[derive(Clone, Debug)]
pub struct WaitForGateway {
    client: DirectLink,
    id: String,
    options: WaitOptions,
}

impl WaitForGateway {
    pub(crate) fn new(client: DirectLink, id: String) -> Self {
        let desired = DesiredState::State(
            crate::model::gateway::operational_status::PROVISIONED.to_string(),
        );
        Self {
            client,
            id,
            options: WaitOptions::new(desired),
        }
    }

    /// Waits until the gateway `operational_status` is `state`.
    pub fn until<T: Into<String>>(mut self, state: T) -> Self {
        self.options.desired = DesiredState::State(state.into());
        self
    }

    /// Waits until the gateway is deleted.
    pub fn until_absent(mut self) -> Self {
        self.options.desired = DesiredState::Absent;
        self
    }

    /// Changes the interval and number of attempts.
    pub fn with_poll_config<V: Into<PollConfig>>(mut self, v: V) -> Self {
        self.options.config = v.into();
        self
    }

    /// Stops the wait early when `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.options.cancel = Some(token);
        self
    }

    /// Polls the gateway until the desired state, or the attempts are
    /// exhausted.
    pub async fn send(self) -> Result<PollOutcome<String>> {
        let target = PollTarget::new(self.id, GatewayStatus::new(self.client));
        self.options.wait(target).await
    }
}

/// Waits for a virtual connection, see
/// [DirectLink::wait_for_virtual_connection].
///
/// By default the builder waits until the virtual connection is `attached`,
/// using [PollConfig::default].
#[derive(Clone, Debug)]
pub struct WaitForVirtualConnection {
    client: DirectLink,
    gateway_id: String,
    id: String,
    options: WaitOptions,
}

impl WaitForVirtualConnection {
    pub(crate) fn new(client: DirectLink, gateway_id: String, id: String) -> Self {
        let desired = DesiredState::State(
            crate::model::virtual_connection::status::ATTACHED.to_string(),
        );
        Self {
            client,
            gateway_id,
            id,
            options: WaitOptions::new(desired),
        }
    }

    /// Waits until the virtual connection `status` is `state`.
    pub fn until<T: Into<String>>(mut self, state: T) -> Self {
        self.options.desired = DesiredState::State(state.into());
        self
    }

    /// Waits until the virtual connection is deleted.
    pub fn until_absent(mut self) -> Self {
        self.options.desired = DesiredState::Absent;
        self
    }

    /// Changes the interval and number of attempts.
    pub fn with_poll_config<V: Into<PollConfig>>(mut self, v: V) -> Self {
        self.options.config = v.into();
        self
    }

    /// Stops the wait early when `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.options.cancel = Some(token);
        self
    }

    pub async fn send(self) -> Result<PollOutcome<String>> {
        let fetcher = VirtualConnectionStatus::new(self.client, self.gateway_id);
        let target = PollTarget::new(self.id, fetcher);
        self.options.wait(target).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::Error;
    use reqwest::header::HeaderMap;

    #[test]
    fn observe_present() {
        let got = observe(Ok("provisioned".to_string()));
        assert!(
            matches!(&got, Ok(Observation::Present(s)) if s == "provisioned"),
            "{got:?}"
        );
    }

    #[test]
    fn observe_not_found() {
        let err = Error::http(404, HeaderMap::new(), bytes::Bytes::from_static(b"NOT FOUND"));
        let got = observe(Err(err));
        assert!(matches!(got, Ok(Observation::Absent)), "{got:?}");
    }

    #[test]
    fn observe_error() {
        let err = Error::http(500, HeaderMap::new(), bytes::Bytes::from_static(b"OOPS"));
        let got = observe(Err(err));
        assert!(
            matches!(&got, Err(e) if e.http_status_code() == Some(500)),
            "{got:?}"
        );
    }
}
