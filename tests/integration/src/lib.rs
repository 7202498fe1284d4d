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
use gax::credentials::bearer;
use ibm_cloud_test_utils::runtime_config;

pub type Result<T> = anyhow::Result<T>;
pub mod gateways;
pub mod offerings;
pub mod ports;
pub mod virtual_connections;

/// The BGP ASN used for all the test gateways.
pub const BGP_ASN: i64 = 64999;

/// The link speed used for all the test gateways.
pub const SPEED_MBPS: i64 = 1000;

pub fn report_error(e: anyhow::Error) -> anyhow::Error {
    eprintln!("\n\nERROR {e:?}\n");
    tracing::error!("ERROR {e:?}");
    e
}

pub fn enable_tracing() -> tracing::subscriber::DefaultGuard {
    ibm_cloud_test_utils::tracing::enable_tracing()
}

/// Returns a builder configured from the environment.
pub fn builder() -> Result<directlink::builder::direct_link::ClientBuilder> {
    let token = runtime_config::bearer_token()?;
    let builder = directlink::client::DirectLink::builder()
        .with_endpoint(runtime_config::service_url())
        .with_credentials(bearer::Builder::new(token).build());
    Ok(builder)
}
