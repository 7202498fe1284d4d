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
//! IBM Cloud Client Libraries for Rust - Direct Link API v1
//!
//! This crate contains traits, types, and functions to interact with the
//! [Direct Link] service. Direct Link connects on-premises networks to IBM
//! Cloud, using dedicated connections at an IBM Cloud location or connections
//! through a provider port.
//!
//! The main types are:
//!
//! * [DirectLink](client::DirectLink), the client for all the operations in
//!   the service.
//! * [WaitForGateway](wait::WaitForGateway) and
//!   [WaitForVirtualConnection](wait::WaitForVirtualConnection), which wait
//!   until a gateway or a virtual connection reaches a state, or is deleted.
//!
//! # Example
//! ```no_run
//! # use ibm_cloud_directlink_v1::client::DirectLink;
//! # use ibm_cloud_directlink_v1::model::gateway::operational_status;
//! # use gax::credentials::bearer;
//! # async fn sample() -> anyhow::Result<()> {
//! let client = DirectLink::builder()
//!     .with_credentials(bearer::Builder::new("my-iam-access-token").build())
//!     .build()
//!     .await?;
//! let gateway = client.get_gateway().set_id("my-gateway-id").send().await?;
//! println!("gateway = {gateway:?}");
//! let outcome = client
//!     .wait_for_gateway("my-gateway-id")
//!     .until(operational_status::PROVISIONED)
//!     .send()
//!     .await?;
//! println!("outcome = {outcome:?}");
//! # Ok(()) }
//! ```
//!
//! [Direct Link]: https://cloud.ibm.com/docs/dl

pub use gax::Result;
pub use gax::error::Error;

/// The messages and enums that are part of this client library.
pub mod model;

/// The traits used to mock the client in tests.
pub mod stub;

/// Concrete implementations of this client library traits.
pub mod client;

/// Request builders.
pub mod builder;

/// Wait for gateways and virtual connections to reach a state.
pub mod wait;

#[doc(hidden)]
pub(crate) mod transport;

pub(crate) const DEFAULT_ENDPOINT: &str = "https://directlink.cloud.ibm.com/v1";
pub(crate) const DEFAULT_VERSION: &str = "2019-12-13";
