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
//! Configuration for the live integration tests.
//!
//! The live tests create real gateways, the environment selects the account
//! (via the bearer token), the endpoint, and where the gateways are created.

use anyhow::Result;

const SERVICE_URL_VAR: &str = "DIRECTLINK_SERVICE_URL";
const BEARER_TOKEN_VAR: &str = "DIRECTLINK_BEARER_TOKEN";
const LOCATION_VAR: &str = "DIRECTLINK_TEST_LOCATION";
const CROSS_CONNECT_ROUTER_VAR: &str = "DIRECTLINK_TEST_CROSS_CONNECT_ROUTER";
const PORT_LOCATION_VAR: &str = "DIRECTLINK_TEST_PORT_LOCATION";
const VPC_CRN_VAR: &str = "DIRECTLINK_TEST_VPC_CRN";
const DEFAULT_SERVICE_URL: &str = "https://directlink.cloud.ibm.com/v1";
const DEFAULT_LOCATION: &str = "dal09";
const DEFAULT_CROSS_CONNECT_ROUTER: &str = "LAB-xcr01.dal09";

/// Returns the Direct Link endpoint used for the integration tests.
pub fn service_url() -> String {
    std::env::var(SERVICE_URL_VAR)
        .ok()
        .unwrap_or(DEFAULT_SERVICE_URL.to_string())
}

/// Returns the IAM access token used to authenticate the integration tests.
pub fn bearer_token() -> Result<String> {
    std::env::var(BEARER_TOKEN_VAR).map_err(anyhow::Error::from)
}

/// Returns the location for `dedicated` gateways.
pub fn location_name() -> String {
    std::env::var(LOCATION_VAR)
        .ok()
        .unwrap_or(DEFAULT_LOCATION.to_string())
}

/// Returns the cross connect router for `dedicated` gateways.
pub fn cross_connect_router() -> String {
    std::env::var(CROSS_CONNECT_ROUTER_VAR)
        .ok()
        .unwrap_or(DEFAULT_CROSS_CONNECT_ROUTER.to_string())
}

/// Returns the location used to filter provider ports, if any.
pub fn port_location_name() -> Option<String> {
    std::env::var(PORT_LOCATION_VAR).ok()
}

/// Returns the CRN of a VPC for `vpc` virtual connections, if any.
pub fn vpc_crn() -> Option<String> {
    std::env::var(VPC_CRN_VAR).ok()
}
