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
//! Helper functions and types to generate random resource names.

use rand::{
    Rng,
    distr::{Distribution, Uniform},
};

/// A common prefix for resource names.
///
/// The live tests use this prefix for the gateways and virtual connections
/// they create, so any leaked resources are easy to find and remove.
pub const PREFIX: &str = "rust-sdk-testing-";

/// The maximum length for gateway and virtual connection names.
const NAME_LENGTH: usize = 63;

/// Generate a random gateway name.
pub fn random_gateway_name() -> String {
    let id = LowercaseAlphanumeric.random_string(NAME_LENGTH - PREFIX.len() - "gw-".len());
    format!("{PREFIX}gw-{id}")
}

/// Generate a random virtual connection name.
pub fn random_virtual_connection_name() -> String {
    let id = LowercaseAlphanumeric.random_string(NAME_LENGTH - PREFIX.len() - "vc-".len());
    format!("{PREFIX}vc-{id}")
}

const LOWERCASE_ALPHANUMERIC_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Sample a `u8`, uniformly distributed over ASCII lowercase letters and numbers: a-z and 0-9.
///
/// # Example
/// ```
/// use ibm_cloud_test_utils::resource_names::LowercaseAlphanumeric;
/// let got: String = LowercaseAlphanumeric.random_string(32);
/// assert_eq!(got.len(), 32);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseAlphanumeric;

impl LowercaseAlphanumeric {
    /// Create a string with `n` characters from the character set.
    pub fn random_string(&self, n: usize) -> String {
        rand::rng()
            .sample_iter(self)
            .take(n)
            .map(char::from)
            .collect()
    }
}

impl Distribution<u8> for LowercaseAlphanumeric {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        let u = Uniform::new(0, LOWERCASE_ALPHANUMERIC_CHARSET.len())
            .expect("hard-coded uniform distribution is initialized successfully")
            .sample(rng);
        LOWERCASE_ALPHANUMERIC_CHARSET[u]
    }
}
