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

//! IBM Cloud APIs helpers.
//!
//! This crate contains a number of types and functions used in the
//! implementation of the IBM Cloud Client Libraries for Rust.
//!
//! <div class="warning">
//! All the types, traits, and functions hidden from the documentation are
//! <b>not</b> intended for general use. The APIs enabled by the
//! <code>_internal-semver</code> feature will remain unstable for the
//! foreseeable future.
//! </div>

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the clients.
pub mod error;

/// Types to configure the authentication headers sent with each request.
pub mod credentials;

/// Defines some types and traits to convert and use List RPCs as a Stream.
/// Async streams are not yet stable, so neither is the use of this feature.
#[cfg(feature = "unstable-stream")]
pub mod paginator;

/// Defines helpers to validate required path parameters.
#[doc(hidden)]
pub mod path_parameter;

/// Defines traits and helpers for HTTP client implementations.
#[doc(hidden)]
pub mod http_client;

pub mod client_builder;
pub mod options;
