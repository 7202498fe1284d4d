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

use std::sync::Arc;

/// Represents an error using [Credentials][crate::credentials::Credentials].
///
/// The IBM Cloud client libraries may experience problems creating the
/// authentication headers from a set of credentials. For example, the bearer
/// token may contain characters that are not valid in a header value, or a
/// custom token source may be temporarily unable to produce a token.
///
/// Applications rarely need to create instances of this error type. The
/// exception might be when testing application code, where the application is
/// mocking the credentials.
///
/// # Example
/// ```
/// # use ibm_cloud_gax::error::CredentialsError;
/// let err = CredentialsError::from_msg(
///     true, "simulated transient error while trying to create a token");
/// assert!(err.is_transient());
/// assert!(format!("{err}").contains("simulated transient error"));
/// ```
#[derive(Clone, Debug, thiserror::Error)]
#[error("cannot create the authentication headers, {}: {source}", transient_message(*.is_transient))]
pub struct CredentialsError {
    is_transient: bool,
    #[source]
    source: CredentialsErrorImpl,
}

#[derive(Clone, Debug, thiserror::Error)]
enum CredentialsErrorImpl {
    #[error("{0}")]
    SimpleMessage(String),
    #[error(transparent)]
    Source(Arc<dyn std::error::Error + Send + Sync>),
}

impl CredentialsError {
    /// Creates a new `CredentialsError` wrapping another error.
    ///
    /// # Arguments
    /// * `is_transient` - if true, future attempts may succeed.
    /// * `source` - the underlying error that caused the failure.
    pub fn from_source<T>(is_transient: bool, source: T) -> Self
    where
        T: std::error::Error + Send + Sync + 'static,
    {
        Self {
            is_transient,
            source: CredentialsErrorImpl::Source(Arc::new(source)),
        }
    }

    /// Creates a new `CredentialsError` from a message.
    ///
    /// # Arguments
    /// * `is_transient` - if true, future attempts may succeed.
    /// * `message` - a description of the failure.
    pub fn from_msg<T: Into<String>>(is_transient: bool, message: T) -> Self {
        Self {
            is_transient,
            source: CredentialsErrorImpl::SimpleMessage(message.into()),
        }
    }

    /// Returns `true` if future attempts may succeed.
    pub fn is_transient(&self) -> bool {
        self.is_transient
    }
}

const TRANSIENT_MSG: &str = "but future attempts may succeed";
const PERMANENT_MSG: &str = "and future attempts will not succeed";

fn transient_message(is_transient: bool) -> &'static str {
    if is_transient {
        TRANSIENT_MSG
    } else {
        PERMANENT_MSG
    }
}
