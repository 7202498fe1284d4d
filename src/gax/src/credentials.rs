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

//! Types to create the authentication headers for IBM Cloud requests.
//!
//! IBM Cloud services authenticate requests using IAM access tokens, sent as
//! `Authorization: Bearer ...` headers. The IBM Cloud client libraries for
//! Rust do not exchange API keys for access tokens. Applications obtain the
//! token using their preferred mechanism and configure the client with
//! [bearer::Builder]. Emulators and test servers can use [anonymous::Builder].
//!
//! Applications with more complex needs, such as refreshing tokens, implement
//! [CredentialsProvider] and convert the implementation into [Credentials].

use crate::error::CredentialsError;
use http::HeaderMap;
use std::future::Future;
use std::sync::Arc;

/// The result type for credentials operations.
pub type Result<T> = std::result::Result<T, CredentialsError>;

/// A source of authentication headers.
///
/// `Credentials` are cheap to clone, and can be shared across threads.
///
/// # Example
/// ```
/// # use ibm_cloud_gax::credentials::bearer;
/// # tokio_test::block_on(async {
/// let credentials = bearer::Builder::new("my-iam-access-token").build();
/// let headers = credentials.headers().await?;
/// assert!(headers.contains_key(http::header::AUTHORIZATION));
/// # Ok::<(), ibm_cloud_gax::error::CredentialsError>(()) });
/// ```
#[derive(Clone, Debug)]
pub struct Credentials {
    // Credentials are shared by all the clones of a client, and the clients
    // must be `Send + Sync`.
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers to authenticate a request.
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }
}

/// Implemented by types that can create authentication headers.
///
/// # Example
/// ```
/// # use ibm_cloud_gax::credentials::{Credentials, CredentialsProvider, Result};
/// #[derive(Debug)]
/// struct MyTokenSource;
/// impl CredentialsProvider for MyTokenSource {
///     async fn headers(&self) -> Result<http::HeaderMap> {
///         let mut headers = http::HeaderMap::new();
///         headers.insert("x-custom-auth", http::HeaderValue::from_static("secret"));
///         Ok(headers)
///     }
/// }
/// let credentials = Credentials::from(MyTokenSource);
/// ```
pub trait CredentialsProvider: std::fmt::Debug {
    /// Asynchronously constructs the auth headers.
    fn headers(&self) -> impl Future<Output = Result<HeaderMap>> + Send;
}

pub(crate) mod dynamic {
    use super::{HeaderMap, Result};

    /// A dyn-compatible, crate-private version of `CredentialsProvider`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        async fn headers(&self) -> Result<HeaderMap>;
    }

    /// The public CredentialsProvider implements the dyn-compatible version.
    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self) -> Result<HeaderMap> {
            T::headers(self).await
        }
    }
}

/// Credentials based on a pre-existing IAM access token.
pub mod bearer {
    use super::{CredentialsProvider, HeaderMap, Result};
    use crate::error::CredentialsError;
    use http::HeaderValue;

    /// Creates [Credentials][super::Credentials] from an access token.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_gax::credentials::bearer;
    /// let credentials = bearer::Builder::new("my-iam-access-token").build();
    /// ```
    #[derive(Clone, Debug)]
    pub struct Builder {
        token: String,
    }

    impl Builder {
        pub fn new<T: Into<String>>(token: T) -> Self {
            Self {
                token: token.into(),
            }
        }

        pub fn build(self) -> super::Credentials {
            super::Credentials::from(BearerToken { token: self.token })
        }
    }

    struct BearerToken {
        token: String,
    }

    impl std::fmt::Debug for BearerToken {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("BearerToken")
                .field("token", &"[censored]")
                .finish()
        }
    }

    impl CredentialsProvider for BearerToken {
        async fn headers(&self) -> Result<HeaderMap> {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token))
                .map_err(|e| CredentialsError::from_source(false, e))?;
            value.set_sensitive(true);
            let mut headers = HeaderMap::new();
            headers.insert(http::header::AUTHORIZATION, value);
            Ok(headers)
        }
    }
}

/// Credentials that do not authenticate the requests.
///
/// Useful with emulators and fake services in tests.
pub mod anonymous {
    use super::{CredentialsProvider, HeaderMap, Result};

    #[derive(Clone, Debug, Default)]
    pub struct Builder;

    impl Builder {
        pub fn new() -> Self {
            Self
        }

        pub fn build(self) -> super::Credentials {
            super::Credentials::from(Anonymous)
        }
    }

    #[derive(Debug)]
    struct Anonymous;

    impl CredentialsProvider for Anonymous {
        async fn headers(&self) -> Result<HeaderMap> {
            Ok(HeaderMap::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::AUTHORIZATION;
    type TestResult = anyhow::Result<()>;

    static_assertions::assert_impl_all!(Credentials: Clone, std::fmt::Debug, Send, Sync);

    mockall::mock! {
        #[derive(Debug)]
        Provider {}
        impl CredentialsProvider for Provider {
            fn headers(&self) -> impl Future<Output = Result<HeaderMap>> + Send;
        }
    }

    #[tokio::test]
    async fn bearer() -> TestResult {
        let credentials = bearer::Builder::new("test-token").build();
        let headers = credentials.headers().await?;
        let value = headers.get(AUTHORIZATION).expect("authorization header");
        assert_eq!(value.to_str()?, "Bearer test-token");
        assert!(value.is_sensitive(), "{value:?}");
        Ok(())
    }

    #[tokio::test]
    async fn bearer_invalid_token() -> TestResult {
        let credentials = bearer::Builder::new("bad\ntoken").build();
        let err = credentials.headers().await.unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
        Ok(())
    }

    #[test]
    fn bearer_debug_hides_token() {
        let credentials = bearer::Builder::new("super-secret").build();
        let fmt = format!("{credentials:?}");
        assert!(!fmt.contains("super-secret"), "{fmt}");
    }

    #[tokio::test]
    async fn anonymous() -> TestResult {
        let credentials = anonymous::Builder::new().build();
        let headers = credentials.headers().await?;
        assert!(headers.is_empty(), "{headers:?}");
        Ok(())
    }

    #[tokio::test]
    async fn from_provider() -> TestResult {
        let mut mock = MockProvider::new();
        mock.expect_headers().times(1).returning(|| {
            Box::pin(async {
                Err(CredentialsError::from_msg(
                    true,
                    "token source unavailable",
                ))
            })
        });
        let credentials = Credentials::from(mock);
        let err = credentials.headers().await.unwrap_err();
        assert!(err.is_transient(), "{err:?}");
        assert!(err.to_string().contains("unavailable"), "{err}");
        Ok(())
    }
}
