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

//! Client construction.
//!
//! Every IBM Cloud client is created from a [ClientBuilder], obtained
//! from the client's `builder()` function. The builder collects the endpoint,
//! the API `version` date, the credentials, and a few transport settings. The
//! client library provides defaults for everything except the credentials.
//!
//! ```
//! # use ibm_cloud_gax::client_builder::examples;
//! # use ibm_cloud_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! use examples::Client; // Placeholder for examples
//! use ibm_cloud_gax::credentials::bearer;
//! let client = Client::builder()
//!     .with_endpoint("https://private.directlink.cloud.ibm.com/v1")
//!     .with_credentials(bearer::Builder::new("my-iam-access-token").build())
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use ibm_cloud_gax::client_builder::examples;
/// use ibm_cloud_gax::client_builder::Error;
/// use examples::Client; // Placeholder for examples
/// # tokio_test::block_on(async {
/// let client = match Client::builder().build().await {
///     Ok(c) => c,
///     Err(e) if e.is_missing_credentials() => {
///         println!("configure the client with a bearer token: {e}");
///         return Err(e);
///     }
///     Err(e) => {
///         println!("error during client initialization {e}");
///         return Err(e);
///     }
/// };
/// # Ok::<(), Error>(()) });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client was not configured with any credentials.
    pub fn is_missing_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::MissingCredentials)
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn missing_credentials() -> Self {
        Self(ErrorKind::MissingCredentials)
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("the client requires credentials, none were configured")]
    MissingCredentials,
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// `F` creates the client from the collected configuration, `Cr` is the
/// credentials type. Use the `builder()` function of each client instead of
/// naming these types:
/// ```
/// # use ibm_cloud_gax::client_builder::examples;
/// # use ibm_cloud_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = Client::builder()
///     .with_version("2023-12-13")
///     .with_user_agent("my-app/1.0")
///     .build().await?;
/// # Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    config: internal::ClientConfig<Cr>,
    factory: F,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint, including the `/v1` path prefix.
    ///
    /// Use this for private endpoints or for fake services in tests.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Sets the API version date.
    ///
    /// IBM Cloud services require a `version` query parameter with each
    /// request. The parameter is a date (`YYYY-MM-DD`), and the service
    /// behaves as it did on that date. Each client library has a default
    /// version, applications only need to change it to use newer features.
    pub fn with_version<V: Into<String>>(mut self, v: V) -> Self {
        self.config.version = Some(v.into());
        self
    }

    /// Logs each request and response with [tracing].
    ///
    /// Setting `IBM_CLOUD_RUST_LOGGING=true` in the environment has the same
    /// effect.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Sets the default `User-Agent` header for all requests.
    ///
    /// Individual requests can override this value using
    /// [RequestOptionsBuilder::with_user_agent][crate::options::RequestOptionsBuilder::with_user_agent].
    pub fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.config.user_agent = Some(v.into());
        self
    }

    /// Sets the credentials.
    ///
    /// There are no default credentials, [build][ClientBuilder::build] fails
    /// with [Error::is_missing_credentials] unless this is called. Fake
    /// services can use [anonymous][crate::credentials::anonymous] credentials.
    pub fn with_credentials<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;
        type Credentials;
        fn build(
            self,
            config: internal::ClientConfig<Self::Credentials>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, Cr, C>(factory: F) -> super::ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// The configuration collected by [ClientBuilder][super::ClientBuilder].
    ///
    /// Unset fields use the client library defaults.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub version: Option<String>,
        pub cred: Option<Cr>,
        pub tracing: bool,
        pub user_agent: Option<String>,
    }

    impl<Cr> std::default::Default for ClientConfig<Cr> {
        fn default() -> Self {
            Self {
                endpoint: None,
                version: None,
                cred: None,
                tracing: false,
                user_agent: None,
            }
        }
    }

    pub(crate) const LOGGING_VAR: &str = "IBM_CLOUD_RUST_LOGGING";

    /// Returns true if the environment or client configuration enables tracing.
    pub fn tracing_enabled<Cr>(config: &ClientConfig<Cr>) -> bool {
        if config.tracing {
            return true;
        }
        std::env::var(LOGGING_VAR)
            .map(|v| v == "true")
            .unwrap_or(false)
    }
}

#[doc(hidden)]
pub mod examples {
    //! A placeholder client for the rustdoc examples and tests.

    type Config = super::internal::ClientConfig<Credentials>;
    use super::Result;
    pub use crate::credentials::Credentials;

    /// Captures the builder configuration, it cannot make requests.
    #[allow(dead_code)]
    pub struct Client(Config);
    impl Client {
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: Config) -> Result<Self> {
            Ok(Self(config))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory, super::Credentials>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Credentials = super::Credentials;
            type Client = super::Client;
            async fn build(
                self,
                config: crate::client_builder::internal::ClientConfig<Self::Credentials>,
            ) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::credentials::anonymous;

        #[tokio::test]
        async fn unset_fields() -> Result<()> {
            let config = Client::builder().build().await?.0;
            assert_eq!(config.endpoint, None);
            assert_eq!(config.version, None);
            assert_eq!(config.user_agent, None);
            assert!(config.cred.is_none(), "{config:?}");
            assert!(!config.tracing, "{config:?}");
            Ok(())
        }

        #[tokio::test]
        async fn all_fields() -> Result<()> {
            let config = Client::builder()
                .with_endpoint("http://127.0.0.1:8080/v1")
                .with_version("2024-01-01")
                .with_user_agent("test-agent/1.0")
                .with_credentials(anonymous::Builder::new().build())
                .with_tracing()
                .build()
                .await?
                .0;
            assert_eq!(config.endpoint.as_deref(), Some("http://127.0.0.1:8080/v1"));
            assert_eq!(config.version.as_deref(), Some("2024-01-01"));
            assert_eq!(config.user_agent.as_deref(), Some("test-agent/1.0"));
            assert!(config.cred.is_some(), "{config:?}");
            assert!(config.tracing, "{config:?}");
            Ok(())
        }
    }
}
