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

use crate::Result;
use crate::client_builder::Error as BuilderError;
use crate::client_builder::internal::tracing_enabled;
use crate::credentials::Credentials;
use crate::error::Error;
use crate::error::status::Status;
use crate::options::RequestOptions;

/// The client configuration for [ReqwestClient].
pub type ClientConfig = crate::client_builder::internal::ClientConfig<Credentials>;

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    version: String,
    tracing: bool,
    user_agent: Option<String>,
}

impl ReqwestClient {
    pub async fn new(
        config: ClientConfig,
        default_endpoint: &str,
        default_version: &str,
    ) -> crate::client_builder::Result<Self> {
        let tracing = tracing_enabled(&config);
        let cred = config.cred.ok_or_else(BuilderError::missing_credentials)?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| default_endpoint.to_string());
        let version = config
            .version
            .unwrap_or_else(|| default_version.to_string());
        Ok(Self {
            inner,
            cred,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            version,
            tracing,
            user_agent: config.user_agent,
        })
    }

    /// Starts a request, all requests include the `version` query parameter.
    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}{path}", &self.endpoint))
            .query(&[("version", self.version.as_str())])
    }

    /// Sends a request with an optional JSON body and parses the JSON response.
    pub async fn execute<I: serde::ser::Serialize, O: serde::de::DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<O> {
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        let response = self.request_attempt(builder, &options).await?;
        self::to_http_response(response).await
    }

    /// Sends a request and returns the raw response payload.
    ///
    /// Some RPCs return documents, such as PDF files, instead of JSON objects.
    pub async fn execute_bytes(
        &self,
        builder: reqwest::RequestBuilder,
        options: RequestOptions,
    ) -> Result<bytes::Bytes> {
        let response = self.request_attempt(builder, &options).await?;
        response.bytes().await.map_err(Error::io)
    }

    /// Sends a `multipart/form-data` request and parses the JSON response.
    pub async fn execute_multipart<O: serde::de::DeserializeOwned + Default>(
        &self,
        builder: reqwest::RequestBuilder,
        form: reqwest::multipart::Form,
        options: RequestOptions,
    ) -> Result<O> {
        let builder = builder.multipart(form);
        let response = self.request_attempt(builder, &options).await?;
        self::to_http_response(response).await
    }

    async fn request_attempt(
        &self,
        mut builder: reqwest::RequestBuilder,
        options: &RequestOptions,
    ) -> Result<reqwest::Response> {
        if let Some(user_agent) = options.user_agent().as_ref().or(self.user_agent.as_ref()) {
            builder = builder.header(
                reqwest::header::USER_AGENT,
                reqwest::header::HeaderValue::from_str(user_agent).map_err(Error::ser)?,
            );
        }
        if let Some(timeout) = options.attempt_timeout() {
            builder = builder.timeout(*timeout);
        }
        let auth_headers = self
            .cred
            .headers()
            .await
            .map_err(Error::authentication)?;
        builder = builder.headers(auth_headers);

        let request = builder.build().map_err(Error::ser)?;
        let method = request.method().clone();
        let path = request.url().path().to_string();
        if self.tracing {
            tracing::debug!(%method, %path, "sending request");
        }
        let response = self
            .inner
            .execute(request)
            .await
            .map_err(Self::map_send_error)?;
        if self.tracing {
            tracing::debug!(%method, %path, status = response.status().as_u16(), "received response");
        }
        if !response.status().is_success() {
            return self::to_http_error(response).await;
        }
        Ok(response)
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

#[derive(serde::Serialize)]
pub struct NoBody;

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let error = match Status::try_from(&body) {
        Ok(status) => {
            Error::service_with_http_metadata(status, Some(status_code), Some(parts.headers))
        }
        Err(_) => Error::http(status_code, parts.headers, body),
    };
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<O> {
    // 204 No Content has no body and throws EOF error if we try to parse with serde::json
    let no_content_status = response.status() == reqwest::StatusCode::NO_CONTENT;
    let response = http::Response::from(response);
    let (_parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?;

    let response = match body.to_bytes() {
        content if (content.is_empty() && no_content_status) => O::default(),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser)?,
    };
    Ok(response)
}

#[cfg(test)]
mod tests {
    use http::{HeaderMap, HeaderValue};
    use test_case::test_case;
    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    struct Empty {}

    #[tokio::test]
    async fn client_http_error_bytes() -> TestResult {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(400)
            .body(r#"{"error": "bad request"}"#)?;
        let response: reqwest::Response = http_resp.into();
        assert!(response.status().is_client_error());
        let response = super::to_http_error::<()>(response).await;
        assert!(response.is_err(), "{response:?}");
        let err = response.err().unwrap();
        assert_eq!(err.http_status_code(), Some(400));
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("application/json"));
        assert_eq!(err.http_headers(), Some(&want));
        assert_eq!(
            err.http_payload(),
            Some(bytes::Bytes::from(r#"{"error": "bad request"}"#)).as_ref()
        );
        Ok(())
    }

    #[tokio::test]
    async fn client_error_with_status() -> TestResult {
        use crate::error::status::{ErrorDetail, Status};
        let body = serde_json::json!({
            "errors": [{
                "code": "not_found",
                "message": "Gateway not found",
                "more_info": "https://cloud.ibm.com/apidocs/direct_link"
            }],
            "trace": "test-trace",
            "status_code": 404
        });
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(404)
            .body(body.to_string())?;
        let response: reqwest::Response = http_resp.into();
        let response = super::to_http_error::<()>(response).await;
        let err = response.err().unwrap();
        let want_status = Status::default()
            .set_status_code(404_u16)
            .set_trace("test-trace")
            .set_errors([ErrorDetail::new()
                .set_code("not_found")
                .set_message("Gateway not found")
                .set_more_info("https://cloud.ibm.com/apidocs/direct_link")]);
        assert_eq!(err.status(), Some(&want_status));
        assert_eq!(err.http_status_code(), Some(404_u16));
        assert!(err.is_not_found(), "{err:?}");
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("application/json"));
        assert_eq!(err.http_headers(), Some(&want));
        Ok(())
    }

    #[tokio::test]
    #[test_case(reqwest::StatusCode::OK, "{}"; "200 with empty object")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, "{}"; "204 with empty object")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, ""; "204 with empty content")]
    async fn client_empty_content(code: reqwest::StatusCode, content: &str) -> TestResult {
        let response = resp_from_code_content(code, content)?;
        assert!(response.status().is_success());

        let response = super::to_http_response::<Empty>(response).await;
        assert!(response.is_ok(), "{response:?}");
        assert_eq!(response.unwrap(), Empty::default());
        Ok(())
    }

    #[tokio::test]
    #[test_case(reqwest::StatusCode::OK, ""; "200 with empty content")]
    #[test_case(reqwest::StatusCode::OK, "<html/>"; "200 with html content")]
    async fn client_error_with_bad_content(
        code: reqwest::StatusCode,
        content: &str,
    ) -> TestResult {
        let response = resp_from_code_content(code, content)?;
        assert!(response.status().is_success());

        let response = super::to_http_response::<Empty>(response).await;
        assert!(
            matches!(response, Err(ref e) if e.is_deserialization()),
            "{response:?}"
        );
        Ok(())
    }

    fn resp_from_code_content(
        code: reqwest::StatusCode,
        content: &str,
    ) -> http::Result<reqwest::Response> {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(code)
            .body(content.to_string())?;

        let response: reqwest::Response = http_resp.into();
        Ok(response)
    }
}
