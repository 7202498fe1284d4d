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
use gax::error::Error;
use gax::http_client::{NoBody, ReqwestClient};
use gax::options::RequestOptions;
use gax::path_parameter::required;
use reqwest::Method;

/// The characters percent encoded in path segments.
///
/// Resource ids are opaque to the client, any character that would change
/// the meaning of the URL is encoded.
const ENCODED_CHARS: percent_encoding::AsciiSet = percent_encoding::CONTROLS
    .add(b' ')
    .add(b'!')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

const COMPLETION_NOTICE_FILE_NAME: &str = "completion_notice.pdf";
const PDF: &str = "application/pdf";

/// Implements [DirectLink](super::stub::DirectLink) using a [ReqwestClient].
#[derive(Clone, Debug)]
pub struct DirectLink {
    inner: ReqwestClient,
}

impl DirectLink {
    pub async fn new(
        config: gax::http_client::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner =
            ReqwestClient::new(config, crate::DEFAULT_ENDPOINT, crate::DEFAULT_VERSION).await?;
        Ok(Self { inner })
    }
}

impl super::stub::DirectLink for DirectLink {
    async fn list_gateways(
        &self,
        _req: crate::model::ListGatewaysRequest,
        options: RequestOptions,
    ) -> Result<crate::model::GatewayCollection> {
        let builder = self.inner.builder(Method::GET, "/gateways".to_string());
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn create_gateway(
        &self,
        req: crate::model::CreateGatewayRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Gateway> {
        let builder = self.inner.builder(Method::POST, "/gateways".to_string());
        self.inner
            .execute(builder, req.gateway_template, options)
            .await
    }

    async fn get_gateway(
        &self,
        req: crate::model::GetGatewayRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Gateway> {
        let path = format!("/gateways/{}", segment("id", &req.id)?);
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn update_gateway(
        &self,
        req: crate::model::UpdateGatewayRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Gateway> {
        let path = format!("/gateways/{}", segment("id", &req.id)?);
        let builder = self.inner.builder(Method::PATCH, path);
        let body = req.gateway_patch_template.unwrap_or_default();
        self.inner.execute(builder, Some(body), options).await
    }

    async fn delete_gateway(
        &self,
        req: crate::model::DeleteGatewayRequest,
        options: RequestOptions,
    ) -> Result<()> {
        let path = format!("/gateways/{}", segment("id", &req.id)?);
        let builder = self.inner.builder(Method::DELETE, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn create_gateway_action(
        &self,
        req: crate::model::CreateGatewayActionRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Gateway> {
        let path = format!("/gateways/{}/actions", segment("id", &req.id)?);
        let builder = self.inner.builder(Method::POST, path);
        let body = req.gateway_action_template.unwrap_or_default();
        self.inner.execute(builder, Some(body), options).await
    }

    async fn get_gateway_statistics(
        &self,
        req: crate::model::GetGatewayStatisticsRequest,
        options: RequestOptions,
    ) -> Result<crate::model::GatewayStatisticCollection> {
        let path = format!("/gateways/{}/statistics", segment("id", &req.id)?);
        let builder = self
            .inner
            .builder(Method::GET, path)
            .query(&[("type", required("type", &req.r#type)?)]);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn list_gateway_letter_of_authorization(
        &self,
        req: crate::model::ListGatewayLetterOfAuthorizationRequest,
        options: RequestOptions,
    ) -> Result<bytes::Bytes> {
        let path = format!(
            "/gateways/{}/letter_of_authorization",
            segment("id", &req.id)?
        );
        let builder = self
            .inner
            .builder(Method::GET, path)
            .header(reqwest::header::ACCEPT, PDF);
        self.inner.execute_bytes(builder, options).await
    }

    async fn list_gateway_completion_notice(
        &self,
        req: crate::model::ListGatewayCompletionNoticeRequest,
        options: RequestOptions,
    ) -> Result<bytes::Bytes> {
        let path = format!("/gateways/{}/completion_notice", segment("id", &req.id)?);
        let builder = self
            .inner
            .builder(Method::GET, path)
            .header(reqwest::header::ACCEPT, PDF);
        self.inner.execute_bytes(builder, options).await
    }

    async fn create_gateway_completion_notice(
        &self,
        req: crate::model::CreateGatewayCompletionNoticeRequest,
        options: RequestOptions,
    ) -> Result<()> {
        let path = format!("/gateways/{}/completion_notice", segment("id", &req.id)?);
        let builder = self.inner.builder(Method::PUT, path);
        let part = reqwest::multipart::Part::bytes(req.upload.to_vec())
            .file_name(COMPLETION_NOTICE_FILE_NAME)
            .mime_str(PDF)
            .map_err(Error::ser)?;
        let form = reqwest::multipart::Form::new().part("upload", part);
        self.inner.execute_multipart(builder, form, options).await
    }

    async fn list_offering_type_locations(
        &self,
        req: crate::model::ListOfferingTypeLocationsRequest,
        options: RequestOptions,
    ) -> Result<crate::model::LocationCollection> {
        let path = format!("/offering_types/{}/locations", req.offering_type);
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn list_offering_type_location_cross_connect_routers(
        &self,
        req: crate::model::ListOfferingTypeLocationCrossConnectRoutersRequest,
        options: RequestOptions,
    ) -> Result<crate::model::LocationCrossConnectRouterCollection> {
        let path = format!(
            "/offering_types/{}/locations/{}/cross_connect_routers",
            req.offering_type,
            segment("location_name", &req.location_name)?
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn list_offering_type_speeds(
        &self,
        req: crate::model::ListOfferingTypeSpeedsRequest,
        options: RequestOptions,
    ) -> Result<crate::model::OfferingSpeedCollection> {
        let path = format!("/offering_types/{}/speeds", req.offering_type);
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn list_ports(
        &self,
        req: crate::model::ListPortsRequest,
        options: RequestOptions,
    ) -> Result<crate::model::PortCollection> {
        let builder = self.inner.builder(Method::GET, "/ports".to_string());
        let builder = req
            .start
            .iter()
            .fold(builder, |b, v| b.query(&[("start", v)]));
        let builder = req
            .limit
            .iter()
            .fold(builder, |b, v| b.query(&[("limit", v)]));
        let builder = req
            .location_name
            .iter()
            .fold(builder, |b, v| b.query(&[("location_name", v)]));
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_port(
        &self,
        req: crate::model::GetPortRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Port> {
        let path = format!("/ports/{}", segment("id", &req.id)?);
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn list_gateway_virtual_connections(
        &self,
        req: crate::model::ListGatewayVirtualConnectionsRequest,
        options: RequestOptions,
    ) -> Result<crate::model::GatewayVirtualConnectionCollection> {
        let path = format!(
            "/gateways/{}/virtual_connections",
            segment("gateway_id", &req.gateway_id)?
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn create_gateway_virtual_connection(
        &self,
        req: crate::model::CreateGatewayVirtualConnectionRequest,
        options: RequestOptions,
    ) -> Result<crate::model::GatewayVirtualConnection> {
        let path = format!(
            "/gateways/{}/virtual_connections",
            segment("gateway_id", &req.gateway_id)?
        );
        let builder = self.inner.builder(Method::POST, path);
        self.inner
            .execute(builder, req.gateway_virtual_connection_template, options)
            .await
    }

    async fn get_gateway_virtual_connection(
        &self,
        req: crate::model::GetGatewayVirtualConnectionRequest,
        options: RequestOptions,
    ) -> Result<crate::model::GatewayVirtualConnection> {
        let path = virtual_connection_path(&req.gateway_id, &req.id)?;
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn update_gateway_virtual_connection(
        &self,
        req: crate::model::UpdateGatewayVirtualConnectionRequest,
        options: RequestOptions,
    ) -> Result<crate::model::GatewayVirtualConnection> {
        let path = virtual_connection_path(&req.gateway_id, &req.id)?;
        let builder = self.inner.builder(Method::PATCH, path);
        let body = req
            .gateway_virtual_connection_patch_template
            .unwrap_or_default();
        self.inner.execute(builder, Some(body), options).await
    }

    async fn delete_gateway_virtual_connection(
        &self,
        req: crate::model::DeleteGatewayVirtualConnectionRequest,
        options: RequestOptions,
    ) -> Result<()> {
        let path = virtual_connection_path(&req.gateway_id, &req.id)?;
        let builder = self.inner.builder(Method::DELETE, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }
}

/// Percent encode a path segment.
fn enc(value: &str) -> String {
    percent_encoding::utf8_percent_encode(value, &ENCODED_CHARS).to_string()
}

/// Returns the encoded path segment, or a binding error if it is empty.
fn segment(name: &str, value: &str) -> Result<String> {
    required(name, value).map(enc)
}

fn virtual_connection_path(gateway_id: &str, id: &str) -> Result<String> {
    Ok(format!(
        "/gateways/{}/virtual_connections/{}",
        segment("gateway_id", gateway_id)?,
        segment("id", id)?
    ))
}
