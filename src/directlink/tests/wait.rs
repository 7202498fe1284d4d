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
use gax::credentials::anonymous;
use httptest::{Expectation, Server, cycle, matchers::*, responders::*};
use ibm_cloud_directlink_v1::client::DirectLink;
use ibm_cloud_directlink_v1::model::gateway::operational_status;
use poller::{PollConfig, PollOutcome};
use serde_json::json;
use std::time::Duration;

type Result<T> = anyhow::Result<T>;

async fn test_client(server: &Server) -> Result<DirectLink> {
    let client = DirectLink::builder()
        .with_endpoint(format!("http://{}/v1", server.addr()))
        .with_credentials(anonymous::Builder::new().build())
        .build()
        .await?;
    Ok(client)
}

fn fast_polling(max_attempts: u32) -> PollConfig {
    PollConfig::new(Duration::from_millis(10), max_attempts)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn gateway_provisioned() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/v1/gateways/gw-123"))
            .times(3)
            .respond_with(cycle![
                json_encoded(json!({"id": "gw-123", "operational_status": "create_pending"})),
                json_encoded(json!({"id": "gw-123", "operational_status": "create_pending"})),
                json_encoded(json!({"id": "gw-123", "operational_status": "provisioned"})),
            ]),
    );

    let client = test_client(&server).await?;
    let outcome = client
        .wait_for_gateway("gw-123")
        .until(operational_status::PROVISIONED)
        .with_poll_config(fast_polling(24))
        .send()
        .await?;
    assert_eq!(outcome, PollOutcome::Reached("provisioned".to_string()));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn gateway_deleted() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/v1/gateways/gw-123"))
            .times(2)
            .respond_with(cycle![
                json_encoded(json!({"id": "gw-123", "operational_status": "delete_pending"})),
                status_code(404).body(
                    json!({"errors": [{"code": "not_found", "message": "Cannot find Gateway"}]})
                        .to_string()
                ),
            ]),
    );

    let client = test_client(&server).await?;
    let outcome = client
        .wait_for_gateway("gw-123")
        .until_absent()
        .with_poll_config(fast_polling(24))
        .send()
        .await?;
    assert!(outcome.is_not_found(), "{outcome:?}");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn gateway_timed_out() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/v1/gateways/gw-123"))
            .times(4)
            .respond_with(json_encoded(
                json!({"id": "gw-123", "operational_status": "awaiting_loa"}),
            )),
    );

    let client = test_client(&server).await?;
    let outcome = client
        .wait_for_gateway("gw-123")
        .with_poll_config(fast_polling(3))
        .send()
        .await?;
    assert!(outcome.is_timed_out(), "{outcome:?}");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn gateway_service_error() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/v1/gateways/gw-123"))
            .times(1)
            .respond_with(status_code(503).body("unavailable")),
    );

    let client = test_client(&server).await?;
    let err = client
        .wait_for_gateway("gw-123")
        .with_poll_config(fast_polling(24))
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.http_status_code(), Some(503), "{err:?}");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn virtual_connection_deleted() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            "/v1/gateways/gw-123/virtual_connections/vc-1",
        ))
        .times(3)
        .respond_with(cycle![
            json_encoded(json!({"id": "vc-1", "status": "deleting"})),
            json_encoded(json!({"id": "vc-1", "status": "deleting"})),
            status_code(404),
        ]),
    );

    let client = test_client(&server).await?;
    let outcome = client
        .wait_for_virtual_connection("gw-123", "vc-1")
        .until_absent()
        .with_poll_config(fast_polling(24))
        .send()
        .await?;
    assert_eq!(outcome, PollOutcome::NotFound);
    Ok(())
}
