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
use crate::{BGP_ASN, Result, SPEED_MBPS};
use directlink::client::DirectLink;
use directlink::model::{self, gateway::operational_status};
use ibm_cloud_test_utils::resource_names::{PREFIX, random_gateway_name};
use ibm_cloud_test_utils::runtime_config;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Runs the lifecycle of a `dedicated` gateway.
///
/// Creates the gateway, waits until it requires a LOA, exercises the
/// operations available in that state, and then deletes it.
pub async fn dedicated(builder: directlink::builder::direct_link::ClientBuilder) -> Result<()> {
    let client = builder.build().await?;
    cleanup_stale_gateways(&client).await?;

    let name = random_gateway_name();
    tracing::info!("creating gateway {name}");
    let created = client
        .create_gateway()
        .set_gateway_template(dedicated_template(&name))
        .send()
        .await?;
    tracing::info!("created gateway {created:?}");
    let id = created
        .id
        .clone()
        .ok_or_else(|| anyhow::anyhow!("missing id in created gateway {created:?}"))?;
    assert_eq!(created.name.as_deref(), Some(name.as_str()), "{created:?}");
    assert_eq!(created.r#type.as_deref(), Some(model::gateway::r#type::DEDICATED));
    assert_eq!(created.speed_mbps, Some(SPEED_MBPS), "{created:?}");
    assert_eq!(created.bgp_asn, Some(BGP_ASN), "{created:?}");
    assert_eq!(created.global, Some(true), "{created:?}");
    assert_eq!(created.metered, Some(false), "{created:?}");

    let result = exercise_dedicated(&client, &id, &name).await;
    // Always try to delete the gateway, even if the previous steps failed.
    let cleanup = delete_gateway(&client, &id).await;
    result?;
    cleanup
}

async fn exercise_dedicated(client: &DirectLink, id: &str, name: &str) -> Result<()> {
    let outcome = client
        .wait_for_gateway(id)
        .until(operational_status::AWAITING_LOA)
        .send()
        .await?;
    tracing::info!("wait for awaiting_loa outcome {outcome:?}");
    assert!(outcome.is_reached(), "{outcome:?}");

    let got = client.get_gateway().set_id(id).send().await?;
    assert_eq!(got.name.as_deref(), Some(name), "{got:?}");
    assert_eq!(
        got.cross_connect_router.as_deref(),
        Some(runtime_config::cross_connect_router().as_str()),
        "{got:?}"
    );

    let list = client.list_gateways().send().await?;
    assert!(
        list.gateways.iter().any(|g| g.id.as_deref() == Some(id)),
        "gateway {id} missing from {list:?}"
    );

    let renamed = random_gateway_name();
    let updated = client
        .update_gateway()
        .set_id(id)
        .set_gateway_patch_template(
            model::GatewayPatchTemplate::new()
                .set_name(&renamed)
                .set_speed_mbps(2 * SPEED_MBPS),
        )
        .send()
        .await?;
    tracing::info!("updated gateway {updated:?}");
    assert_eq!(updated.name.as_deref(), Some(renamed.as_str()), "{updated:?}");
    assert_eq!(updated.speed_mbps, Some(2 * SPEED_MBPS), "{updated:?}");

    letter_of_authorization(client, id).await?;
    completion_notice(client, id).await?;
    statistics(client, id).await?;
    actions(client, id).await?;
    Ok(())
}

async fn letter_of_authorization(client: &DirectLink, id: &str) -> Result<()> {
    // The LOA is generated asynchronously, it may not be available yet.
    match client
        .list_gateway_letter_of_authorization()
        .set_id(id)
        .send()
        .await
    {
        Ok(pdf) => assert!(!pdf.is_empty(), "empty LOA for {id}"),
        Err(e) => assert!(e.is_not_found(), "{e:?}"),
    }

    let rejected = client
        .update_gateway()
        .set_id(id)
        .set_gateway_patch_template(
            model::GatewayPatchTemplate::new()
                .set_loa_reject_reason("The port mentioned was incorrect")
                .set_operational_status(operational_status::LOA_REJECTED),
        )
        .send()
        .await?;
    tracing::info!("rejected LOA {rejected:?}");

    // The service generates a new LOA and returns the gateway to
    // `awaiting_loa`.
    let outcome = client
        .wait_for_gateway(id)
        .until(operational_status::AWAITING_LOA)
        .send()
        .await?;
    tracing::info!("wait after LOA rejection outcome {outcome:?}");
    let status = outcome.into_result()?;
    assert_eq!(status.as_deref(), Some(operational_status::AWAITING_LOA));
    Ok(())
}

async fn completion_notice(client: &DirectLink, id: &str) -> Result<()> {
    // A gateway awaiting a LOA cannot accept a completion notice, the
    // service reports the error.
    let err = client
        .create_gateway_completion_notice()
        .set_id(id)
        .set_upload(bytes::Bytes::from_static(b"%PDF-1.4 completion notice"))
        .send()
        .await
        .unwrap_err();
    tracing::info!("upload completion notice error {err:?}");
    assert!(err.http_status_code().is_some(), "{err:?}");

    let err = client
        .list_gateway_completion_notice()
        .set_id(id)
        .send()
        .await
        .unwrap_err();
    assert!(err.is_not_found(), "{err:?}");
    Ok(())
}

async fn statistics(client: &DirectLink, id: &str) -> Result<()> {
    // MACsec is not enabled on the test gateways.
    let result = client
        .get_gateway_statistics()
        .set_id(id)
        .set_type(model::gateway_statistic::r#type::MACSEC_MKA)
        .send()
        .await;
    match result {
        Ok(stats) => tracing::info!("statistics {stats:?}"),
        Err(e) => assert!(e.http_status_code().is_some(), "{e:?}"),
    }
    Ok(())
}

async fn actions(client: &DirectLink, id: &str) -> Result<()> {
    // Actions apply to `connect` gateways with pending changes, the service
    // rejects them for this gateway.
    let err = client
        .create_gateway_action()
        .set_id(id)
        .set_gateway_action_template(
            model::GatewayActionTemplate::new()
                .set_action("create_gateway_approve")
                .set_global(false)
                .set_metered(true),
        )
        .send()
        .await
        .unwrap_err();
    tracing::info!("gateway action error {err:?}");
    assert!(err.http_status_code().is_some(), "{err:?}");
    Ok(())
}

pub(crate) fn dedicated_template(name: &str) -> model::GatewayTemplate {
    model::GatewayTemplate::new()
        .set_name(name)
        .set_type(model::gateway::r#type::DEDICATED)
        .set_speed_mbps(SPEED_MBPS)
        .set_global(true)
        .set_metered(false)
        .set_bgp_asn(BGP_ASN)
        .set_carrier_name("rust-sdk-carrier")
        .set_customer_name("rust-sdk-customer")
        .set_cross_connect_router(runtime_config::cross_connect_router())
        .set_location_name(runtime_config::location_name())
}

/// Deletes a gateway and waits until it is gone.
pub(crate) async fn delete_gateway(client: &DirectLink, id: &str) -> Result<()> {
    client.delete_gateway().set_id(id).send().await?;
    let outcome = client
        .wait_for_gateway(id)
        .until_absent()
        .send()
        .await?;
    tracing::info!("wait for deletion of {id} outcome {outcome:?}");
    outcome.into_result()?;
    Ok(())
}

/// Removes gateways leaked by previous runs.
///
/// Only gateways created by these tests (see [PREFIX]) and older than two days
/// are deleted, other runs may still be using newer gateways. Errors are
/// ignored, another run may be deleting the same gateways.
pub async fn cleanup_stale_gateways(client: &DirectLink) -> Result<()> {
    let stale_deadline = OffsetDateTime::now_utc() - time::Duration::hours(48);

    let list = client.list_gateways().send().await?;
    let stale = list
        .gateways
        .into_iter()
        .filter(|g| g.name.as_deref().is_some_and(|n| n.starts_with(PREFIX)))
        .filter(|g| created_before(g, stale_deadline))
        .filter_map(|g| g.id)
        .collect::<Vec<_>>();
    for id in stale {
        tracing::info!("deleting stale gateway {id}");
        if let Err(e) = client.delete_gateway().set_id(&id).send().await {
            tracing::warn!("error deleting stale gateway {id}: {e:?}");
        }
    }
    Ok(())
}

// Gateways without a valid creation time are never considered stale.
fn created_before(gateway: &model::Gateway, deadline: OffsetDateTime) -> bool {
    gateway
        .created_at
        .as_deref()
        .and_then(|v| OffsetDateTime::parse(v, &Rfc3339).ok())
        .is_some_and(|t| t < deadline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::credentials::anonymous;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;
    use test_case::test_case;

    fn gateway(id: &str, name: &str, created_at: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "type": "dedicated",
            "operational_status": "provisioned",
            "created_at": created_at,
        })
    }

    #[test_case("2020-01-01T00:00:00Z", true)]
    #[test_case("2099-01-01T00:00:00Z", false)]
    #[test_case("2024-06-01T12:00:00.123Z", true)]
    #[test_case("not-a-timestamp", false)]
    #[test_case("", false)]
    fn creation_deadline(created_at: &str, want: bool) {
        let deadline = OffsetDateTime::parse("2025-01-01T00:00:00Z", &Rfc3339)
            .expect("hard-coded timestamp is valid");
        let gateway = model::Gateway::default().set_created_at(created_at);
        assert_eq!(created_before(&gateway, deadline), want, "{created_at}");
    }

    #[test]
    fn missing_creation_time() {
        assert!(!created_before(
            &model::Gateway::default(),
            OffsetDateTime::now_utc()
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn cleanup_keeps_fresh_gateways() -> Result<()> {
        let mut server = Server::run();
        let fresh = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .map_err(anyhow::Error::from)?;
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/gateways")).respond_with(
                json_encoded(json!({
                    "gateways": [
                        gateway("in-flight", &random_gateway_name(), &fresh),
                        gateway("far-future", &random_gateway_name(), "2099-01-01T00:00:00Z"),
                        gateway("stale", &random_gateway_name(), "2020-01-01T00:00:00Z"),
                        gateway("not-ours", "production-gateway", "2020-01-01T00:00:00Z"),
                    ]
                })),
            ),
        );
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/v1/gateways/stale"))
                .times(1)
                .respond_with(status_code(204)),
        );

        let client = DirectLink::builder()
            .with_endpoint(format!("http://{}/v1", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        cleanup_stale_gateways(&client).await?;
        server.verify_and_clear();
        Ok(())
    }
}
