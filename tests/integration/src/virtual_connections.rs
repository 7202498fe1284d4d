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
use crate::gateways::{dedicated_template, delete_gateway};
use directlink::client::DirectLink;
use directlink::model::{self, gateway::operational_status, virtual_connection};
use ibm_cloud_test_utils::resource_names::{random_gateway_name, random_virtual_connection_name};
use ibm_cloud_test_utils::runtime_config;

/// Creates, updates, and deletes virtual connections on a new gateway.
pub async fn run(builder: directlink::builder::direct_link::ClientBuilder) -> Result<()> {
    let client = builder.build().await?;

    let gateway = client
        .create_gateway()
        .set_gateway_template(dedicated_template(&random_gateway_name()))
        .send()
        .await?;
    let gateway_id = gateway
        .id
        .ok_or_else(|| anyhow::anyhow!("missing id in created gateway"))?;
    tracing::info!("created gateway {gateway_id}");

    let result = exercise(&client, &gateway_id).await;
    let cleanup = delete_gateway(&client, &gateway_id).await;
    result?;
    cleanup
}

async fn exercise(client: &DirectLink, gateway_id: &str) -> Result<()> {
    let outcome = client
        .wait_for_gateway(gateway_id)
        .until(operational_status::AWAITING_LOA)
        .send()
        .await?;
    assert!(outcome.is_reached(), "{outcome:?}");

    classic(client, gateway_id).await?;
    if let Some(crn) = runtime_config::vpc_crn() {
        vpc(client, gateway_id, &crn).await?;
    } else {
        tracing::warn!("skipping VPC virtual connections, no VPC configured");
    }
    Ok(())
}

async fn classic(client: &DirectLink, gateway_id: &str) -> Result<()> {
    let name = random_virtual_connection_name();
    let created = client
        .create_gateway_virtual_connection()
        .set_gateway_id(gateway_id)
        .set_gateway_virtual_connection_template(
            model::GatewayVirtualConnectionTemplate::new()
                .set_name(&name)
                .set_type(virtual_connection::r#type::CLASSIC),
        )
        .send()
        .await?;
    tracing::info!("created virtual connection {created:?}");
    assert_eq!(created.name.as_deref(), Some(name.as_str()), "{created:?}");
    assert_eq!(
        created.r#type.as_deref(),
        Some(virtual_connection::r#type::CLASSIC),
        "{created:?}"
    );
    let id = created
        .id
        .clone()
        .ok_or_else(|| anyhow::anyhow!("missing id in {created:?}"))?;

    let outcome = client
        .wait_for_virtual_connection(gateway_id, &id)
        .until(virtual_connection::status::ATTACHED)
        .send()
        .await?;
    tracing::info!("wait for attached outcome {outcome:?}");
    let status = outcome.into_result()?;
    assert_eq!(status.as_deref(), Some(virtual_connection::status::ATTACHED));

    let list = client
        .list_gateway_virtual_connections()
        .set_gateway_id(gateway_id)
        .send()
        .await?;
    assert!(
        list.virtual_connections
            .iter()
            .any(|vc| vc.id.as_deref() == Some(id.as_str())),
        "virtual connection {id} missing from {list:?}"
    );

    let renamed = random_virtual_connection_name();
    let updated = client
        .update_gateway_virtual_connection()
        .set_gateway_id(gateway_id)
        .set_id(&id)
        .set_gateway_virtual_connection_patch_template(
            model::GatewayVirtualConnectionPatchTemplate::new().set_name(&renamed),
        )
        .send()
        .await?;
    assert_eq!(updated.name.as_deref(), Some(renamed.as_str()), "{updated:?}");

    let got = client
        .get_gateway_virtual_connection()
        .set_gateway_id(gateway_id)
        .set_id(&id)
        .send()
        .await?;
    assert_eq!(got.name, updated.name, "{got:?}");

    delete(client, gateway_id, &id).await
}

async fn vpc(client: &DirectLink, gateway_id: &str, crn: &str) -> Result<()> {
    let created = client
        .create_gateway_virtual_connection()
        .set_gateway_id(gateway_id)
        .set_gateway_virtual_connection_template(
            model::GatewayVirtualConnectionTemplate::new()
                .set_name(random_virtual_connection_name())
                .set_type(virtual_connection::r#type::VPC)
                .set_network_id(crn),
        )
        .send()
        .await?;
    tracing::info!("created virtual connection {created:?}");
    assert_eq!(created.network_id.as_deref(), Some(crn), "{created:?}");
    let id = created
        .id
        .ok_or_else(|| anyhow::anyhow!("missing id in created virtual connection"))?;
    delete(client, gateway_id, &id).await
}

async fn delete(client: &DirectLink, gateway_id: &str, id: &str) -> Result<()> {
    client
        .delete_gateway_virtual_connection()
        .set_gateway_id(gateway_id)
        .set_id(id)
        .send()
        .await?;
    let outcome = client
        .wait_for_virtual_connection(gateway_id, id)
        .until_absent()
        .send()
        .await?;
    tracing::info!("wait for deletion of {id} outcome {outcome:?}");
    outcome.into_result()?;
    Ok(())
}
