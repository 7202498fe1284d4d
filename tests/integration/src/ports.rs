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
use crate::gateways::delete_gateway;
use crate::{BGP_ASN, Result, SPEED_MBPS};
use directlink::model::{self, gateway::operational_status};
use ibm_cloud_test_utils::resource_names::random_gateway_name;
use ibm_cloud_test_utils::runtime_config;
use poller::{Observation, PollOutcome};

/// Lists the provider ports, using a single page and all the pages.
pub async fn run(builder: directlink::builder::direct_link::ClientBuilder) -> Result<()> {
    let client = builder.build().await?;

    let mut request = client.list_ports().set_limit(2);
    if let Some(location) = runtime_config::port_location_name() {
        request = request.set_location_name(location);
    }
    let first = request.clone().send().await?;
    tracing::info!("first page of ports {first:?}");
    assert!(first.ports.len() <= 2, "{first:?}");

    let mut pages = request.by_page();
    let mut ids = Vec::new();
    while let Some(page) = pages.next().await {
        let page = page?;
        ids.extend(page.ports.into_iter().filter_map(|p| p.id));
    }
    tracing::info!("all ports {ids:?}");
    assert!(ids.len() >= first.ports.len(), "{ids:?} vs {first:?}");

    let Some(id) = ids.first() else {
        tracing::warn!("no ports available, skipping get_port()");
        return Ok(());
    };
    let port = client.get_port().set_id(id).send().await?;
    tracing::info!("port {port:?}");
    assert_eq!(port.id.as_deref(), Some(id.as_str()), "{port:?}");
    Ok(())
}

/// Creates a `connect` gateway on the first available provider port.
pub async fn connect_gateway(builder: directlink::builder::direct_link::ClientBuilder) -> Result<()> {
    let client = builder.build().await?;

    let mut request = client.list_ports();
    if let Some(location) = runtime_config::port_location_name() {
        request = request.set_location_name(location);
    }
    let ports = request.send().await?;
    let Some(port) = ports
        .ports
        .into_iter()
        .find(|p| p.supported_link_speeds.contains(&SPEED_MBPS))
    else {
        tracing::warn!("no ports available, skipping connect gateway");
        return Ok(());
    };
    let port_id = port
        .id
        .ok_or_else(|| anyhow::anyhow!("missing port id"))?;

    let name = random_gateway_name();
    let created = client
        .create_gateway()
        .set_gateway_template(
            model::GatewayTemplate::new()
                .set_name(&name)
                .set_type(model::gateway::r#type::CONNECT)
                .set_speed_mbps(SPEED_MBPS)
                .set_global(true)
                .set_metered(false)
                .set_bgp_asn(BGP_ASN)
                .set_port(model::GatewayPortIdentity::new().set_id(&port_id)),
        )
        .send()
        .await?;
    tracing::info!("created connect gateway {created:?}");
    let id = created
        .id
        .clone()
        .ok_or_else(|| anyhow::anyhow!("missing id in {created:?}"))?;
    assert_eq!(
        created.port.as_ref().and_then(|p| p.id.as_deref()),
        Some(port_id.as_str()),
        "{created:?}"
    );

    // Connect gateways wait for the provider to approve them. The test
    // account has no provider, so the gateway either becomes provisioned or
    // stays in `create_pending` until the wait times out.
    let outcome = client
        .wait_for_gateway(&id)
        .until(operational_status::PROVISIONED)
        .send()
        .await;
    let cleanup = delete_gateway(&client, &id).await;
    tracing::info!("wait for provisioned outcome {outcome:?}");
    check_connect_outcome(outcome?)?;
    cleanup
}

fn check_connect_outcome(outcome: PollOutcome<String>) -> Result<()> {
    match outcome {
        PollOutcome::Reached(_) => Ok(()),
        PollOutcome::TimedOut(Observation::Present(s))
            if s == operational_status::CREATE_PENDING =>
        {
            Ok(())
        }
        outcome => Err(anyhow::anyhow!(
            "unexpected outcome waiting for connect gateway: {outcome:?}"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_outcome() {
        let ok = [
            PollOutcome::Reached(operational_status::PROVISIONED.to_string()),
            PollOutcome::TimedOut(Observation::Present(
                operational_status::CREATE_PENDING.to_string(),
            )),
        ];
        for outcome in ok {
            assert!(check_connect_outcome(outcome.clone()).is_ok(), "{outcome:?}");
        }

        let bad = [
            PollOutcome::NotFound,
            PollOutcome::TimedOut(Observation::Absent),
            PollOutcome::TimedOut(Observation::Present(
                operational_status::CREATE_REJECTED.to_string(),
            )),
        ];
        for outcome in bad {
            assert!(check_connect_outcome(outcome.clone()).is_err(), "{outcome:?}");
        }
    }
}
