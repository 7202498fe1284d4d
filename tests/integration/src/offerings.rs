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
use crate::{Result, SPEED_MBPS};
use directlink::model::OfferingType;
use ibm_cloud_test_utils::runtime_config;

/// Lists locations, cross connect routers, and speeds for each offering type.
pub async fn run(builder: directlink::builder::direct_link::ClientBuilder) -> Result<()> {
    let client = builder.build().await?;

    for offering_type in [OfferingType::Dedicated, OfferingType::Connect] {
        let locations = client
            .list_offering_type_locations()
            .set_offering_type(offering_type)
            .send()
            .await?;
        tracing::info!("{offering_type} locations {locations:?}");
        assert!(!locations.locations.is_empty(), "{locations:?}");
        for location in &locations.locations {
            assert_eq!(
                location.offering_type.as_deref(),
                Some(offering_type.as_str()),
                "{location:?}"
            );
        }

        let speeds = client
            .list_offering_type_speeds()
            .set_offering_type(offering_type)
            .send()
            .await?;
        tracing::info!("{offering_type} speeds {speeds:?}");
        assert!(
            speeds.speeds.iter().any(|s| s.link_speed == Some(SPEED_MBPS)),
            "{speeds:?}"
        );
    }

    let location_name = runtime_config::location_name();
    let routers = client
        .list_offering_type_location_cross_connect_routers()
        .set_offering_type(OfferingType::Dedicated)
        .set_location_name(&location_name)
        .send()
        .await?;
    tracing::info!("{location_name} cross connect routers {routers:?}");
    assert!(!routers.cross_connect_routers.is_empty(), "{routers:?}");
    for router in &routers.cross_connect_routers {
        assert!(router.router_name.is_some(), "{router:?}");
    }

    Ok(())
}
