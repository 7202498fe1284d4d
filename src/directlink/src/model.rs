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

//! The messages exchanged with the Direct Link service.
//!
//! All messages use the JSON field names of the service. Output only fields
//! are optional, and unknown fields are ignored.

/// A Direct Link gateway.
///
/// The service creates gateways asynchronously. The
/// [operational_status][Gateway::operational_status] field reports the
/// progress, see [gateway::operational_status] for the well-known values.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Gateway {
    /// The unique identifier of this gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The unique user-defined name for this gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The offering type, see [gateway::r#type].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    /// The gateway speed in megabits per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_mbps: Option<i64>,

    /// Gateways with global routing can connect to networks outside
    /// their associated region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<bool>,

    /// Metered billing option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metered: Option<bool>,

    /// The customer BGP ASN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_asn: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_base_cidr: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_cer_cidr: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_ibm_cidr: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_ibm_asn: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_notice_reject_reason: Option<String>,

    /// The date and time the resource was created, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,

    /// Cross connect router, only for `dedicated` gateways.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_connect_router: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_display_name: Option<String>,

    /// The gateway lifecycle state, see [gateway::operational_status].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operational_status: Option<String>,

    /// The port used by `connect` gateways.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<GatewayPort>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_api_managed: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan: Option<i64>,

    /// Pending changes on provider managed gateways.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_request: Option<GatewayChangeRequest>,
}

impl Gateway {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][Gateway::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [name][Gateway::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [r#type][Gateway::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets the value of [speed_mbps][Gateway::speed_mbps].
    pub fn set_speed_mbps<T: Into<i64>>(mut self, v: T) -> Self {
        self.speed_mbps = Some(v.into());
        self
    }

    /// Sets the value of [global][Gateway::global].
    pub fn set_global<T: Into<bool>>(mut self, v: T) -> Self {
        self.global = Some(v.into());
        self
    }

    /// Sets the value of [metered][Gateway::metered].
    pub fn set_metered<T: Into<bool>>(mut self, v: T) -> Self {
        self.metered = Some(v.into());
        self
    }

    /// Sets the value of [bgp_asn][Gateway::bgp_asn].
    pub fn set_bgp_asn<T: Into<i64>>(mut self, v: T) -> Self {
        self.bgp_asn = Some(v.into());
        self
    }

    /// Sets the value of [bgp_base_cidr][Gateway::bgp_base_cidr].
    pub fn set_bgp_base_cidr<T: Into<String>>(mut self, v: T) -> Self {
        self.bgp_base_cidr = Some(v.into());
        self
    }

    /// Sets the value of [bgp_cer_cidr][Gateway::bgp_cer_cidr].
    pub fn set_bgp_cer_cidr<T: Into<String>>(mut self, v: T) -> Self {
        self.bgp_cer_cidr = Some(v.into());
        self
    }

    /// Sets the value of [bgp_ibm_cidr][Gateway::bgp_ibm_cidr].
    pub fn set_bgp_ibm_cidr<T: Into<String>>(mut self, v: T) -> Self {
        self.bgp_ibm_cidr = Some(v.into());
        self
    }

    /// Sets the value of [bgp_ibm_asn][Gateway::bgp_ibm_asn].
    pub fn set_bgp_ibm_asn<T: Into<i64>>(mut self, v: T) -> Self {
        self.bgp_ibm_asn = Some(v.into());
        self
    }

    /// Sets the value of [bgp_status][Gateway::bgp_status].
    pub fn set_bgp_status<T: Into<String>>(mut self, v: T) -> Self {
        self.bgp_status = Some(v.into());
        self
    }

    /// Sets the value of [completion_notice_reject_reason][Gateway::completion_notice_reject_reason].
    pub fn set_completion_notice_reject_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.completion_notice_reject_reason = Some(v.into());
        self
    }

    /// Sets the value of [created_at][Gateway::created_at].
    pub fn set_created_at<T: Into<String>>(mut self, v: T) -> Self {
        self.created_at = Some(v.into());
        self
    }

    /// Sets the value of [crn][Gateway::crn].
    pub fn set_crn<T: Into<String>>(mut self, v: T) -> Self {
        self.crn = Some(v.into());
        self
    }

    /// Sets the value of [cross_connect_router][Gateway::cross_connect_router].
    pub fn set_cross_connect_router<T: Into<String>>(mut self, v: T) -> Self {
        self.cross_connect_router = Some(v.into());
        self
    }

    /// Sets the value of [customer_name][Gateway::customer_name].
    pub fn set_customer_name<T: Into<String>>(mut self, v: T) -> Self {
        self.customer_name = Some(v.into());
        self
    }

    /// Sets the value of [carrier_name][Gateway::carrier_name].
    pub fn set_carrier_name<T: Into<String>>(mut self, v: T) -> Self {
        self.carrier_name = Some(v.into());
        self
    }

    /// Sets the value of [link_status][Gateway::link_status].
    pub fn set_link_status<T: Into<String>>(mut self, v: T) -> Self {
        self.link_status = Some(v.into());
        self
    }

    /// Sets the value of [location_name][Gateway::location_name].
    pub fn set_location_name<T: Into<String>>(mut self, v: T) -> Self {
        self.location_name = Some(v.into());
        self
    }

    /// Sets the value of [location_display_name][Gateway::location_display_name].
    pub fn set_location_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.location_display_name = Some(v.into());
        self
    }

    /// Sets the value of [operational_status][Gateway::operational_status].
    pub fn set_operational_status<T: Into<String>>(mut self, v: T) -> Self {
        self.operational_status = Some(v.into());
        self
    }

    /// Sets the value of [port][Gateway::port].
    pub fn set_port<T: Into<GatewayPort>>(mut self, v: T) -> Self {
        self.port = Some(v.into());
        self
    }

    /// Sets the value of [provider_api_managed][Gateway::provider_api_managed].
    pub fn set_provider_api_managed<T: Into<bool>>(mut self, v: T) -> Self {
        self.provider_api_managed = Some(v.into());
        self
    }

    /// Sets the value of [resource_group][Gateway::resource_group].
    pub fn set_resource_group<T: Into<ResourceGroupReference>>(mut self, v: T) -> Self {
        self.resource_group = Some(v.into());
        self
    }

    /// Sets the value of [vlan][Gateway::vlan].
    pub fn set_vlan<T: Into<i64>>(mut self, v: T) -> Self {
        self.vlan = Some(v.into());
        self
    }

    /// Sets the value of [change_request][Gateway::change_request].
    pub fn set_change_request<T: Into<GatewayChangeRequest>>(mut self, v: T) -> Self {
        self.change_request = Some(v.into());
        self
    }
}
/// Defines additional types related to [Gateway].
pub mod gateway {
    /// The well-known values for [Gateway::operational_status][super::Gateway::operational_status].
    pub mod operational_status {
        pub const AWAITING_COMPLETION_NOTICE: &str = "awaiting_completion_notice";
        pub const AWAITING_LOA: &str = "awaiting_loa";
        pub const COMPLETION_NOTICE_APPROVED: &str = "completion_notice_approved";
        pub const COMPLETION_NOTICE_RECEIVED: &str = "completion_notice_received";
        pub const COMPLETION_NOTICE_REJECTED: &str = "completion_notice_rejected";
        pub const CONFIGURING: &str = "configuring";
        pub const CREATE_PENDING: &str = "create_pending";
        pub const CREATE_REJECTED: &str = "create_rejected";
        pub const DELETE_PENDING: &str = "delete_pending";
        pub const LOA_ACCEPTED: &str = "loa_accepted";
        pub const LOA_CREATED: &str = "loa_created";
        pub const LOA_REJECTED: &str = "loa_rejected";
        pub const PROVISIONED: &str = "provisioned";
    }

    /// The well-known values for [Gateway::r#type][super::Gateway::r#type].
    pub mod r#type {
        pub const CONNECT: &str = "connect";
        pub const DEDICATED: &str = "dedicated";
    }
}

/// The port used by a `connect` gateway.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GatewayPort {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl GatewayPort {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][GatewayPort::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }
}
/// Selects the port for a new `connect` gateway.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GatewayPortIdentity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl GatewayPortIdentity {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][GatewayPortIdentity::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }
}
/// A resource group.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ResourceGroupReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ResourceGroupReference {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][ResourceGroupReference::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }
}
/// Selects the resource group for new resources.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ResourceGroupIdentity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ResourceGroupIdentity {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][ResourceGroupIdentity::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }
}
/// A change requested by the provider of a `connect` gateway.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GatewayChangeRequest {
    /// The type of change, such as `create_gateway` or `update_attributes`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub updates: Vec<serde_json::Value>,
}

impl GatewayChangeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [r#type][GatewayChangeRequest::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets the value of [updates][GatewayChangeRequest::updates].
    pub fn set_updates<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<serde_json::Value>,
    {
        self.updates = v.into_iter().map(|i| i.into()).collect();
        self
    }
}
/// The body of a [create_gateway][crate::client::DirectLink::create_gateway] request.
///
/// Dedicated gateways set the location, cross connect router, carrier and
/// customer names. Connect gateways set the [port][GatewayTemplate::port].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GatewayTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The offering type, see [gateway::r#type].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_mbps: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metered: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_asn: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_base_cidr: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_cer_cidr: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_ibm_cidr: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupIdentity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_connect_router: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<GatewayPortIdentity>,
}

impl GatewayTemplate {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][GatewayTemplate::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [r#type][GatewayTemplate::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets the value of [speed_mbps][GatewayTemplate::speed_mbps].
    pub fn set_speed_mbps<T: Into<i64>>(mut self, v: T) -> Self {
        self.speed_mbps = Some(v.into());
        self
    }

    /// Sets the value of [global][GatewayTemplate::global].
    pub fn set_global<T: Into<bool>>(mut self, v: T) -> Self {
        self.global = Some(v.into());
        self
    }

    /// Sets the value of [metered][GatewayTemplate::metered].
    pub fn set_metered<T: Into<bool>>(mut self, v: T) -> Self {
        self.metered = Some(v.into());
        self
    }

    /// Sets the value of [bgp_asn][GatewayTemplate::bgp_asn].
    pub fn set_bgp_asn<T: Into<i64>>(mut self, v: T) -> Self {
        self.bgp_asn = Some(v.into());
        self
    }

    /// Sets the value of [bgp_base_cidr][GatewayTemplate::bgp_base_cidr].
    pub fn set_bgp_base_cidr<T: Into<String>>(mut self, v: T) -> Self {
        self.bgp_base_cidr = Some(v.into());
        self
    }

    /// Sets the value of [bgp_cer_cidr][GatewayTemplate::bgp_cer_cidr].
    pub fn set_bgp_cer_cidr<T: Into<String>>(mut self, v: T) -> Self {
        self.bgp_cer_cidr = Some(v.into());
        self
    }

    /// Sets the value of [bgp_ibm_cidr][GatewayTemplate::bgp_ibm_cidr].
    pub fn set_bgp_ibm_cidr<T: Into<String>>(mut self, v: T) -> Self {
        self.bgp_ibm_cidr = Some(v.into());
        self
    }

    /// Sets the value of [resource_group][GatewayTemplate::resource_group].
    pub fn set_resource_group<T: Into<ResourceGroupIdentity>>(mut self, v: T) -> Self {
        self.resource_group = Some(v.into());
        self
    }

    /// Sets the value of [carrier_name][GatewayTemplate::carrier_name].
    pub fn set_carrier_name<T: Into<String>>(mut self, v: T) -> Self {
        self.carrier_name = Some(v.into());
        self
    }

    /// Sets the value of [cross_connect_router][GatewayTemplate::cross_connect_router].
    pub fn set_cross_connect_router<T: Into<String>>(mut self, v: T) -> Self {
        self.cross_connect_router = Some(v.into());
        self
    }

    /// Sets the value of [customer_name][GatewayTemplate::customer_name].
    pub fn set_customer_name<T: Into<String>>(mut self, v: T) -> Self {
        self.customer_name = Some(v.into());
        self
    }

    /// Sets the value of [location_name][GatewayTemplate::location_name].
    pub fn set_location_name<T: Into<String>>(mut self, v: T) -> Self {
        self.location_name = Some(v.into());
        self
    }

    /// Sets the value of [port][GatewayTemplate::port].
    pub fn set_port<T: Into<GatewayPortIdentity>>(mut self, v: T) -> Self {
        self.port = Some(v.into());
        self
    }
}
/// The body of an [update_gateway][crate::client::DirectLink::update_gateway] request.
///
/// Only the fields with values are modified.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GatewayPatchTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_mbps: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metered: Option<bool>,

    /// Used to reject a LOA, together with an `operational_status` of
    /// `loa_rejected`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loa_reject_reason: Option<String>,

    /// Approve or reject the LOA, or the completion notice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operational_status: Option<String>,
}

impl GatewayPatchTemplate {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][GatewayPatchTemplate::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [speed_mbps][GatewayPatchTemplate::speed_mbps].
    pub fn set_speed_mbps<T: Into<i64>>(mut self, v: T) -> Self {
        self.speed_mbps = Some(v.into());
        self
    }

    /// Sets the value of [global][GatewayPatchTemplate::global].
    pub fn set_global<T: Into<bool>>(mut self, v: T) -> Self {
        self.global = Some(v.into());
        self
    }

    /// Sets the value of [metered][GatewayPatchTemplate::metered].
    pub fn set_metered<T: Into<bool>>(mut self, v: T) -> Self {
        self.metered = Some(v.into());
        self
    }

    /// Sets the value of [loa_reject_reason][GatewayPatchTemplate::loa_reject_reason].
    pub fn set_loa_reject_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.loa_reject_reason = Some(v.into());
        self
    }

    /// Sets the value of [operational_status][GatewayPatchTemplate::operational_status].
    pub fn set_operational_status<T: Into<String>>(mut self, v: T) -> Self {
        self.operational_status = Some(v.into());
        self
    }
}
/// Approves or rejects a change requested by the provider of a `connect` gateway.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GatewayActionTemplate {
    /// One of `create_gateway_approve`, `create_gateway_reject`,
    /// `delete_gateway_approve`, `delete_gateway_reject`,
    /// `update_attributes_approve`, or `update_attributes_reject`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metered: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupIdentity>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub updates: Vec<serde_json::Value>,
}

impl GatewayActionTemplate {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [action][GatewayActionTemplate::action].
    pub fn set_action<T: Into<String>>(mut self, v: T) -> Self {
        self.action = Some(v.into());
        self
    }

    /// Sets the value of [global][GatewayActionTemplate::global].
    pub fn set_global<T: Into<bool>>(mut self, v: T) -> Self {
        self.global = Some(v.into());
        self
    }

    /// Sets the value of [metered][GatewayActionTemplate::metered].
    pub fn set_metered<T: Into<bool>>(mut self, v: T) -> Self {
        self.metered = Some(v.into());
        self
    }

    /// Sets the value of [resource_group][GatewayActionTemplate::resource_group].
    pub fn set_resource_group<T: Into<ResourceGroupIdentity>>(mut self, v: T) -> Self {
        self.resource_group = Some(v.into());
        self
    }

    /// Sets the value of [updates][GatewayActionTemplate::updates].
    pub fn set_updates<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<serde_json::Value>,
    {
        self.updates = v.into_iter().map(|i| i.into()).collect();
        self
    }
}
/// The result of [list_gateways][crate::client::DirectLink::list_gateways].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GatewayCollection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gateways: Vec<Gateway>,
}

impl GatewayCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateways][GatewayCollection::gateways].
    pub fn set_gateways<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Gateway>,
    {
        self.gateways = v.into_iter().map(|i| i.into()).collect();
        self
    }
}
/// A report with the statistics of a gateway.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GatewayStatistic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// The statistics, in the format of the underlying tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// See [gateway_statistic::r#type].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

impl GatewayStatistic {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [created_at][GatewayStatistic::created_at].
    pub fn set_created_at<T: Into<String>>(mut self, v: T) -> Self {
        self.created_at = Some(v.into());
        self
    }

    /// Sets the value of [data][GatewayStatistic::data].
    pub fn set_data<T: Into<String>>(mut self, v: T) -> Self {
        self.data = Some(v.into());
        self
    }

    /// Sets the value of [r#type][GatewayStatistic::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }
}
/// Defines additional types related to [GatewayStatistic].
pub mod gateway_statistic {
    /// The well-known values for [GatewayStatistic::r#type][super::GatewayStatistic::r#type].
    pub mod r#type {
        pub const MACSEC_MKA: &str = "macsec_mka";
        pub const MACSEC_SECURITY: &str = "macsec_security";
    }
}

/// The result of [get_gateway_statistics][crate::client::DirectLink::get_gateway_statistics].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GatewayStatisticCollection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub statistics: Vec<GatewayStatistic>,
}

impl GatewayStatisticCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [statistics][GatewayStatisticCollection::statistics].
    pub fn set_statistics<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<GatewayStatistic>,
    {
        self.statistics = v.into_iter().map(|i| i.into()).collect();
        self
    }
}
/// A virtual connection between a gateway and a network.
///
/// See [virtual_connection::status] for the well-known values of
/// [status][GatewayVirtualConnection::status].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GatewayVirtualConnection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The network type, see [virtual_connection::r#type].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    /// The CRN of the VPC, absent for `classic` connections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,

    /// The account owning the network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_account: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl GatewayVirtualConnection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][GatewayVirtualConnection::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [name][GatewayVirtualConnection::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [r#type][GatewayVirtualConnection::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets the value of [network_id][GatewayVirtualConnection::network_id].
    pub fn set_network_id<T: Into<String>>(mut self, v: T) -> Self {
        self.network_id = Some(v.into());
        self
    }

    /// Sets the value of [network_account][GatewayVirtualConnection::network_account].
    pub fn set_network_account<T: Into<String>>(mut self, v: T) -> Self {
        self.network_account = Some(v.into());
        self
    }

    /// Sets the value of [status][GatewayVirtualConnection::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [created_at][GatewayVirtualConnection::created_at].
    pub fn set_created_at<T: Into<String>>(mut self, v: T) -> Self {
        self.created_at = Some(v.into());
        self
    }
}
/// Defines additional types related to [GatewayVirtualConnection].
pub mod virtual_connection {
    /// The well-known values for [GatewayVirtualConnection::status][super::GatewayVirtualConnection::status].
    pub mod status {
        pub const APPROVAL_PENDING: &str = "approval_pending";
        pub const ATTACHED: &str = "attached";
        pub const DELETING: &str = "deleting";
        pub const DETACHED_BY_NETWORK: &str = "detached_by_network";
        pub const DETACHED_BY_NETWORK_PENDING: &str = "detached_by_network_pending";
        pub const EXPIRED: &str = "expired";
        pub const PENDING: &str = "pending";
        pub const REJECTED: &str = "rejected";
    }

    /// The well-known values for [GatewayVirtualConnection::r#type][super::GatewayVirtualConnection::r#type].
    pub mod r#type {
        pub const CLASSIC: &str = "classic";
        pub const VPC: &str = "vpc";
    }
}

/// The body of a [create_gateway_virtual_connection][crate::client::DirectLink::create_gateway_virtual_connection] request.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GatewayVirtualConnectionTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The network type, see [virtual_connection::r#type].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    /// Required for `vpc` connections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
}

impl GatewayVirtualConnectionTemplate {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][GatewayVirtualConnectionTemplate::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [r#type][GatewayVirtualConnectionTemplate::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets the value of [network_id][GatewayVirtualConnectionTemplate::network_id].
    pub fn set_network_id<T: Into<String>>(mut self, v: T) -> Self {
        self.network_id = Some(v.into());
        self
    }
}
/// The body of an [update_gateway_virtual_connection][crate::client::DirectLink::update_gateway_virtual_connection] request.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GatewayVirtualConnectionPatchTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Only `attached` and `rejected` are accepted, and only for connections
    /// in the `approval_pending` state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl GatewayVirtualConnectionPatchTemplate {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][GatewayVirtualConnectionPatchTemplate::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [status][GatewayVirtualConnectionPatchTemplate::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }
}
/// The result of [list_gateway_virtual_connections][crate::client::DirectLink::list_gateway_virtual_connections].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GatewayVirtualConnectionCollection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub virtual_connections: Vec<GatewayVirtualConnection>,
}

impl GatewayVirtualConnectionCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [virtual_connections][GatewayVirtualConnectionCollection::virtual_connections].
    pub fn set_virtual_connections<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<GatewayVirtualConnection>,
    {
        self.virtual_connections = v.into_iter().map(|i| i.into()).collect();
        self
    }
}
/// A location where Direct Link gateways can be provisioned.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct LocationOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_colocation_owner: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_geography: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mzr: Option<bool>,

    /// The location name, used in [GatewayTemplate::location_name].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub provision_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_region: Option<String>,
}

impl LocationOutput {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [billing_location][LocationOutput::billing_location].
    pub fn set_billing_location<T: Into<String>>(mut self, v: T) -> Self {
        self.billing_location = Some(v.into());
        self
    }

    /// Sets the value of [building_colocation_owner][LocationOutput::building_colocation_owner].
    pub fn set_building_colocation_owner<T: Into<String>>(mut self, v: T) -> Self {
        self.building_colocation_owner = Some(v.into());
        self
    }

    /// Sets the value of [display_name][LocationOutput::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [location_type][LocationOutput::location_type].
    pub fn set_location_type<T: Into<String>>(mut self, v: T) -> Self {
        self.location_type = Some(v.into());
        self
    }

    /// Sets the value of [market][LocationOutput::market].
    pub fn set_market<T: Into<String>>(mut self, v: T) -> Self {
        self.market = Some(v.into());
        self
    }

    /// Sets the value of [market_geography][LocationOutput::market_geography].
    pub fn set_market_geography<T: Into<String>>(mut self, v: T) -> Self {
        self.market_geography = Some(v.into());
        self
    }

    /// Sets the value of [mzr][LocationOutput::mzr].
    pub fn set_mzr<T: Into<bool>>(mut self, v: T) -> Self {
        self.mzr = Some(v.into());
        self
    }

    /// Sets the value of [name][LocationOutput::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [offering_type][LocationOutput::offering_type].
    pub fn set_offering_type<T: Into<String>>(mut self, v: T) -> Self {
        self.offering_type = Some(v.into());
        self
    }

    /// Sets the value of [provision_enabled][LocationOutput::provision_enabled].
    pub fn set_provision_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.provision_enabled = Some(v.into());
        self
    }

    /// Sets the value of [vpc_region][LocationOutput::vpc_region].
    pub fn set_vpc_region<T: Into<String>>(mut self, v: T) -> Self {
        self.vpc_region = Some(v.into());
        self
    }
}
/// The result of [list_offering_type_locations][crate::client::DirectLink::list_offering_type_locations].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct LocationCollection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<LocationOutput>,
}

impl LocationCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [locations][LocationCollection::locations].
    pub fn set_locations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<LocationOutput>,
    {
        self.locations = v.into_iter().map(|i| i.into()).collect();
        self
    }
}
/// A cross connect router in a `dedicated` location.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct LocationCrossConnectRouter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router_name: Option<String>,

    /// The number of gateways using this router.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_connections: Option<i64>,
}

impl LocationCrossConnectRouter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [router_name][LocationCrossConnectRouter::router_name].
    pub fn set_router_name<T: Into<String>>(mut self, v: T) -> Self {
        self.router_name = Some(v.into());
        self
    }

    /// Sets the value of [total_connections][LocationCrossConnectRouter::total_connections].
    pub fn set_total_connections<T: Into<i64>>(mut self, v: T) -> Self {
        self.total_connections = Some(v.into());
        self
    }
}
/// The result of [list_offering_type_location_cross_connect_routers][crate::client::DirectLink::list_offering_type_location_cross_connect_routers].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct LocationCrossConnectRouterCollection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cross_connect_routers: Vec<LocationCrossConnectRouter>,
}

impl LocationCrossConnectRouterCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [cross_connect_routers][LocationCrossConnectRouterCollection::cross_connect_routers].
    pub fn set_cross_connect_routers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<LocationCrossConnectRouter>,
    {
        self.cross_connect_routers = v.into_iter().map(|i| i.into()).collect();
        self
    }
}
/// A link speed supported by an offering type.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct OfferingSpeed {
    /// The link speed in megabits per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_speed: Option<i64>,
}

impl OfferingSpeed {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [link_speed][OfferingSpeed::link_speed].
    pub fn set_link_speed<T: Into<i64>>(mut self, v: T) -> Self {
        self.link_speed = Some(v.into());
        self
    }
}
/// The result of [list_offering_type_speeds][crate::client::DirectLink::list_offering_type_speeds].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct OfferingSpeedCollection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub speeds: Vec<OfferingSpeed>,
}

impl OfferingSpeedCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [speeds][OfferingSpeedCollection::speeds].
    pub fn set_speeds<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<OfferingSpeed>,
    {
        self.speeds = v.into_iter().map(|i| i.into()).collect();
        self
    }
}
/// A provider port, used by `connect` gateways.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Port {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The number of gateways using this port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_link_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub supported_link_speeds: Vec<i64>,
}

impl Port {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][Port::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [direct_link_count][Port::direct_link_count].
    pub fn set_direct_link_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.direct_link_count = Some(v.into());
        self
    }

    /// Sets the value of [label][Port::label].
    pub fn set_label<T: Into<String>>(mut self, v: T) -> Self {
        self.label = Some(v.into());
        self
    }

    /// Sets the value of [location_display_name][Port::location_display_name].
    pub fn set_location_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.location_display_name = Some(v.into());
        self
    }

    /// Sets the value of [location_name][Port::location_name].
    pub fn set_location_name<T: Into<String>>(mut self, v: T) -> Self {
        self.location_name = Some(v.into());
        self
    }

    /// Sets the value of [provider_name][Port::provider_name].
    pub fn set_provider_name<T: Into<String>>(mut self, v: T) -> Self {
        self.provider_name = Some(v.into());
        self
    }

    /// Sets the value of [supported_link_speeds][Port::supported_link_speeds].
    pub fn set_supported_link_speeds<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<i64>,
    {
        self.supported_link_speeds = v.into_iter().map(|i| i.into()).collect();
        self
    }
}
/// A link to the first page of results.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PortsPaginatedCollectionFirst {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl PortsPaginatedCollectionFirst {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [href][PortsPaginatedCollectionFirst::href].
    pub fn set_href<T: Into<String>>(mut self, v: T) -> Self {
        self.href = Some(v.into());
        self
    }
}
/// A link to the next page of results.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PortsPaginatedCollectionNext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// The token to fetch the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

impl PortsPaginatedCollectionNext {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [href][PortsPaginatedCollectionNext::href].
    pub fn set_href<T: Into<String>>(mut self, v: T) -> Self {
        self.href = Some(v.into());
        self
    }

    /// Sets the value of [start][PortsPaginatedCollectionNext::start].
    pub fn set_start<T: Into<String>>(mut self, v: T) -> Self {
        self.start = Some(v.into());
        self
    }
}
/// A page of results from [list_ports][crate::client::DirectLink::list_ports].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PortCollection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<Port>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<PortsPaginatedCollectionFirst>,

    /// Absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PortsPaginatedCollectionNext>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
}

impl PortCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [ports][PortCollection::ports].
    pub fn set_ports<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Port>,
    {
        self.ports = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [first][PortCollection::first].
    pub fn set_first<T: Into<PortsPaginatedCollectionFirst>>(mut self, v: T) -> Self {
        self.first = Some(v.into());
        self
    }

    /// Sets the value of [next][PortCollection::next].
    pub fn set_next<T: Into<PortsPaginatedCollectionNext>>(mut self, v: T) -> Self {
        self.next = Some(v.into());
        self
    }

    /// Sets the value of [limit][PortCollection::limit].
    pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }

    /// Sets the value of [total_count][PortCollection::total_count].
    pub fn set_total_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.total_count = Some(v.into());
        self
    }
}
#[cfg(feature = "unstable-stream")]
impl gax::paginator::PageableResponse for PortCollection {
    fn next_page_token(&self) -> Option<String> {
        self.next.as_ref().and_then(|n| n.start.clone())
    }
}

/// The Direct Link offering types.
///
/// Used to query the locations and speeds available to each type of gateway.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OfferingType {
    /// Gateways using a cross connect at an IBM Cloud location.
    #[default]
    Dedicated,
    /// Gateways using a port from a connectivity provider.
    Connect,
}

impl OfferingType {
    /// The name used in request paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dedicated => gateway::r#type::DEDICATED,
            Self::Connect => gateway::r#type::CONNECT,
        }
    }
}

impl std::fmt::Display for OfferingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The request for [list_gateways][crate::client::DirectLink::list_gateways].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListGatewaysRequest {}

impl ListGatewaysRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

/// The request for [create_gateway][crate::client::DirectLink::create_gateway].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateGatewayRequest {
    /// The gateway to create.
    pub gateway_template: Option<GatewayTemplate>,
}

impl CreateGatewayRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_template][CreateGatewayRequest::gateway_template].
    pub fn set_gateway_template<T: Into<GatewayTemplate>>(mut self, v: T) -> Self {
        self.gateway_template = Some(v.into());
        self
    }
}
/// The request for [get_gateway][crate::client::DirectLink::get_gateway].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetGatewayRequest {
    /// The gateway id.
    pub id: String,
}

impl GetGatewayRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][GetGatewayRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}
/// The request for [update_gateway][crate::client::DirectLink::update_gateway].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateGatewayRequest {
    /// The gateway id.
    pub id: String,

    pub gateway_patch_template: Option<GatewayPatchTemplate>,
}

impl UpdateGatewayRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][UpdateGatewayRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [gateway_patch_template][UpdateGatewayRequest::gateway_patch_template].
    pub fn set_gateway_patch_template<T: Into<GatewayPatchTemplate>>(mut self, v: T) -> Self {
        self.gateway_patch_template = Some(v.into());
        self
    }
}
/// The request for [delete_gateway][crate::client::DirectLink::delete_gateway].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteGatewayRequest {
    /// The gateway id.
    pub id: String,
}

impl DeleteGatewayRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][DeleteGatewayRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}
/// The request for [create_gateway_action][crate::client::DirectLink::create_gateway_action].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateGatewayActionRequest {
    /// The gateway id.
    pub id: String,

    pub gateway_action_template: Option<GatewayActionTemplate>,
}

impl CreateGatewayActionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][CreateGatewayActionRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [gateway_action_template][CreateGatewayActionRequest::gateway_action_template].
    pub fn set_gateway_action_template<T: Into<GatewayActionTemplate>>(mut self, v: T) -> Self {
        self.gateway_action_template = Some(v.into());
        self
    }
}
/// The request for [get_gateway_statistics][crate::client::DirectLink::get_gateway_statistics].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetGatewayStatisticsRequest {
    /// The gateway id.
    pub id: String,

    /// The statistic type, see [gateway_statistic::r#type].
    pub r#type: String,
}

impl GetGatewayStatisticsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][GetGatewayStatisticsRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [r#type][GetGatewayStatisticsRequest::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }
}
/// The request for [list_gateway_letter_of_authorization][crate::client::DirectLink::list_gateway_letter_of_authorization].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListGatewayLetterOfAuthorizationRequest {
    /// The gateway id.
    pub id: String,
}

impl ListGatewayLetterOfAuthorizationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][ListGatewayLetterOfAuthorizationRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}
/// The request for [list_gateway_completion_notice][crate::client::DirectLink::list_gateway_completion_notice].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListGatewayCompletionNoticeRequest {
    /// The gateway id.
    pub id: String,
}

impl ListGatewayCompletionNoticeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][ListGatewayCompletionNoticeRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}
/// The request for [create_gateway_completion_notice][crate::client::DirectLink::create_gateway_completion_notice].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateGatewayCompletionNoticeRequest {
    /// The gateway id.
    pub id: String,

    /// The completion notice, a PDF document.
    pub upload: bytes::Bytes,
}

impl CreateGatewayCompletionNoticeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][CreateGatewayCompletionNoticeRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [upload][CreateGatewayCompletionNoticeRequest::upload].
    pub fn set_upload<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.upload = v.into();
        self
    }
}
/// The request for [list_offering_type_locations][crate::client::DirectLink::list_offering_type_locations].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListOfferingTypeLocationsRequest {
    pub offering_type: OfferingType,
}

impl ListOfferingTypeLocationsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [offering_type][ListOfferingTypeLocationsRequest::offering_type].
    pub fn set_offering_type<T: Into<OfferingType>>(mut self, v: T) -> Self {
        self.offering_type = v.into();
        self
    }
}
/// The request for [list_offering_type_location_cross_connect_routers][crate::client::DirectLink::list_offering_type_location_cross_connect_routers].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListOfferingTypeLocationCrossConnectRoutersRequest {
    pub offering_type: OfferingType,

    pub location_name: String,
}

impl ListOfferingTypeLocationCrossConnectRoutersRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [offering_type][ListOfferingTypeLocationCrossConnectRoutersRequest::offering_type].
    pub fn set_offering_type<T: Into<OfferingType>>(mut self, v: T) -> Self {
        self.offering_type = v.into();
        self
    }

    /// Sets the value of [location_name][ListOfferingTypeLocationCrossConnectRoutersRequest::location_name].
    pub fn set_location_name<T: Into<String>>(mut self, v: T) -> Self {
        self.location_name = v.into();
        self
    }
}
/// The request for [list_offering_type_speeds][crate::client::DirectLink::list_offering_type_speeds].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListOfferingTypeSpeedsRequest {
    pub offering_type: OfferingType,
}

impl ListOfferingTypeSpeedsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [offering_type][ListOfferingTypeSpeedsRequest::offering_type].
    pub fn set_offering_type<T: Into<OfferingType>>(mut self, v: T) -> Self {
        self.offering_type = v.into();
        self
    }
}
/// The request for [list_ports][crate::client::DirectLink::list_ports].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListPortsRequest {
    /// The page token.
    pub start: Option<String>,

    /// The maximum number of ports in each page.
    pub limit: Option<i64>,

    /// Only return ports in this location.
    pub location_name: Option<String>,
}

impl ListPortsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [start][ListPortsRequest::start].
    pub fn set_start<T: Into<String>>(mut self, v: T) -> Self {
        self.start = Some(v.into());
        self
    }

    /// Sets the value of [limit][ListPortsRequest::limit].
    pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }

    /// Sets the value of [location_name][ListPortsRequest::location_name].
    pub fn set_location_name<T: Into<String>>(mut self, v: T) -> Self {
        self.location_name = Some(v.into());
        self
    }
}
/// The request for [get_port][crate::client::DirectLink::get_port].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetPortRequest {
    /// The port id.
    pub id: String,
}

impl GetPortRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][GetPortRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}
/// The request for [list_gateway_virtual_connections][crate::client::DirectLink::list_gateway_virtual_connections].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListGatewayVirtualConnectionsRequest {
    pub gateway_id: String,
}

impl ListGatewayVirtualConnectionsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_id][ListGatewayVirtualConnectionsRequest::gateway_id].
    pub fn set_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
        self.gateway_id = v.into();
        self
    }
}
/// The request for [create_gateway_virtual_connection][crate::client::DirectLink::create_gateway_virtual_connection].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateGatewayVirtualConnectionRequest {
    pub gateway_id: String,

    pub gateway_virtual_connection_template: Option<GatewayVirtualConnectionTemplate>,
}

impl CreateGatewayVirtualConnectionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_id][CreateGatewayVirtualConnectionRequest::gateway_id].
    pub fn set_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
        self.gateway_id = v.into();
        self
    }

    /// Sets the value of [gateway_virtual_connection_template][CreateGatewayVirtualConnectionRequest::gateway_virtual_connection_template].
    pub fn set_gateway_virtual_connection_template<T: Into<GatewayVirtualConnectionTemplate>>(mut self, v: T) -> Self {
        self.gateway_virtual_connection_template = Some(v.into());
        self
    }
}
/// The request for [get_gateway_virtual_connection][crate::client::DirectLink::get_gateway_virtual_connection].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetGatewayVirtualConnectionRequest {
    pub gateway_id: String,

    /// The virtual connection id.
    pub id: String,
}

impl GetGatewayVirtualConnectionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_id][GetGatewayVirtualConnectionRequest::gateway_id].
    pub fn set_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
        self.gateway_id = v.into();
        self
    }

    /// Sets the value of [id][GetGatewayVirtualConnectionRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}
/// The request for [update_gateway_virtual_connection][crate::client::DirectLink::update_gateway_virtual_connection].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateGatewayVirtualConnectionRequest {
    pub gateway_id: String,

    /// The virtual connection id.
    pub id: String,

    pub gateway_virtual_connection_patch_template: Option<GatewayVirtualConnectionPatchTemplate>,
}

impl UpdateGatewayVirtualConnectionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_id][UpdateGatewayVirtualConnectionRequest::gateway_id].
    pub fn set_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
        self.gateway_id = v.into();
        self
    }

    /// Sets the value of [id][UpdateGatewayVirtualConnectionRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [gateway_virtual_connection_patch_template][UpdateGatewayVirtualConnectionRequest::gateway_virtual_connection_patch_template].
    pub fn set_gateway_virtual_connection_patch_template<T: Into<GatewayVirtualConnectionPatchTemplate>>(mut self, v: T) -> Self {
        self.gateway_virtual_connection_patch_template = Some(v.into());
        self
    }
}
/// The request for [delete_gateway_virtual_connection][crate::client::DirectLink::delete_gateway_virtual_connection].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteGatewayVirtualConnectionRequest {
    pub gateway_id: String,

    /// The virtual connection id.
    pub id: String,
}

impl DeleteGatewayVirtualConnectionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_id][DeleteGatewayVirtualConnectionRequest::gateway_id].
    pub fn set_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
        self.gateway_id = v.into();
        self
    }

    /// Sets the value of [id][DeleteGatewayVirtualConnectionRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}
