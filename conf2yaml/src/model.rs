//! Output document model.
//!
//! One struct per extracted stanza. Fields are declared in alphabetical
//! order so the emitted YAML mappings are sorted by key, and every field
//! is skipped when empty so absent stanzas leave no key behind.

use std::collections::BTreeMap;

use serde::Serialize;

/// Everything extracted from one switch configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeviceConfig {
    /// Permitted management networks from `access-list 10`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub acl: Vec<String>,
    /// Banner payload lines, message-of-the-day text unwrapped.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub banner: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crypto_chain_id: Option<String>,
    /// Present when any RADIUS server is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dot1x: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<Interface>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<GlobalIp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp: Option<Snmp>,
    /// Provisioned stack member models, in member order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub switch_stack: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vlans: Vec<Vlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vtp_mode: Option<String>,
}

/// Facts extracted from a single `interface` stanza.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Interface {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdp_disable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<InterfaceIp>,
    /// First-hop security features, in configuration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ipv6: Vec<Ipv6Feature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keepalive_disable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negotiation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_inline_police: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_policy: Option<ServicePolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shutdown: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spanning_tree: Option<SpanningTree>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switchport: Option<Switchport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vrf: Option<String>,
}

/// Interface-level IP settings, including `no ip` negations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InterfaceIp {
    /// Access group number keyed to its direction.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub access_group: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dhcp_snooping_trust: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address_disable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mroute_cache_disable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_cache_disable: Option<bool>,
}

/// Layer-2 switchport settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Switchport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_vlan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_security: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trunk: Option<Trunk>,
}

/// Trunk settings nested under a switchport.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Trunk {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_vlan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encapsulation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_vlan: Option<String>,
}

/// Per-interface spanning-tree toggles.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpanningTree {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guard_root: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfast: Option<bool>,
}

/// QoS policies attached to an interface.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServicePolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

/// Global SNMP server settings. The last occurrence of each wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snmp {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Global IP settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GlobalIp {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_gateway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dhcp_snooping: Option<bool>,
}

/// One `vlan` definition. Either a single numbered VLAN with an optional
/// name, or a bare VLAN list like `vlan 2,30,40`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Vlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

/// IPv6 first-hop security features recognized on interfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ipv6Feature {
    RaGuard,
    Ipv6Snooping,
    Ipv6DhcpGuard,
}
