//! Per-interface stanza extraction.

use ios_conf_core::{ConfigNode, ConfigTree};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{
    Interface, InterfaceIp, Ipv6Feature, ServicePolicy, SpanningTree, Switchport, Trunk,
};

use super::non_empty;

static INTERFACE_ANY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"interface").unwrap());
static INTERFACE_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^interface (\S+)$").unwrap());

static SWITCHPORT_ANY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"switchport").unwrap());
static ACCESS_VLAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" switchport access vlan (\S+)").unwrap());
static SWITCHPORT_MODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ switchport mode (\S+)$").unwrap());
static PORT_SECURITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ switchport port-security$").unwrap());
static TRUNK_ANY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ switchport trunk.*$").unwrap());
static TRUNK_NATIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ switchport trunk native vlan (\S+)$").unwrap());
static TRUNK_ALLOWED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ switchport trunk allowed vlan (\S+)$").unwrap());
static TRUNK_ENCAPSULATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ switchport trunk encapsulation (.+)$").unwrap());

static SPANNING_TREE_ANY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"spanning-tree").unwrap());
static PORTFAST_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ spanning-tree portfast$").unwrap());
static GUARD_ROOT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ spanning-tree guard root$").unwrap());

static SERVICE_POLICY_ANY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"service-policy").unwrap());
static SERVICE_POLICY_INPUT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ service-policy input (.*)$").unwrap());
static SERVICE_POLICY_OUTPUT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ service-policy output (.*)$").unwrap());

static IP_CHILD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ ip ").unwrap());
static IP_ADDRESS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ ip address (.*)$").unwrap());
static ACCESS_GROUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ ip access-group (\S+) (\S+)$").unwrap());
static DHCP_SNOOPING_TRUST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ ip dhcp snooping trust$").unwrap());

static NO_IP_CHILD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ no ip ").unwrap());
static NO_IP_ADDRESS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ no ip address$").unwrap());
static NO_ROUTE_CACHE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ no ip route-cache$").unwrap());
static NO_MROUTE_CACHE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ no ip mroute-cache$").unwrap());

static IPV6_CHILD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ ipv6 ").unwrap());
static RA_GUARD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ ipv6 nd raguard$").unwrap());
static IPV6_SNOOPING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ ipv6 snooping$").unwrap());
static IPV6_DHCP_GUARD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ ipv6 dhcp guard$").unwrap());

static DESCRIPTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ description (.*)$").unwrap());
static POWER_INLINE_POLICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ power inline police$").unwrap());
static CDP_DISABLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ no cdp enable$").unwrap());
static SHUTDOWN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ shutdown$").unwrap());
static VRF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ vrf forwarding (.+)$").unwrap());
static NEGOTIATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ negotiation (.+)$").unwrap());
static KEEPALIVE_DISABLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ no keepalive$").unwrap());

/// Extract one entry per line mentioning `interface`, in document order.
///
/// Lines that mention interfaces without opening a stanza, such as
/// `ntp source-interface`, still produce an entry. It stays empty and
/// serializes as `{}`.
pub fn extract_interfaces(tree: &ConfigTree) -> Vec<Interface> {
    tree.find_objects(&INTERFACE_ANY_RE)
        .into_iter()
        .map(extract_interface)
        .collect()
}

fn extract_interface(node: &ConfigNode) -> Interface {
    let mut interface = Interface {
        name: node.capture(&INTERFACE_NAME_RE).map(ToOwned::to_owned),
        ..Interface::default()
    };

    interface.switchport = non_empty(extract_switchport(node));
    interface.spanning_tree = non_empty(extract_spanning_tree(node));
    interface.service_policy = non_empty(extract_service_policy(node));
    interface.ip = non_empty(extract_interface_ip(node));
    interface.ipv6 = extract_ipv6_features(node);
    extract_flags(node, &mut interface);

    interface
}

fn extract_switchport(node: &ConfigNode) -> Switchport {
    let mut switchport = Switchport::default();
    let mut trunk = Trunk::default();

    for child in node.search_children(&SWITCHPORT_ANY_RE) {
        if let Some(vlan) = child.capture(&ACCESS_VLAN_RE) {
            switchport.access_vlan = Some(vlan.to_string());
        }
        if let Some(mode) = child.capture(&SWITCHPORT_MODE_RE) {
            switchport.mode = Some(mode.to_string());
        }
        if child.is_match(&PORT_SECURITY_RE) {
            switchport.port_security = Some(true);
        }
        if child.is_match(&TRUNK_ANY_RE) {
            if let Some(vlan) = child.capture(&TRUNK_NATIVE_RE) {
                trunk.native_vlan = Some(vlan.to_string());
            }
            if let Some(vlan) = child.capture(&TRUNK_ALLOWED_RE) {
                trunk.allowed_vlan = Some(vlan.to_string());
            }
            if let Some(encapsulation) = child.capture(&TRUNK_ENCAPSULATION_RE) {
                trunk.encapsulation = Some(encapsulation.to_string());
            }
        }
    }

    switchport.trunk = non_empty(trunk);
    switchport
}

fn extract_spanning_tree(node: &ConfigNode) -> SpanningTree {
    let mut spanning_tree = SpanningTree::default();
    for child in node.search_children(&SPANNING_TREE_ANY_RE) {
        if child.is_match(&PORTFAST_RE) {
            spanning_tree.portfast = Some(true);
        }
        if child.is_match(&GUARD_ROOT_RE) {
            spanning_tree.guard_root = Some(true);
        }
    }
    spanning_tree
}

fn extract_service_policy(node: &ConfigNode) -> ServicePolicy {
    let mut service_policy = ServicePolicy::default();
    for child in node.search_children(&SERVICE_POLICY_ANY_RE) {
        if let Some(policy) = child.capture(&SERVICE_POLICY_INPUT_RE) {
            service_policy.input = Some(policy.to_string());
        }
        if let Some(policy) = child.capture(&SERVICE_POLICY_OUTPUT_RE) {
            service_policy.output = Some(policy.to_string());
        }
    }
    service_policy
}

fn extract_interface_ip(node: &ConfigNode) -> InterfaceIp {
    let mut ip = InterfaceIp::default();

    for child in node.search_children(&IP_CHILD_RE) {
        if let Some(address) = child.capture(&IP_ADDRESS_RE) {
            ip.address = Some(address.to_string());
        }
        if let Some(caps) = ACCESS_GROUP_RE.captures(&child.text) {
            if let (Some(group), Some(direction)) = (caps.get(1), caps.get(2)) {
                ip.access_group
                    .insert(group.as_str().to_string(), direction.as_str().to_string());
            }
        }
        if child.is_match(&DHCP_SNOOPING_TRUST_RE) {
            ip.dhcp_snooping_trust = Some(true);
        }
    }

    for child in node.search_children(&NO_IP_CHILD_RE) {
        if child.is_match(&NO_IP_ADDRESS_RE) {
            ip.ip_address_disable = Some(true);
        }
        if child.is_match(&NO_ROUTE_CACHE_RE) {
            ip.route_cache_disable = Some(true);
        }
        if child.is_match(&NO_MROUTE_CACHE_RE) {
            ip.mroute_cache_disable = Some(true);
        }
    }

    ip
}

fn extract_ipv6_features(node: &ConfigNode) -> Vec<Ipv6Feature> {
    let mut features = Vec::new();
    for child in node.search_children(&IPV6_CHILD_RE) {
        if child.is_match(&RA_GUARD_RE) {
            features.push(Ipv6Feature::RaGuard);
        }
        if child.is_match(&IPV6_SNOOPING_RE) {
            features.push(Ipv6Feature::Ipv6Snooping);
        }
        if child.is_match(&IPV6_DHCP_GUARD_RE) {
            features.push(Ipv6Feature::Ipv6DhcpGuard);
        }
    }
    features
}

/// Flags and single-value settings scanned over every child line.
fn extract_flags(node: &ConfigNode, interface: &mut Interface) {
    for child in &node.children {
        if let Some(description) = child.capture(&DESCRIPTION_RE) {
            interface.description = Some(description.to_string());
        }
        if child.is_match(&POWER_INLINE_POLICE_RE) {
            interface.power_inline_police = Some(true);
        }
        if child.is_match(&CDP_DISABLE_RE) {
            interface.cdp_disable = Some(true);
        }
        if child.is_match(&SHUTDOWN_RE) {
            interface.shutdown = Some(true);
        }
        if let Some(vrf) = child.capture(&VRF_RE) {
            interface.vrf = Some(vrf.to_string());
        }
        if let Some(negotiation) = child.capture(&NEGOTIATION_RE) {
            interface.negotiation = Some(negotiation.to_string());
        }
        if child.is_match(&KEEPALIVE_DISABLE_RE) {
            interface.keepalive_disable = Some(true);
        }
    }
}
