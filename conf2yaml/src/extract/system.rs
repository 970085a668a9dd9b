//! Global stanza extraction: stack members, IP globals, banner, ACLs,
//! certificate chain and 802.1X.

use ios_conf_core::ConfigTree;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::GlobalIp;

use super::{first_capture, non_empty};

static SWITCH_PROVISION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"switch [0-9]+ provision (.*)").unwrap());

static IP_ANY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"ip").unwrap());
static GLOBAL_DHCP_SNOOPING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ip dhcp snooping$").unwrap());
static DEFAULT_GATEWAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ip default-gateway (\S+)$").unwrap());

static BANNER_ANY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"banner").unwrap());
static BANNER_MOTD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^banner motd (.*)$").unwrap());

static ACL_ANY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"access-list").unwrap());
static ACL_PERMIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^access-list 10 permit (172.*)$").unwrap());

static CRYPTO_CHAIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^crypto pki certificate chain (\S+)").unwrap());

static RADIUS_SERVER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"radius server").unwrap());

/// Provisioned stack member models, in member order.
pub fn extract_switch_stack(tree: &ConfigTree) -> Vec<String> {
    tree.find_objects(&SWITCH_PROVISION_RE)
        .into_iter()
        .filter_map(|node| node.capture(&SWITCH_PROVISION_RE))
        .map(ToOwned::to_owned)
        .collect()
}

/// Global IP settings, absent when the config sets none of them.
pub fn extract_global_ip(tree: &ConfigTree) -> Option<GlobalIp> {
    let mut ip = GlobalIp::default();
    for node in tree.find_objects(&IP_ANY_RE) {
        if node.is_match(&GLOBAL_DHCP_SNOOPING_RE) {
            ip.dhcp_snooping = Some(true);
        }
        if let Some(gateway) = node.capture(&DEFAULT_GATEWAY_RE) {
            ip.default_gateway = Some(gateway.to_string());
        }
    }
    non_empty(ip)
}

/// Banner lines. Message-of-the-day openers are unwrapped to their
/// payload after the keyword; every other block line is kept raw.
pub fn extract_banner(tree: &ConfigTree) -> Vec<String> {
    tree.find_blocks(&BANNER_ANY_RE)
        .into_iter()
        .map(|line| first_capture(&BANNER_MOTD_RE, line).unwrap_or_else(|| line.to_string()))
        .collect()
}

/// Permitted networks from `access-list 10`, limited to 172.* entries.
pub fn extract_acl(tree: &ConfigTree) -> Vec<String> {
    tree.find_blocks(&ACL_ANY_RE)
        .into_iter()
        .filter_map(|line| first_capture(&ACL_PERMIT_RE, line))
        .collect()
}

/// Trustpoint name of the last PKI certificate chain in the config.
pub fn extract_crypto_chain_id(tree: &ConfigTree) -> Option<String> {
    let mut chain_id = None;
    for line in tree.find_lines(&CRYPTO_CHAIN_RE) {
        if let Some(id) = first_capture(&CRYPTO_CHAIN_RE, line) {
            chain_id = Some(id);
        }
    }
    chain_id
}

/// Set when any RADIUS server is configured.
pub fn extract_dot1x(tree: &ConfigTree) -> Option<bool> {
    (!tree.find_objects(&RADIUS_SERVER_RE).is_empty()).then_some(true)
}

#[cfg(test)]
mod tests {
    use ios_conf_core::parse;
    use pretty_assertions::assert_eq;

    use super::{
        extract_acl, extract_banner, extract_crypto_chain_id, extract_dot1x, extract_global_ip,
        extract_switch_stack,
    };

    #[test]
    fn collects_stack_members_in_order() {
        let input = "switch 1 provision ws-c2960x-48fpd-l\nswitch 2 provision ws-c2960x-24ps-l\n";
        assert_eq!(
            extract_switch_stack(&parse(input)),
            vec![
                "ws-c2960x-48fpd-l".to_string(),
                "ws-c2960x-24ps-l".to_string(),
            ]
        );
    }

    #[test]
    fn global_ip_absent_without_matching_lines() {
        assert!(extract_global_ip(&parse("hostname sw-lab\nip routing\n")).is_none());

        let ip = extract_global_ip(&parse("ip dhcp snooping\nip default-gateway 172.16.10.1\n"))
            .expect("global ip stanza");
        assert_eq!(ip.dhcp_snooping, Some(true));
        assert_eq!(ip.default_gateway.as_deref(), Some("172.16.10.1"));
    }

    #[test]
    fn motd_banner_opener_is_unwrapped() {
        let input = "banner motd ^C\nUnauthorized access is prohibited.\n^C\n";
        assert_eq!(
            extract_banner(&parse(input)),
            vec![
                "^C".to_string(),
                "Unauthorized access is prohibited.".to_string(),
                "^C".to_string(),
            ]
        );
    }

    #[test]
    fn non_motd_banner_lines_stay_raw() {
        let input = "banner login ^C\nProperty of OCLS\n^C\n";
        assert_eq!(
            extract_banner(&parse(input)),
            vec![
                "banner login ^C".to_string(),
                "Property of OCLS".to_string(),
                "^C".to_string(),
            ]
        );
    }

    #[test]
    fn acl_keeps_only_management_permits() {
        let input = "\
access-list 10 permit 172.16.0.0 0.0.255.255
access-list 10 permit 172.17.0.0 0.0.255.255
access-list 10 permit 10.0.0.0 0.255.255.255
access-list 23 permit 172.16.10.0 0.0.0.255
";
        assert_eq!(
            extract_acl(&parse(input)),
            vec![
                "172.16.0.0 0.0.255.255".to_string(),
                "172.17.0.0 0.0.255.255".to_string(),
            ]
        );
    }

    #[test]
    fn last_certificate_chain_wins() {
        let input = "\
crypto pki certificate chain TP-self-signed-1111
 certificate self-signed 01
crypto pki certificate chain SLA-TrustPoint
 certificate ca 01
";
        assert_eq!(
            extract_crypto_chain_id(&parse(input)).as_deref(),
            Some("SLA-TrustPoint")
        );
    }

    #[test]
    fn dot1x_follows_radius_presence() {
        assert_eq!(
            extract_dot1x(&parse("radius server RADIUS-A\n address ipv4 172.16.1.10\n")),
            Some(true)
        );
        assert_eq!(extract_dot1x(&parse("hostname sw-lab\n")), None);
    }
}
