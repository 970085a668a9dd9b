//! Pattern-driven extraction of device facts from a parsed config tree.
//!
//! Each submodule owns the patterns for one area of the output document.
//! Patterns match raw line text with indentation included, so child-line
//! patterns start with a literal leading space.

mod interfaces;
mod snmp;
mod system;
mod vlans;

pub use interfaces::extract_interfaces;
pub use snmp::extract_snmp;
pub use system::{
    extract_acl, extract_banner, extract_crypto_chain_id, extract_dot1x, extract_global_ip,
    extract_switch_stack,
};
pub use vlans::{extract_vlans, extract_vtp_mode};

use ios_conf_core::ConfigTree;
use regex::Regex;

use crate::model::DeviceConfig;

/// Extract everything the output document captures from one config tree.
pub fn extract_device_config(tree: &ConfigTree) -> DeviceConfig {
    DeviceConfig {
        acl: extract_acl(tree),
        banner: extract_banner(tree),
        crypto_chain_id: extract_crypto_chain_id(tree),
        dot1x: extract_dot1x(tree),
        interfaces: extract_interfaces(tree),
        ip: extract_global_ip(tree),
        snmp: extract_snmp(tree),
        switch_stack: extract_switch_stack(tree),
        vlans: extract_vlans(tree),
        vtp_mode: extract_vtp_mode(tree),
    }
}

/// Keep a stanza only when something in it was actually set.
pub(crate) fn non_empty<T: Default + PartialEq>(value: T) -> Option<T> {
    (value != T::default()).then_some(value)
}

/// First capture group of `pattern` against `line`, owned.
pub(crate) fn first_capture(pattern: &Regex, line: &str) -> Option<String> {
    pattern
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
