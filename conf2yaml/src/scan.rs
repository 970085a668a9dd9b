//! Pre-conversion scan of a single configuration.
//!
//! The scan answers "what would conversion produce for this file" without
//! writing anything: which stanzas are present, how many entries each
//! would yield, and the device identity. Useful for spotting configs that
//! extract to less than expected before running a whole-directory convert.

use ios_conf_core::ConfigTree;
use serde::Serialize;

use crate::detect::detect_identity;
use crate::extract::extract_device_config;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub hostname: String,
    pub models: Vec<String>,
    pub interfaces: usize,
    pub named_interfaces: usize,
    pub vlans: usize,
    pub switch_stack: usize,
    pub acl_entries: usize,
    pub banner_lines: usize,
    pub has_global_ip: bool,
    pub has_snmp: bool,
    pub has_vtp: bool,
    pub has_crypto_chain: bool,
    pub has_dot1x: bool,
}

/// Build a scan report by running the full extraction and counting what
/// it produced.
pub fn build_scan_report(tree: &ConfigTree) -> ScanReport {
    let identity = detect_identity(tree);
    let config = extract_device_config(tree);

    ScanReport {
        hostname: identity.hostname,
        models: identity.models,
        interfaces: config.interfaces.len(),
        named_interfaces: config
            .interfaces
            .iter()
            .filter(|interface| interface.name.is_some())
            .count(),
        vlans: config.vlans.len(),
        switch_stack: config.switch_stack.len(),
        acl_entries: config.acl.len(),
        banner_lines: config.banner.len(),
        has_global_ip: config.ip.is_some(),
        has_snmp: config.snmp.is_some(),
        has_vtp: config.vtp_mode.is_some(),
        has_crypto_chain: config.crypto_chain_id.is_some(),
        has_dot1x: config.dot1x.is_some(),
    }
}

pub fn render_scan_text(report: &ScanReport) -> String {
    let mut out = Vec::new();
    out.push(format!("scan hostname={}", report.hostname));
    out.push("models".to_string());
    append_list(&mut out, &report.models);
    out.push(format!(
        "stanzas interfaces={} named_interfaces={} vlans={} switch_stack={} acl_entries={} banner_lines={}",
        report.interfaces,
        report.named_interfaces,
        report.vlans,
        report.switch_stack,
        report.acl_entries,
        report.banner_lines
    ));
    out.push(format!(
        "globals ip={} snmp={} vtp={} crypto_chain={} dot1x={}",
        report.has_global_ip,
        report.has_snmp,
        report.has_vtp,
        report.has_crypto_chain,
        report.has_dot1x
    ));
    out.join("\n")
}

fn append_list(out: &mut Vec<String>, items: &[String]) {
    if items.is_empty() {
        out.push("- none".to_string());
        return;
    }
    for item in items {
        out.push(format!("- {item}"));
    }
}
