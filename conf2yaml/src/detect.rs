//! Device identity detection.

use ios_conf_core::ConfigTree;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::extract::extract_switch_stack;

static HOSTNAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^hostname (\S+)").unwrap());

/// Who a config belongs to: the hostname and any provisioned stack models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceIdentity {
    pub hostname: String,
    pub models: Vec<String>,
}

/// Detect the device identity, falling back to `unknown` for configs
/// without a hostname line.
pub fn detect_identity(tree: &ConfigTree) -> DeviceIdentity {
    let hostname = tree
        .find_objects(&HOSTNAME_RE)
        .first()
        .and_then(|node| node.capture(&HOSTNAME_RE))
        .unwrap_or("unknown")
        .to_string();

    DeviceIdentity {
        hostname,
        models: extract_switch_stack(tree),
    }
}
