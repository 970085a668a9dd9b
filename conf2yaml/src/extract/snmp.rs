//! SNMP server settings.

use ios_conf_core::ConfigTree;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::Snmp;

use super::{first_capture, non_empty};

static SNMP_ANY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"snmp-server").unwrap());
static SNMP_COMMUNITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^snmp-server community (\S+)").unwrap());
static SNMP_LOCATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^snmp-server location (.*)$").unwrap());
static SNMP_CONTACT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^snmp-server contact (.*)$").unwrap());

/// SNMP community, location and contact. The last occurrence of each
/// wins; absent when the config sets none of them.
pub fn extract_snmp(tree: &ConfigTree) -> Option<Snmp> {
    let mut snmp = Snmp::default();
    for line in tree.find_blocks(&SNMP_ANY_RE) {
        if let Some(community) = first_capture(&SNMP_COMMUNITY_RE, line) {
            snmp.community = Some(community);
        }
        if let Some(location) = first_capture(&SNMP_LOCATION_RE, line) {
            snmp.location = Some(location);
        }
        if let Some(contact) = first_capture(&SNMP_CONTACT_RE, line) {
            snmp.contact = Some(contact);
        }
    }
    non_empty(snmp)
}
