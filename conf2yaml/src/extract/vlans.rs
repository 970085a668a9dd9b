//! VLAN definitions and VTP mode.

use ios_conf_core::{ConfigNode, ConfigTree};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::Vlan;

use super::first_capture;

static VLAN_OBJECT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^vlan [0-9].*").unwrap());
static VLAN_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^vlan ([0-9]+)$").unwrap());
static VLAN_LIST_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^vlan ([0-9],.*)$").unwrap());
static VLAN_NAME_CHILD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"name").unwrap());
static VLAN_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" name (\S+)").unwrap());

static VTP_ANY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"vtp").unwrap());
static VTP_MODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^vtp mode (\S+)").unwrap());

/// One entry per numbered `vlan` statement, in document order.
///
/// A statement is either a single VLAN with an optional name child, or a
/// VLAN list like `vlan 2,30,40`. Statements matching neither shape, such
/// as lists opening with a multi-digit VLAN, still produce an entry and
/// serialize as `{}`.
pub fn extract_vlans(tree: &ConfigTree) -> Vec<Vlan> {
    tree.find_objects(&VLAN_OBJECT_RE)
        .into_iter()
        .map(extract_vlan)
        .collect()
}

fn extract_vlan(node: &ConfigNode) -> Vlan {
    Vlan {
        list: node.capture(&VLAN_LIST_RE).map(ToOwned::to_owned),
        name: node
            .search_children(&VLAN_NAME_CHILD_RE)
            .first()
            .and_then(|child| child.capture(&VLAN_NAME_RE))
            .map(ToOwned::to_owned),
        number: node.capture(&VLAN_NUMBER_RE).map(ToOwned::to_owned),
    }
}

/// VTP mode, read from the first line mentioning `vtp`.
pub fn extract_vtp_mode(tree: &ConfigTree) -> Option<String> {
    let lines = tree.find_lines(&VTP_ANY_RE);
    let first = lines.first()?;
    first_capture(&VTP_MODE_RE, first)
}

#[cfg(test)]
mod tests {
    use ios_conf_core::parse;
    use pretty_assertions::assert_eq;

    use super::{extract_vlans, extract_vtp_mode};
    use crate::model::Vlan;

    #[test]
    fn numbered_vlans_carry_their_names() {
        let input = "vlan 10\n name STAFF\nvlan 20\n name GUEST\nvlan 30\n";
        let vlans = extract_vlans(&parse(input));

        assert_eq!(vlans.len(), 3);
        assert_eq!(vlans[0].number.as_deref(), Some("10"));
        assert_eq!(vlans[0].name.as_deref(), Some("STAFF"));
        assert_eq!(vlans[1].name.as_deref(), Some("GUEST"));
        assert_eq!(vlans[2].number.as_deref(), Some("30"));
        assert!(vlans[2].name.is_none());
        assert!(vlans.iter().all(|vlan| vlan.list.is_none()));
    }

    #[test]
    fn vlan_list_captured_whole() {
        let vlans = extract_vlans(&parse("vlan 2,30,40\n"));

        assert_eq!(vlans.len(), 1);
        assert_eq!(vlans[0].list.as_deref(), Some("2,30,40"));
        assert!(vlans[0].number.is_none());
    }

    #[test]
    fn list_opening_with_multi_digit_vlan_yields_empty_entry() {
        let vlans = extract_vlans(&parse("vlan 50,60\n"));

        assert_eq!(vlans, vec![Vlan::default()]);
    }

    #[test]
    fn vtp_mode_read_from_first_vtp_line() {
        assert_eq!(
            extract_vtp_mode(&parse("vtp mode transparent\nvtp domain OCLS\n")).as_deref(),
            Some("transparent")
        );
    }

    #[test]
    fn vtp_mode_absent_when_domain_comes_first() {
        assert!(extract_vtp_mode(&parse("vtp domain OCLS\nvtp mode transparent\n")).is_none());
        assert!(extract_vtp_mode(&parse("hostname sw-lab\n")).is_none());
    }
}
