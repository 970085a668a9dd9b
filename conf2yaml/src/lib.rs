//! Cisco IOS switch configuration extraction into YAML.
//!
//! This library turns raw `show running-config` style switch configurations
//! into structured YAML documents. Network teams keep plain-text configs in
//! revision control; extracting them into a stable document shape makes the
//! fleet queryable by automation without teaching every tool IOS syntax.
//!
//! # Architecture
//!
//! The library is organized into a few functional areas:
//!
//! ## Extraction
//!
//! - [`extract`] — Pattern-driven extraction of device facts
//!   - Per-interface stanzas (switchport, spanning-tree, IP, IPv6 guards)
//!   - VLAN definitions and VTP mode
//!   - Global stanzas (SNMP, ACLs, banner, crypto chain, 802.1X)
//! - [`detect`] — Device identity (hostname, provisioned stack models)
//!
//! ## Reporting
//!
//! - [`scan`] — Pre-conversion summary of what a config contains
//! - [`inspect`] — Configuration tree visualization
//! - [`summary`] — Post-conversion run totals
//!
//! ## Output & Settings
//!
//! - [`model`] — The YAML document shape, one struct per stanza
//! - [`output`] — YAML rendering and mirrored output paths
//! - [`settings`] — TOML settings file with CLI overrides
//!
//! # Workflow
//!
//! The typical conversion run:
//!
//! 1. **Scan** a config to see which stanzas are present
//! 2. **Parse** each file under the configuration root into a tree
//! 3. **Extract** device facts into the output document model
//! 4. **Write** one YAML document per config, mirroring the input layout
//!
//! # Built on ios-conf-core
//!
//! This library uses `ios-conf-core` for generic indentation-aware parsing
//! and tree queries. All Cisco-specific extraction logic lives in this crate.

pub mod detect;
pub mod extract;
pub mod inspect;
pub mod model;
pub mod output;
pub mod scan;
pub mod settings;
pub mod summary;
