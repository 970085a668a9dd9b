use colored::Colorize;
use serde::Serialize;

use crate::model::DeviceConfig;

/// Running totals across one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConvertTotals {
    pub files: usize,
    pub interfaces: usize,
    pub vlans: usize,
}

impl ConvertTotals {
    /// Add one extracted document to the totals.
    pub fn record(&mut self, config: &DeviceConfig) {
        self.files += 1;
        self.interfaces += config.interfaces.len();
        self.vlans += config.vlans.len();
    }
}

pub fn render(totals: ConvertTotals) -> String {
    format!(
        "convert_summary files={} interfaces={} vlans={}",
        totals.files, totals.interfaces, totals.vlans
    )
    .cyan()
    .to_string()
}
