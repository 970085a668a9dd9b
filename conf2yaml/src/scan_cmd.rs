use anyhow::{Context, Result};
use conf2yaml::scan::{build_scan_report, render_scan_text};
use ios_conf_core::parse_file;

use crate::cli::{OutputFormat, ScanArgs};

pub fn run_scan(args: ScanArgs) -> Result<()> {
    let tree = parse_file(&args.file)
        .with_context(|| format!("failed to parse {}", args.file.display()))?;
    let report = build_scan_report(&tree);

    match args.format {
        OutputFormat::Text => println!("{}", render_scan_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
