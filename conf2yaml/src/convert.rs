//! Directory conversion orchestration.
//!
//! Walks every config file under the configured root, extracts each into
//! the output document model, and writes one YAML document per config:
//!
//! 1. **Settings** — Layer CLI flags over the optional settings file
//! 2. **Collect** — Walk the root directory tree in sorted name order
//! 3. **Extract** — Parse each config and extract device facts
//! 4. **Write** — Mirror the input layout under the output directory
//!
//! The run fails on the first config that cannot be read or written, so a
//! partial output tree always corresponds to a reported error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use conf2yaml::extract::extract_device_config;
use conf2yaml::output::{output_path, write_yaml};
use conf2yaml::settings::resolve_settings;
use conf2yaml::summary::{render as render_totals, ConvertTotals};
use ios_conf_core::parse_file;

use crate::cli::ConvertArgs;

pub fn run_convert(args: ConvertArgs) -> Result<()> {
    let (mut settings, settings_source) = resolve_settings(args.config.as_deref());
    if let Some(root) = args.root {
        settings.root = root;
    }
    if let Some(out_dir) = args.out_dir {
        settings.out_dir = out_dir;
    }
    if let Some(domain) = args.domain {
        settings.domain = domain;
    }
    if args.debug {
        println!("Using settings: {settings_source}");
    }

    let mut files = Vec::new();
    collect_config_files(&settings.root, &settings.skip, &mut files)
        .with_context(|| format!("failed to read config root {}", settings.root.display()))?;

    let mut totals = ConvertTotals::default();
    for file in files {
        let tree =
            parse_file(&file).with_context(|| format!("failed to parse {}", file.display()))?;
        let config = extract_device_config(&tree);

        let target = output_path(&file, &settings.root, &settings.out_dir, &settings.domain)?;
        println!("Outputting {}", target.display());
        let yaml = write_yaml(&config, &target)
            .with_context(|| format!("failed to write {}", target.display()))?;
        if args.debug {
            print!("{yaml}");
        }

        totals.record(&config);
    }

    println!("{}", render_totals(totals));
    Ok(())
}

/// Walk `dir` recursively, collecting files in sorted name order and
/// skipping entries whose name is on the skip list.
fn collect_config_files(dir: &Path, skip: &[String], files: &mut Vec<PathBuf>) -> io::Result<()> {
    let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let name = entry.file_name().to_string_lossy().into_owned();
        if skip.contains(&name) {
            continue;
        }
        let path = entry.path();
        if path.is_dir() {
            collect_config_files(&path, skip, files)?;
        } else {
            files.push(path);
        }
    }
    Ok(())
}
