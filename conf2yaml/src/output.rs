//! YAML document rendering and output path layout.
//!
//! Output files mirror the input layout: a config at
//! `<root>/core/sw-core-01.conf` lands at
//! `<out_dir>/core/sw-core-01.conf.<domain>.yml`.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::DeviceConfig;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to serialize YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to write YAML output: {0}")]
    Io(#[from] std::io::Error),
    #[error("input {input} is not under root {root}")]
    OutsideRoot { input: String, root: String },
}

/// Render a device config as a YAML document with an explicit `---` start
/// marker.
pub fn render_yaml(config: &DeviceConfig) -> Result<String, EmitError> {
    let body = serde_yaml::to_string(config)?;
    Ok(format!("---\n{body}"))
}

/// Mirrored output path for one input config. The input file name keeps
/// its extension and gains a `.<domain>.yml` suffix.
pub fn output_path(
    input: &Path,
    root: &Path,
    out_dir: &Path,
    domain: &str,
) -> Result<PathBuf, EmitError> {
    let outside = || EmitError::OutsideRoot {
        input: input.display().to_string(),
        root: root.display().to_string(),
    };
    let relative = input.strip_prefix(root).map_err(|_| outside())?;
    let name = relative.file_name().ok_or_else(outside)?;

    let mut path = out_dir.join(relative);
    path.set_file_name(format!("{}.{domain}.yml", name.to_string_lossy()));
    Ok(path)
}

/// Render and write one YAML document, creating parent directories as
/// needed. Returns the rendered document.
pub fn write_yaml(config: &DeviceConfig, path: &Path) -> Result<String, EmitError> {
    let yaml = render_yaml(config)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &yaml)?;
    Ok(yaml)
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use pretty_assertions::assert_eq;

    use super::{output_path, render_yaml, write_yaml};
    use crate::model::{DeviceConfig, Interface, Switchport};

    #[test]
    fn renders_sorted_keys_with_start_marker() {
        let config = DeviceConfig {
            switch_stack: vec!["ws-c2960x-48fpd-l".to_string()],
            vtp_mode: Some("transparent".to_string()),
            ..DeviceConfig::default()
        };

        assert_eq!(
            render_yaml(&config).expect("render"),
            "---\nswitch_stack:\n- ws-c2960x-48fpd-l\nvtp_mode: transparent\n"
        );
    }

    #[test]
    fn empty_document_renders_as_empty_mapping() {
        assert_eq!(
            render_yaml(&DeviceConfig::default()).expect("render"),
            "---\n{}\n"
        );
    }

    #[test]
    fn numeric_strings_stay_quoted() {
        let config = DeviceConfig {
            interfaces: vec![Interface {
                name: Some("GigabitEthernet1/0/1".to_string()),
                switchport: Some(Switchport {
                    access_vlan: Some("100".to_string()),
                    ..Switchport::default()
                }),
                ..Interface::default()
            }],
            ..DeviceConfig::default()
        };

        let yaml = render_yaml(&config).expect("render");
        assert!(yaml.contains("access_vlan: '100'"));
        assert!(yaml.contains("name: GigabitEthernet1/0/1"));
    }

    #[test]
    fn output_path_mirrors_subdirectories() {
        let path = output_path(
            Path::new("configurations/core/sw-core-01.conf"),
            Path::new("configurations"),
            Path::new("yaml"),
            "ocls.info",
        )
        .expect("path");

        assert_eq!(path, PathBuf::from("yaml/core/sw-core-01.conf.ocls.info.yml"));
    }

    #[test]
    fn output_path_rejects_inputs_outside_root() {
        let err = output_path(
            Path::new("elsewhere/sw.conf"),
            Path::new("configurations"),
            Path::new("yaml"),
            "ocls.info",
        )
        .expect_err("should fail");

        assert!(err.to_string().contains("is not under root"));
    }

    #[test]
    fn write_yaml_creates_parent_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("yaml/core/sw.conf.ocls.info.yml");

        let yaml = write_yaml(&DeviceConfig::default(), &target).expect("write");
        assert_eq!(yaml, "---\n{}\n");
        assert_eq!(std::fs::read_to_string(&target).expect("read back"), yaml);
    }
}
