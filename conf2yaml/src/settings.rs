use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default settings file name looked up in the working directory.
pub const SETTINGS_FILE: &str = "conf2yaml.toml";

/// Effective conversion settings after layering file values over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub root: PathBuf,
    pub out_dir: PathBuf,
    pub domain: String,
    pub skip: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SettingsFile {
    root: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    domain: Option<String>,
    skip: Option<Vec<String>>,
}

/// Errors returned when loading a settings file.
#[derive(Debug, Error)]
pub enum SettingsLoadError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Built-in defaults used when no settings file is present.
pub fn default_settings() -> Settings {
    Settings {
        root: PathBuf::from("configurations"),
        out_dir: PathBuf::from("yaml"),
        domain: "ocls.info".to_string(),
        skip: vec![".gitignore".to_string()],
    }
}

/// Load settings from a TOML file.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| SettingsLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_settings(&raw, path.display().to_string())
}

fn parse_settings(raw: &str, path: String) -> Result<Settings, SettingsLoadError> {
    let parsed: SettingsFile =
        toml::from_str(raw).map_err(|source| SettingsLoadError::Parse { path, source })?;

    let mut settings = default_settings();
    if let Some(root) = parsed.root {
        settings.root = root;
    }
    if let Some(out_dir) = parsed.out_dir {
        settings.out_dir = out_dir;
    }
    if let Some(domain) = parsed.domain {
        settings.domain = domain;
    }
    if let Some(skip) = parsed.skip {
        settings.skip = skip;
    }
    Ok(settings)
}

/// Resolve settings from an explicit path, the default file, or defaults.
///
/// A settings file that cannot be loaded is reported on stderr and does
/// not abort the run. Returns the settings and a description of where
/// they came from.
pub fn resolve_settings(path: Option<&Path>) -> (Settings, String) {
    let candidate = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(SETTINGS_FILE);
            if !default.exists() {
                return (default_settings(), "defaults".to_string());
            }
            default
        }
    };

    match load_settings(&candidate) {
        Ok(settings) => (settings, format!("file:{}", candidate.display())),
        Err(err) => {
            eprintln!(
                "warning: failed to load settings from {} ({err}); using defaults",
                candidate.display()
            );
            (default_settings(), "defaults".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::{default_settings, load_settings, resolve_settings, SettingsLoadError};

    #[test]
    fn loads_valid_settings_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("conf2yaml.toml");
        fs::write(
            &path,
            r#"
root = "switch-configs"
out_dir = "exports"
domain = "lab.example"
skip = [".gitignore", "README.md"]
"#,
        )
        .expect("write settings");

        let settings = load_settings(&path).expect("settings should parse");
        assert_eq!(settings.root, PathBuf::from("switch-configs"));
        assert_eq!(settings.out_dir, PathBuf::from("exports"));
        assert_eq!(settings.domain, "lab.example");
        assert_eq!(settings.skip, vec![".gitignore", "README.md"]);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("conf2yaml.toml");
        fs::write(&path, "domain = \"lab.example\"\n").expect("write settings");

        let settings = load_settings(&path).expect("settings should parse");
        assert_eq!(settings.domain, "lab.example");
        assert_eq!(settings.root, default_settings().root);
        assert_eq!(settings.skip, default_settings().skip);
    }

    #[test]
    fn returns_parse_error_for_invalid_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.toml");
        fs::write(&path, "root = [not valid").expect("write broken file");

        let err = load_settings(&path).expect_err("should fail parse");
        match err {
            SettingsLoadError::Parse { .. } => {}
            other => panic!("unexpected error variant: {other}"),
        }
    }

    #[test]
    fn resolve_falls_back_to_defaults_for_missing_explicit_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing.toml");

        let (settings, source) = resolve_settings(Some(&path));
        assert_eq!(settings, default_settings());
        assert_eq!(source, "defaults");
    }

    #[test]
    fn defaults_match_expected_layout() {
        let settings = default_settings();
        assert_eq!(settings.root, PathBuf::from("configurations"));
        assert_eq!(settings.out_dir, PathBuf::from("yaml"));
        assert_eq!(settings.domain, "ocls.info");
        assert_eq!(settings.skip, vec![".gitignore".to_string()]);
    }
}
