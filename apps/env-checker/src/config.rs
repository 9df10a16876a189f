//! Configuration discovery and effective settings resolution.
//!
//! env-checker reads `env-checker.toml|yaml|yml` from the scanned directory
//! and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `dir`: `.`
//! - `report`: none (plain text)
//! - `required`: empty
//! - `color`: true (still subject to `NO_COLOR` and TTY detection)
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{EnvCheckError, Result};
use crate::output::ReportFormat;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names probed in order.
pub const CONFIG_FILES: [&str; 3] = ["env-checker.toml", "env-checker.yaml", "env-checker.yml"];

#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
/// Root configuration loaded from `env-checker.toml|yaml`.
pub struct CheckerConfig {
    pub report: Option<String>,
    pub required: Option<Vec<String>>,
    pub color: Option<bool>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration after applying precedence.
pub struct Effective {
    pub dir: PathBuf,
    pub report: ReportFormat,
    pub required: Vec<String>,
    pub color: bool,
}

/// Load `CheckerConfig` from the first config file present in `dir`.
///
/// `Ok(None)` when no config file exists.
pub fn load_config(dir: &Path) -> Result<Option<CheckerConfig>> {
    for name in CONFIG_FILES {
        let path = dir.join(name);
        if !path.is_file() {
            continue;
        }
        let s = fs::read_to_string(&path).map_err(|source| EnvCheckError::FileRead {
            path: path.clone(),
            source,
        })?;
        let parsed = if name.ends_with(".toml") {
            toml::from_str::<CheckerConfig>(&s).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<CheckerConfig>(&s).map_err(|e| e.to_string())
        };
        return match parsed {
            Ok(cfg) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Ok(Some(cfg))
            }
            Err(message) => Err(EnvCheckError::Config { path, message }),
        };
    }
    Ok(None)
}

/// Parse a comma-separated key list.
///
/// Segments are trimmed, empty segments dropped, and repeats removed so each
/// key is checked once; first occurrence keeps its position.
pub fn parse_required_keys(raw: &str) -> Vec<String> {
    dedup_keys(raw.split(',').map(str::to_string))
}

fn dedup_keys<I: IntoIterator<Item = String>>(keys: I) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for k in keys {
        let k = k.trim();
        if k.is_empty() || out.iter().any(|o| o == k) {
            continue;
        }
        out.push(k.to_string());
    }
    out
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// A config file that cannot be read or parsed is reported via `tracing`
/// and on stderr by the caller; resolution then falls back to defaults.
pub fn resolve_effective(
    cli_dir: Option<&str>,
    cli_report: Option<&str>,
    cli_required: Option<&str>,
    cli_no_color: bool,
) -> (Effective, Option<EnvCheckError>) {
    let dir = PathBuf::from(cli_dir.unwrap_or("."));
    let (cfg, cfg_err) = match load_config(&dir) {
        Ok(c) => (c.unwrap_or_default(), None),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring config file");
            (CheckerConfig::default(), Some(e))
        }
    };

    let report_sel = cli_report.map(str::to_string).or(cfg.report);
    let report = ReportFormat::from_selector(report_sel.as_deref());

    let required = match cli_required {
        Some(raw) => parse_required_keys(raw),
        None => dedup_keys(cfg.required.unwrap_or_default()),
    };

    let color = !cli_no_color && cfg.color.unwrap_or(true);

    (
        Effective {
            dir,
            report,
            required,
            color,
        },
        cfg_err,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("env-checker.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
report = "json"
required = ["DB_HOST", "DB_USER"]
color = false
    "#
        )
        .unwrap();

        let (eff, err) = resolve_effective(root.to_str(), None, None, false);
        assert!(err.is_none());
        assert_eq!(eff.report, ReportFormat::Json);
        assert_eq!(eff.required, vec!["DB_HOST", "DB_USER"]);
        assert!(!eff.color);
    }

    #[test]
    fn test_load_yaml_and_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("env-checker.yaml"), "report: md\n").unwrap();

        let (eff, _) = resolve_effective(root.to_str(), None, None, false);
        assert_eq!(eff.report, ReportFormat::Markdown);
        assert!(eff.required.is_empty());
        assert!(eff.color);
    }

    #[test]
    fn test_no_config_uses_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(load_config(dir.path()).unwrap(), None);
        let (eff, err) = resolve_effective(dir.path().to_str(), None, None, false);
        assert!(err.is_none());
        assert_eq!(eff.report, ReportFormat::Text);
        assert!(eff.required.is_empty());
        assert_eq!(eff.dir, dir.path());
    }

    #[test]
    fn test_cli_takes_precedence() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("env-checker.toml"),
            "report = \"json\"\nrequired = [\"A\"]\n",
        )
        .unwrap();

        let (eff, _) = resolve_effective(root.to_str(), Some("md"), Some("B,C"), true);
        assert_eq!(eff.report, ReportFormat::Markdown);
        assert_eq!(eff.required, vec!["B", "C"]);
        assert!(!eff.color);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("env-checker.toml"), "report = [1, 2\n").unwrap();

        let (eff, err) = resolve_effective(root.to_str(), None, Some("A"), false);
        assert!(matches!(err, Some(EnvCheckError::Config { .. })));
        assert_eq!(eff.report, ReportFormat::Text);
        assert_eq!(eff.required, vec!["A"]);
    }

    #[test]
    fn test_unknown_config_key_is_rejected() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("env-checker.toml"), "colour = true\n").unwrap();
        assert!(matches!(
            load_config(dir.path()),
            Err(EnvCheckError::Config { .. })
        ));
    }

    #[test]
    fn test_parse_required_keys() {
        assert_eq!(parse_required_keys("DB_HOST,DB_USER"), vec!["DB_HOST", "DB_USER"]);
        assert_eq!(parse_required_keys(" A , ,B,"), vec!["A", "B"]);
        assert_eq!(parse_required_keys("A,B,A"), vec!["A", "B"]);
        assert!(parse_required_keys("").is_empty());
    }
}
