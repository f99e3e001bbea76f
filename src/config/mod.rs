//! Configuration loading
//!
//! Default model and billing period can live in a config file in the
//! working directory. Precedence is CLI flags and environment over the
//! config file over built-in defaults; the merge happens at the CLI
//! layer, this module only produces the file's contribution.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::pricing::{Model, Period};

/// Defaults read from a tokcast config file. Unknown model or period
/// names fail deserialization, they never fall back to other rates.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Default model for cost estimation.
    pub model: Option<Model>,
    /// Default billing period.
    pub time: Option<Period>,
}

/// Load configuration from `config_path`, or discover one in `dir`.
///
/// An explicitly provided file that is missing or malformed is a hard
/// error. An auto-discovered file that fails to parse only logs a
/// warning and yields defaults.
pub fn load_config(dir: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(dir),
    };

    let Some(config_file) = discovered else {
        return Ok(Config::default());
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "toml" => parse_toml_config(&content, &config_file),
        "yaml" | "yml" => parse_yaml_config(&content, &config_file),
        other => Err(anyhow::anyhow!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        )),
    };

    match parsed {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            if config_path_provided {
                return Err(e);
            }
            // Auto-discovered: warn and fall back to defaults
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {}",
                config_file.display(),
                e
            );
            Ok(Config::default())
        }
    }
}

/// Parse TOML config, supporting a nested [tokcast] section.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get("tokcast") {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val
        .try_into()
        .with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, supporting a nested tokcast section.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    let config_val = match raw.get("tokcast") {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(dir: &Path) -> Option<PathBuf> {
    let candidates = [
        "tokcast.toml",
        ".tokcast.toml",
        "tokcast.yml",
        ".tokcast.yml",
        "tokcast.yaml",
        ".tokcast.yaml",
    ];

    for candidate in candidates {
        let path = dir.join(candidate);
        if path.exists() {
            return Some(path);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_defaults_when_missing() {
        let tmp = TempDir::new().expect("tmp");
        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_load_flat_toml_config() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("tokcast.toml"), "model = \"deepseek-reasoner\"\n")
            .expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg.model, Some(Model::Reasoner));
        assert_eq!(cfg.time, None);
    }

    #[test]
    fn test_load_toml_nested_section() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(
            tmp.path().join("tokcast.toml"),
            "[tokcast]\nmodel = \"deepseek-chat\"\ntime = \"discount\"\n",
        )
        .expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg.model, Some(Model::Chat));
        assert_eq!(cfg.time, Some(Period::Discount));
    }

    #[test]
    fn test_load_yaml_config() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("tokcast.yml"), "time: discount\n").expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg.time, Some(Period::Discount));
    }

    #[test]
    fn test_discovery_order_prefers_toml() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("tokcast.toml"), "model = \"deepseek-reasoner\"\n")
            .expect("write");
        fs::write(tmp.path().join("tokcast.yml"), "model: deepseek-chat\n").expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg.model, Some(Model::Reasoner));
    }

    #[test]
    fn test_explicit_config_unknown_model_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "model = \"gpt-4\"\n").expect("write");

        let result = load_config(tmp.path(), Some(&path));
        assert!(result.is_err(), "unknown model names must not parse");
    }

    #[test]
    fn test_explicit_config_missing_file_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("nowhere.toml");

        let result = load_config(tmp.path(), Some(&path));
        assert!(result.is_err(), "explicit missing config should return Err");
    }

    #[test]
    fn test_explicit_config_unsupported_extension_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("tokcast.ini");
        fs::write(&path, "model = deepseek-chat\n").expect("write");

        let result = load_config(tmp.path(), Some(&path));
        assert!(result.is_err(), "unsupported extension should return Err");
    }

    #[test]
    fn test_auto_discovered_invalid_config_returns_default() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("tokcast.toml"), "model = 123\n").expect("write");

        let cfg = load_config(tmp.path(), None).expect("should not error on auto-discovery");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_auto_discovered_invalid_period_returns_default() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("tokcast.yml"), "time: weekend\n").expect("write");

        let cfg = load_config(tmp.path(), None).expect("should not error on auto-discovery");
        assert_eq!(cfg, Config::default());
    }
}
