//! Configuration loading from disk.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::LimboConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),
    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

pub(crate) fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

fn parse(path: &Path, content: &str) -> Result<LimboConfig, ConfigError> {
    if is_toml(path) {
        Ok(toml::from_str(content)?)
    } else {
        Ok(serde_json::from_str(content)?)
    }
}

fn render(path: &Path, config: &LimboConfig) -> Result<String, ConfigError> {
    if is_toml(path) {
        Ok(toml::to_string_pretty(config)?)
    } else {
        Ok(serde_json::to_string_pretty(config)?)
    }
}

/// Load and validate configuration from a JSON or TOML file.
pub fn load_config(path: &Path) -> Result<LimboConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse(path, &content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    if !config.is_configured() {
        tracing::warn!(
            path = %path.display(),
            "Backends not set, players will not be returned to servers"
        );
    }
    Ok(config)
}

/// Load configuration, creating an empty skeleton file if none exists.
///
/// A freshly created file leaves both backend names empty, so reconnection
/// stays inert until an operator fills them in.
pub fn load_or_init(path: &Path) -> Result<LimboConfig, ConfigError> {
    if path.exists() {
        return load_config(path);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let config = LimboConfig::default();
    fs::write(path, render(path, &config)?)?;

    tracing::warn!(
        path = %path.display(),
        "Config not set, created an empty one; players will not be returned to servers"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("limbo-return-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_missing_file_creates_skeleton() {
        let dir = scratch_dir();
        let path = dir.join("config.json");

        let config = load_or_init(&path).unwrap();
        assert_eq!(config, LimboConfig::default());
        assert!(!config.is_configured());

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["main_server"], "");
        assert_eq!(written["limbo_server"], "");

        // Second load reads the file back instead of rewriting it.
        assert_eq!(load_or_init(&path).unwrap(), config);

        fs::remove_dir_all(dir).unwrap_or_default();
    }

    #[test]
    fn test_minimal_json_document() {
        let dir = scratch_dir();
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        fs::write(&path, r#"{ "main_server": "survival", "limbo_server": "limbo" }"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.main_server, "survival");
        assert_eq!(config.limbo_server, "limbo");
        assert_eq!(config.reconnect.interval_secs, 10);
        assert!(config.reconnect.auto_reconnect);

        fs::remove_dir_all(dir).unwrap_or_default();
    }

    #[test]
    fn test_toml_by_extension() {
        let dir = scratch_dir();
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(
            &path,
            "main_server = \"survival\"\nlimbo_server = \"limbo\"\n\n[reconnect]\ninterval_secs = 3\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.main_server, "survival");
        assert_eq!(config.reconnect.interval_secs, 3);

        fs::remove_dir_all(dir).unwrap_or_default();
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let dir = scratch_dir();
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        fs::write(&path, r#"{ "main_server": "a", "limbo_server": "a" }"#).unwrap();

        match load_config(&path) {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors, vec![ValidationError::SameBackend("a".into())]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }

        fs::remove_dir_all(dir).unwrap_or_default();
    }
}
