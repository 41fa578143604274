//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::CheckerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML manifest.
///
/// Relative paths inside the manifest are resolved against its directory.
pub fn load_config(path: &Path) -> Result<CheckerConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config = parse_config(&content)?;

    if let Some(base) = path.parent() {
        config.resolve_paths(base);
    }
    Ok(config)
}

/// Parse and validate manifest text.
pub fn parse_config(content: &str) -> Result<CheckerConfig, ConfigError> {
    let config: CheckerConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("route-reach.toml");
        fs::write(
            &manifest,
            "[routes]\napp_dir = \"app\"\n\n[scan]\ndirs = [\"app\", \"components\"]\n",
        )
        .unwrap();

        let config = load_config(&manifest).unwrap();
        assert_eq!(config.routes.app_dir, Some(dir.path().join("app")));
        assert_eq!(config.scan.dirs[1], dir.path().join("components"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/route-reach.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_validation_error_message() {
        let err = parse_config("[routes]\ndeclared = [\"a\", \"a\"]\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: route \"a\" is declared more than once"
        );
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[routes\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
