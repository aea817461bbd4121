//! TOML configuration for the `calcs` binary.
//!
//! ```toml
//! [logging]
//! level = "debug"
//! file = "calcs.log"
//!
//! [inss]
//! ceiling = "8154.41"
//! max_deduction = "876.96"
//!
//! [[inss.brackets]]
//! upper_bound = "1518.00"
//! rate = "0.075"
//! ```
//!
//! Every section is optional; a missing `[inss]` table falls back to the
//! INSS 2025 reference table.

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use calc_core::{BracketTable, ProgressiveError};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid bracket table: {0}")]
    InvalidTable(#[from] ProgressiveError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Bare level or full `EnvFilter` directive. `RUST_LOG` takes precedence.
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub inss: BracketTable,
}

impl AppConfig {
    /// Parses and validates a configuration document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(text)?;
        config.inss.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&text)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.inss, BracketTable::inss_2025());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn logging_section_only() {
        let config = AppConfig::from_toml_str("[logging]\nlevel = \"debug\"\nfile = \"out.log\"").unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, Some(PathBuf::from("out.log")));
        assert_eq!(config.inss, BracketTable::inss_2025());
    }

    #[test]
    fn custom_table_is_parsed() {
        let text = r#"
[inss]
ceiling = "2000"
max_deduction = "150"

[[inss.brackets]]
upper_bound = "1000"
rate = "0.05"

[[inss.brackets]]
upper_bound = "2000"
rate = "0.10"
"#;

        let config = AppConfig::from_toml_str(text).unwrap();

        assert_eq!(config.inss.brackets.len(), 2);
        assert_eq!(config.inss.brackets[0].rate, dec!(0.05));
        assert_eq!(config.inss.ceiling, dec!(2000));
    }

    #[test]
    fn invalid_table_is_rejected() {
        let text = r#"
[inss]
ceiling = "5000"
max_deduction = "150"

[[inss.brackets]]
upper_bound = "1000"
rate = "0.05"
"#;

        let err = AppConfig::from_toml_str(text).expect_err("ceiling above last bracket");

        assert!(matches!(
            err,
            ConfigError::InvalidTable(ProgressiveError::CeilingAboveLastBracket { .. })
        ));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = AppConfig::from_toml_str("[logging").expect_err("malformed");

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = AppConfig::load(Path::new("/this/path/does/not/exist.toml")).expect_err("missing");

        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn load_or_default_without_path() {
        assert_eq!(AppConfig::load_or_default(None).unwrap(), AppConfig::default());
    }
}
