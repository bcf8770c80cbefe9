//! Rule table configuration: TOML files deserialized into [`RuleTables`]

mod tables;

pub use tables::{
    load_rule_tables, parse_rule_tables, ActionCostTable, DifficultyTable, RuleTables, WeaponSizeRule,
    WeaponSizeTable, XpTier,
};

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to load or validate rule data
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read rules file {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse rules TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid rule tables: {0}")]
    ValidationError(String),
}

/// Read a TOML file and deserialize it, keeping the path for error reports
pub fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    parse_toml(&content)
}

/// Deserialize a TOML string; missing tables and fields take their defaults
pub fn parse_toml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_toml::<RuleTables>(Path::new("no/such/rules.toml")).unwrap_err();
        match err {
            ConfigError::IoError { path, .. } => assert_eq!(path, PathBuf::from("no/such/rules.toml")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_toml() {
        let err = parse_toml::<RuleTables>("weapon_sizes = [").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
