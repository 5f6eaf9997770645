//! Configuration for the jsgo pipeline.
//!
//! Loaded from a YAML file (every key optional) and then overridden by
//! command-line flags.
//!
//! ```yaml
//! package: main
//! log:
//!   level: debug
//!   json: false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{err_msg, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Go package clause emitted before the program, if any.
    pub package: Option<String>,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit logs as JSON lines instead of human-readable text.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

impl Config {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(text)
            .map_err(|e| err_msg!(Config, "invalid configuration: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            err_msg!(Config, "failed to read '{}'", path.display()).caused_by(e)
        })?;
        Self::from_yaml_str(&text)
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Result<Self> {
        self.package = Some(package.into());
        self.validate()?;
        Ok(self)
    }

    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.log.json = enabled;
        self
    }

    fn validate(&self) -> Result<()> {
        match &self.package {
            Some(name) if !is_go_identifier(name) => Err(err_msg!(
                Config,
                "`{}` is not a valid Go package name",
                name
            )
            .with_help("package names are a letter or `_` followed by letters, digits or `_`")),
            _ => Ok(()),
        }
    }
}

fn is_go_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::ErrorType;

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Config::from_yaml_str("{}").unwrap(), Config::default());
        assert_eq!(Config::default().log.level, "warn");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml_str("package: main\nlog:\n  json: true\n").unwrap();
        assert_eq!(config.package.as_deref(), Some("main"));
        assert!(config.log.json);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = Config::from_yaml_str("pakage: main\n").unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Config);
    }

    #[test]
    fn test_package_name_is_validated() {
        assert!(Config::default().with_package("main").is_ok());
        assert!(Config::default().with_package("_gen2").is_ok());
        assert!(Config::default().with_package("2fast").is_err());
        assert!(Config::default().with_package("my-pkg").is_err());
        assert!(Config::from_yaml_str("package: \"\"\n").is_err());
    }
}
