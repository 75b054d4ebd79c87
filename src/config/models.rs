// src/config/models.rs
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::metadata::LevelFilter;
use tracing_subscriber::filter::Directive;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.logging.validate()
    }
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggingStyle {
    /// Uses compact logging.
    #[default]
    Compact,
    /// Uses JSON formatted logging
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub style: LoggingStyle,
    /// Level used when `RUST_LOG` does not say otherwise.
    pub default_level: String,
    /// Extra filter directives, e.g. `applyset_health=debug`.
    pub directives: Vec<String>,
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            style: LoggingStyle::Compact,
            default_level: "info".to_string(),
            directives: Vec::new(),
            ansi: true,
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.default_level
            .parse()
            .with_context(|| format!("Invalid default_level {:?}", self.default_level))
    }

    pub fn parsed_directives(&self) -> Result<Vec<Directive>> {
        self.directives
            .iter()
            .map(|d| {
                d.parse::<Directive>()
                    .with_context(|| format!("Invalid log directive {:?}", d))
            })
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        self.level_filter()?;
        self.parsed_directives()?;
        if self.directives.iter().any(|d| d.trim().is_empty()) {
            bail!("Log directives must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_bad_directive() {
        let config = LoggingConfig {
            directives: vec!["applyset_health=loud".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_level_filter() {
        let config = LoggingConfig {
            default_level: "warn".to_string(),
            ..Default::default()
        };
        assert_eq!(config.level_filter().unwrap(), LevelFilter::WARN);
    }
}
