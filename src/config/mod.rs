// src/config/mod.rs
mod models;

pub use models::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a file (YAML or JSON)
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|s| s.to_str()),
        Some("yaml") | Some("yml")
    );

    let config: Config = if is_yaml {
        serde_yaml::from_str(&contents).context("Failed to parse YAML config")?
    } else {
        serde_json::from_str(&contents).context("Failed to parse JSON config")?
    };

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_yaml_config() {
        let file = write_config(
            ".yaml",
            "logging:\n  style: json\n  default_level: debug\n  directives:\n    - applyset_health=trace\n",
        );

        let config = load_config(file.path()).await.unwrap();

        assert_eq!(config.logging.style, LoggingStyle::Json);
        assert_eq!(config.logging.default_level, "debug");
        assert_eq!(config.logging.directives, vec!["applyset_health=trace"]);
        assert!(config.logging.ansi);
    }

    #[tokio::test]
    async fn test_load_json_config_with_defaults() {
        let file = write_config(".json", "{}");

        let config = load_config(file.path()).await.unwrap();

        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_invalid_level_is_rejected() {
        let file = write_config(".yml", "logging:\n  default_level: loud\n");

        let err = load_config(file.path()).await.unwrap_err();

        assert!(err.to_string().contains("default_level"));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = load_config("/nonexistent/applyset-health.yaml")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Failed to read config file"));
    }
}
