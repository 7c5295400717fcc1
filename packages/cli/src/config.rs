use folio_client::DEFAULT_API_URL;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "folio.config.json";

/// Folio configuration file format
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Backend base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Directory exported HTML is written to when no path is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// `--api-url` / `FOLIO_API_URL` first, then the config file
    pub fn resolve_api_url(&self, flag: Option<&str>) -> String {
        flag.or(self.api_url.as_deref())
            .unwrap_or(DEFAULT_API_URL)
            .to_string()
    }

    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        match &self.out_dir {
            Some(dir) => PathBuf::from(cwd).join(dir),
            None => PathBuf::from(cwd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "apiUrl": "http://reports.internal:9000",
            "outDir": "exports"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.api_url.as_deref(), Some("http://reports.internal:9000"));
        assert_eq!(config.out_dir.as_deref(), Some("exports"));
        assert_eq!(config.get_out_dir("/work"), PathBuf::from("/work/exports"));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.resolve_api_url(None), "http://localhost:8000");
        assert_eq!(config.get_out_dir("/work"), PathBuf::from("/work"));
    }

    #[test]
    fn test_flag_wins_over_file() {
        let config = Config {
            api_url: Some("http://from-file".to_string()),
            out_dir: None,
        };
        assert_eq!(config.resolve_api_url(Some("http://from-flag")), "http://from-flag");
        assert_eq!(config.resolve_api_url(None), "http://from-file");
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        assert_eq!(Config::load(&cwd).unwrap(), Config::default());

        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), r#"{"outDir": "out"}"#).unwrap();
        let config = Config::load(&cwd).unwrap();
        assert_eq!(config.out_dir.as_deref(), Some("out"));
        assert!(config.api_url.is_none());
    }
}
