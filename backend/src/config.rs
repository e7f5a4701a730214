//! Server configuration.
//!
//! Loaded from a JSON file (`engage360.json` next to the binary, or the
//! path in the `ENGAGE360_CONFIG` environment variable). A missing file is
//! not an error: the defaults cover local development, where the server
//! runs against an empty in-memory blob store and a local SQLite file.
//!
//! The stream-type → container map and the landing prefix live here rather
//! than in code: they are the configuration surface of the stream-type
//! resolver and the audience file catalog.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::{env, fs};

use serde::Deserialize;

/// Environment variable naming an alternative config file path.
const CONFIG_PATH_VAR: &str = "ENGAGE360_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "engage360.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageConfig,
    pub database: DatabaseConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            storage: StorageConfig::default(),
            database: DatabaseConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageConfig {
    /// Azure storage account name. When absent the server falls back to an
    /// empty in-memory store so the wizard can still be exercised locally.
    pub account: Option<String>,
    pub access_key: Option<String>,
    /// Custom endpoint, e.g. an Azurite emulator URL.
    pub endpoint: Option<String>,
    /// Care-flow stream label → physical container name.
    pub containers: HashMap<String, String>,
    /// Object-key prefix under which ingested files land.
    pub landing_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            account: None,
            access_key: None,
            endpoint: None,
            containers: HashMap::from([
                ("Healthcare Partner".to_string(), "fs-partner".to_string()),
                ("Direct-to-Consumer (DTC)".to_string(), "fs-dtc".to_string()),
            ]),
            landing_prefix: "landing/".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DatabaseConfig {
    /// SQLite file holding the `care_gaps` reference table.
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("engage360.sqlite"),
        }
    }
}

impl AppConfig {
    /// Reads the config file, falling back to defaults when it is absent.
    pub fn load() -> Result<AppConfig, String> {
        let path =
            env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        match fs::read_to_string(&path) {
            Ok(raw) => {
                serde_json::from_str(&raw).map_err(|e| format!("invalid config '{path}': {e}"))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(AppConfig::default()),
            Err(e) => Err(format!("cannot read config '{path}': {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_both_streams() {
        let config = AppConfig::default();
        assert_eq!(
            config.storage.containers.get("Healthcare Partner"),
            Some(&"fs-partner".to_string())
        );
        assert_eq!(
            config.storage.containers.get("Direct-to-Consumer (DTC)"),
            Some(&"fs-dtc".to_string())
        );
        assert_eq!(config.storage.landing_prefix, "landing/");
        assert!(config.storage.account.is_none());
    }

    #[test]
    fn partial_config_files_keep_defaults_for_missing_sections() {
        let raw = r#"{ "port": 9000, "storage": { "account": "prodaccount" } }"#;
        let config: AppConfig = serde_json::from_str(raw).unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.storage.account.as_deref(), Some("prodaccount"));
        // Sections use their own defaults field-by-field.
        assert_eq!(config.storage.landing_prefix, "landing/");
        assert_eq!(config.database.path, PathBuf::from("engage360.sqlite"));
    }

    #[test]
    fn camel_case_keys_are_accepted() {
        let raw = r#"{ "storage": { "landingPrefix": "inbound/", "accessKey": "k" } }"#;
        let config: AppConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.storage.landing_prefix, "inbound/");
        assert_eq!(config.storage.access_key.as_deref(), Some("k"));
    }
}
