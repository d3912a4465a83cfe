//! Configuration management

use crate::domain::TagMap;
use crate::error::{PintidyError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const DEFAULT_API_URL: &str = "https://api.pinboard.in/v1";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    // Pinboard tags are any non-empty run without whitespace or commas.
    REGEX.get_or_init(|| Regex::new(r"^[^\s,]+$").unwrap())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub token: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub parent_tags: Vec<String>,
    #[serde(default)]
    pub mappings: BTreeMap<String, String>,
}

impl Config {
    /// Default configuration path under the user config directory
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| PintidyError::Config("Cannot determine config directory".to_string()))?;
        Ok(base.join("pintidy").join("config.toml"))
    }

    /// Load and validate configuration from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PintidyError::ConfigNotFound(path.to_path_buf())
            } else {
                PintidyError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the API token, checking the environment first
    pub fn get_token(&self) -> String {
        std::env::var("PINTIDY_TOKEN").unwrap_or_else(|_| self.token.clone())
    }

    /// Build the tag mapping table from the configured pairs and parents
    pub fn tag_map(&self) -> TagMap {
        let parents: BTreeSet<String> = self.parent_tags.iter().cloned().collect();
        TagMap::new(self.mappings.clone(), parents)
    }

    fn validate(&self) -> Result<()> {
        validate_token(&self.token)?;

        for tag in &self.parent_tags {
            validate_tag(tag)?;
        }
        for (tag, parent) in &self.mappings {
            validate_tag(tag)?;
            validate_tag(parent)?;
        }

        Ok(())
    }
}

fn validate_token(token: &str) -> Result<()> {
    match token.split_once(':') {
        Some((user, key)) if !user.is_empty() && !key.is_empty() => Ok(()),
        _ => Err(PintidyError::Config(format!(
            "Invalid token: '{}'. Expected 'username:HEX'",
            token
        ))),
    }
}

fn validate_tag(tag: &str) -> Result<()> {
    if tag_regex().is_match(tag) {
        Ok(())
    } else {
        Err(PintidyError::Config(format!(
            "Invalid tag: '{}'. Tags must be non-empty and contain no whitespace or commas",
            tag
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_full_config() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            r#"
token = "user:A1B2C3"
parent_tags = ["books", "music"]

[mappings]
toread = "books"
vinyl = "music"
"#,
        );

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.token, "user:A1B2C3");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.parent_tags, vec!["books", "music"]);
        assert_eq!(config.mappings.get("toread").unwrap(), "books");
    }

    #[test]
    fn test_load_minimal_config() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "token = \"user:KEY\"\n");

        let config = Config::load_from_path(&path).unwrap();
        assert!(config.parent_tags.is_empty());
        assert!(config.mappings.is_empty());
        assert!(config.tag_map().is_empty());
    }

    #[test]
    fn test_api_url_override() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            "token = \"user:KEY\"\napi_url = \"http://localhost:8080/v1\"\n",
        );

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.api_url, "http://localhost:8080/v1");
    }

    #[test]
    fn test_missing_config_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.toml");

        let result = Config::load_from_path(&path);
        match result.unwrap_err() {
            PintidyError::ConfigNotFound(p) => assert_eq!(p, path),
            other => panic!("Expected ConfigNotFound, got: {}", other),
        }
    }

    #[test]
    fn test_invalid_token_rejected() {
        let temp = TempDir::new().unwrap();

        for bad in ["\"no-colon\"", "\"user:\"", "\":key\""] {
            let path = write_config(&temp, &format!("token = {}\n", bad));
            let result = Config::load_from_path(&path);
            match result.unwrap_err() {
                PintidyError::Config(msg) => assert!(msg.contains("token")),
                other => panic!("Expected Config error, got: {}", other),
            }
        }
    }

    #[test]
    fn test_invalid_tag_rejected() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            "token = \"user:KEY\"\nparent_tags = [\"has space\"]\n",
        );

        let result = Config::load_from_path(&path);
        match result.unwrap_err() {
            PintidyError::Config(msg) => assert!(msg.contains("Invalid tag")),
            other => panic!("Expected Config error, got: {}", other),
        }
    }

    #[test]
    fn test_invalid_mapping_tag_rejected() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            "token = \"user:KEY\"\n[mappings]\n\"to read\" = \"books\"\n",
        );

        assert!(Config::load_from_path(&path).is_err());
    }

    #[test]
    fn test_tag_map_from_config() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            r#"
token = "user:KEY"
parent_tags = ["music"]

[mappings]
toread = "books"
"#,
        );

        let config = Config::load_from_path(&path).unwrap();
        let map = config.tag_map();
        assert!(map.is_mapped("toread"));
        assert_eq!(map.replacement_for("toread").unwrap(), "books");
        assert!(map.parent_tags().contains("music"));
    }

    #[test]
    fn test_get_token_uses_env_override() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("PINTIDY_TOKEN");

        let config = Config {
            token: "file-user:KEY".to_string(),
            api_url: default_api_url(),
            parent_tags: Vec::new(),
            mappings: BTreeMap::new(),
        };

        std::env::set_var("PINTIDY_TOKEN", "env-user:KEY");
        assert_eq!(config.get_token(), "env-user:KEY");

        std::env::remove_var("PINTIDY_TOKEN");
        assert_eq!(config.get_token(), "file-user:KEY");
    }
}
