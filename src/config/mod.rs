use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod schema;

pub use schema::{ChronographSchema, EventSchema, PinSchema, SchemaConfig};

pub const DEFAULT_SITE_URL: &str = "https://www.domgogolya.ru";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Used when neither --database-uri nor DATABASE_URI is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_uri: Option<String>,
    #[serde(default = "default_site_url")]
    pub site_url: String,
    #[serde(default)]
    pub schema: SchemaConfig,
    #[serde(default)]
    pub mail: MailDefaults,
}

/// Fallback mail settings; CLI flags and environment variables win.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_addr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_addr: Option<String>,
}

fn default_site_url() -> String {
    DEFAULT_SITE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_uri: None,
            site_url: default_site_url(),
            schema: SchemaConfig::default(),
            mail: MailDefaults::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (~/.gogol)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".gogol")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("gogol.yaml")
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write this configuration to `path`, creating the directory.
    pub fn save(&self, path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production_schema() {
        let cfg = Config::default();
        assert_eq!(cfg.site_url, "https://www.domgogolya.ru");
        assert_eq!(cfg.schema.pin.iblock_id, 38);
        assert_eq!(cfg.schema.event.section_id, 7);
        assert_eq!(cfg.schema.chronograph.years_ago_property_id, 23);
        assert_eq!(cfg.schema.chronograph.years_shift, 5);
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let yaml = "schema:\n  event:\n    price_property_id: 200\nmail:\n  host: smtp.example.org\n";
        let cfg = Config::from_yaml(yaml).unwrap();
        assert_eq!(cfg.schema.event.price_property_id, 200);
        assert_eq!(cfg.schema.event.date_property_id, 15);
        assert_eq!(cfg.schema.pin.button_text, "Подробнее");
        assert_eq!(cfg.mail.host.as_deref(), Some("smtp.example.org"));
        assert_eq!(cfg.mail.port, None);
    }

    #[test]
    fn empty_file_means_defaults() {
        assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("gogol.yaml");

        let mut cfg = Config::default();
        cfg.schema.chronograph.iblock_id = 9;
        cfg.save(&path, false).unwrap();

        assert_eq!(Config::load(&path).unwrap(), cfg);
        assert!(matches!(cfg.save(&path, false), Err(AppError::Config(_))));
        cfg.save(&path, true).unwrap();
    }

    #[test]
    fn missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load(&dir.path().join("absent.yaml")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(matches!(
            Config::from_yaml("schema: [1, 2"),
            Err(AppError::ConfigParse(_))
        ));
    }
}
