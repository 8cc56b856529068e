use config::ConfigError;
use serde::Deserialize;
use tracing::{debug, info};

/// Configuration file read by [`ApplicationConfiguration::new`], relative to the workspace root.
pub const DEFAULT_CONFIG_FILE: &str = "videogame_application/config.yaml";

/// Prefix of the environment variables that override the configuration file, e.g.
/// `VIDEOGAMES__CATALOG__KEY_MODE=position`.
pub const ENVIRONMENT_PREFIX: &str = "VIDEOGAMES";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApplicationConfiguration {
    #[serde(default)]
    pub log_format: LogFormat,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    #[serde(default = "default_address")]
    pub address: String,
    pub base_path: Option<String>,
    pub cors_enabled: Option<bool>,
}

fn default_address() -> String {
    "0.0.0.0:3033".to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            base_path: None,
            cors_enabled: None,
        }
    }
}

/// How the `{key}` segment of `/videogames/{key}` is interpreted.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum KeyMode {
    /// The key is the server-assigned id of the record.
    #[default]
    Id,
    /// The key is the zero-based position of the record in listing order.
    Position,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    #[serde(default)]
    pub key_mode: KeyMode,
    /// Reject records whose name (case-insensitive) is already taken by another record.
    #[serde(default = "enabled")]
    pub unique_names: bool,
    /// Populate the catalog with the sample records at startup.
    #[serde(default = "enabled")]
    pub seed: bool,
}

fn enabled() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            key_mode: KeyMode::default(),
            unique_names: true,
            seed: true,
        }
    }
}

impl ApplicationConfiguration {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(DEFAULT_CONFIG_FILE)
    }

    /// Loads the configuration from `path` (optional) layered with the `VIDEOGAMES__*` environment variables.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix(ENVIRONMENT_PREFIX).separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Logs the configuration. Call it after the tracing subscriber is installed.
    pub fn log(&self) {
        info!("Configuration loaded successfully");
        info!("Key mode: {}", self.catalog.key_mode);
        info!("Unique names: {}", self.catalog.unique_names);
        debug!("{:#?}", self);
    }

    /// The path under which the `/videogames` resource is mounted: empty, or starting with a slash and without a
    /// trailing one.
    pub fn base_path(&self) -> String {
        let base_path = self.http.base_path.as_deref().unwrap_or_default().trim_matches('/');

        if base_path.is_empty() {
            String::new()
        } else {
            format!("/{base_path}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    fn from_yaml(yaml: &str) -> ApplicationConfiguration {
        config::Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = from_yaml("log_format: text");

        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.http, HttpConfig::default());
        assert_eq!(config.catalog, CatalogConfig::default());
        assert_eq!(config.http.address, "0.0.0.0:3033");
        assert!(config.catalog.unique_names);
        assert!(config.catalog.seed);
    }

    #[test]
    fn catalog_section_is_deserialized() {
        let config = from_yaml(
            r#"
catalog:
  key_mode: position
  unique_names: false
  seed: false
"#,
        );

        assert_eq!(config.catalog.key_mode, KeyMode::Position);
        assert!(!config.catalog.unique_names);
        assert!(!config.catalog.seed);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn base_path_drops_trailing_slash() {
        let mut config = ApplicationConfiguration::default();
        assert_eq!(config.base_path(), "");

        config.http.base_path = Some("/api/".to_string());
        assert_eq!(config.base_path(), "/api");

        config.http.base_path = Some("api/v1".to_string());
        assert_eq!(config.base_path(), "/api/v1");

        config.http.base_path = Some("/".to_string());
        assert_eq!(config.base_path(), "");
    }

    #[test]
    #[tracing_test::traced_test]
    fn log_reports_the_loaded_configuration() {
        let config = from_yaml("catalog:\n  key_mode: position");

        config.log();

        assert!(logs_contain("Configuration loaded successfully"));
        assert!(logs_contain("Key mode: position"));
        assert!(logs_contain("Unique names: true"));
        assert!(logs_contain("key_mode: Position"));
    }

    #[test]
    fn key_mode_display() {
        assert_eq!(KeyMode::Id.to_string(), "id");
        assert_eq!(KeyMode::Position.to_string(), "position");
    }
}
