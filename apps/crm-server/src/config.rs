//! Server configuration: optional YAML file overlaid by `CRM__` environment variables

use figment::{
    providers::{Env, Format, Yaml},
    Figment,
};
use serde::Deserialize;
use std::path::Path;

/// Environment variable prefix; nested keys are separated by `__`,
/// e.g. `CRM__DATABASE__URL` or `CRM__CRM_SERVICE__LOAD_SEED_DATA`
pub const ENV_PREFIX: &str = "CRM__";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub crm_service: crm_service::Config,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// SeaORM connection URL (`sqlite:...` or `postgres://...`)
    #[serde(default = "default_database_url")]
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseConfig {
    /// In-memory SQLite lives in a single connection
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional YAML file and the environment.
    ///
    /// A file that was named explicitly must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            if !path.is_file() {
                return Err(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_without_sources() {
        Jail::expect_with(|_jail| {
            let cfg = AppConfig::load(None)?;
            assert_eq!(cfg.server.bind_addr, "127.0.0.1:8080");
            assert!(cfg.database.is_in_memory());
            assert_eq!(cfg.logging.format, LogFormat::Text);
            assert_eq!(cfg.crm_service.customers_base_path, "/api/v1/customers");
            Ok(())
        });
    }

    #[test]
    fn yaml_file_is_read() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "crm.yaml",
                r#"
server:
  bind_addr: "0.0.0.0:9000"
database:
  url: "sqlite://crm.db?mode=rwc"
logging:
  format: json
crm_service:
  load_seed_data: true
"#,
            )?;

            let cfg = AppConfig::load(Some(Path::new("crm.yaml")))?;
            assert_eq!(cfg.server.bind_addr, "0.0.0.0:9000");
            assert!(!cfg.database.is_in_memory());
            assert_eq!(cfg.database.max_connections, 5);
            assert_eq!(cfg.logging.format, LogFormat::Json);
            assert!(cfg.crm_service.load_seed_data);
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("crm.yaml", "server:\n  bind_addr: \"0.0.0.0:9000\"\n")?;
            jail.set_env("CRM__SERVER__BIND_ADDR", "127.0.0.1:7000");
            jail.set_env("CRM__CRM_SERVICE__VENDORS_BASE_PATH", "/api/v2/vendors");

            let cfg = AppConfig::load(Some(Path::new("crm.yaml")))?;
            assert_eq!(cfg.server.bind_addr, "127.0.0.1:7000");
            assert_eq!(cfg.crm_service.vendors_base_path, "/api/v2/vendors");
            Ok(())
        });
    }

    #[test]
    fn missing_config_file_is_an_error() {
        Jail::expect_with(|_jail| {
            let err = AppConfig::load(Some(Path::new("typo.yaml"))).unwrap_err();
            assert!(err.to_string().contains("config file not found: typo.yaml"));
            Ok(())
        });
    }

    #[test]
    fn unknown_keys_are_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("crm.yaml", "server:\n  port: 80\n")?;
            assert!(AppConfig::load(Some(Path::new("crm.yaml"))).is_err());
            Ok(())
        });
    }
}
