//! Configuration for CRM service module

use crate::domain::ResourcePaths;
use serde::Deserialize;

/// CRM service configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base path of customer resources and their URLs
    #[serde(default = "default_customers_base_path")]
    pub customers_base_path: String,

    /// Base path of vendor resources and their URLs
    #[serde(default = "default_vendors_base_path")]
    pub vendors_base_path: String,

    /// Insert reference categories, customers and vendors at startup
    #[serde(default)]
    pub load_seed_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            customers_base_path: default_customers_base_path(),
            vendors_base_path: default_vendors_base_path(),
            load_seed_data: false,
        }
    }
}

impl Config {
    /// Reject base paths that cannot be mounted as routes
    pub fn validate(&self) -> anyhow::Result<()> {
        for (key, path) in [
            ("customers_base_path", &self.customers_base_path),
            ("vendors_base_path", &self.vendors_base_path),
        ] {
            let trimmed = path.trim_end_matches('/');
            if !trimmed.starts_with('/') {
                anyhow::bail!("{key} must be an absolute path below '/', got '{path}'");
            }
            if trimmed.contains('{') || trimmed.contains('}') {
                anyhow::bail!("{key} must not contain path parameters, got '{path}'");
            }
        }
        if self.customers_base_path.trim_end_matches('/')
            == self.vendors_base_path.trim_end_matches('/')
        {
            anyhow::bail!("customers_base_path and vendors_base_path must differ");
        }
        Ok(())
    }

    pub fn resource_paths(&self) -> ResourcePaths {
        ResourcePaths {
            customers: self.customers_base_path.trim_end_matches('/').to_string(),
            vendors: self.vendors_base_path.trim_end_matches('/').to_string(),
        }
    }
}

fn default_customers_base_path() -> String {
    "/api/v1/customers".to_string()
}

fn default_vendors_base_path() -> String {
    "/api/v1/vendors".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_v1_paths() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.resource_paths(), ResourcePaths::default());
        assert!(!cfg.load_seed_data);
    }

    #[test]
    fn empty_object_uses_defaults() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.customers_base_path, "/api/v1/customers");
        assert_eq!(cfg.vendors_base_path, "/api/v1/vendors");
    }

    #[test]
    fn rejects_relative_and_root_paths() {
        let cfg = Config {
            customers_base_path: "customers".into(),
            ..Config::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = Config {
            vendors_base_path: "/".into(),
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let cfg = Config {
            vendors_base_path: "/api/v2/vendors/".into(),
            ..Config::default()
        };
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.resource_paths().vendors, "/api/v2/vendors");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<Config, _> = serde_json::from_str(r#"{"retention": 3}"#);
        assert!(result.is_err());
    }
}
