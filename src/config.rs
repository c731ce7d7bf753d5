//! Configuration handling for the storefront

use crate::state::animation::Density;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the submission endpoint
pub const SUBMIT_ENDPOINT_ENV: &str = "SILICAGEL_SUBMIT_ENDPOINT";

/// Default wait of the simulated submitter
const DEFAULT_SIMULATED_DELAY_MS: u64 = 2000;

/// User configuration, read from `config.json` in the platform config directory
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SiteConfig {
    /// URL inquiries are POSTed to; simulated submission when unset
    pub submit_endpoint: Option<String>,
    /// Delay of the simulated submitter in milliseconds
    pub simulated_delay_ms: Option<u64>,
    /// Skip the splash and animations
    pub reduced_motion: Option<bool>,
    /// Hero particle density
    pub particle_density: Option<Density>,
}

impl SiteConfig {
    pub(crate) fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "silicagelpro", "silicagel-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        Ok(config)
    }

    /// Endpoint after applying the environment override
    pub fn endpoint(&self) -> Option<String> {
        self.endpoint_with(std::env::var(SUBMIT_ENDPOINT_ENV).ok())
    }

    fn endpoint_with(&self, env_value: Option<String>) -> Option<String> {
        env_value
            .or_else(|| self.submit_endpoint.clone())
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
    }

    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(
            self.simulated_delay_ms
                .unwrap_or(DEFAULT_SIMULATED_DELAY_MS),
        )
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion.unwrap_or(false)
    }

    pub fn particle_density(&self) -> Density {
        self.particle_density.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scratch_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("silicagel-tui-{}", uuid::Uuid::new_v4()))
            .join("config.json")
    }

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert!(config.submit_endpoint.is_none());
        assert_eq!(config.simulated_delay(), Duration::from_millis(2000));
        assert!(!config.reduced_motion());
        assert_eq!(config.particle_density(), Density::Medium);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: SiteConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, SiteConfig::default());
    }

    #[test]
    fn test_deserialize_full() {
        let json = r#"{
            "submit_endpoint": "https://example.test/inquiries",
            "simulated_delay_ms": 250,
            "reduced_motion": true,
            "particle_density": "high"
        }"#;
        let parsed: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.simulated_delay(), Duration::from_millis(250));
        assert!(parsed.reduced_motion());
        assert_eq!(parsed.particle_density(), Density::High);
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        let json = r#"{"reduced_motion": true, "unknown_field": "value"}"#;
        let parsed: SiteConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.reduced_motion());
    }

    #[test]
    fn test_invalid_density_is_an_error() {
        let json = r#"{"particle_density": "extreme"}"#;
        assert!(serde_json::from_str::<SiteConfig>(json).is_err());
    }

    #[test]
    fn test_env_overrides_file_endpoint() {
        let config = SiteConfig {
            submit_endpoint: Some("https://file.test".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.endpoint_with(Some("https://env.test".to_string())),
            Some("https://env.test".to_string())
        );
        assert_eq!(
            config.endpoint_with(None),
            Some("https://file.test".to_string())
        );
    }

    #[test]
    fn test_blank_endpoint_means_simulated() {
        let config = SiteConfig {
            submit_endpoint: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.endpoint_with(None), None);
        assert_eq!(SiteConfig::default().endpoint_with(Some(String::new())), None);
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let config = SiteConfig::load_from(&scratch_path()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_written_config_loads_back() {
        let path = scratch_path();
        let config = SiteConfig {
            submit_endpoint: Some("http://localhost:8080/contact".to_string()),
            particle_density: Some(Density::Low),
            ..Default::default()
        };
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = SiteConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_load_from_corrupt_file_errors() {
        let path = scratch_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let err = SiteConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_config_path_returns_option() {
        let _path = SiteConfig::config_path();
    }
}
