mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use defaults::*;
use std::path::Path;

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            provider: Provider::default(),
            providers: ProvidersConfig::default(),
            timeout_sec: default_timeout_sec(),
            output_dir: default_output_dir(),
            max_trip_styles: default_max_trip_styles(),
            search: SearchConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from a YAML file, falling back to defaults when absent
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("Config {:?} not found, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_trip_styles == 0 {
            return Err(ConfigError::ZeroStyleLimit);
        }
        if self.timeout_sec == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.search.max_results == 0 {
            return Err(ConfigError::ZeroSearchResults);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_trip_styles, 3);
        assert_eq!(config.search.max_results, 8);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("provider: codex_cli\ntimeout_sec: 60\n").unwrap();
        assert_eq!(config.provider, Provider::CodexCli);
        assert_eq!(config.timeout_sec, 60);
        assert_eq!(config.max_trip_styles, 3);
        assert_eq!(config.search.min_query_len, 2);
    }

    #[test]
    fn test_zero_style_limit_rejected() {
        let config: Config = serde_yaml::from_str("max_trip_styles: 0\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroStyleLimit)
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config.version, 1);
    }
}
