use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Hard ceiling on the scan radius, regardless of configuration.
pub const RADIUS_CEILING: i32 = 40;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillConfig {
    pub default_radius: i32,
    pub max_radius: i32,
    pub cooldown_secs: u64,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            default_radius: 5,
            max_radius: RADIUS_CEILING,
            cooldown_secs: 5,
        }
    }
}

impl FillConfig {
    /// Loads the config from a TOML file, writing the defaults back when the
    /// file does not exist yet.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(path, content).context("Failed to write default config")?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config.normalized())
    }

    /// Clamps configured values into the supported range.
    pub fn normalized(mut self) -> Self {
        self.max_radius = self.max_radius.clamp(0, RADIUS_CEILING);
        self.default_radius = self.default_radius.clamp(0, self.max_radius);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FillConfig::default();
        assert_eq!(config.default_radius, 5);
        assert_eq!(config.max_radius, 40);
        assert_eq!(config.cooldown_secs, 5);
    }

    #[test]
    fn test_normalized_clamps_out_of_range_values() {
        let config = FillConfig {
            default_radius: 100,
            max_radius: 500,
            cooldown_secs: 5,
        }
        .normalized();
        assert_eq!(config.max_radius, RADIUS_CEILING);
        assert_eq!(config.default_radius, RADIUS_CEILING);

        let config = FillConfig {
            default_radius: -3,
            max_radius: 10,
            cooldown_secs: 5,
        }
        .normalized();
        assert_eq!(config.default_radius, 0);
        assert_eq!(config.max_radius, 10);
    }

    #[test]
    fn test_load_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dispenserfill.toml");

        let config = FillConfig::load(&path).unwrap();
        assert_eq!(config.default_radius, 5);
        assert!(path.exists());

        // Second load reads the file written above.
        let reloaded = FillConfig::load(&path).unwrap();
        assert_eq!(reloaded.max_radius, config.max_radius);
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dispenserfill.toml");
        std::fs::write(&path, "default_radius = \"not a number\"").unwrap();

        assert!(FillConfig::load(&path).is_err());
    }
}
