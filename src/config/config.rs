use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::splits::{MaskingOptions, MinCount};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_min_total")]
    pub min_total: u64,
    #[serde(default = "default_min_count")]
    pub min_count: u64,
    #[serde(default = "default_mask_chi")]
    pub mask_chi: f64,
    #[serde(default = "default_nthreads")]
    pub nthreads: usize,
    #[serde(default)]
    pub derive_min_count: bool,
    #[serde(default)]
    pub max_rounds: usize,
}

fn default_min_total() -> u64 {
    500
}

fn default_min_count() -> u64 {
    50
}

fn default_mask_chi() -> f64 {
    5000.0
}

fn default_nthreads() -> usize {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_total: default_min_total(),
            min_count: default_min_count(),
            mask_chi: default_mask_chi(),
            nthreads: default_nthreads(),
            derive_min_count: false,
            max_rounds: 0,
        }
    }
}

/// Values given on the command line. `None` leaves the config value alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub min_total: Option<u64>,
    pub min_count: Option<u64>,
    pub mask_chi: Option<f64>,
    pub nthreads: Option<usize>,
    pub derive_min_count: bool,
    pub max_rounds: Option<usize>,
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "spectrumsplits", "spectrum-splits")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Reads the per-user config file, falling back to defaults when it is
    /// missing or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                if let Ok(content) = fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Config::default()
    }

    /// Reads an explicitly requested config file. Any failure is an error.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::load()),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(v) = overrides.min_total {
            self.min_total = v;
        }
        if let Some(v) = overrides.min_count {
            self.min_count = v;
        }
        if let Some(v) = overrides.mask_chi {
            self.mask_chi = v;
        }
        if let Some(v) = overrides.nthreads {
            self.nthreads = v;
        }
        if overrides.derive_min_count {
            self.derive_min_count = true;
        }
        if let Some(v) = overrides.max_rounds {
            self.max_rounds = v;
        }
    }

    pub fn masking_options(&self) -> MaskingOptions {
        MaskingOptions {
            min_total: self.min_total,
            min_count: if self.derive_min_count {
                MinCount::Derived
            } else {
                MinCount::Fixed(self.min_count)
            },
            mask_chi: self.mask_chi,
            nthreads: self.nthreads,
            max_rounds: self.max_rounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_masking_options() {
        assert_eq!(Config::default().masking_options(), MaskingOptions::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str("mask_chi = 250.5\nderive_min_count = true\n").unwrap();
        assert_eq!(config.mask_chi, 250.5);
        assert!(config.derive_min_count);
        assert_eq!(config.min_total, 500);
        assert_eq!(config.nthreads, 100);
        assert_eq!(config.masking_options().min_count, MinCount::Derived);
    }

    #[test]
    fn test_overrides_win() {
        let mut config = Config {
            min_total: 10,
            ..Config::default()
        };
        config.apply(&Overrides {
            min_count: Some(3),
            nthreads: Some(8),
            ..Overrides::default()
        });
        assert_eq!(config.min_total, 10);
        assert_eq!(config.min_count, 3);
        assert_eq!(config.nthreads, 8);
        assert_eq!(config.mask_chi, 5000.0);
    }

    #[test]
    fn test_printed_config_reloads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config {
            max_rounds: 4,
            mask_chi: 12.0,
            ..Config::default()
        };
        fs::write(&path, config.to_toml().unwrap()).unwrap();
        assert_eq!(Config::from_path(&path).unwrap(), config);
        assert_eq!(Config::resolve(Some(path.as_path())).unwrap(), config);
    }

    #[test]
    fn test_explicit_path_errors_are_fatal() {
        let dir = tempdir().unwrap();
        assert!(Config::from_path(&dir.path().join("missing.toml")).is_err());

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "nthreads = \"many\"").unwrap();
        assert!(Config::from_path(&bad).is_err());
    }
}
