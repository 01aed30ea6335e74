//! Optional file-based configuration.
//!
//! A TOML file (plus `TANKWATCH_*` environment variables) can shape the
//! fleet, the sampling intervals, and the per-metric ideal ranges. Every
//! field is optional; command-line flags take precedence over file values.
//!
//! ```toml
//! grower_tanks = 6
//! nursery_tanks = 2
//! sample_interval_secs = 30
//!
//! [ideal]
//! temperature = [27.0, 30.0]
//! ph = [6.8, 7.8]
//! ```

use std::path::Path;

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::core::IdealRanges;

/// Farm configuration as loaded from disk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FarmConfig {
    pub grower_tanks: Option<usize>,
    pub nursery_tanks: Option<usize>,
    pub sample_interval_secs: Option<u64>,
    pub refresh_secs: Option<u64>,
    pub window: Option<usize>,
    pub ideal: Option<IdealConfig>,
}

/// Per-metric `[low, high]` overrides for the ideal ranges.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdealConfig {
    pub temperature: Option<(f64, f64)>,
    pub ph: Option<(f64, f64)>,
    pub dissolved_oxygen: Option<(f64, f64)>,
}

impl FarmConfig {
    /// Load from a TOML file, with `TANKWATCH_*` environment overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from(path))
            .add_source(Environment::with_prefix("TANKWATCH"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// The ideal ranges with any configured overrides applied.
    pub fn ideal_ranges(&self) -> IdealRanges {
        let mut ranges = IdealRanges::default();
        if let Some(ideal) = &self.ideal {
            if let Some(r) = ideal.temperature {
                ranges.temperature = r;
            }
            if let Some(r) = ideal.ph {
                ranges.ph = r;
            }
            if let Some(r) = ideal.dissolved_oxygen {
                ranges.dissolved_oxygen = r;
            }
        }
        ranges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("farm.toml");
        fs::write(
            &path,
            r#"
grower_tanks = 6
nursery_tanks = 2
sample_interval_secs = 30

[ideal]
temperature = [27.0, 30.0]
"#,
        )
        .unwrap();

        let cfg = FarmConfig::load(&path).unwrap();
        assert_eq!(cfg.grower_tanks, Some(6));
        assert_eq!(cfg.nursery_tanks, Some(2));
        assert_eq!(cfg.sample_interval_secs, Some(30));
        assert_eq!(cfg.refresh_secs, None);

        let ranges = cfg.ideal_ranges();
        assert_eq!(ranges.temperature, (27.0, 30.0));
        // Unset metrics keep their defaults
        assert_eq!(ranges.ph, (7.0, 8.0));
    }

    #[test]
    fn test_default_config_uses_default_ranges() {
        let cfg = FarmConfig::default();
        assert_eq!(cfg.ideal_ranges(), IdealRanges::default());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(FarmConfig::load(Path::new("/nonexistent/farm.toml")).is_err());
    }
}
