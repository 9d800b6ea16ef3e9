//! Animation configuration management.
//!
//! Loads run parameters from a TOML file (falling back to built-in defaults
//! when the file is absent) with `PI_ANIM_*` environment overrides.
//!
//! ```toml
//! pi_reference = 3.1415926535
//! seed = 42
//! log_level = "info"
//!
//! [pseudo]
//! n_points = 20000
//! points_per_frame = 20
//!
//! [quasi]
//! n_points = 16384
//! points_per_frame = 16
//! sobol_order = "reverse"
//! ```

use pi_core::{PiResult, PI_REFERENCE};
use pi_engine::config::SimulationConfig;
use pi_engine::source::{SampleRegion, SobolOrder};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Parameters of one run mode.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Points per source
    pub n_points: usize,
    /// Points added per frame
    pub points_per_frame: usize,
    /// Quasirandom consumption order
    #[serde(default)]
    pub sobol_order: SobolOrder,
}

impl RunConfig {
    fn pseudo_default() -> Self {
        Self {
            n_points: 20_000,
            points_per_frame: 20,
            sobol_order: SobolOrder::Reverse,
        }
    }

    fn quasi_default() -> Self {
        Self {
            n_points: 1 << 14,
            points_per_frame: 1 << 4,
            sobol_order: SobolOrder::Reverse,
        }
    }
}

/// Animation configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AnimationConfig {
    /// Reference value of π for error reporting
    #[serde(default = "default_pi_reference")]
    pub pi_reference: f64,

    /// Seed for the pseudorandom source; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Pseudorandom-only run
    #[serde(default = "RunConfig::pseudo_default")]
    pub pseudo: RunConfig,

    /// Quasirandom-only run
    #[serde(default = "RunConfig::quasi_default")]
    pub quasi: RunConfig,

    /// Side-by-side comparison run
    #[serde(default = "RunConfig::quasi_default")]
    pub compare: RunConfig,
}

fn default_pi_reference() -> f64 {
    PI_REFERENCE
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            pi_reference: default_pi_reference(),
            seed: None,
            log_level: default_log_level(),
            pseudo: RunConfig::pseudo_default(),
            quasi: RunConfig::quasi_default(),
            compare: RunConfig::quasi_default(),
        }
    }
}

impl AnimationConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load `path` if it exists, otherwise use defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming every variable whose value
    /// cannot be parsed.
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up by environment variable name
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut errors = Vec::new();

        if let Some(seed) = lookup("PI_ANIM_SEED") {
            match seed.trim().parse() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => errors.push(format!(
                    "PI_ANIM_SEED '{}' is not an unsigned 64-bit integer",
                    seed
                )),
            }
        }

        if let Some(reference) = lookup("PI_ANIM_PI_REFERENCE") {
            match reference.trim().parse() {
                Ok(reference) => self.pi_reference = reference,
                Err(_) => errors.push(format!(
                    "PI_ANIM_PI_REFERENCE '{}' is not a number",
                    reference
                )),
            }
        }

        if let Some(log_level) = lookup("PI_ANIM_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if !self.pi_reference.is_finite() || self.pi_reference <= 0.0 {
            errors.push(format!(
                "pi_reference {} must be finite and positive",
                self.pi_reference
            ));
        }

        for (name, run) in [
            ("pseudo", &self.pseudo),
            ("quasi", &self.quasi),
            ("compare", &self.compare),
        ] {
            if run.n_points == 0 {
                errors.push(format!("{}.n_points must be greater than 0", name));
            }
            if run.points_per_frame == 0 {
                errors.push(format!("{}.points_per_frame must be greater than 0", name));
            } else if run.n_points % run.points_per_frame != 0 {
                errors.push(format!(
                    "{}.points_per_frame {} does not divide n_points {}",
                    name, run.points_per_frame, run.n_points
                ));
            }
        }

        for (name, run) in [("quasi", &self.quasi), ("compare", &self.compare)] {
            if run.n_points != 0 && !run.n_points.is_power_of_two() {
                errors.push(format!(
                    "{}.n_points {} must be a power of two",
                    name, run.n_points
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Engine configuration for `run`, with optional command-line overrides
    pub fn simulation(
        &self,
        run: RunConfig,
        pseudo_region: SampleRegion,
        overrides: &RunOverrides,
    ) -> PiResult<SimulationConfig> {
        SimulationConfig::builder()
            .pseudo_region(pseudo_region)
            .n_points(overrides.n_points.unwrap_or(run.n_points))
            .points_per_frame(overrides.points_per_frame.unwrap_or(run.points_per_frame))
            .maybe_seed(overrides.seed.or(self.seed))
            .pi_reference(self.pi_reference)
            .sobol_order(overrides.sobol_order.unwrap_or(run.sobol_order))
            .build()
    }
}

/// Command-line values that take precedence over the file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOverrides {
    /// Points per source
    pub n_points: Option<usize>,
    /// Points added per frame
    pub points_per_frame: Option<usize>,
    /// Pseudorandom seed
    pub seed: Option<u64>,
    /// Quasirandom consumption order
    pub sobol_order: Option<SobolOrder>,
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_validates() {
        let config = AnimationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pseudo.n_points, 20_000);
        assert_eq!(config.quasi.n_points, 16_384);
        assert_eq!(config.pi_reference, PI_REFERENCE);
    }

    #[test]
    fn test_parse_partial_file() {
        let config = AnimationConfig::parse(
            r#"
            seed = 7

            [quasi]
            n_points = 1024
            points_per_frame = 8
            sobol_order = "forward"
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.quasi.n_points, 1024);
        assert_eq!(config.quasi.sobol_order, SobolOrder::Forward);
        assert_eq!(config.pseudo, RunConfig::pseudo_default());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let result = AnimationConfig::parse("points = 10");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"").unwrap();

        let config = AnimationConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AnimationConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AnimationConfig::default());
        assert!(matches!(
            AnimationConfig::load(&dir.path().join("absent.toml")),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("PI_ANIM_SEED", "99");
        let config = AnimationConfig::default().with_env_override().unwrap();
        assert_eq!(config.seed, Some(99));
        std::env::remove_var("PI_ANIM_SEED");
    }

    #[test]
    fn test_overrides_apply_values() {
        let config = AnimationConfig::default()
            .with_overrides_from(|key| match key {
                "PI_ANIM_SEED" => Some(" 12 ".to_string()),
                "PI_ANIM_PI_REFERENCE" => Some("2.5".to_string()),
                "PI_ANIM_LOG_LEVEL" => Some("warn".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.seed, Some(12));
        assert_eq!(config.pi_reference, 2.5);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_unparsable_overrides_are_rejected() {
        let result = AnimationConfig::default().with_overrides_from(|key| match key {
            "PI_ANIM_SEED" => Some("not-a-number".to_string()),
            "PI_ANIM_PI_REFERENCE" => Some("pi".to_string()),
            _ => None,
        });

        match result {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors[0].contains("PI_ANIM_SEED 'not-a-number'"));
                assert!(errors[1].contains("PI_ANIM_PI_REFERENCE 'pi'"));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_collects_errors() {
        let mut config = AnimationConfig::default();
        config.log_level = "loud".to_string();
        config.quasi.n_points = 20_000;
        config.quasi.points_per_frame = 20;
        config.pseudo.points_per_frame = 0;

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.iter().any(|e| e.contains("log_level")));
                assert!(errors.iter().any(|e| e.contains("quasi.n_points")));
                assert!(errors.iter().any(|e| e.contains("pseudo.points_per_frame")));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_simulation_applies_overrides() {
        let config = AnimationConfig {
            seed: Some(1),
            ..AnimationConfig::default()
        };
        let overrides = RunOverrides {
            n_points: Some(256),
            points_per_frame: Some(32),
            seed: None,
            sobol_order: Some(SobolOrder::Forward),
        };

        let sim = config.simulation(config.quasi, SampleRegion::UnitQuadrant, &overrides).unwrap();
        assert_eq!(sim.n_points(), 256);
        assert_eq!(sim.frame_count(), 8);
        assert_eq!(sim.seed(), Some(1));
        assert_eq!(sim.sobol_order(), SobolOrder::Forward);

        assert_eq!(sim.pseudo_region(), SampleRegion::UnitQuadrant);

        let sim = config
            .simulation(config.pseudo, SampleRegion::SignedSquare, &RunOverrides::default())
            .unwrap();
        assert_eq!(sim.n_points(), 20_000);
        assert_eq!(sim.frame_count(), 1_000);
    }
}
