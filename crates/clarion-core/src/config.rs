//! Configuration types for thresholds, clarity scoring and the framework context.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Tolerance when checking that the clarity weights sum to one.
const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Complete engine configuration.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Decision thresholds
    pub thresholds: ThresholdConfig,
    /// Clarity factor weights and length thresholds
    pub scoring: ScoringConfig,
    /// Framework context resource
    pub framework: FrameworkConfig,
}

/// Decision thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Clarity below this needs clarification (0.0-1.0)
    pub clarity_threshold: f64,
    /// Maximum number of clarifying questions
    pub max_questions: usize,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            clarity_threshold: 0.6,
            max_questions: 3,
        }
    }
}

/// Clarity factor weights and length thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight of the goal factor
    pub goal_weight: f64,
    /// Weight of the context factor
    pub context_weight: f64,
    /// Weight of the format factor
    pub format_weight: f64,
    /// Weight of the criteria factor
    pub criteria_weight: f64,
    /// Weight of the technical factor
    pub technical_weight: f64,
    /// Requests longer than this many characters earn goal length credit
    pub goal_min_chars: usize,
    /// Requests with more than this many words earn context length credit
    pub context_min_words: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            goal_weight: 0.30,
            context_weight: 0.25,
            format_weight: 0.15,
            criteria_weight: 0.20,
            technical_weight: 0.10,
            goal_min_chars: 50,
            context_min_words: 20,
        }
    }
}

impl ScoringConfig {
    fn weights(&self) -> [(&'static str, f64); 5] {
        [
            ("goal_weight", self.goal_weight),
            ("context_weight", self.context_weight),
            ("format_weight", self.format_weight),
            ("criteria_weight", self.criteria_weight),
            ("technical_weight", self.technical_weight),
        ]
    }
}

/// Framework context resource configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameworkConfig {
    /// Whether the framework context is loaded at all
    pub enabled: bool,
    /// Path of the framework file (`~/.clarion/framework.md` when unset)
    pub path: Option<PathBuf>,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
        }
    }
}

impl OptimizerConfig {
    /// Get the default config directory path (`~/.clarion`)
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn config_dir() -> Result<PathBuf> {
        use dirs::home_dir;
        let home = home_dir()
            .ok_or_else(|| Error::Other("Could not determine home directory".to_owned()))?;
        Ok(home.join(".clarion"))
    }

    /// Get the default config file path (`~/.clarion/config.toml`)
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load and validate config from a specific file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or fails validation
    pub fn load_from_file(path: &Path) -> Result<Self> {
        use toml::from_str;
        let contents = fs::read_to_string(path)?;
        let config: Self = from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from `path`, or from `~/.clarion/config.toml` when `path` is `None`.
    ///
    /// Never fails: a missing file silently yields the defaults, an unreadable or
    /// invalid one is logged and also yields the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let resolved = match path {
            Some(explicit) => explicit.to_path_buf(),
            None => match Self::config_path() {
                Ok(default_path) => default_path,
                Err(error) => {
                    tracing::warn!("No config location available: {error}");
                    return Self::default();
                }
            },
        };

        match Self::load_from_file(&resolved) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", resolved.display());
                config
            }
            Err(Error::Io(error)) if error.kind() == ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", resolved.display());
                Self::default()
            }
            Err(error) if error.is_config_error() => {
                tracing::warn!("Invalid config in {}: {error}", resolved.display());
                tracing::warn!("Using default configuration");
                Self::default()
            }
            Err(error) => {
                tracing::warn!("Failed to read config from {}: {error}", resolved.display());
                tracing::warn!("Using default configuration");
                Self::default()
            }
        }
    }

    /// Save config to a specific file
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let header = "# Clarion Configuration File\n\
                      # Edit this file to tune thresholds and clarity weights\n\n";

        fs::write(path, format!("{header}{}", self.to_toml()?))?;
        Ok(())
    }

    /// Render the config as pretty TOML.
    ///
    /// # Errors
    /// Returns an error if serialization fails
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check value ranges and that the clarity weights sum to one.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] naming the first offending value
    pub fn validate(&self) -> Result<()> {
        let threshold = self.thresholds.clarity_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(Error::InvalidConfig(format!(
                "clarity_threshold must be within [0, 1], got {threshold}"
            )));
        }

        let weights = self.scoring.weights();
        if let Some((name, weight)) = weights
            .iter()
            .find(|(_, weight)| !(0.0..=1.0).contains(weight))
        {
            return Err(Error::InvalidConfig(format!(
                "{name} must be within [0, 1], got {weight}"
            )));
        }

        let sum: f64 = weights.iter().map(|(_, weight)| weight).sum();
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(Error::InvalidConfig(format!(
                "clarity weights must sum to 1.0, got {sum}"
            )));
        }

        Ok(())
    }

    /// Resolved framework context path, or `None` when the resource is disabled.
    ///
    /// A leading `~` is expanded to the home directory.
    pub fn framework_path(&self) -> Option<PathBuf> {
        if !self.framework.enabled {
            return None;
        }
        match &self.framework.path {
            Some(path) => Some(expand_home(path)),
            None => Self::config_dir()
                .ok()
                .map(|dir| dir.join("framework.md")),
        }
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest)),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = OptimizerConfig::default();
        assert!((config.thresholds.clarity_threshold - 0.6).abs() < f64::EPSILON);
        assert_eq!(config.thresholds.max_questions, 3);
        assert_eq!(config.scoring.goal_min_chars, 50);
        assert_eq!(config.scoring.context_min_words, 20);
        assert!(config.framework.enabled);
        config.validate().unwrap();
    }

    #[test]
    fn test_toml_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = OptimizerConfig::default();
        config.thresholds.max_questions = 2;
        config.framework.path = Some(PathBuf::from("/etc/clarion/framework.md"));
        config.save_to_file(&path).unwrap();

        let loaded = OptimizerConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[thresholds]\nclarity_threshold = 0.5\n").unwrap();

        let loaded = OptimizerConfig::load_from_file(&path).unwrap();
        assert!((loaded.thresholds.clarity_threshold - 0.5).abs() < f64::EPSILON);
        assert_eq!(loaded.thresholds.max_questions, 3);
        assert_eq!(loaded.scoring, ScoringConfig::default());
    }

    #[test]
    fn test_rejects_weights_not_summing_to_one() {
        let mut config = OptimizerConfig::default();
        config.scoring.goal_weight = 0.5;
        let error = config.validate().unwrap_err();
        assert!(matches!(error, Error::InvalidConfig(_)));
        assert!(error.to_string().contains("sum to 1.0"));
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        let mut config = OptimizerConfig::default();
        config.thresholds.clarity_threshold = 1.5;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let temp = TempDir::new().unwrap();
        let config = OptimizerConfig::load_or_default(Some(&temp.path().join("absent.toml")));
        assert_eq!(config, OptimizerConfig::default());
    }

    #[test]
    fn test_load_or_default_invalid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[scoring]\ngoal_weight = 0.9\n").unwrap();

        OptimizerConfig::load_from_file(&path).unwrap_err();
        let config = OptimizerConfig::load_or_default(Some(&path));
        assert_eq!(config, OptimizerConfig::default());
    }

    #[test]
    fn test_load_or_default_unreadable_path() {
        let temp = TempDir::new().unwrap();
        let error = OptimizerConfig::load_from_file(temp.path()).unwrap_err();
        assert!(!error.is_config_error());

        let config = OptimizerConfig::load_or_default(Some(temp.path()));
        assert_eq!(config, OptimizerConfig::default());
    }

    #[test]
    fn test_framework_path_resolution() {
        let mut config = OptimizerConfig::default();
        config.framework.path = Some(PathBuf::from("/opt/framework.md"));
        assert_eq!(
            config.framework_path(),
            Some(PathBuf::from("/opt/framework.md"))
        );

        config.framework.enabled = false;
        assert_eq!(config.framework_path(), None);
    }
}
