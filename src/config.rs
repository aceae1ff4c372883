//! Game configuration
//!
//! Loaded from a TOML file; every field is optional and falls back to the
//! defaults below.
//!
//! ```toml
//! min_size = 2
//! max_size = 4
//! entry_low = -5
//! entry_high = 6
//! tolerance = 1e-9
//! invertible_attempts = 10
//! strict_rref = false
//! augment_columns = 1
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Smallest matrix side accepted by default
pub const DEFAULT_MIN_SIZE: usize = 2;
/// Largest matrix side accepted by default
pub const DEFAULT_MAX_SIZE: usize = 5;
/// Inclusive lower bound of random entries
pub const DEFAULT_ENTRY_LOW: i64 = -10;
/// Exclusive upper bound of random entries
pub const DEFAULT_ENTRY_HIGH: i64 = 10;
/// Draws allowed when looking for an invertible matrix
pub const DEFAULT_INVERTIBLE_ATTEMPTS: usize = 10;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read config at {}: {source}", .path.display())]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`GameConfig`]
    #[error("Failed to parse config: {source}")]
    Parse {
        /// Config file path, if loaded from a file
        path: Option<PathBuf>,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// Values parsed but are inconsistent
    #[error("Invalid config value '{field}': {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

/// Tunable rules of the game
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Smallest accepted matrix side, at least 2
    pub min_size: usize,
    /// Largest accepted matrix side, at most 5
    pub max_size: usize,
    /// Inclusive lower bound of random entries
    pub entry_low: i64,
    /// Exclusive upper bound of random entries
    pub entry_high: i64,
    /// Absolute tolerance for the reduced row-echelon check
    pub tolerance: f64,
    /// Draws allowed when looking for an invertible matrix
    pub invertible_attempts: usize,
    /// Require zero rows to come last in reduced row-echelon form
    pub strict_rref: bool,
    /// Width of the random companion block in the Gauss-Jordan level
    pub augment_columns: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            entry_low: DEFAULT_ENTRY_LOW,
            entry_high: DEFAULT_ENTRY_HIGH,
            tolerance: crate::algorithm::DEFAULT_TOLERANCE,
            invertible_attempts: DEFAULT_INVERTIBLE_ATTEMPTS,
            strict_rref: false,
            augment_columns: 1,
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig =
            toml::from_str(content).map_err(|source| ConfigError::Parse { path: None, source })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| {
            tracing::warn!("Failed to read config at {:?}: {}", path, source);
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let config: GameConfig = toml::from_str(&content).map_err(|source| {
            tracing::warn!("Failed to parse config at {:?}: {}", path, source);
            ConfigError::Parse {
                path: Some(path.to_path_buf()),
                source,
            }
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "Loaded game config");
        Ok(config)
    }

    /// Reject inconsistent values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, reason: String| Err(ConfigError::Invalid { field, reason });

        if self.min_size < DEFAULT_MIN_SIZE {
            return invalid(
                "min_size",
                format!("must be at least {DEFAULT_MIN_SIZE}, got {}", self.min_size),
            );
        }
        if self.max_size > DEFAULT_MAX_SIZE {
            return invalid(
                "max_size",
                format!("must be at most {DEFAULT_MAX_SIZE}, got {}", self.max_size),
            );
        }
        if self.min_size > self.max_size {
            return invalid(
                "max_size",
                format!("{} is smaller than min_size {}", self.max_size, self.min_size),
            );
        }
        if self.entry_low >= self.entry_high {
            return invalid(
                "entry_high",
                format!("range [{}, {}) is empty", self.entry_low, self.entry_high),
            );
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return invalid(
                "tolerance",
                format!("expected a finite non-negative value, got {}", self.tolerance),
            );
        }
        if self.invertible_attempts == 0 {
            return invalid("invertible_attempts", "must be at least 1".into());
        }
        if self.augment_columns == 0 {
            return invalid("augment_columns", "must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.min_size, 2);
        assert_eq!(config.max_size, 5);
        assert_eq!((config.entry_low, config.entry_high), (-10, 10));
        assert_eq!(config.invertible_attempts, 10);
    }

    #[test]
    fn test_parse_partial_config() {
        let config = GameConfig::from_toml_str(
            r#"
max_size = 3
strict_rref = true
tolerance = 0.0
"#,
        )
        .unwrap();
        assert_eq!(config.max_size, 3);
        assert!(config.strict_rref);
        assert_eq!(config.tolerance, 0.0);
        assert_eq!(config.min_size, 2);
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        assert!(matches!(
            GameConfig::from_toml_str("colour = \"red\""),
            Err(ConfigError::Parse { path: None, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_sizes() {
        let err = GameConfig::from_toml_str("min_size = 4\nmax_size = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "max_size", .. }));
    }

    #[test]
    fn test_validate_rejects_oversize() {
        let err = GameConfig::from_toml_str("max_size = 40").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "max_size", .. }));
        let err = GameConfig::from_toml_str("min_size = 1\nmax_size = 5").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "min_size", .. }));
        assert!(GameConfig::from_toml_str("min_size = 5\nmax_size = 5").is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_entry_range() {
        let err = GameConfig::from_toml_str("entry_low = 5\nentry_high = 5").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "entry_high", .. }));
    }

    #[test]
    fn test_validate_rejects_negative_tolerance() {
        let err = GameConfig::from_toml_str("tolerance = -1e-3").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "tolerance", .. }));
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        let err = GameConfig::from_toml_str("invertible_attempts = 0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "invertible_attempts",
                ..
            }
        ));
    }
}
