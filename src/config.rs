//! Engine configuration
//!
//! The difficulty level is the only knob the search exposes. Each level maps
//! to a [`SearchConfig`]; the presets can be overridden from a TOML file:
//!
//! ```toml
//! board_size = 15
//! difficulty = "advanced"
//!
//! [advanced]
//! depth = 4
//! threat_budget = 7
//! breadth = 16
//! ```

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::board::DEFAULT_SIZE;
use crate::error::ConfigError;

/// Requested playing strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Standard,
    Advanced,
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Difficulty::Standard),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(ConfigError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// Search limits for one decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    /// Minimax depth in plies
    pub depth: u8,
    /// Attacker moves the forced-win search may spend
    pub threat_budget: u8,
    /// Candidate cap per node
    pub breadth: usize,
}

impl SearchConfig {
    pub const STANDARD: SearchConfig = SearchConfig {
        depth: 2,
        threat_budget: 4,
        breadth: 12,
    };

    pub const ADVANCED: SearchConfig = SearchConfig {
        depth: 4,
        threat_budget: 7,
        breadth: 16,
    };
}

impl SearchConfig {
    /// Reject limits under which no strategy could ever propose a move
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.breadth == 0 {
            return Err(ConfigError::InvalidSearch("breadth must be at least 1"));
        }
        if self.depth == 0 {
            return Err(ConfigError::InvalidSearch("depth must be at least 1"));
        }
        Ok(())
    }
}

impl From<Difficulty> for SearchConfig {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Standard => SearchConfig::STANDARD,
            Difficulty::Advanced => SearchConfig::ADVANCED,
        }
    }
}

/// Top-level configuration, as read from `Renju.toml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub board_size: usize,
    pub difficulty: Difficulty,
    pub standard: SearchConfig,
    pub advanced: SearchConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_SIZE,
            difficulty: Difficulty::Standard,
            standard: SearchConfig::STANDARD,
            advanced: SearchConfig::ADVANCED,
        }
    }
}

impl EngineConfig {
    /// Parse configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.standard.validate()?;
        config.advanced.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Search limits for a difficulty level
    pub fn search(&self, difficulty: Difficulty) -> SearchConfig {
        match difficulty {
            Difficulty::Standard => self.standard,
            Difficulty::Advanced => self.advanced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_ordered() {
        let standard = SearchConfig::from(Difficulty::Standard);
        let advanced = SearchConfig::from(Difficulty::Advanced);
        assert!(advanced.depth > standard.depth);
        assert!(advanced.threat_budget > standard.threat_budget);
        assert_eq!(standard.threat_budget, 4);
        assert_eq!(advanced.threat_budget, 7);
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("standard".parse::<Difficulty>().ok(), Some(Difficulty::Standard));
        assert_eq!(" Advanced ".parse::<Difficulty>().ok(), Some(Difficulty::Advanced));
        assert!(matches!(
            "expert".parse::<Difficulty>(),
            Err(ConfigError::UnknownDifficulty(s)) if s == "expert"
        ));
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let text = r#"
            difficulty = "advanced"

            [advanced]
            depth = 6
            threat_budget = 5
            breadth = 10
        "#;
        let config = EngineConfig::from_toml_str(text).unwrap();
        assert_eq!(config.board_size, 15);
        assert_eq!(config.difficulty, Difficulty::Advanced);
        assert_eq!(
            config.search(Difficulty::Advanced),
            SearchConfig { depth: 6, threat_budget: 5, breadth: 10 }
        );
        assert_eq!(config.search(Difficulty::Standard), SearchConfig::STANDARD);
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = EngineConfig::from_toml_str("difficulty = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_breadth_rejected() {
        let text = "[standard]\ndepth = 2\nthreat_budget = 4\nbreadth = 0";
        let err = EngineConfig::from_toml_str(text).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSearch(_)));
    }

    #[test]
    fn test_zero_depth_rejected() {
        let text = "[advanced]\ndepth = 0\nthreat_budget = 7\nbreadth = 16";
        assert!(matches!(
            EngineConfig::from_toml_str(text),
            Err(ConfigError::InvalidSearch(_))
        ));
    }

    #[test]
    fn test_presets_validate() {
        assert!(SearchConfig::STANDARD.validate().is_ok());
        assert!(SearchConfig::ADVANCED.validate().is_ok());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = EngineConfig::load_or_default("does/not/exist/Renju.toml").unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
