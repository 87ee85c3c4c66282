//! TOML-based application configuration.
//!
//! Stores:
//! - Budget formula weights and clamp bounds
//! - Session-start symptom levels
//! - Diet and exercise recommendation lists
//!
//! Configuration is stored at `~/.config/energy-budget/config.toml`. An empty
//! file reproduces the built-in formula and lists exactly.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use super::{config_dir, data_dir};
use crate::engine::{
    EnergyFormula, RecommendationEngine, DEFAULT_DIET_RECOMMENDATIONS,
    DEFAULT_EXERCISE_RECOMMENDATIONS,
};
use crate::error::ConfigError;
use crate::symptom::SymptomState;

/// Symptom levels a new session starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_fatigue")]
    pub fatigue: i64,
    #[serde(default = "default_pain")]
    pub pain: i64,
    #[serde(default = "default_cognitive_issues")]
    pub cognitive_issues: i64,
    #[serde(default = "default_sleep_quality")]
    pub sleep_quality: i64,
}

/// Advice lists copied into every snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationsConfig {
    #[serde(default = "default_diet")]
    pub diet: Vec<String>,
    #[serde(default = "default_exercise")]
    pub exercise: Vec<String>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/energy-budget/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub formula: EnergyFormula,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub recommendations: RecommendationsConfig,
}

// Default functions
fn default_fatigue() -> i64 {
    3
}
fn default_pain() -> i64 {
    2
}
fn default_cognitive_issues() -> i64 {
    4
}
fn default_sleep_quality() -> i64 {
    3
}
fn default_diet() -> Vec<String> {
    DEFAULT_DIET_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect()
}
fn default_exercise() -> Vec<String> {
    DEFAULT_EXERCISE_RECOMMENDATIONS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            fatigue: default_fatigue(),
            pain: default_pain(),
            cognitive_issues: default_cognitive_issues(),
            sleep_quality: default_sleep_quality(),
        }
    }
}

impl Default for RecommendationsConfig {
    fn default() -> Self {
        Self {
            diet: default_diet(),
            exercise: default_exercise(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(ConfigError::UnknownKey(key.to_string()));
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

                let new_value = match existing {
                    serde_json::Value::Number(_) => {
                        let n = value
                            .trim()
                            .parse::<i64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as integer")))?;
                        serde_json::Value::Number(n.into())
                    }
                    serde_json::Value::Array(_) => {
                        // Accept either a JSON array or a '|'-separated list.
                        if value.trim_start().starts_with('[') {
                            serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                        } else {
                            serde_json::Value::Array(
                                value
                                    .split('|')
                                    .map(str::trim)
                                    .filter(|s| !s.is_empty())
                                    .map(|s| serde_json::Value::String(s.to_string()))
                                    .collect(),
                            )
                        }
                    }
                    serde_json::Value::Object(_) => return Err(invalid("not a leaf key".into())),
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }

        Err(ConfigError::UnknownKey(key.to_string()))
    }

    /// Default location of the config file. Nothing is created.
    pub fn location() -> PathBuf {
        config_dir().join("config.toml")
    }

    /// Default location of the config file, creating its directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created.
    pub fn path() -> Result<PathBuf, ConfigError> {
        data_dir()
            .map(|dir| dir.join("config.toml"))
            .map_err(|e| ConfigError::LoadFailed {
                path: PathBuf::from("~/.config/energy-budget"),
                message: e.to_string(),
            })
    }

    /// Load from the default location, writing defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            let cfg = Self::default();
            cfg.save_to(&path)?;
            Ok(cfg)
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };
        let cfg: Config = toml::from_str(&content)?;
        cfg.validate()?;
        info!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        info!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key. The config is left unchanged if the key is
    /// unknown or the result fails validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the updated config is invalid.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Check formula bounds and session-start levels.
    ///
    /// # Errors
    ///
    /// Returns the first invalid value found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.formula.validate()?;
        self.initial_state()?;
        Ok(())
    }

    /// Build the recommendation engine described by this config.
    ///
    /// # Errors
    ///
    /// Returns an error if the formula is invalid.
    pub fn engine(&self) -> Result<RecommendationEngine, ConfigError> {
        RecommendationEngine::new(
            self.formula.clone(),
            self.recommendations.diet.clone(),
            self.recommendations.exercise.clone(),
        )
    }

    /// Session-start symptom state.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured level is outside 1-5.
    pub fn initial_state(&self) -> Result<SymptomState, ConfigError> {
        let d = &self.defaults;
        SymptomState::from_values(d.fatigue, d.pain, d.cognitive_issues, d.sleep_quality).map_err(
            |e| ConfigError::InvalidValue {
                key: "defaults".into(),
                message: e.to_string(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
        assert_eq!(parsed.formula.floor, 30);
        assert_eq!(parsed.defaults.cognitive_issues, 4);
    }

    #[test]
    fn empty_file_yields_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let parsed: Config = toml::from_str("[formula]\nfloor = 20\n").unwrap();
        assert_eq!(parsed.formula.floor, 20);
        assert_eq!(parsed.formula.fatigue_weight, 5);
        assert_eq!(parsed.recommendations.diet.len(), 3);
    }

    #[test]
    fn get_by_dotted_key() {
        let cfg = Config::default();
        assert_eq!(cfg.get("formula.baseline").as_deref(), Some("100"));
        assert_eq!(cfg.get("defaults.pain").as_deref(), Some("2"));
        assert!(cfg.get("formula.nope").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn set_updates_value() {
        let mut cfg = Config::default();
        cfg.set("formula.floor", "25").unwrap();
        assert_eq!(cfg.formula.floor, 25);

        cfg.set("recommendations.diet", "Eat greens | Drink water").unwrap();
        assert_eq!(cfg.recommendations.diet, vec!["Eat greens", "Drink water"]);

        cfg.set("recommendations.exercise", r#"["Rest"]"#).unwrap();
        assert_eq!(cfg.recommendations.exercise, vec!["Rest"]);
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("formula.bogus", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(cfg.set("", "1"), Err(ConfigError::UnknownKey(_))));
    }

    #[test]
    fn set_rejects_invalid_values_and_keeps_config() {
        let mut cfg = Config::default();
        assert!(cfg.set("formula.floor", "abc").is_err());
        assert!(cfg.set("formula.floor", "300").is_err());
        assert!(cfg.set("formula.floor", "101").is_err());
        assert!(cfg.set("defaults.fatigue", "0").is_err());
        assert!(cfg.set("formula.fatigue_weight", "-2").is_err());
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn location_is_inside_config_dir() {
        let location = Config::location();
        assert!(location.ends_with("config.toml"));
        assert_eq!(location.parent(), Some(config_dir().as_path()));
    }

    #[test]
    fn engine_and_state_from_config() {
        let cfg = Config::default();
        let engine = cfg.engine().unwrap();
        let state = cfg.initial_state().unwrap();
        assert_eq!(state, SymptomState::default());
        assert_eq!(engine, RecommendationEngine::default());
    }
}
