//! Recommendation engine: symptom state in, energy budget and advice out.
//!
//! The budget is a linear score against a baseline of full capacity. Each
//! symptom is a weighted penalty, sleep quality a weighted bonus, and the
//! result is clamped so the budget never drops below the floor or exceeds
//! the ceiling.
//!
//! The diet and exercise lists are fixed: every snapshot carries the same
//! lists regardless of symptom severity.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::symptom::{SymptomAxis, SymptomState};

pub const DEFAULT_DIET_RECOMMENDATIONS: [&str; 3] = [
    "Increase anti-inflammatory foods",
    "Focus on protein with each meal",
    "Stay hydrated (aim for 2.5L daily)",
];

pub const DEFAULT_EXERCISE_RECOMMENDATIONS: [&str; 3] = [
    "Light walking for 10-15 minutes",
    "Gentle stretching in the morning",
    "Keep heart rate below 110 BPM",
];

/// Weights and bounds of the budget formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyFormula {
    /// Score with no symptoms at all
    #[serde(default = "default_baseline")]
    pub baseline: i64,
    /// Points subtracted per fatigue level
    #[serde(default = "default_fatigue_weight")]
    pub fatigue_weight: i64,
    /// Points subtracted per pain level
    #[serde(default = "default_pain_weight")]
    pub pain_weight: i64,
    /// Points subtracted per cognitive-issues level
    #[serde(default = "default_cognitive_weight")]
    pub cognitive_weight: i64,
    /// Points added per sleep-quality level
    #[serde(default = "default_sleep_weight")]
    pub sleep_weight: i64,
    /// Lowest budget ever reported
    #[serde(default = "default_floor")]
    pub floor: u8,
    /// Highest budget ever reported
    #[serde(default = "default_ceiling")]
    pub ceiling: u8,
}

fn default_baseline() -> i64 {
    100
}
fn default_fatigue_weight() -> i64 {
    5
}
fn default_pain_weight() -> i64 {
    3
}
fn default_cognitive_weight() -> i64 {
    4
}
fn default_sleep_weight() -> i64 {
    3
}
fn default_floor() -> u8 {
    30
}
fn default_ceiling() -> u8 {
    100
}

impl Default for EnergyFormula {
    fn default() -> Self {
        Self {
            baseline: default_baseline(),
            fatigue_weight: default_fatigue_weight(),
            pain_weight: default_pain_weight(),
            cognitive_weight: default_cognitive_weight(),
            sleep_weight: default_sleep_weight(),
            floor: default_floor(),
            ceiling: default_ceiling(),
        }
    }
}

impl EnergyFormula {
    /// Check bounds and weight signs.
    ///
    /// # Errors
    ///
    /// Returns an error if a weight is negative, a bound exceeds 100, or the
    /// floor is above the ceiling.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for axis in SymptomAxis::ALL {
            if self.weight(axis) < 0 {
                return Err(ConfigError::InvalidValue {
                    key: format!("formula.{}", Self::weight_key(axis)),
                    message: "weights must be non-negative".into(),
                });
            }
        }
        if self.ceiling > 100 {
            return Err(ConfigError::InvalidValue {
                key: "formula.ceiling".into(),
                message: format!("{} exceeds 100", self.ceiling),
            });
        }
        if self.floor > self.ceiling {
            return Err(ConfigError::InvalidValue {
                key: "formula.floor".into(),
                message: format!("floor {} is above ceiling {}", self.floor, self.ceiling),
            });
        }
        Ok(())
    }

    /// Magnitude of an axis' contribution per level.
    pub fn weight(&self, axis: SymptomAxis) -> i64 {
        match axis {
            SymptomAxis::Fatigue => self.fatigue_weight,
            SymptomAxis::Pain => self.pain_weight,
            SymptomAxis::CognitiveIssues => self.cognitive_weight,
            SymptomAxis::SleepQuality => self.sleep_weight,
        }
    }

    fn weight_key(axis: SymptomAxis) -> &'static str {
        match axis {
            SymptomAxis::Fatigue => "fatigue_weight",
            SymptomAxis::Pain => "pain_weight",
            SymptomAxis::CognitiveIssues => "cognitive_weight",
            SymptomAxis::SleepQuality => "sleep_weight",
        }
    }

    /// Unclamped score.
    pub fn raw_score(&self, state: &SymptomState) -> i64 {
        state.values().fold(self.baseline, |score, (axis, level)| {
            let contribution = self.weight(axis).saturating_mul(level.value() as i64);
            if axis.is_penalty() {
                score.saturating_sub(contribution)
            } else {
                score.saturating_add(contribution)
            }
        })
    }

    /// Score clamped to `floor..=ceiling`.
    pub fn budget(&self, state: &SymptomState) -> u8 {
        self.clamp(self.raw_score(state))
    }

    /// Saturate a raw score at the bounds. The floor wins if the bounds cross.
    pub fn clamp(&self, raw: i64) -> u8 {
        raw.min(self.ceiling as i64).max(self.floor as i64) as u8
    }
}

/// Derived output pushed to the renderer after every symptom change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSnapshot {
    /// Available capacity for the day, in percent
    pub energy_budget: u8,
    pub diet_recommendations: Vec<String>,
    pub exercise_recommendations: Vec<String>,
}

/// Pure mapping from symptom state to recommendation snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationEngine {
    formula: EnergyFormula,
    diet: Vec<String>,
    exercise: Vec<String>,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self {
            formula: EnergyFormula::default(),
            diet: DEFAULT_DIET_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect(),
            exercise: DEFAULT_EXERCISE_RECOMMENDATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl RecommendationEngine {
    /// Create an engine with a custom formula and recommendation lists.
    ///
    /// # Errors
    ///
    /// Returns an error if the formula fails validation.
    pub fn new(
        formula: EnergyFormula,
        diet: Vec<String>,
        exercise: Vec<String>,
    ) -> Result<Self, ConfigError> {
        formula.validate()?;
        Ok(Self {
            formula,
            diet,
            exercise,
        })
    }

    /// Create an engine with a custom formula and the default lists.
    ///
    /// # Errors
    ///
    /// Returns an error if the formula fails validation.
    pub fn with_formula(formula: EnergyFormula) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Self::new(formula, defaults.diet, defaults.exercise)
    }

    pub fn formula(&self) -> &EnergyFormula {
        &self.formula
    }

    /// Compute a fresh snapshot for `state`.
    pub fn compute(&self, state: &SymptomState) -> RecommendationSnapshot {
        RecommendationSnapshot {
            energy_budget: self.formula.budget(state),
            diet_recommendations: self.diet.clone(),
            exercise_recommendations: self.exercise.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(f: i64, p: i64, c: i64, s: i64) -> SymptomState {
        SymptomState::from_values(f, p, c, s).unwrap()
    }

    #[test]
    fn test_default_state_budget() {
        let engine = RecommendationEngine::default();
        // 100 - 15 - 6 - 16 + 9
        assert_eq!(engine.formula().raw_score(&SymptomState::default()), 72);
        assert_eq!(engine.compute(&SymptomState::default()).energy_budget, 72);
    }

    #[test]
    fn test_worst_state_stays_above_floor() {
        let engine = RecommendationEngine::default();
        // 100 - 25 - 15 - 20 + 3
        assert_eq!(engine.compute(&state(5, 5, 5, 1)).energy_budget, 43);
    }

    #[test]
    fn test_best_state() {
        let engine = RecommendationEngine::default();
        // 100 - 5 - 3 - 4 + 15
        assert_eq!(engine.formula().raw_score(&state(1, 1, 1, 5)), 103);
        assert_eq!(engine.compute(&state(1, 1, 1, 5)).energy_budget, 100);
    }

    #[test]
    fn test_floor_with_heavier_weights() {
        let formula = EnergyFormula {
            fatigue_weight: 10,
            pain_weight: 6,
            cognitive_weight: 8,
            ..EnergyFormula::default()
        };
        let engine = RecommendationEngine::with_formula(formula).unwrap();
        // 100 - 50 - 30 - 40 + 3 = -17
        assert_eq!(engine.compute(&state(5, 5, 5, 1)).energy_budget, 30);
    }

    #[test]
    fn test_clamp_saturates() {
        let formula = EnergyFormula::default();
        assert_eq!(formula.clamp(-500), 30);
        assert_eq!(formula.clamp(29), 30);
        assert_eq!(formula.clamp(30), 30);
        assert_eq!(formula.clamp(64), 64);
        assert_eq!(formula.clamp(100), 100);
        assert_eq!(formula.clamp(i64::MAX), 100);
    }

    #[test]
    fn test_lists_are_static() {
        let engine = RecommendationEngine::default();
        let a = engine.compute(&state(1, 1, 1, 1));
        let b = engine.compute(&state(5, 5, 5, 5));
        assert_eq!(a.diet_recommendations, b.diet_recommendations);
        assert_eq!(a.exercise_recommendations, b.exercise_recommendations);
        assert_eq!(a.diet_recommendations[2], "Stay hydrated (aim for 2.5L daily)");
        assert_eq!(a.exercise_recommendations[2], "Keep heart rate below 110 BPM");
    }

    #[test]
    fn test_validate_rejects_bad_formulas() {
        let crossed = EnergyFormula {
            floor: 80,
            ceiling: 50,
            ..EnergyFormula::default()
        };
        assert!(matches!(
            crossed.validate(),
            Err(ConfigError::InvalidValue { ref key, .. }) if key == "formula.floor"
        ));

        let negative = EnergyFormula {
            pain_weight: -1,
            ..EnergyFormula::default()
        };
        assert!(matches!(
            RecommendationEngine::with_formula(negative),
            Err(ConfigError::InvalidValue { ref key, .. }) if key == "formula.pain_weight"
        ));

        let too_high = EnergyFormula {
            ceiling: 120,
            ..EnergyFormula::default()
        };
        assert!(too_high.validate().is_err());
    }

    #[test]
    fn test_snapshot_json_uses_camel_case() {
        let snapshot = RecommendationEngine::default().compute(&SymptomState::default());
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["energyBudget"], 72);
        assert_eq!(json["dietRecommendations"].as_array().unwrap().len(), 3);
        assert_eq!(json["exerciseRecommendations"].as_array().unwrap().len(), 3);
    }
}
