//! Symptom axes, validated levels, and the per-session symptom state.
//!
//! Levels come from 1-5 sliders. Raw input is parsed and range-checked here,
//! so everything downstream works with values that are already in range.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InvalidSymptomInput;

/// One of the four tracked subjective measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SymptomAxis {
    Fatigue,
    Pain,
    CognitiveIssues,
    SleepQuality,
}

impl SymptomAxis {
    /// All axes in display order.
    pub const ALL: [SymptomAxis; 4] = [
        SymptomAxis::Fatigue,
        SymptomAxis::Pain,
        SymptomAxis::CognitiveIssues,
        SymptomAxis::SleepQuality,
    ];

    /// Wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SymptomAxis::Fatigue => "fatigue",
            SymptomAxis::Pain => "pain",
            SymptomAxis::CognitiveIssues => "cognitiveIssues",
            SymptomAxis::SleepQuality => "sleepQuality",
        }
    }

    /// Human-readable slider label.
    pub fn label(&self) -> &'static str {
        match self {
            SymptomAxis::Fatigue => "Fatigue Level",
            SymptomAxis::Pain => "Pain Level",
            SymptomAxis::CognitiveIssues => "Cognitive Issues",
            SymptomAxis::SleepQuality => "Sleep Quality",
        }
    }

    /// Descriptions of the low (1) and high (5) ends of the slider.
    pub fn scale_labels(&self) -> (&'static str, &'static str) {
        match self {
            SymptomAxis::Fatigue => ("Mild", "Severe"),
            SymptomAxis::Pain => ("None", "Severe"),
            SymptomAxis::CognitiveIssues => ("Clear", "Foggy"),
            SymptomAxis::SleepQuality => ("Poor", "Great"),
        }
    }

    /// Whether a higher level lowers the energy budget.
    pub fn is_penalty(&self) -> bool {
        !matches!(self, SymptomAxis::SleepQuality)
    }
}

impl fmt::Display for SymptomAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymptomAxis {
    type Err = InvalidSymptomInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept camelCase, snake_case and kebab-case spellings.
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "fatigue" => Ok(SymptomAxis::Fatigue),
            "pain" => Ok(SymptomAxis::Pain),
            "cognitiveissues" => Ok(SymptomAxis::CognitiveIssues),
            "sleepquality" => Ok(SymptomAxis::SleepQuality),
            _ => Err(InvalidSymptomInput::UnknownAxis(s.trim().to_string())),
        }
    }
}

/// A symptom level guaranteed to be within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct SymptomLevel(u8);

impl SymptomLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Validate a level.
    pub fn new(value: i64) -> Result<Self, InvalidSymptomInput> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(InvalidSymptomInput::OutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Every valid level, lowest first.
    pub fn all() -> impl Iterator<Item = SymptomLevel> {
        (Self::MIN..=Self::MAX).map(SymptomLevel)
    }
}

impl TryFrom<i64> for SymptomLevel {
    type Error = InvalidSymptomInput;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SymptomLevel> for u8 {
    fn from(level: SymptomLevel) -> Self {
        level.0
    }
}

impl FromStr for SymptomLevel {
    type Err = InvalidSymptomInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| InvalidSymptomInput::NotANumber { raw: s.to_string() })?;
        Self::new(value)
    }
}

impl fmt::Display for SymptomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Current level of every symptom axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomState {
    pub fatigue: SymptomLevel,
    pub pain: SymptomLevel,
    pub cognitive_issues: SymptomLevel,
    pub sleep_quality: SymptomLevel,
}

impl Default for SymptomState {
    /// Session-start snapshot.
    fn default() -> Self {
        Self {
            fatigue: SymptomLevel(3),
            pain: SymptomLevel(2),
            cognitive_issues: SymptomLevel(4),
            sleep_quality: SymptomLevel(3),
        }
    }
}

impl SymptomState {
    /// Build a state from raw integers, validating each one.
    pub fn from_values(
        fatigue: i64,
        pain: i64,
        cognitive_issues: i64,
        sleep_quality: i64,
    ) -> Result<Self, InvalidSymptomInput> {
        Ok(Self {
            fatigue: SymptomLevel::new(fatigue)?,
            pain: SymptomLevel::new(pain)?,
            cognitive_issues: SymptomLevel::new(cognitive_issues)?,
            sleep_quality: SymptomLevel::new(sleep_quality)?,
        })
    }

    pub fn get(&self, axis: SymptomAxis) -> SymptomLevel {
        match axis {
            SymptomAxis::Fatigue => self.fatigue,
            SymptomAxis::Pain => self.pain,
            SymptomAxis::CognitiveIssues => self.cognitive_issues,
            SymptomAxis::SleepQuality => self.sleep_quality,
        }
    }

    /// Return a copy with exactly one axis replaced.
    #[must_use]
    pub fn with(mut self, axis: SymptomAxis, level: SymptomLevel) -> Self {
        match axis {
            SymptomAxis::Fatigue => self.fatigue = level,
            SymptomAxis::Pain => self.pain = level,
            SymptomAxis::CognitiveIssues => self.cognitive_issues = level,
            SymptomAxis::SleepQuality => self.sleep_quality = level,
        }
        self
    }

    /// `(axis, level)` pairs in display order.
    pub fn values(&self) -> impl Iterator<Item = (SymptomAxis, SymptomLevel)> + '_ {
        SymptomAxis::ALL.into_iter().map(move |axis| (axis, self.get(axis)))
    }
}
