//! Weekly energy/activity trend shown next to the current budget.
//!
//! The series is a fixed fixture for the session. It is not fed by the
//! recommendation engine.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const CHART_TITLE: &str = "Weekly Energy & Activity Trends";
pub const ENERGY_SERIES_LABEL: &str = "Energy Level";
pub const ACTIVITY_SERIES_LABEL: &str = "Activity Level";
pub const Y_AXIS_LABEL: &str = "Level (%)";
pub const Y_MIN: u8 = 0;
pub const Y_MAX: u8 = 100;

const BAR_WIDTH: usize = 30;

/// One day of the trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Day label (e.g. "Mon")
    pub day: String,
    /// Energy level (0-100)
    pub energy: u8,
    /// Activity level (0-100)
    pub activity: u8,
}

impl TrendPoint {
    pub fn new(day: impl Into<String>, energy: u8, activity: u8) -> Self {
        Self {
            day: day.into(),
            energy,
            activity,
        }
    }
}

/// Seven ordered trend points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendSeries {
    points: Vec<TrendPoint>,
}

impl Default for TrendSeries {
    fn default() -> Self {
        let seed = [
            ("Mon", 70, 60),
            ("Tue", 65, 75),
            ("Wed", 75, 70),
            ("Thu", 60, 80),
            ("Fri", 80, 65),
            ("Sat", 75, 85),
            ("Sun", 65, 60),
        ];
        Self {
            points: seed
                .iter()
                .map(|(day, energy, activity)| TrendPoint::new(*day, *energy, *activity))
                .collect(),
        }
    }
}

impl TrendSeries {
    pub const LEN: usize = 7;

    /// Build a series, checking its length and value ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if there are not exactly seven points or a value
    /// exceeds 100.
    pub fn new(points: Vec<TrendPoint>) -> Result<Self, ValidationError> {
        if points.len() != Self::LEN {
            return Err(ValidationError::InvalidLength {
                collection: "trend series".into(),
                expected: Self::LEN,
                actual: points.len(),
            });
        }
        for point in &points {
            for (field, value) in [("energy", point.energy), ("activity", point.activity)] {
                if value > Y_MAX {
                    return Err(ValidationError::OutOfRange {
                        field: format!("{}.{}", point.day, field),
                        value: value as i64,
                        min: Y_MIN as i64,
                        max: Y_MAX as i64,
                    });
                }
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[TrendPoint] {
        &self.points
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.day.as_str()).collect()
    }

    pub fn energy_values(&self) -> Vec<u8> {
        self.points.iter().map(|p| p.energy).collect()
    }

    pub fn activity_values(&self) -> Vec<u8> {
        self.points.iter().map(|p| p.activity).collect()
    }

    /// Mean energy across the week.
    pub fn average_energy(&self) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }
        let total: u32 = self.points.iter().map(|p| p.energy as u32).sum();
        total as f64 / self.points.len() as f64
    }

    /// Render the series as a terminal bar chart.
    pub fn render_ascii_chart(&self) -> String {
        let mut output = format!("\n{}:\n", CHART_TITLE);
        output.push_str(&"─".repeat(50));
        output.push('\n');

        for point in &self.points {
            output.push_str(&format!(
                "{:<4} E {} {:>3}%\n",
                point.day,
                Self::bar(point.energy, '█'),
                point.energy
            ));
            output.push_str(&format!(
                "{:<4} A {} {:>3}%\n",
                "",
                Self::bar(point.activity, '▒'),
                point.activity
            ));
        }

        output.push_str(&"─".repeat(50));
        output.push_str(&format!(
            "\nE {}  A {}  ({} {}-{})\n",
            ENERGY_SERIES_LABEL, ACTIVITY_SERIES_LABEL, Y_AXIS_LABEL, Y_MIN, Y_MAX
        ));
        output
    }

    fn bar(value: u8, fill: char) -> String {
        let filled = (value.min(Y_MAX) as usize * BAR_WIDTH) / Y_MAX as usize;
        let mut bar: String = std::iter::repeat(fill).take(filled).collect();
        bar.push_str(&" ".repeat(BAR_WIDTH - filled));
        bar
    }
}

impl<'de> Deserialize<'de> for TrendSeries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            points: Vec<TrendPoint>,
        }

        let raw = Raw::deserialize(deserializer)?;
        TrendSeries::new(raw.points).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fixture() {
        let series = TrendSeries::default();
        assert_eq!(series.points().len(), TrendSeries::LEN);
        assert_eq!(
            series.labels(),
            vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        );
        assert_eq!(series.energy_values(), vec![70, 65, 75, 60, 80, 75, 65]);
        assert_eq!(series.activity_values(), vec![60, 75, 70, 80, 65, 85, 60]);
    }

    #[test]
    fn test_average_energy() {
        let series = TrendSeries::default();
        // 490 / 7
        assert!((series.average_energy() - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        let err = TrendSeries::new(vec![TrendPoint::new("Mon", 50, 50)]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidLength {
                collection: "trend series".into(),
                expected: 7,
                actual: 1,
            }
        );
    }

    #[test]
    fn test_new_rejects_out_of_range_values() {
        let mut points = TrendSeries::default().points().to_vec();
        points[3].activity = 101;
        let err = TrendSeries::new(points).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { ref field, value: 101, .. } if field == "Thu.activity"));
    }

    #[test]
    fn test_render_ascii_chart() {
        let chart = TrendSeries::default().render_ascii_chart();
        assert!(chart.contains(CHART_TITLE));
        assert!(chart.contains("Fri  E"));
        assert!(chart.contains(" 80%"));
        // 7 days x 2 series
        assert_eq!(chart.lines().filter(|l| l.ends_with('%')).count(), 14);
    }

    #[test]
    fn test_deserialize_validates() {
        let json = serde_json::to_string(&TrendSeries::default()).unwrap();
        let parsed: TrendSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, TrendSeries::default());

        let short = r#"{"points": [{"day": "Mon", "energy": 1, "activity": 2}]}"#;
        assert!(serde_json::from_str::<TrendSeries>(short).is_err());
    }
}
