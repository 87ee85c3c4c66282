use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::RecommendationSnapshot;
use crate::symptom::{SymptomAxis, SymptomLevel, SymptomState};

/// Every state change in a session produces an Event.
/// Renderers receive them; the CLI prints them in JSON mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SessionStarted {
        state: SymptomState,
        snapshot: RecommendationSnapshot,
        at: DateTime<Utc>,
    },
    /// A symptom report was accepted and the budget recomputed.
    SymptomReported {
        axis: SymptomAxis,
        previous: SymptomLevel,
        level: SymptomLevel,
        state: SymptomState,
        snapshot: RecommendationSnapshot,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn at(&self) -> DateTime<Utc> {
        match self {
            Event::SessionStarted { at, .. } | Event::SymptomReported { at, .. } => *at,
        }
    }

    /// Snapshot carried by the event.
    pub fn snapshot(&self) -> &RecommendationSnapshot {
        match self {
            Event::SessionStarted { snapshot, .. } | Event::SymptomReported { snapshot, .. } => {
                snapshot
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RecommendationEngine;

    #[test]
    fn test_event_json_is_tagged() {
        let state = SymptomState::default();
        let event = Event::SessionStarted {
            state,
            snapshot: RecommendationEngine::default().compute(&state),
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "SessionStarted");
        assert_eq!(json["snapshot"]["energyBudget"], 72);

        let back: Event = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
