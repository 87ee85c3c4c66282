//! Property tests for the budget formula.

use energy_budget_core::{RecommendationEngine, SymptomAxis, SymptomLevel, SymptomState};
use proptest::prelude::*;

fn level() -> impl Strategy<Value = SymptomLevel> {
    (1i64..=5).prop_map(|v| SymptomLevel::new(v).unwrap())
}

fn state() -> impl Strategy<Value = SymptomState> {
    (level(), level(), level(), level()).prop_map(|(f, p, c, s)| SymptomState {
        fatigue: f,
        pain: p,
        cognitive_issues: c,
        sleep_quality: s,
    })
}

fn axis() -> impl Strategy<Value = SymptomAxis> {
    prop::sample::select(SymptomAxis::ALL.to_vec())
}

proptest! {
    #[test]
    fn budget_stays_within_bounds(state in state()) {
        let snapshot = RecommendationEngine::default().compute(&state);
        prop_assert!((30..=100).contains(&snapshot.energy_budget));
    }

    #[test]
    fn compute_is_deterministic(state in state()) {
        let engine = RecommendationEngine::default();
        prop_assert_eq!(engine.compute(&state), engine.compute(&state));
    }

    #[test]
    fn raising_a_level_moves_raw_score_in_one_direction(state in state(), axis in axis()) {
        let current = state.get(axis).value() as i64;
        prop_assume!(current < 5);

        let formula = RecommendationEngine::default().formula().clone();
        let raised = state.with(axis, SymptomLevel::new(current + 1).unwrap());
        let before = formula.raw_score(&state);
        let after = formula.raw_score(&raised);

        if axis.is_penalty() {
            prop_assert!(after <= before);
        } else {
            prop_assert!(after >= before);
        }
    }

    #[test]
    fn advice_lists_never_vary(state in state()) {
        let engine = RecommendationEngine::default();
        let baseline = engine.compute(&SymptomState::default());
        let snapshot = engine.compute(&state);
        prop_assert_eq!(snapshot.diet_recommendations, baseline.diet_recommendations);
        prop_assert_eq!(snapshot.exercise_recommendations, baseline.exercise_recommendations);
    }
}

#[test]
fn test_exhaustive_range_check() {
    let engine = RecommendationEngine::default();
    let mut min_seen = u8::MAX;
    let mut max_seen = u8::MIN;

    for f in SymptomLevel::all() {
        for p in SymptomLevel::all() {
            for c in SymptomLevel::all() {
                for s in SymptomLevel::all() {
                    let state = SymptomState {
                        fatigue: f,
                        pain: p,
                        cognitive_issues: c,
                        sleep_quality: s,
                    };
                    let budget = engine.compute(&state).energy_budget;
                    min_seen = min_seen.min(budget);
                    max_seen = max_seen.max(budget);
                }
            }
        }
    }

    // Worst case 5/5/5/1 scores 43, best case is clamped from 103.
    assert_eq!(min_seen, 43);
    assert_eq!(max_seen, 100);
}
