//! Plain-text rendering of session output.

use energy_budget_core::{Renderer, RecommendationSnapshot, SymptomState, TrendSeries};

/// Renderer that accumulates terminal text.
#[derive(Debug, Default)]
pub struct TextRenderer {
    pub output: String,
}

impl TextRenderer {
    /// Return the accumulated text and clear the buffer.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

impl Renderer for TextRenderer {
    fn render_trend(&mut self, trend: &TrendSeries) {
        self.output.push_str(&trend.render_ascii_chart());
    }

    fn render_snapshot(&mut self, state: &SymptomState, snapshot: &RecommendationSnapshot) {
        self.output.push_str(&format_dashboard(state, snapshot));
    }
}

/// Current energy status, symptom levels and both advice lists.
pub fn format_dashboard(state: &SymptomState, snapshot: &RecommendationSnapshot) -> String {
    let mut out = String::new();
    out.push_str("\nCurrent Energy Status\n");
    out.push_str(&"=".repeat(50));
    out.push_str(&format!("\n  Available Energy: {}%\n", snapshot.energy_budget));

    out.push_str("\nSymptoms (1-5)\n");
    for (axis, level) in state.values() {
        let (low, high) = axis.scale_labels();
        out.push_str(&format!(
            "  {:<18} {}  ({} .. {})\n",
            axis.label(),
            level,
            low,
            high
        ));
    }

    out.push_str("\nDiet Recommendations\n");
    for rec in &snapshot.diet_recommendations {
        out.push_str(&format!("  • {}\n", rec));
    }

    out.push_str("\nExercise Recommendations\n");
    for rec in &snapshot.exercise_recommendations {
        out.push_str(&format!("  • {}\n", rec));
    }
    out
}
