//! One-shot budget computation from command-line symptom levels.

use clap::Args;
use serde::Serialize;
use tracing::debug;

use energy_budget_core::{
    NullRenderer, RecommendationSnapshot, Renderer, SymptomAxis, SymptomState,
};

use super::configured_session;
use crate::render::TextRenderer;

#[derive(Args)]
pub struct BudgetArgs {
    /// Fatigue level (1-5, mild to severe)
    #[arg(long)]
    fatigue: Option<String>,
    /// Pain level (1-5, none to severe)
    #[arg(long)]
    pain: Option<String>,
    /// Cognitive issues (1-5, clear to foggy)
    #[arg(long)]
    cognitive_issues: Option<String>,
    /// Sleep quality (1-5, poor to great)
    #[arg(long)]
    sleep_quality: Option<String>,
    /// Print JSON instead of the dashboard
    #[arg(long)]
    json: bool,
}

impl BudgetArgs {
    /// Reported values in axis order, skipping axes not given.
    fn reports(&self) -> Vec<(SymptomAxis, &str)> {
        [
            (SymptomAxis::Fatigue, &self.fatigue),
            (SymptomAxis::Pain, &self.pain),
            (SymptomAxis::CognitiveIssues, &self.cognitive_issues),
            (SymptomAxis::SleepQuality, &self.sleep_quality),
        ]
        .into_iter()
        .filter_map(|(axis, raw)| raw.as_deref().map(|raw| (axis, raw)))
        .collect()
    }
}

#[derive(Serialize)]
struct BudgetOutput<'a> {
    state: &'a SymptomState,
    snapshot: &'a RecommendationSnapshot,
}

pub fn run(args: BudgetArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = configured_session()?;

    let reports = args.reports();
    debug!(count = reports.len(), "applying symptom reports");
    for (axis, raw) in reports {
        session.report_symptom(axis, raw, &mut NullRenderer)?;
    }

    if args.json {
        let output = BudgetOutput {
            state: session.state(),
            snapshot: session.snapshot(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let mut renderer = TextRenderer::default();
        renderer.render_snapshot(session.state(), session.snapshot());
        println!("{}", renderer.take());
    }
    Ok(())
}
