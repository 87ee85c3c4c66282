//! Session-scoped state container.
//!
//! A [`Session`] owns the current symptom state, the snapshot derived from
//! it, and the trend fixture. Updates are applied to the state first and the
//! snapshot is then recomputed from the new state, so the snapshot always
//! describes the state it sits next to.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::engine::{RecommendationEngine, RecommendationSnapshot};
use crate::error::{InvalidSymptomInput, Result};
use crate::events::Event;
use crate::storage::Config;
use crate::symptom::{SymptomAxis, SymptomLevel, SymptomState};
use crate::trend::TrendSeries;

/// Receives everything a session publishes.
pub trait Renderer {
    /// Called once when the session starts.
    fn render_trend(&mut self, trend: &TrendSeries);

    /// Called with the new state and snapshot after every accepted update.
    fn render_snapshot(&mut self, state: &SymptomState, snapshot: &RecommendationSnapshot);
}

/// Renderer that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render_trend(&mut self, _trend: &TrendSeries) {}

    fn render_snapshot(&mut self, _state: &SymptomState, _snapshot: &RecommendationSnapshot) {}
}

/// Renderer that keeps what it was given, in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    pub trends: Vec<TrendSeries>,
    pub snapshots: Vec<(SymptomState, RecommendationSnapshot)>,
}

impl Renderer for RecordingRenderer {
    fn render_trend(&mut self, trend: &TrendSeries) {
        self.trends.push(trend.clone());
    }

    fn render_snapshot(&mut self, state: &SymptomState, snapshot: &RecommendationSnapshot) {
        self.snapshots.push((*state, snapshot.clone()));
    }
}

/// Apply one update to a state and derive the matching snapshot.
pub fn apply_update(
    state: &SymptomState,
    axis: SymptomAxis,
    level: SymptomLevel,
    engine: &RecommendationEngine,
) -> (SymptomState, RecommendationSnapshot) {
    let next = state.with(axis, level);
    let snapshot = engine.compute(&next);
    (next, snapshot)
}

/// One interactive session.
#[derive(Debug, Clone)]
pub struct Session {
    engine: RecommendationEngine,
    state: SymptomState,
    snapshot: RecommendationSnapshot,
    trend: TrendSeries,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(RecommendationEngine::default(), TrendSeries::default())
    }
}

impl Session {
    /// Create a session starting from the default symptom state.
    pub fn new(engine: RecommendationEngine, trend: TrendSeries) -> Self {
        Self::with_state(engine, trend, SymptomState::default())
    }

    /// Create a session starting from `state`.
    pub fn with_state(engine: RecommendationEngine, trend: TrendSeries, state: SymptomState) -> Self {
        let snapshot = engine.compute(&state);
        Self {
            engine,
            state,
            snapshot,
            trend,
        }
    }

    /// Create a session from configured formula, lists and starting levels.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::with_state(
            config.engine()?,
            TrendSeries::default(),
            config.initial_state()?,
        ))
    }

    /// Publish the trend and initial snapshot to `renderer`.
    pub fn start<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Event {
        info!(
            energy_budget = self.snapshot.energy_budget,
            "session started"
        );
        renderer.render_trend(&self.trend);
        renderer.render_snapshot(&self.state, &self.snapshot);
        Event::SessionStarted {
            state: self.state,
            snapshot: self.snapshot.clone(),
            at: Utc::now(),
        }
    }

    pub fn state(&self) -> &SymptomState {
        &self.state
    }

    pub fn snapshot(&self) -> &RecommendationSnapshot {
        &self.snapshot
    }

    pub fn trend(&self) -> &TrendSeries {
        &self.trend
    }

    pub fn engine(&self) -> &RecommendationEngine {
        &self.engine
    }

    /// Parse a raw value from the input collaborator and apply it.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not an integer in range. The session is
    /// left unchanged.
    pub fn report_symptom<R: Renderer + ?Sized>(
        &mut self,
        axis: SymptomAxis,
        raw: &str,
        renderer: &mut R,
    ) -> Result<Event, InvalidSymptomInput> {
        let level = raw.parse::<SymptomLevel>().map_err(|e| {
            warn!(axis = %axis, raw, error = %e, "rejected symptom report");
            e
        })?;
        Ok(self.update(axis, level, renderer))
    }

    /// Same as [`Session::report_symptom`] with the axis given by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis is unknown or the value is invalid.
    pub fn report_named<R: Renderer + ?Sized>(
        &mut self,
        axis: &str,
        raw: &str,
        renderer: &mut R,
    ) -> Result<Event, InvalidSymptomInput> {
        let axis = axis.parse::<SymptomAxis>().map_err(|e| {
            warn!(axis, error = %e, "rejected symptom report");
            e
        })?;
        self.report_symptom(axis, raw, renderer)
    }

    /// Replace one axis, recompute the snapshot from the new state, and
    /// publish both.
    pub fn update<R: Renderer + ?Sized>(
        &mut self,
        axis: SymptomAxis,
        level: SymptomLevel,
        renderer: &mut R,
    ) -> Event {
        let previous = self.state.get(axis);
        let (state, snapshot) = apply_update(&self.state, axis, level, &self.engine);
        self.state = state;
        self.snapshot = snapshot;

        debug!(
            axis = %axis,
            previous = previous.value(),
            level = level.value(),
            energy_budget = self.snapshot.energy_budget,
            "symptom reported"
        );

        renderer.render_snapshot(&self.state, &self.snapshot);
        Event::SymptomReported {
            axis,
            previous,
            level,
            state: self.state,
            snapshot: self.snapshot.clone(),
            at: Utc::now(),
        }
    }
}
