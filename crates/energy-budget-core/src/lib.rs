//! # Energy Budget Core Library
//!
//! This library turns self-reported symptom levels into a daily "energy
//! budget" percentage plus diet and exercise suggestions, and carries the
//! weekly trend data shown next to it. Front ends (the CLI, or any UI) feed
//! symptom reports in and render what comes back out.
//!
//! ## Architecture
//!
//! - **Symptom model**: closed set of axes and validated 1-5 levels
//! - **Recommendation engine**: a pure, deterministic linear formula with a
//!   clamped result
//! - **Session**: explicit state container that applies an update and then
//!   recomputes from the new state
//! - **Storage**: TOML-based configuration of the formula and lists
//!
//! ## Key Components
//!
//! - [`Session`]: per-session symptom state and derived snapshot
//! - [`RecommendationEngine`]: symptom state to [`RecommendationSnapshot`]
//! - [`TrendSeries`]: seven-day energy/activity fixture
//! - [`Config`]: application configuration management

pub mod engine;
pub mod error;
pub mod events;
pub mod session;
pub mod storage;
pub mod symptom;
pub mod trend;

pub use engine::{EnergyFormula, RecommendationEngine, RecommendationSnapshot};
pub use error::{ConfigError, CoreError, InvalidSymptomInput, ValidationError};
pub use events::Event;
pub use session::{apply_update, NullRenderer, RecordingRenderer, Renderer, Session};
pub use storage::Config;
pub use symptom::{SymptomAxis, SymptomLevel, SymptomState};
pub use trend::{TrendPoint, TrendSeries};
