//! # Rewire Core Library
//!
//! Core business logic for Rewire, a quit-smoking companion. All operations
//! are available through this library and exposed by the standalone CLI
//! binary; front ends are thin layers over the same core.
//!
//! ## Architecture
//!
//! - **Breathing engine**: a caller-driven state machine that advances one
//!   logical second per `tick()`, plus a cancellable ticker task that drives
//!   it on a wall-clock cadence
//! - **Stats**: pure quit-progress calculations derived from the user
//!   profile and a caller-supplied clock, recomputed on every read
//! - **Storage**: single JSON state document behind a key-value store
//!   interface, and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`BreathingSession`]: breathing-phase timer state machine
//! - [`SessionTicker`]: cancellable tick producer for a running session
//! - [`DerivedStats`]: days / cigarettes avoided / money / minutes saved
//! - [`AppState`]: the persisted profile + diary + plan document

pub mod breathing;
pub mod diary;
pub mod error;
pub mod events;
pub mod plan;
pub mod profile;
pub mod stats;
pub mod storage;

pub use breathing::{BreathingPattern, BreathingSession, Phase, SessionTicker, VisualState};
pub use diary::{CravingEvent, CravingOutcome, DailyCheckin, SessionCompletion};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use plan::IfThenRule;
pub use profile::{DependencyLevel, GoalType, UserProfile};
pub use stats::{DerivedStats, SessionSlot};
pub use storage::{AppState, Config, FileStore, KvStore};
