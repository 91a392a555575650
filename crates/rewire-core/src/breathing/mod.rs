//! Breathing session engine.
//!
//! A session runs a cyclic four-phase sequence (inhale, hold-in, exhale,
//! hold-out) on a one-second cadence. [`BreathingSession`] is the pure
//! state machine; [`SessionTicker`] is the cancellable task that drives it.

mod pattern;
mod runner;
mod session;

pub use pattern::{BreathingPattern, Phase, VisualState, DEFAULT_SESSION_SECS};
pub use runner::SessionTicker;
pub use session::BreathingSession;
