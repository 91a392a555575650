use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::breathing::{Phase, VisualState};

/// Every state change in a breathing session produces an Event.
/// Front ends render them; the CLI prints them as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SessionStarted {
        pattern: String,
        total_secs: u32,
        at: DateTime<Utc>,
    },
    /// The session moved into a new (non-skipped) phase.
    PhaseAdvanced {
        phase: Phase,
        visual: VisualState,
        completed_cycles: u32,
        at: DateTime<Utc>,
    },
    /// The configured total duration elapsed; the session is now idle.
    SessionCompleted {
        total_elapsed_secs: u32,
        completed_cycles: u32,
        at: DateTime<Utc>,
    },
    /// The session was stopped before its total duration elapsed.
    SessionStopped {
        total_elapsed_secs: u32,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        active: bool,
        phase: Phase,
        visual: VisualState,
        phase_elapsed_secs: u32,
        remaining_in_phase_secs: u32,
        total_elapsed_secs: u32,
        remaining_total_secs: u32,
        completed_cycles: u32,
        at: DateTime<Utc>,
    },
}
