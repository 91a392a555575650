//! Breathing session state machine.
//!
//! The session is a wall-clock-paced state machine. It does not own a
//! timer - the caller invokes `tick()` once per second while the session
//! is active (see [`SessionTicker`](super::SessionTicker) for the task
//! that does this).
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Active -> Idle (stop, or total duration reached)
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::pattern::{BreathingPattern, Phase};
use crate::events::Event;

/// Runtime state of one breathing session.
///
/// All counters live in this one record and are updated atomically per
/// tick; there is no other mutable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreathingSession {
    pattern: BreathingPattern,
    /// Total session duration in seconds.
    total_secs: u32,
    active: bool,
    phase: Phase,
    phase_elapsed_secs: u32,
    total_elapsed_secs: u32,
    completed_cycles: u32,
}

impl BreathingSession {
    /// Create an idle session for `pattern` running `total_secs` seconds.
    ///
    /// A total shorter than one cycle is accepted; the session then
    /// terminates mid-phase without completing a cycle.
    pub fn new(pattern: BreathingPattern, total_secs: u32) -> Self {
        let phase = pattern.first_phase();
        Self {
            pattern,
            total_secs,
            active: false,
            phase,
            phase_elapsed_secs: 0,
            total_elapsed_secs: 0,
            completed_cycles: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pattern(&self) -> &BreathingPattern {
        &self.pattern
    }

    pub fn total_secs(&self) -> u32 {
        self.total_secs
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phase_elapsed_secs(&self) -> u32 {
        self.phase_elapsed_secs
    }

    pub fn total_elapsed_secs(&self) -> u32 {
        self.total_elapsed_secs
    }

    pub fn completed_cycles(&self) -> u32 {
        self.completed_cycles
    }

    /// Seconds left in the current phase (for countdown display).
    pub fn remaining_in_phase(&self) -> u32 {
        self.pattern
            .duration_of(self.phase)
            .saturating_sub(self.phase_elapsed_secs)
    }

    /// Seconds left in the whole session.
    pub fn remaining_total(&self) -> u32 {
        self.total_secs.saturating_sub(self.total_elapsed_secs)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            active: self.active,
            phase: self.phase,
            visual: self.phase.visual(),
            phase_elapsed_secs: self.phase_elapsed_secs,
            remaining_in_phase_secs: self.remaining_in_phase(),
            total_elapsed_secs: self.total_elapsed_secs,
            remaining_total_secs: self.remaining_total(),
            completed_cycles: self.completed_cycles,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Activate the session, resetting every counter and returning to the
    /// pattern's first non-skipped phase.
    pub fn start(&mut self) -> Event {
        self.active = true;
        self.phase = self.pattern.first_phase();
        self.phase_elapsed_secs = 0;
        self.total_elapsed_secs = 0;
        self.completed_cycles = 0;
        Event::SessionStarted {
            pattern: self.pattern.name.clone(),
            total_secs: self.total_secs,
            at: Utc::now(),
        }
    }

    /// Advance the session by one second.
    ///
    /// No-op returning `None` while inactive. Phase advance happens before
    /// the completion check, so a total duration that lands exactly on a
    /// cycle boundary counts that final cycle.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.active {
            return None;
        }

        self.total_elapsed_secs += 1;
        self.phase_elapsed_secs += 1;

        let mut advanced = false;
        if self.phase_elapsed_secs >= self.pattern.duration_of(self.phase) {
            let (next, wrapped) = self.pattern.next_phase(self.phase);
            self.phase = next;
            self.phase_elapsed_secs = 0;
            if wrapped {
                self.completed_cycles += 1;
            }
            advanced = true;
        }

        if self.total_elapsed_secs >= self.total_secs {
            self.active = false;
            return Some(Event::SessionCompleted {
                total_elapsed_secs: self.total_elapsed_secs,
                completed_cycles: self.completed_cycles,
                at: Utc::now(),
            });
        }

        if advanced {
            Some(Event::PhaseAdvanced {
                phase: self.phase,
                visual: self.phase.visual(),
                completed_cycles: self.completed_cycles,
                at: Utc::now(),
            })
        } else {
            None
        }
    }

    /// Deactivate the session. Ticks issued after this return are no-ops;
    /// no state field changes again until `start()`.
    pub fn stop(&mut self) -> Option<Event> {
        if !self.active {
            return None;
        }
        self.active = false;
        Some(Event::SessionStopped {
            total_elapsed_secs: self.total_elapsed_secs,
            at: Utc::now(),
        })
    }
}
