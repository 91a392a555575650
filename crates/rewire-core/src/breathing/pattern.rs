use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Default total session duration in seconds.
pub const DEFAULT_SESSION_SECS: u32 = 60;

/// One segment of a breathing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Inhale,
    HoldIn,
    Exhale,
    HoldOut,
}

impl Phase {
    /// Cyclic successor in the fixed order
    /// inhale -> hold-in -> exhale -> hold-out -> inhale.
    pub fn next(self) -> Phase {
        match self {
            Phase::Inhale => Phase::HoldIn,
            Phase::HoldIn => Phase::Exhale,
            Phase::Exhale => Phase::HoldOut,
            Phase::HoldOut => Phase::Inhale,
        }
    }

    /// Binary visual mapping consumed by animation and accessibility
    /// layers: inhale/hold-in render expanded, exhale/hold-out contracted.
    pub fn visual(self) -> VisualState {
        match self {
            Phase::Inhale | Phase::HoldIn => VisualState::Expanded,
            Phase::Exhale | Phase::HoldOut => VisualState::Contracted,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Inhale => "inhale",
            Phase::HoldIn => "hold-in",
            Phase::Exhale => "exhale",
            Phase::HoldOut => "hold-out",
        }
    }
}

/// Visual state derived from the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualState {
    Expanded,
    Contracted,
}

/// A named breathing technique: four per-phase durations in seconds.
///
/// At least one duration must be positive; a phase with duration 0 is
/// skipped by the session state machine and never observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreathingPattern {
    pub name: String,
    pub inhale: u32,
    pub hold_in: u32,
    pub exhale: u32,
    pub hold_out: u32,
}

impl BreathingPattern {
    /// Build a pattern, rejecting the all-zero configuration.
    pub fn new(
        name: impl Into<String>,
        inhale: u32,
        hold_in: u32,
        exhale: u32,
        hold_out: u32,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if inhale == 0 && hold_in == 0 && exhale == 0 && hold_out == 0 {
            return Err(ValidationError::EmptyPattern(name));
        }
        Ok(Self {
            name,
            inhale,
            hold_in,
            exhale,
            hold_out,
        })
    }

    /// Box breathing, 4-4-4-4.
    pub fn box_breathing() -> Self {
        Self {
            name: "4-4-4-4".into(),
            inhale: 4,
            hold_in: 4,
            exhale: 4,
            hold_out: 4,
        }
    }

    /// Relaxing breath, 4-7-8 with no hold-out.
    pub fn relaxing_4_7_8() -> Self {
        Self {
            name: "4-7-8".into(),
            inhale: 4,
            hold_in: 7,
            exhale: 8,
            hold_out: 0,
        }
    }

    /// Cardiac coherence, 5 in / 5 out with no holds.
    pub fn coherence_5_5() -> Self {
        Self {
            name: "5-5".into(),
            inhale: 5,
            hold_in: 0,
            exhale: 5,
            hold_out: 0,
        }
    }

    pub fn builtins() -> Vec<Self> {
        vec![
            Self::box_breathing(),
            Self::relaxing_4_7_8(),
            Self::coherence_5_5(),
        ]
    }

    /// Look up a built-in pattern by its name.
    pub fn by_name(name: &str) -> Result<Self, ValidationError> {
        Self::builtins()
            .into_iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ValidationError::UnknownPattern(name.to_string()))
    }

    pub fn duration_of(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Inhale => self.inhale,
            Phase::HoldIn => self.hold_in,
            Phase::Exhale => self.exhale,
            Phase::HoldOut => self.hold_out,
        }
    }

    /// Length of one full cycle in seconds (skipped phases contribute 0).
    pub fn cycle_secs(&self) -> u32 {
        self.inhale + self.hold_in + self.exhale + self.hold_out
    }

    /// First phase with a positive duration, in cycle order starting at
    /// inhale. Valid patterns always have one.
    pub fn first_phase(&self) -> Phase {
        let mut phase = Phase::Inhale;
        for _ in 0..4 {
            if self.duration_of(phase) > 0 {
                return phase;
            }
            phase = phase.next();
        }
        // Unreachable for patterns built through `new`.
        Phase::Inhale
    }

    /// Successor of `phase`, skipping zero-duration phases. Returns the
    /// next observable phase and whether the traversal wrapped past the
    /// inhale slot (i.e. a cycle boundary was crossed).
    pub fn next_phase(&self, phase: Phase) -> (Phase, bool) {
        let mut next = phase.next();
        let mut wrapped = next == Phase::Inhale;
        for _ in 0..4 {
            if self.duration_of(next) > 0 {
                return (next, wrapped);
            }
            next = next.next();
            if next == Phase::Inhale {
                wrapped = true;
            }
        }
        (phase, wrapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_pattern_is_rejected() {
        assert!(BreathingPattern::new("zeros", 0, 0, 0, 0).is_err());
    }

    #[test]
    fn single_positive_phase_is_accepted() {
        let p = BreathingPattern::new("exhale-only", 0, 0, 6, 0).unwrap();
        assert_eq!(p.first_phase(), Phase::Exhale);
    }

    #[test]
    fn by_name_resolves_builtins() {
        assert_eq!(BreathingPattern::by_name("4-4-4-4").unwrap().hold_out, 4);
        assert_eq!(BreathingPattern::by_name("4-7-8").unwrap().hold_in, 7);
        assert_eq!(BreathingPattern::by_name("5-5").unwrap().cycle_secs(), 10);
        assert!(BreathingPattern::by_name("9-9-9").is_err());
    }

    #[test]
    fn next_phase_skips_zero_durations() {
        let p = BreathingPattern::relaxing_4_7_8();
        // exhale -> (hold-out skipped) -> inhale, crossing the cycle boundary
        assert_eq!(p.next_phase(Phase::Exhale), (Phase::Inhale, true));
        assert_eq!(p.next_phase(Phase::Inhale), (Phase::HoldIn, false));
    }

    #[test]
    fn next_phase_alternates_for_5_5() {
        let p = BreathingPattern::coherence_5_5();
        assert_eq!(p.next_phase(Phase::Inhale), (Phase::Exhale, false));
        assert_eq!(p.next_phase(Phase::Exhale), (Phase::Inhale, true));
    }

    #[test]
    fn visual_mapping_is_binary() {
        assert_eq!(Phase::Inhale.visual(), VisualState::Expanded);
        assert_eq!(Phase::HoldIn.visual(), VisualState::Expanded);
        assert_eq!(Phase::Exhale.visual(), VisualState::Contracted);
        assert_eq!(Phase::HoldOut.visual(), VisualState::Contracted);
    }

    #[test]
    fn phase_serde_uses_kebab_case() {
        assert_eq!(serde_json::to_string(&Phase::HoldIn).unwrap(), "\"hold-in\"");
        let p: Phase = serde_json::from_str("\"hold-out\"").unwrap();
        assert_eq!(p, Phase::HoldOut);
    }
}
