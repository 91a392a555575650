//! Quit-progress statistics.
//!
//! Pure functions of the user profile and a caller-supplied clock. Values
//! are recomputed on every read and never persisted. All functions are
//! total: bad denominators fall back to defaults and negative spans clamp
//! to zero instead of erroring.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::profile::UserProfile;

/// Fallback cigarettes per pack when the profile has none recorded.
pub const DEFAULT_CIGS_PER_PACK: u32 = 20;

/// Fallback pack price in euros.
pub const DEFAULT_PACK_PRICE: f64 = 5.50;

/// Minutes of life attributed to each cigarette not smoked, per the
/// product's model.
pub const MINUTES_PER_CIGARETTE: u64 = 7;

const MS_PER_DAY: i64 = 86_400_000;

/// Whole days elapsed since the quit date, clamped to 0.
///
/// A quit date in the future yields 0, never a negative count.
pub fn days_since_quit(quit_date: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let elapsed_ms = (now - quit_date).num_milliseconds();
    if elapsed_ms <= 0 {
        0
    } else {
        (elapsed_ms / MS_PER_DAY) as u64
    }
}

pub fn cigarettes_not_smoked(days_since_quit: u64, baseline_cigs_per_day: u32) -> u64 {
    days_since_quit * u64::from(baseline_cigs_per_day)
}

/// Money saved from avoided packs. A zero `cigs_per_pack` substitutes
/// [`DEFAULT_CIGS_PER_PACK`] so the division is always defined.
pub fn money_saved(cigarettes_not_smoked: u64, cigs_per_pack: u32, pack_price: f64) -> f64 {
    let per_pack = if cigs_per_pack == 0 {
        DEFAULT_CIGS_PER_PACK
    } else {
        cigs_per_pack
    };
    (cigarettes_not_smoked as f64 / f64::from(per_pack)) * pack_price
}

pub fn minutes_saved(cigarettes_not_smoked: u64) -> u64 {
    cigarettes_not_smoked * MINUTES_PER_CIGARETTE
}

/// Deterministic cyclic index for day-keyed message selection: the same
/// day count always maps to the same message. Returns 0 for an empty set.
pub fn daily_message_index(days_since_quit: u64, message_count: usize) -> usize {
    if message_count == 0 {
        return 0;
    }
    (days_since_quit % message_count as u64) as usize
}

/// Time-of-day band used to suggest a session kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionSlot {
    /// Before 10:00.
    Morning,
    /// 12:00 through 14:59.
    PostMeal,
    /// 21:00 onward.
    Evening,
    Anytime,
}

/// Categorize an hour of day (0-23) into a suggestion slot.
pub fn suggested_slot(hour: u32) -> SessionSlot {
    match hour {
        h if h < 10 => SessionSlot::Morning,
        12..=14 => SessionSlot::PostMeal,
        h if h >= 21 => SessionSlot::Evening,
        _ => SessionSlot::Anytime,
    }
}

/// Quit-progress metrics shown on the dashboard and plan views.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedStats {
    pub days_since_quit: u64,
    pub cigarettes_not_smoked: u64,
    pub money_saved: f64,
    pub minutes_saved: u64,
}

impl DerivedStats {
    /// Compute all metrics from the profile at `now`.
    ///
    /// A profile without a quit date (a reduce-goal user who has not set
    /// one) reads as day 0 across the board.
    pub fn compute(profile: &UserProfile, now: DateTime<Utc>) -> Self {
        let days = profile
            .quit_date
            .map(|quit| days_since_quit(quit, now))
            .unwrap_or(0);
        let cigs = cigarettes_not_smoked(days, profile.baseline_cigs_per_day);
        Self {
            days_since_quit: days,
            cigarettes_not_smoked: cigs,
            money_saved: money_saved(cigs, profile.cigs_per_pack, profile.pack_price),
            minutes_saved: minutes_saved(cigs),
        }
    }
}
