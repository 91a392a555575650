//! Habit diary records: daily check-ins, craving events, and completed
//! guided sessions.
//!
//! Check-ins are keyed by calendar date - saving twice on the same day
//! replaces the earlier entry. Craving events and session completions are
//! append-only history.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One end-of-day check-in. Scales run 0-10.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyCheckin {
    pub date: NaiveDate,
    pub smoked: bool,
    /// Cigarettes smoked that day; 0 when `smoked` is false.
    pub cigs_count: u32,
    pub craving_avg: u8,
    pub stress: u8,
    pub mood: u8,
    pub sleep: u8,
    pub top_trigger: String,
    pub notes: String,
}

/// Outcome of an emergency-craving episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CravingOutcome {
    /// The craving subsided without smoking.
    Reduced,
    Smoked,
    /// The user dismissed the flow without recording a resolution.
    Ignored,
}

/// One logged craving episode from the emergency flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CravingEvent {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Subjective intensity, 0-10.
    pub intensity: u8,
    pub trigger: String,
    pub emotion: String,
    pub intervention_used: String,
    pub outcome: CravingOutcome,
    /// How long the episode lasted, wall clock.
    pub duration_seconds: u32,
}

impl CravingEvent {
    pub fn new(
        intensity: u8,
        trigger: impl Into<String>,
        emotion: impl Into<String>,
        intervention_used: impl Into<String>,
        outcome: CravingOutcome,
        duration_seconds: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            intensity,
            trigger: trigger.into(),
            emotion: emotion.into(),
            intervention_used: intervention_used.into(),
            outcome,
            duration_seconds,
        }
    }
}

/// A finished guided session with the user's rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCompletion {
    pub id: Uuid,
    pub session_id: String,
    pub timestamp: DateTime<Utc>,
    /// 1-5 stars; 0 when unrated.
    pub rating: u8,
    pub notes: String,
}

impl SessionCompletion {
    pub fn new(session_id: impl Into<String>, rating: u8, notes: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            session_id: session_id.into(),
            timestamp: Utc::now(),
            rating,
            notes: notes.into(),
        }
    }
}

/// Insert `checkin`, replacing any existing entry for the same date.
pub fn upsert_checkin(checkins: &mut Vec<DailyCheckin>, checkin: DailyCheckin) {
    checkins.retain(|c| c.date != checkin.date);
    checkins.push(checkin);
}

/// Last `n` check-ins, most recent date first.
pub fn recent_checkins(checkins: &[DailyCheckin], n: usize) -> Vec<DailyCheckin> {
    let mut sorted: Vec<DailyCheckin> = checkins.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkin(date: &str, smoked: bool) -> DailyCheckin {
        DailyCheckin {
            date: date.parse().unwrap(),
            smoked,
            cigs_count: if smoked { 3 } else { 0 },
            craving_avg: 5,
            stress: 5,
            mood: 5,
            sleep: 5,
            top_trigger: String::new(),
            notes: String::new(),
        }
    }

    #[test]
    fn upsert_replaces_same_date_entry() {
        let mut checkins = Vec::new();
        upsert_checkin(&mut checkins, checkin("2024-05-01", false));
        upsert_checkin(&mut checkins, checkin("2024-05-02", false));
        upsert_checkin(&mut checkins, checkin("2024-05-01", true));
        assert_eq!(checkins.len(), 2);
        let day1 = checkins
            .iter()
            .find(|c| c.date == "2024-05-01".parse::<NaiveDate>().unwrap())
            .unwrap();
        assert!(day1.smoked);
    }

    #[test]
    fn recent_checkins_sorts_descending_and_truncates() {
        let mut checkins = Vec::new();
        for day in ["2024-05-01", "2024-05-03", "2024-05-02", "2024-04-28"] {
            upsert_checkin(&mut checkins, checkin(day, false));
        }
        let recent = recent_checkins(&checkins, 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].date, "2024-05-03".parse::<NaiveDate>().unwrap());
        assert_eq!(recent[1].date, "2024-05-02".parse::<NaiveDate>().unwrap());
    }

    #[test]
    fn craving_event_serde_round_trip() {
        let event = CravingEvent::new(8, "coffee", "stress", "4-7-8", CravingOutcome::Reduced, 120);
        let json = serde_json::to_string(&event).unwrap();
        let back: CravingEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, event.id);
        assert_eq!(back.outcome, CravingOutcome::Reduced);
    }
}
