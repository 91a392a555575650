use chrono::Local;
use clap::Subcommand;

use rewire_core::diary::{recent_checkins, upsert_checkin};
use rewire_core::{AppState, CravingEvent, CravingOutcome, DailyCheckin, FileStore};

#[derive(Subcommand)]
pub enum DiaryAction {
    /// Save (or replace) today's check-in
    Checkin {
        /// Did you smoke today?
        #[arg(long)]
        smoked: bool,
        /// Cigarettes smoked (only meaningful with --smoked)
        #[arg(long, default_value = "0")]
        cigs: u32,
        /// Average craving intensity, 0-10
        #[arg(long, default_value = "5")]
        craving: u8,
        /// Stress level, 0-10
        #[arg(long, default_value = "5")]
        stress: u8,
        /// Mood, 0-10
        #[arg(long, default_value = "5")]
        mood: u8,
        /// Sleep quality, 0-10
        #[arg(long, default_value = "5")]
        sleep: u8,
        /// Strongest trigger of the day
        #[arg(long, default_value = "")]
        trigger: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Show recent check-ins, newest first
    History {
        #[arg(long, default_value = "7")]
        days: usize,
    },
    /// Log a craving episode from the emergency flow
    Craving {
        /// Intensity, 0-10
        #[arg(long)]
        intensity: u8,
        #[arg(long, default_value = "")]
        trigger: String,
        #[arg(long, default_value = "")]
        emotion: String,
        /// Which intervention was used (e.g. a pattern name)
        #[arg(long, default_value = "")]
        intervention: String,
        /// Outcome: reduced, smoked, or ignored
        #[arg(long, default_value = "reduced")]
        outcome: String,
        #[arg(long, default_value = "0")]
        duration_secs: u32,
    },
}

pub fn run(action: DiaryAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStore::open()?;
    let mut state = AppState::load(&store)?;

    match action {
        DiaryAction::Checkin {
            smoked,
            cigs,
            craving,
            stress,
            mood,
            sleep,
            trigger,
            notes,
        } => {
            let checkin = DailyCheckin {
                date: Local::now().date_naive(),
                smoked,
                cigs_count: if smoked { cigs } else { 0 },
                craving_avg: craving,
                stress,
                mood,
                sleep,
                top_trigger: trigger,
                notes,
            };
            println!("{}", serde_json::to_string_pretty(&checkin)?);
            upsert_checkin(&mut state.checkins, checkin);
            state.save(&store)?;
        }
        DiaryAction::History { days } => {
            let recent = recent_checkins(&state.checkins, days);
            println!("{}", serde_json::to_string_pretty(&recent)?);
        }
        DiaryAction::Craving {
            intensity,
            trigger,
            emotion,
            intervention,
            outcome,
            duration_secs,
        } => {
            let outcome = match outcome.as_str() {
                "reduced" => CravingOutcome::Reduced,
                "smoked" => CravingOutcome::Smoked,
                "ignored" => CravingOutcome::Ignored,
                other => return Err(format!("unknown outcome: {other}").into()),
            };
            let event = CravingEvent::new(
                intensity,
                trigger,
                emotion,
                intervention,
                outcome,
                duration_secs,
            );
            println!("{}", serde_json::to_string_pretty(&event)?);
            state.craving_events.push(event);
            state.save(&store)?;
        }
    }
    Ok(())
}
