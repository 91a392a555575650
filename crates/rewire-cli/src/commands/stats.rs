use chrono::{DateTime, Local, Timelike, Utc};
use clap::Subcommand;

use rewire_core::stats::{daily_message_index, suggested_slot};
use rewire_core::{AppState, DerivedStats, FileStore};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Derived quit-progress stats plus today's message index and
    /// suggested session slot
    Show {
        /// Compute as of this instant instead of now (RFC 3339)
        #[arg(long)]
        at: Option<String>,
        /// Size of the daily message set to index into
        #[arg(long, default_value = "30")]
        message_count: usize,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStore::open()?;
    let state = AppState::load(&store)?;

    match action {
        StatsAction::Show { at, message_count } => {
            let profile = state
                .profile
                .as_ref()
                .ok_or("no profile; run `rewire-cli profile init` first")?;
            let now = match at {
                Some(raw) => raw.parse::<DateTime<Utc>>()?,
                None => Utc::now(),
            };
            let stats = DerivedStats::compute(profile, now);
            let hour = now.with_timezone(&Local).hour();
            let output = serde_json::json!({
                "days_since_quit": stats.days_since_quit,
                "cigarettes_not_smoked": stats.cigarettes_not_smoked,
                "money_saved": stats.money_saved,
                "minutes_saved": stats.minutes_saved,
                "daily_message_index": daily_message_index(stats.days_since_quit, message_count),
                "suggested_slot": suggested_slot(hour),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
