use chrono::{DateTime, Utc};
use clap::Subcommand;

use rewire_core::storage::Config;
use rewire_core::{AppState, FileStore, GoalType, UserProfile};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Create the profile and complete onboarding
    Init {
        #[arg(long)]
        name: String,
        /// Goal: quit or reduce
        #[arg(long, default_value = "quit")]
        goal: String,
        /// Quit date, RFC 3339 (defaults to now for a quit goal)
        #[arg(long)]
        quit_date: Option<String>,
        /// Cigarettes per day before quitting
        #[arg(long, default_value = "0")]
        baseline: u32,
        /// Price of one pack
        #[arg(long)]
        pack_price: Option<f64>,
        /// Cigarettes per pack
        #[arg(long)]
        cigs_per_pack: Option<u32>,
        /// Trigger situations (repeatable)
        #[arg(long = "trigger")]
        triggers: Vec<String>,
        /// Reasons for quitting (repeatable)
        #[arg(long = "reason")]
        reasons: Vec<String>,
    },
    /// Print the current profile as JSON
    Show,
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStore::open()?;
    let mut state = AppState::load(&store)?;

    match action {
        ProfileAction::Init {
            name,
            goal,
            quit_date,
            baseline,
            pack_price,
            cigs_per_pack,
            triggers,
            reasons,
        } => {
            let config = Config::load_or_default();
            let mut profile = UserProfile::new(name);
            profile.goal = match goal.as_str() {
                "quit" => GoalType::Quit,
                "reduce" => GoalType::Reduce,
                other => return Err(format!("unknown goal: {other}").into()),
            };
            profile.quit_date = match quit_date {
                Some(raw) => Some(raw.parse::<DateTime<Utc>>()?),
                None if profile.goal == GoalType::Quit => Some(Utc::now()),
                None => None,
            };
            profile.baseline_cigs_per_day = baseline;
            profile.pack_price = pack_price.unwrap_or(config.defaults.pack_price);
            profile.cigs_per_pack = cigs_per_pack.unwrap_or(config.defaults.cigs_per_pack);
            profile.triggers = triggers;
            profile.reasons = reasons;
            profile.complete_onboarding()?;

            println!("{}", serde_json::to_string_pretty(&profile)?);
            state.profile = Some(profile);
            state.save(&store)?;
        }
        ProfileAction::Show => match &state.profile {
            Some(profile) => println!("{}", serde_json::to_string_pretty(profile)?),
            None => println!("null"),
        },
    }
    Ok(())
}
