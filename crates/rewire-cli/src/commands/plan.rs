use clap::Subcommand;
use uuid::Uuid;

use rewire_core::plan::{remove_rule, toggle_rule};
use rewire_core::{AppState, FileStore, IfThenRule};

#[derive(Subcommand)]
pub enum PlanAction {
    /// Add an if-then rule
    Add {
        /// Trigger situation
        #[arg(long = "if")]
        if_trigger: String,
        /// Planned response
        #[arg(long = "then")]
        then_action: String,
    },
    /// List all rules as JSON
    List {
        /// Only active rules
        #[arg(long)]
        active: bool,
    },
    /// Flip a rule's active flag
    Toggle { id: Uuid },
    /// Delete a rule
    Remove { id: Uuid },
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStore::open()?;
    let mut state = AppState::load(&store)?;

    match action {
        PlanAction::Add {
            if_trigger,
            then_action,
        } => {
            let rule = IfThenRule::new(if_trigger, then_action);
            println!("{}", serde_json::to_string_pretty(&rule)?);
            state.if_then_rules.push(rule);
            state.save(&store)?;
        }
        PlanAction::List { active } => {
            if active {
                let rules = rewire_core::plan::active_rules(&state.if_then_rules);
                println!("{}", serde_json::to_string_pretty(&rules)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&state.if_then_rules)?);
            }
        }
        PlanAction::Toggle { id } => match toggle_rule(&mut state.if_then_rules, id) {
            Some(now_active) => {
                println!("{{\"id\": \"{id}\", \"active\": {now_active}}}");
                state.save(&store)?;
            }
            None => return Err(format!("no rule with id {id}").into()),
        },
        PlanAction::Remove { id } => {
            if remove_rule(&mut state.if_then_rules, id) {
                println!("{{\"removed\": \"{id}\"}}");
                state.save(&store)?;
            } else {
                return Err(format!("no rule with id {id}").into());
            }
        }
    }
    Ok(())
}
