use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Subcommand;
use tokio::sync::mpsc;

use rewire_core::storage::Config;
use rewire_core::{
    AppState, BreathingPattern, BreathingSession, Event, FileStore, SessionCompletion,
    SessionTicker,
};

#[derive(Subcommand)]
pub enum BreatheAction {
    /// Run a guided breathing session live
    Run {
        /// Pattern name (built-ins: 4-4-4-4, 4-7-8, 5-5)
        #[arg(long)]
        pattern: Option<String>,
        /// Total session duration in seconds
        #[arg(long)]
        duration: Option<u32>,
        /// Print events as JSON lines instead of countdown text
        #[arg(long)]
        json: bool,
        /// Only print the completion summary
        #[arg(long)]
        quiet: bool,
    },
    /// List built-in patterns as JSON
    Patterns,
}

pub fn run(action: BreatheAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        BreatheAction::Patterns => {
            let patterns = BreathingPattern::builtins();
            println!("{}", serde_json::to_string_pretty(&patterns)?);
            Ok(())
        }
        BreatheAction::Run {
            pattern,
            duration,
            json,
            quiet,
        } => run_session(pattern, duration, json, quiet),
    }
}

fn run_session(
    pattern: Option<String>,
    duration: Option<u32>,
    json: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let pattern_name = pattern.unwrap_or(config.breathing.default_pattern);
    let pattern = BreathingPattern::by_name(&pattern_name)?;
    let total_secs = duration.unwrap_or(config.breathing.default_duration_secs);

    let mut session = BreathingSession::new(pattern, total_secs);
    let started = session.start();
    if json {
        println!("{}", serde_json::to_string(&started)?);
    } else if !quiet {
        println!("{pattern_name} for {total_secs}s - follow the phases");
    }

    let session = Arc::new(Mutex::new(session));
    let (tx, mut rx) = mpsc::unbounded_channel();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let completed = runtime.block_on(async move {
        let ticker = SessionTicker::spawn(Arc::clone(&session), Duration::from_secs(1), tx);
        let mut completed = None;
        while let Some(event) = rx.recv().await {
            if json {
                println!("{}", serde_json::to_string(&event)?);
            } else {
                print_event(&event, quiet);
            }
            if let Event::SessionCompleted {
                completed_cycles, ..
            } = event
            {
                completed = Some(completed_cycles);
            }
        }
        ticker.wait().await;
        Ok::<_, Box<dyn std::error::Error>>(completed)
    })?;

    if let Some(cycles) = completed {
        if !json {
            println!("done: {total_secs}s, {cycles} full cycles");
        }
        let store = FileStore::open()?;
        let mut state = AppState::load(&store)?;
        state
            .session_completions
            .push(SessionCompletion::new(&pattern_name, 0, ""));
        state.save(&store)?;
    }
    Ok(())
}

fn print_event(event: &Event, quiet: bool) {
    if quiet {
        return;
    }
    match event {
        Event::StateSnapshot {
            phase,
            remaining_in_phase_secs,
            remaining_total_secs,
            ..
        } => {
            println!("  {:<8} {remaining_in_phase_secs:>2}s  (session {remaining_total_secs}s left)", phase.label());
        }
        Event::PhaseAdvanced {
            phase,
            completed_cycles,
            ..
        } => {
            println!("> {} (cycles: {completed_cycles})", phase.label());
        }
        _ => {}
    }
}
