use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "rewire-cli", version, about = "Rewire CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Guided breathing sessions
    Breathe {
        #[command(subcommand)]
        action: commands::breathe::BreatheAction,
    },
    /// User profile management
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Quit-progress statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Habit diary: check-ins and craving log
    Diary {
        #[command(subcommand)]
        action: commands::diary::DiaryAction,
    },
    /// If-then planning rules
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Breathe { action } => commands::breathe::run(action),
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Diary { action } => commands::diary::run(action),
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
