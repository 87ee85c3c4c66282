use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "energy-budget-cli", version, about = "Energy Budget CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute today's energy budget from symptom levels
    Budget(commands::budget::BudgetArgs),
    /// Show the weekly energy & activity trend
    Trend {
        /// Print JSON instead of a chart
        #[arg(long)]
        json: bool,
    },
    /// Report symptoms interactively from stdin
    Session {
        /// Print one JSON event per line instead of the text dashboard
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Budget(args) => commands::budget::run(args),
        Commands::Trend { json } => commands::trend::run(json),
        Commands::Session { json } => commands::session::run(json),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
