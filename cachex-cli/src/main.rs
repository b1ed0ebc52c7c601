//! Cachex CLI - Command-line interface
//!
//! Commands:
//! - search: Find a shortest path on a scenario board
//! - selfplay: Play random games and report who connects

mod search_cmd;
mod selfplay_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use search_cmd::SearchArgs;
use selfplay_cmd::SelfplayArgs;

#[derive(Parser)]
#[command(name = "cachex")]
#[command(about = "Cachex hex board path search and play")]
struct Cli {
    /// Random seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a shortest path from start to goal
    Search(SearchArgs),
    /// Play random games between two random players
    Selfplay(SelfplayArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Search(args) => search_cmd::run(args),
        Commands::Selfplay(args) => selfplay_cmd::run(args, cli.seed),
    }
}

/// Log to stderr so stdout stays clean for results
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
