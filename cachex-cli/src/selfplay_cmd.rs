//! Selfplay command - random games between two random players
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_games(), report_results()
//! - Level 3: compute_statistics()
//! - Level 4: formatting utilities

use anyhow::{ensure, Result};
use clap::Args;
use rayon::prelude::*;
use serde::Serialize;

use cachex_core::{play_random_game_seeded, GameConfig, GameError, GameRecord, Player};

/// Base seed when none is given on the command line
const DEFAULT_SEED: u64 = 42;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct SelfplayArgs {
    /// Number of games to play
    #[arg(long, default_value = "100")]
    pub games: usize,

    /// Cells per board side
    #[arg(long, default_value = "6")]
    pub size: usize,

    /// Run games in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Aggregated selfplay results
#[derive(Clone, Debug, PartialEq, Serialize)]
struct SelfplayResults {
    config: GameConfig,
    games: usize,
    player_a_wins: usize,
    player_b_wins: usize,
    avg_moves: f32,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run selfplay command
///
/// 1. Play the games (game `i` uses seed `seed + i`)
/// 2. Aggregate and report results
pub fn run(args: SelfplayArgs, seed: Option<u64>) -> Result<()> {
    ensure!(args.size > 0, "Board size must be at least 1");

    let config = GameConfig::default().with_board_size(args.size);
    let base_seed = seed.unwrap_or(DEFAULT_SEED);

    tracing::info!(
        "Starting selfplay: {} games on {}x{} (seed={}, parallel={})",
        args.games,
        args.size,
        args.size,
        base_seed,
        args.parallel
    );

    let records = play_games(&config, args.games, base_seed, args.parallel)?;
    let results = compute_statistics(&config, &records);

    report_results(&results, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn play_games(
    config: &GameConfig,
    games: usize,
    base_seed: u64,
    parallel: bool,
) -> Result<Vec<GameRecord>> {
    let play = |i: usize| play_random_game_seeded(config, base_seed.wrapping_add(i as u64));

    let records: Result<Vec<GameRecord>, GameError> = if parallel {
        (0..games).into_par_iter().map(play).collect()
    } else {
        (0..games).map(play).collect()
    };
    let records = records?;

    for (i, record) in records.iter().enumerate() {
        tracing::debug!(
            "Game {}: {:?} in {} moves",
            i + 1,
            record.winner,
            record.moves.len()
        );
    }

    Ok(records)
}

fn report_results(results: &SelfplayResults, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else {
        print!("{}", format_text(results));
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn compute_statistics(config: &GameConfig, records: &[GameRecord]) -> SelfplayResults {
    let wins = |player| records.iter().filter(|r| r.winner == Some(player)).count();
    let total_moves: usize = records.iter().map(|r| r.moves.len()).sum();

    SelfplayResults {
        config: config.clone(),
        games: records.len(),
        player_a_wins: wins(Player::A),
        player_b_wins: wins(Player::B),
        avg_moves: if records.is_empty() {
            0.0
        } else {
            total_moves as f32 / records.len() as f32
        },
    }
}

// ============================================================================
// LEVEL 4 - FORMATTING
// ============================================================================

fn format_text(results: &SelfplayResults) -> String {
    format!(
        "Games: {}\nPlayer A (top-bottom) wins: {} ({})\nPlayer B (left-right) wins: {} ({})\nAverage moves: {:.1}\n",
        results.games,
        results.player_a_wins,
        format_rate(results.player_a_wins, results.games),
        results.player_b_wins,
        format_rate(results.player_b_wins, results.games),
        results.avg_moves
    )
}

fn format_rate(count: usize, total: usize) -> String {
    if total == 0 {
        return "-".to_string();
    }
    format!("{:.1}%", 100.0 * count as f64 / total as f64)
}
