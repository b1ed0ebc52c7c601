//! Search command - shortest path on a scenario board
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_board(), search_board(), report_results()
//! - Level 3: build_report()
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use cachex_core::{find_path, Board, Hex, PathResult, Scenario, SearchError};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct SearchArgs {
    /// Scenario JSON file
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Search outcome ready for printing
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
struct SearchReport {
    reachable: bool,
    cost: Option<u32>,
    path: Vec<(i32, i32)>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run search command
///
/// 1. Load the scenario and build the board
/// 2. Search it
/// 3. Report the path (an unreachable goal is a normal result)
pub fn run(args: SearchArgs) -> Result<()> {
    let board = load_board(&args)?;

    tracing::info!(
        "Searching {}x{} board from {:?} to {:?} ({} blocked)",
        board.size(),
        board.size(),
        board.start(),
        board.goal(),
        board.blocked_count()
    );

    let report = search_board(&board)?;

    report_results(&report, &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn load_board(args: &SearchArgs) -> Result<Board> {
    let scenario = Scenario::load(&args.input)?;
    scenario
        .to_board()
        .with_context(|| format!("Invalid board in {}", args.input.display()))
}

fn search_board(board: &Board) -> Result<SearchReport> {
    match find_path(board) {
        Ok(result) => Ok(build_report(&result)),
        Err(SearchError::NoPathFound { start, goal }) => {
            tracing::warn!("Goal {:?} is unreachable from {:?}", goal, start);
            Ok(SearchReport {
                reachable: false,
                cost: None,
                path: Vec::new(),
            })
        }
        Err(e) => Err(e).context("Search failed"),
    }
}

fn report_results(report: &SearchReport, args: &SearchArgs) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", format_text(report));
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn build_report(result: &PathResult) -> SearchReport {
    SearchReport {
        reachable: true,
        cost: Some(result.cost()),
        path: result.path.iter().map(|h| (h.x, h.y)).collect(),
    }
}

// ============================================================================
// LEVEL 4 - FORMATTING
// ============================================================================

/// Cost on the first line, then one `(x,y)` per line
fn format_text(report: &SearchReport) -> String {
    let Some(cost) = report.cost else {
        return "no path\n".to_string();
    };
    let mut out = format!("{}\n", cost);
    for &(x, y) in &report.path {
        out.push_str(&format_hex(Hex::new(x, y)));
        out.push('\n');
    }
    out
}

fn format_hex(hex: Hex) -> String {
    format!("({},{})", hex.x, hex.y)
}
