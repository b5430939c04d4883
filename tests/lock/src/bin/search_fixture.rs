//! Binary that runs the crawler search on a built-in grid and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture [default|corridor] [capacity]`
//!
//! Output: key=value lines on stdout. Logs go to stderr, filtered by
//! `RUST_LOG` (default `warn`).

use std::process::ExitCode;

use crawler_harness::runner::{run_text, RunConfig, RunError};
use crawler_harness::worlds::fixtures::{CORRIDOR_GRID, DEFAULT_GRID};
use crawler_search::graph::TerminationReason;
use tracing_subscriber::EnvFilter;

fn termination_label(reason: TerminationReason) -> &'static str {
    match reason {
        TerminationReason::GoalReached { .. } => "GoalReached",
        TerminationReason::FrontierExhausted => "FrontierExhausted",
        TerminationReason::ExpansionBudgetExceeded => "ExpansionBudgetExceeded",
    }
}

fn fixture_run(grid_name: &str, capacity: usize) -> Result<(), RunError> {
    let text = if grid_name == "corridor" {
        CORRIDOR_GRID
    } else {
        DEFAULT_GRID
    };
    let config = RunConfig {
        capacity,
        ..RunConfig::default()
    };
    let report = run_text(text, &config)?;

    println!("grid={grid_name}");
    println!("capacity={capacity}");
    println!("grid_digest={}", report.grid_digest);
    println!("search_graph_digest={}", report.graph_digest);
    println!("termination_reason={}", termination_label(report.termination));
    println!("total_expansions={}", report.expansions);
    println!("frontier_high_water={}", report.frontier_high_water);
    println!("moves={}", report.moves_label());
    match report.cost {
        Some(cost) => println!("cost={cost}"),
        None => println!("cost=none"),
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let grid_name = args.next().unwrap_or_else(|| "default".to_string());
    let capacity = match args.next().map(|s| s.parse::<usize>()) {
        None => 100,
        Some(Ok(capacity)) => capacity,
        Some(Err(e)) => {
            eprintln!("search_fixture: invalid capacity: {e}");
            return ExitCode::FAILURE;
        }
    };

    match fixture_run(&grid_name, capacity) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "fixture run failed");
            eprintln!("search_fixture: {e}");
            ExitCode::FAILURE
        }
    }
}
