use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use nonet::{
    error::{Error, Result},
    io::{load_board, render_board, render_rows},
    solver::{
        groups::Groups,
        search::{BacktrackingSearch, SearchOutcome},
        stats::render_stats_table,
    },
};

/// Solve 9x9 grid puzzles with constraint propagation and backtracking
/// search.
#[derive(Debug, Parser)]
#[command(name = "nonet", version)]
struct Cli {
    /// Path to an 81-line puzzle file (one candidate set per cell,
    /// row-major). Prompts for a path when omitted.
    puzzle: Option<PathBuf>,

    /// Log every committed assignment during the search.
    #[arg(short, long)]
    verbose: bool,

    /// Print a table of search statistics after solving.
    #[arg(long)]
    stats: bool,

    /// Emit the result as a JSON document instead of text.
    #[arg(long)]
    json: bool,

    /// Skip the naked/hidden single prepass and rely on propagation alone.
    #[arg(long)]
    no_prepass: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let path = match cli.puzzle {
        Some(path) => path,
        None => prompt_for_path()?,
    };

    let board = load_board(&path)?;
    if !cli.json {
        println!("Initial board:");
        println!("{}", render_board(&board));
    }

    let groups = Groups::standard();
    let mut search = BacktrackingSearch::default();
    if !cli.no_prepass {
        search = search.with_deduction_prepass();
    }
    let (outcome, stats) = search.solve(board, &groups);

    if cli.json {
        let grid = match &outcome {
            SearchOutcome::Solved(solved) => Some(render_rows(solved)),
            SearchOutcome::Exhausted => None,
        };
        let report = json!({
            "solved": grid.is_some(),
            "grid": grid,
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match outcome {
        SearchOutcome::Solved(solved) => {
            println!("\nSolution found!");
            println!("{}", render_board(&solved));
        }
        SearchOutcome::Exhausted => println!("\nNo solution found."),
    }

    if cli.stats {
        println!("\n{}", render_stats_table(&stats));
    }

    Ok(())
}

fn prompt_for_path() -> Result<PathBuf> {
    print!("Enter the path of the puzzle file: ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Err(Error::NoPuzzle);
    }
    Ok(PathBuf::from(answer))
}
