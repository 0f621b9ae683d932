//! Command-line front end: parse a puzzle, solve it, print the result
//! and the wall-clock time the solve took.

use backtrack_core::{Grid, Heuristic, Solver, SolverConfig};
use clap::{Parser, ValueEnum};
use std::process;
use std::time::Instant;

/// The classic demonstration puzzle, solved when no puzzle is given.
const CLASSIC_PUZZLE: [[u8; 9]; 9] = [
    [5, 3, 0, 0, 7, 0, 0, 0, 0],
    [6, 0, 0, 1, 9, 5, 0, 0, 0],
    [0, 9, 8, 0, 0, 0, 0, 6, 0],
    [8, 0, 0, 0, 6, 0, 0, 0, 3],
    [4, 0, 0, 8, 0, 3, 0, 0, 1],
    [7, 0, 0, 0, 2, 0, 0, 0, 6],
    [0, 6, 0, 0, 0, 0, 2, 8, 0],
    [0, 0, 0, 4, 1, 9, 0, 0, 5],
    [0, 0, 0, 0, 8, 0, 0, 7, 9],
];

#[derive(Parser)]
#[command(name = "sudoku-solve", version, about = "Backtracking Sudoku solver")]
struct Cli {
    /// 81-character puzzle string; digits are givens, '0' or '.' empty.
    /// Solves a built-in classic puzzle when omitted.
    puzzle: Option<String>,

    /// Cell-selection heuristic for the search.
    #[arg(long, value_enum, default_value_t = HeuristicArg::MostConstrained)]
    heuristic: HeuristicArg,

    /// Count solutions up to this limit instead of printing one.
    #[arg(long, value_name = "LIMIT")]
    count_solutions: Option<usize>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeuristicArg {
    MostConstrained,
    FirstEmpty,
}

impl From<HeuristicArg> for Heuristic {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::MostConstrained => Heuristic::MostConstrained,
            HeuristicArg::FirstEmpty => Heuristic::FirstEmpty,
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let grid = match &cli.puzzle {
        Some(s) => Grid::from_string(s)
            .ok_or_else(|| "puzzle must be 81 characters of digits, '0', or '.'".to_string())?,
        None => Grid::from_rows(CLASSIC_PUZZLE),
    };

    let solver = Solver::with_config(SolverConfig {
        heuristic: cli.heuristic.into(),
    });

    let start = Instant::now();
    match cli.count_solutions {
        Some(limit) => {
            let count = solver.count_solutions(&grid, limit);
            let elapsed = start.elapsed();
            println!("Solutions found (limit {limit}): {count}");
            println!("Time taken: {:.7}s", elapsed.as_secs_f64());
        }
        None => {
            let solution = solver.solve(&grid);
            let elapsed = start.elapsed();
            match solution {
                Some(solved) => print!("{solved}"),
                None => println!("No solution exists"),
            }
            println!("Time taken: {:.7}s", elapsed.as_secs_f64());
        }
    }

    Ok(())
}
