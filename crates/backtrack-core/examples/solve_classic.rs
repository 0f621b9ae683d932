//! Basic example of using the solver library

use backtrack_core::{Grid, Heuristic, Solver, SolverConfig};

fn main() {
    // Parse a puzzle from a string
    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let puzzle = Grid::from_string(puzzle_string).expect("valid puzzle string");

    println!("Puzzle:");
    println!("{}", puzzle);
    println!("Empty cells: {}", puzzle.empty_count());

    // Solve it
    let solver = Solver::new();
    println!("\nSolving...\n");
    if let Some(solution) = solver.solve(&puzzle) {
        println!("Solution:");
        println!("{}", solution);
    } else {
        println!("No solution exists");
    }

    // Check uniqueness
    let solutions = solver.count_solutions(&puzzle, 2);
    println!("Number of solutions (up to 2): {}", solutions);

    // Solve with the simpler scan-order heuristic instead
    let scan_solver = Solver::with_config(SolverConfig {
        heuristic: Heuristic::FirstEmpty,
    });
    assert!(scan_solver.solve(&puzzle).is_some());
}
