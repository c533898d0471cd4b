//! Side-by-side runs of every algorithm on one grid.

use std::time::{Duration, Instant};

use crate::grid::{Coord, Grid};
use crate::search::{solve, Algorithm};

/// Outcome summary for one algorithm on one maze.
#[derive(Clone, Debug)]
pub struct RunReport {
    pub algorithm: Algorithm,
    /// Wall-clock time of the solve call.
    pub elapsed: Duration,
    /// Number of expanded cells.
    pub visited_count: usize,
    /// Path length counted in steps (edges), 0 when no path was found.
    pub path_length: usize,
    /// Whether a path from `start` to `goal` was found.
    pub success: bool,
}

/// Time one algorithm on the grid and summarize the outcome.
pub fn run_report(algorithm: Algorithm, grid: &Grid, start: Coord, goal: Coord) -> RunReport {
    let timer = Instant::now();
    let result = solve(algorithm, grid, start, goal);
    let elapsed = timer.elapsed();

    let success = result.path.first() == Some(&start) && result.path.last() == Some(&goal);

    RunReport {
        algorithm,
        elapsed,
        visited_count: result.visited.len(),
        path_length: result.path.len().saturating_sub(1),
        success,
    }
}

/// Run all four algorithms on the same grid, in the canonical order.
pub fn compare(grid: &Grid, start: Coord, goal: Coord) -> Vec<RunReport> {
    Algorithm::ALL
        .into_iter()
        .map(|algorithm| run_report(algorithm, grid, start, goal))
        .collect()
}
