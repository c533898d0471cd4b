//! Random maze generation with a solvability guarantee.
//!
//! Grids are sampled cell by cell and kept only if the goal is reachable
//! from the start. The guarantee is bounded: after [`MazeConfig::max_attempts`]
//! failed samples the last one is returned anyway, and the caller finds out
//! through the empty path the solver reports.

use std::collections::VecDeque;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::collections::FxHashSet;
use crate::grid::{Cell, Coord, Grid};

/// Attempt budget used when the caller does not override it.
pub const DEFAULT_MAX_ATTEMPTS: usize = 200;

/// Parameters for [`generate`].
#[derive(Clone, Debug)]
pub struct MazeConfig {
    /// Grid height.
    pub rows: usize,
    /// Grid width.
    pub cols: usize,
    /// Independent probability that a sampled cell becomes a wall.
    pub wall_probability: f64,
    /// Entry cell, always left open.
    pub start: Coord,
    /// Exit cell, always left open.
    pub goal: Coord,
    /// How many grids to sample before settling for an unsolvable one.
    pub max_attempts: usize,
    /// Fixed RNG seed for reproducible mazes; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl MazeConfig {
    /// Start at the top-left corner, goal at the bottom-right, default
    /// attempt budget, OS seeding.
    pub fn new(rows: usize, cols: usize, wall_probability: f64) -> Self {
        Self {
            rows,
            cols,
            wall_probability,
            start: Coord::new(0, 0),
            goal: Coord::new(rows.saturating_sub(1), cols.saturating_sub(1)),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

/// Generate a random maze, resampling until a start-to-goal path exists.
///
/// Each cell independently becomes a wall with `wall_probability`, except
/// `start` and `goal` which are always open. The first solvable sample wins.
/// When the attempt budget runs out the last sample is returned as-is; a
/// zero budget still samples one grid.
///
/// # Panics
///
/// Panics when `wall_probability` is outside `[0, 1]`.
pub fn generate(config: &MazeConfig) -> Grid {
    assert!(
        (0.0..=1.0).contains(&config.wall_probability),
        "wall probability must lie in [0, 1], got {}",
        config.wall_probability
    );

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let max_attempts = config.max_attempts.max(1);
    let mut grid = sample_grid(config, &mut rng);

    for attempt in 1.. {
        if has_path(&grid, config.start, config.goal) {
            debug!("solvable maze after {attempt} attempt(s)");
            return grid;
        }
        if attempt >= max_attempts {
            break;
        }
        grid = sample_grid(config, &mut rng);
    }

    debug!("no solvable maze within {max_attempts} attempts, returning the last sample");
    grid
}

/// Sample one grid. Start and goal are skipped during sampling, which leaves
/// them open without ever indexing into the grid; endpoints outside the grid
/// are thereby tolerated, the same way the searches tolerate them.
fn sample_grid(config: &MazeConfig, rng: &mut StdRng) -> Grid {
    let mut cells = Vec::with_capacity(config.rows * config.cols);

    for row in 0..config.rows {
        for col in 0..config.cols {
            let coord = Coord::new(row, col);
            let cell = if coord == config.start || coord == config.goal {
                Cell::Open
            } else if rng.random_bool(config.wall_probability) {
                Cell::Wall
            } else {
                Cell::Open
            };
            cells.push(cell);
        }
    }

    Grid::from_cells(config.rows, config.cols, cells)
}

/// Reachability check: a plain breadth-first flood from `start`.
///
/// Keeps no backpointers and no trace, so it is cheaper than the public
/// searches and its answer is all the generator needs.
fn has_path(grid: &Grid, start: Coord, goal: Coord) -> bool {
    let mut frontier = VecDeque::new();
    let mut seen = FxHashSet::default();

    frontier.push_back(start);
    seen.insert(start);

    while let Some(coord) = frontier.pop_front() {
        if coord == goal {
            return true;
        }
        for neighbor in grid.neighbors4(coord) {
            if grid.is_open(neighbor) && seen.insert(neighbor) {
                frontier.push_back(neighbor);
            }
        }
    }

    false
}
