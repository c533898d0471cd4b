//! Maze generation and grid search.
//!
//! `mazekit` generates random rectangular mazes with a guaranteed-solvable
//! path (bounded rejection sampling backed by a reachability check) and
//! solves them with four interchangeable strategies: breadth-first,
//! depth-first, Dijkstra and A*. All four report through one contract, the
//! discovered path plus the ordered trace of expanded cells, which makes
//! their exploration behavior directly comparable.
//!
//! ```
//! use mazekit::{generate, solve, Algorithm, Coord, MazeConfig};
//!
//! let mut config = MazeConfig::new(5, 5, 0.0);
//! config.seed = Some(42);
//! let grid = generate(&config);
//!
//! let result = solve(Algorithm::Bfs, &grid, Coord::new(0, 0), Coord::new(4, 4));
//! assert_eq!(result.path.len(), 9); // 8 steps across an open 5x5 grid
//! ```
//!
//! Failure to find a path is data, not an error: the result carries an empty
//! `path` next to the full `visited` trace. The generator likewise never
//! fails; if no solvable maze appears within its attempt budget it returns
//! the last sample and lets the solver report the dead end.

mod collections;

pub mod compare;
pub mod errors;
pub mod grid;
pub mod maze;
pub mod search;

pub use compare::{compare, run_report, RunReport};
pub use errors::{GridError, SolveError};
pub use grid::{manhattan, Cell, Coord, Grid};
pub use maze::{generate, MazeConfig, DEFAULT_MAX_ATTEMPTS};
pub use search::{solve, Algorithm, SearchResult};
