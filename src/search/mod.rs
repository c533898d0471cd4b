//! Search algorithms sharing one result contract.
//!
//! Each algorithm is generic over the node type and borrows its topology
//! through closures: a neighbor enumerator and a goal predicate. The same
//! code therefore serves ad-hoc graphs in tests and the [`Grid`] adapter in
//! [`solve`]. Every step costs one; there are no edge weights in this crate.

use std::fmt;
use std::str::FromStr;

use crate::collections::FxIndexMap;
use crate::errors::SolveError;
use crate::grid::{manhattan, Coord, Grid};

mod a_star;
mod bfs;
mod dfs;
mod dijkstra;
mod reconstruct;

pub use a_star::a_star;
pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;

/// Backpointer map shared by all searches: node -> (parent index, cost from
/// start). Insertion order doubles as discovery order, and entries refer to
/// their parents by index into the same map.
pub(crate) type ParentMap<N> = FxIndexMap<N, (usize, usize)>;

/// Parent index marking the start node, which has no parent.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// What every search reports back.
///
/// An unreachable goal is not an error: `path` comes back empty while
/// `visited` still holds the full exploration trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult<N> {
    /// Start-to-goal path, both endpoints included. Empty when the goal was
    /// never reached.
    pub path: Vec<N>,
    /// Every expanded node in expansion order, the goal included when it was
    /// reached. Discovered-but-never-expanded nodes are absent.
    pub visited: Vec<N>,
}

impl<N> SearchResult<N> {
    /// Whether a path was found.
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// The four interchangeable search strategies.
///
/// `Display` renders the human-facing labels used in tables and CSV output
/// (`BFS`, `DFS`, `Dijkstra`, `A*`); [`Algorithm::from_str`] parses the
/// lowercase wire names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    /// Canonical run order for comparisons and reports.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    /// Wire identifier, the form [`Algorithm::from_str`] accepts.
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "A*",
        };
        f.write_str(label)
    }
}

impl FromStr for Algorithm {
    type Err = SolveError;

    /// Names are case-sensitive: exactly `bfs`, `dfs`, `dijkstra`, `astar`.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" => Ok(Algorithm::AStar),
            other => Err(SolveError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Run one algorithm over a grid from `start` to `goal`.
///
/// Movement is 4-connected between open cells, one step per move. Neighbors
/// are offered in the grid's fixed north, south, west, east order, which
/// makes every trace reproducible. A* measures its heuristic as Manhattan
/// distance to the goal.
///
/// The endpoints are taken as given: the search stands on the start cell
/// even when it is a wall or out of bounds, because passability is only
/// checked when stepping onto a neighbor. An out-of-bounds start has no
/// neighbors at all and the search ends after expanding it. An unreachable
/// goal simply yields an empty path.
pub fn solve(algorithm: Algorithm, grid: &Grid, start: Coord, goal: Coord) -> SearchResult<Coord> {
    let neighbors = |coord: &Coord| {
        grid.neighbors4(*coord)
            .into_iter()
            .filter(|&neighbor| grid.is_open(neighbor))
            .collect::<Vec<_>>()
    };
    let reached_goal = |coord: &Coord| *coord == goal;

    match algorithm {
        Algorithm::Bfs => bfs(start, neighbors, reached_goal),
        Algorithm::Dfs => dfs(start, neighbors, reached_goal),
        Algorithm::Dijkstra => dijkstra(start, neighbors, reached_goal),
        Algorithm::AStar => a_star(
            start,
            neighbors,
            |coord: &Coord| manhattan(*coord, goal),
            reached_goal,
        ),
    }
}
