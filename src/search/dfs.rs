use std::hash::Hash;

use indexmap::map::Entry::Vacant;

use super::reconstruct::reconstruct_path;
use super::{ParentMap, SearchResult, NO_PARENT};

/// Depth-first search
/// https://en.wikipedia.org/wiki/Depth-first_search
///
/// Follows the most recently discovered node first, committing to one branch
/// before backing out. Finds a path when one exists, with no shortness
/// guarantee. A node's backpointer is fixed the moment it is first pushed,
/// even if the node is only expanded much later (or never), so the returned
/// path reflects discovery order rather than expansion order.
pub fn dfs<N, NN, IT, G>(start: N, neighbors: NN, goal_fn: G) -> SearchResult<N>
where
    N: Eq + Hash + Clone,
    NN: Fn(&N) -> IT, // returns an iterator over a node's neighbors
    IT: IntoIterator<Item = N>,
    G: Fn(&N) -> bool, // returns true if the goal is met
{
    // LIFO frontier: the neighbor pushed last is expanded first
    let mut frontier: Vec<usize> = Vec::new();

    // node -> (parent index, steps from start); insertion order is discovery order
    let mut parents: ParentMap<N> = ParentMap::default();

    // Expansion order, reported to the caller
    let mut visited: Vec<N> = Vec::new();

    let start_index = parents.insert_full(start, (NO_PARENT, 0)).0;
    frontier.push(start_index);

    let mut goal_index = None;

    while let Some(index) = frontier.pop() {
        let (node, &(_, steps)) = parents.get_index(index).unwrap();
        let node = node.clone();
        visited.push(node.clone());

        if goal_fn(&node) {
            goal_index = Some(index);
            break;
        }

        for neighbor in neighbors(&node) {
            if let Vacant(entry) = parents.entry(neighbor) {
                let neighbor_index = entry.index();
                entry.insert((index, steps + 1));
                frontier.push(neighbor_index);
            }
        }
    }

    let path = match goal_index {
        Some(index) => reconstruct_path(&parents, index),
        None => Vec::new(),
    };

    SearchResult { path, visited }
}
