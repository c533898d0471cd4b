use std::collections::VecDeque;
use std::hash::Hash;

use indexmap::map::Entry::Vacant;

use super::reconstruct::reconstruct_path;
use super::{ParentMap, SearchResult, NO_PARENT};

/// Breadth-first search
/// https://en.wikipedia.org/wiki/Breadth-first_search
///
/// Expands the frontier one step-layer at a time, so the first time the goal
/// is popped the path leading to it has the fewest possible steps. Each node
/// keeps the backpointer from its first discovery; later sightings are
/// ignored because they cannot be closer to the start.
pub fn bfs<N, NN, IT, G>(start: N, neighbors: NN, goal_fn: G) -> SearchResult<N>
where
    N: Eq + Hash + Clone,
    NN: Fn(&N) -> IT, // returns an iterator over a node's neighbors
    IT: IntoIterator<Item = N>,
    G: Fn(&N) -> bool, // returns true if the goal is met
{
    // FIFO frontier of indices into the parent map
    let mut frontier: VecDeque<usize> = VecDeque::new();

    // node -> (parent index, steps from start); insertion order is discovery order
    let mut parents: ParentMap<N> = ParentMap::default();

    // Expansion order, reported to the caller
    let mut visited: Vec<N> = Vec::new();

    let start_index = parents.insert_full(start, (NO_PARENT, 0)).0;
    frontier.push_back(start_index);

    let mut goal_index = None;

    while let Some(index) = frontier.pop_front() {
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
                frontier.push_back(neighbor_index);
            }
        }
    }

    let path = match goal_index {
        Some(index) => reconstruct_path(&parents, index),
        None => Vec::new(),
    };

    SearchResult { path, visited }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn create_neighbor_fn(
        graph: &HashMap<String, Vec<String>>,
    ) -> impl Fn(&String) -> Vec<String> + '_ {
        move |node: &String| graph.get(node).cloned().unwrap_or_default()
    }

    #[test]
    fn test_bfs_finds_fewest_hop_path() {
        let mut graph = HashMap::new();
        // Two routes to D: via B (2 hops) and via C then E (3 hops)
        graph.insert("A".to_string(), vec!["B".to_string(), "C".to_string()]);
        graph.insert("B".to_string(), vec!["D".to_string()]);
        graph.insert("C".to_string(), vec!["E".to_string()]);
        graph.insert("E".to_string(), vec!["D".to_string()]);

        let result = bfs(
            "A".to_string(),
            create_neighbor_fn(&graph),
            |node: &String| node == "D",
        );

        assert_eq!(result.path, vec!["A", "B", "D"]);
    }

    #[test]
    fn test_bfs_visits_in_breadth_order() {
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec!["B".to_string(), "C".to_string()]);
        graph.insert("B".to_string(), vec!["D".to_string()]);
        graph.insert("C".to_string(), vec!["E".to_string()]);

        let result = bfs(
            "A".to_string(),
            create_neighbor_fn(&graph),
            |node: &String| node == "E",
        );

        // Whole layer at depth 1 is expanded before anything at depth 2
        assert_eq!(result.visited, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_bfs_unreachable_goal_returns_empty_path() {
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec!["B".to_string()]);
        graph.insert("B".to_string(), vec!["C".to_string()]);

        let result = bfs(
            "A".to_string(),
            create_neighbor_fn(&graph),
            |node: &String| node == "Z",
        );

        assert!(result.path.is_empty());
        // The whole reachable component was still explored
        assert_eq!(result.visited, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_bfs_terminates_on_cyclic_graph() {
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec!["B".to_string()]);
        graph.insert("B".to_string(), vec!["C".to_string()]);
        graph.insert("C".to_string(), vec!["A".to_string(), "D".to_string()]);

        let result = bfs(
            "A".to_string(),
            create_neighbor_fn(&graph),
            |node: &String| node == "D",
        );

        assert_eq!(result.path, vec!["A", "B", "C", "D"]);
        assert_eq!(result.visited, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_bfs_start_is_goal() {
        let graph = HashMap::new();

        let result = bfs(
            "A".to_string(),
            create_neighbor_fn(&graph),
            |node: &String| node == "A",
        );

        assert_eq!(result.path, vec!["A"]);
        assert_eq!(result.visited, vec!["A"]);
    }
}
