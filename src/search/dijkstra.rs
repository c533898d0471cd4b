use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use indexmap::map::Entry::{Occupied, Vacant};

use super::reconstruct::reconstruct_path;
use super::{ParentMap, SearchResult, NO_PARENT};

/// Identify the fewest-step path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
///
/// Every step costs one, so the outcome matches BFS. It still runs over a
/// priority frontier with relaxation and lazy deletion: superseded heap
/// entries are not removed, they are skipped when popped because the map
/// already holds a smaller distance. Ties between equal distances pop in
/// whatever order the heap holds them; no further ordering is promised.
pub fn dijkstra<N, NN, IT, G>(start: N, neighbors: NN, goal_fn: G) -> SearchResult<N>
where
    N: Eq + Hash + Clone,
    NN: Fn(&N) -> IT, // returns an iterator over a node's neighbors
    IT: IntoIterator<Item = N>,
    G: Fn(&N) -> bool, // returns true if the goal is met
{
    // Min-priority frontier keyed by distance from the start
    let mut frontier: BinaryHeap<HeapEntry> = BinaryHeap::new();

    // node -> (parent index, best known distance)
    let mut parents: ParentMap<N> = ParentMap::default();

    // Expansion order, reported to the caller
    let mut visited: Vec<N> = Vec::new();

    let start_index = parents.insert_full(start, (NO_PARENT, 0)).0;
    frontier.push(HeapEntry {
        index: start_index,
        dist: 0,
    });

    let mut goal_index = None;

    while let Some(HeapEntry { index, dist }) = frontier.pop() {
        let (node, &(_, best)) = parents.get_index(index).unwrap();

        // Lazy deletion: a shorter route to this node was relaxed in after
        // this entry was pushed
        if dist > best {
            continue;
        }

        let node = node.clone();
        visited.push(node.clone());

        if goal_fn(&node) {
            goal_index = Some(index);
            break;
        }

        for neighbor in neighbors(&node) {
            let next_dist = dist + 1;

            let neighbor_index = match parents.entry(neighbor) {
                Vacant(entry) => {
                    let neighbor_index = entry.index();
                    entry.insert((index, next_dist));
                    neighbor_index
                }
                Occupied(mut entry) => {
                    if next_dist < entry.get().1 {
                        entry.insert((index, next_dist));
                        entry.index()
                    } else {
                        // The known route is at least as short
                        continue;
                    }
                }
            };

            frontier.push(HeapEntry {
                index: neighbor_index,
                dist: next_dist,
            });
        }
    }

    let path = match goal_index {
        Some(index) => reconstruct_path(&parents, index),
        None => Vec::new(),
    };

    SearchResult { path, visited }
}

/// Frontier entry: the node's index in the parent map plus its distance.
/// Ordering is on distance alone and reversed, turning the max-heap into a
/// min-heap.
#[derive(Debug)]
struct HeapEntry {
    index: usize,
    dist: usize,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.dist.cmp(&self.dist)
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.dist == other.dist
    }
}

impl Eq for HeapEntry {}

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
    fn test_dijkstra_finds_fewest_step_path() {
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec!["B".to_string(), "C".to_string()]);
        graph.insert("B".to_string(), vec!["D".to_string()]);
        graph.insert("C".to_string(), vec!["E".to_string()]);
        graph.insert("E".to_string(), vec!["D".to_string()]);

        let result = dijkstra(
            "A".to_string(),
            create_neighbor_fn(&graph),
            |node: &String| node == "D",
        );

        assert_eq!(result.path, vec!["A", "B", "D"]);
    }

    #[test]
    fn test_dijkstra_handles_unreachable_goal() {
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec!["B".to_string()]);
        graph.insert("B".to_string(), vec!["C".to_string()]);

        let result = dijkstra(
            "A".to_string(),
            create_neighbor_fn(&graph),
            |node: &String| node == "Z",
        );

        assert!(result.path.is_empty());
        assert_eq!(result.visited, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_dijkstra_with_cycle() {
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec!["B".to_string()]);
        graph.insert("B".to_string(), vec!["C".to_string()]);
        graph.insert("C".to_string(), vec!["A".to_string(), "D".to_string()]);

        let result = dijkstra(
            "A".to_string(),
            create_neighbor_fn(&graph),
            |node: &String| node == "D",
        );

        assert_eq!(result.path, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_dijkstra_matches_bfs_path_length() {
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec!["B".to_string(), "C".to_string()]);
        graph.insert("B".to_string(), vec!["D".to_string()]);
        graph.insert("C".to_string(), vec!["D".to_string()]);
        graph.insert("D".to_string(), vec!["E".to_string()]);

        let via_dijkstra = dijkstra(
            "A".to_string(),
            create_neighbor_fn(&graph),
            |node: &String| node == "E",
        );
        let via_bfs = crate::search::bfs(
            "A".to_string(),
            create_neighbor_fn(&graph),
            |node: &String| node == "E",
        );

        // Which depth-2 parent D gets may differ; the step count may not
        assert_eq!(via_dijkstra.path.len(), via_bfs.path.len());
        assert_eq!(via_dijkstra.path.first(), via_bfs.path.first());
        assert_eq!(via_dijkstra.path.last(), via_bfs.path.last());
    }
}
