use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use indexmap::map::Entry::{Occupied, Vacant};

use super::reconstruct::reconstruct_path;
use super::{ParentMap, SearchResult, NO_PARENT};

/// A* search
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// Orders the frontier by estimated total cost f = g + h. With an admissible
/// heuristic the first pop of the goal carries a fewest-step path. Nodes are
/// never permanently closed: a cheaper route found later re-relaxes them and
/// the stale check on pop discards the superseded entries.
///
/// Ties are broken by the full (f, g, node) key: equal f falls to the smaller
/// accumulated cost, then to the node's own ordering. The tie-break decides
/// which of several equally good routes gets expanded, so it is part of the
/// observable trace, not an implementation detail.
pub fn a_star<N, NN, IT, H, G>(
    start: N,
    neighbors: NN,
    heuristic_fn: H,
    goal_fn: G,
) -> SearchResult<N>
where
    N: Eq + Hash + Clone + Ord,
    NN: Fn(&N) -> IT, // returns an iterator over a node's neighbors
    IT: IntoIterator<Item = N>,
    H: Fn(&N) -> usize, // estimated steps to the goal; must not overestimate
    G: Fn(&N) -> bool, // returns true if the goal is met
{
    // Min-priority frontier keyed by (f, g, node)
    let mut frontier: BinaryHeap<HeapEntry<N>> = BinaryHeap::new();

    // node -> (parent index, best known distance from the start)
    let mut parents: ParentMap<N> = ParentMap::default();

    // Expansion order, reported to the caller
    let mut visited: Vec<N> = Vec::new();

    let start_f = heuristic_fn(&start);
    let start_index = parents.insert_full(start.clone(), (NO_PARENT, 0)).0;
    frontier.push(HeapEntry {
        f: start_f,
        g: 0,
        index: start_index,
        node: start,
    });

    let mut goal_index = None;

    while let Some(HeapEntry { g, index, .. }) = frontier.pop() {
        let (node, &(_, best_g)) = parents.get_index(index).unwrap();

        // Lazy deletion: the node was re-relaxed with a smaller g after this
        // entry was pushed
        if g > best_g {
            continue;
        }

        let node = node.clone();
        visited.push(node.clone());

        if goal_fn(&node) {
            goal_index = Some(index);
            break;
        }

        for neighbor in neighbors(&node) {
            let tentative_g = g + 1;
            let h = heuristic_fn(&neighbor);
            let heap_node = neighbor.clone();

            let neighbor_index = match parents.entry(neighbor) {
                Vacant(entry) => {
                    let neighbor_index = entry.index();
                    entry.insert((index, tentative_g));
                    neighbor_index
                }
                Occupied(mut entry) => {
                    if tentative_g < entry.get().1 {
                        entry.insert((index, tentative_g));
                        entry.index()
                    } else {
                        // The known route is at least as cheap
                        continue;
                    }
                }
            };

            frontier.push(HeapEntry {
                f: tentative_g + h,
                g: tentative_g,
                index: neighbor_index,
                node: heap_node,
            });
        }
    }

    let path = match goal_index {
        Some(index) => reconstruct_path(&parents, index),
        None => Vec::new(),
    };

    SearchResult { path, visited }
}

/// Frontier entry carrying the full ordering key. The node itself is the
/// final key: ordering by the map index instead would fall back to discovery
/// order and produce different traces.
#[derive(Debug)]
struct HeapEntry<N> {
    f: usize,
    g: usize,
    index: usize,
    node: N,
}

impl<N: Ord> Ord for HeapEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed (f, g, node) so the max-heap pops the smallest key
        (other.f, other.g, &other.node).cmp(&(self.f, self.g, &self.node))
    }
}

impl<N: Ord> PartialOrd for HeapEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord> PartialEq for HeapEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        (self.f, self.g, &self.node) == (other.f, other.g, &other.node)
    }
}

impl<N: Ord> Eq for HeapEntry<N> {}
