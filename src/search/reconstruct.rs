use super::{ParentMap, NO_PARENT};

/// Walk backpointers from the goal's entry to the root and return the
/// start-to-goal path. Indices come from the map that recorded them, so
/// every lookup succeeds.
pub(super) fn reconstruct_path<N>(parents: &ParentMap<N>, goal_index: usize) -> Vec<N>
where
    N: Clone,
{
    let mut path = Vec::new();
    let mut index = goal_index;

    // Trace back from goal to start
    while index != NO_PARENT {
        let (node, &(parent_index, _)) = parents.get_index(index).unwrap();
        path.push(node.clone());
        index = parent_index;
    }

    // The walk collected the path goal-first
    path.reverse();
    path
}
