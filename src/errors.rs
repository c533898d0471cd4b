
#[derive(Debug)]
pub enum GridError {
    EmptyGrid, // Zero rows or a zero-length first row
    NonRectangular { row: usize, expected: usize, found: usize }, // Ragged input matrix
}

#[derive(Debug)]
pub enum SolveError {
    UnknownAlgorithm(String), // Name is not one of bfs, dfs, dijkstra, astar
}
