//! Rectangular occupancy grids and their coordinates.

use std::fmt;

use crate::errors::GridError;

/// State of a single maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Open,
    Wall,
}

/// 2D grid coordinate, zero-indexed, row before column.
///
/// The derived ordering is lexicographic (row, then column). A* uses it as
/// the last tie-break key in its frontier, so changing it changes traces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Coord> for (usize, usize) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Manhattan distance between two coordinates. Admissible and consistent for
/// 4-connected unit-cost movement, which is what A* requires of it.
pub fn manhattan(a: Coord, b: Coord) -> usize {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

/// Rectangular maze grid. Cells are stored row-major in a flat vector.
///
/// Searches only read the grid; construction happens through [`Grid::new`],
/// [`Grid::from_matrix`] or the maze generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a fully open grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Open; rows * cols],
        }
    }

    /// Build a grid from pre-sampled cells in row-major order.
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Build a grid from the interchange matrix format: 0 is open, any other
    /// value is a wall.
    pub fn from_matrix(matrix: &[Vec<u8>]) -> Result<Self, GridError> {
        if matrix.is_empty() || matrix[0].is_empty() {
            return Err(GridError::EmptyGrid);
        }

        let cols = matrix[0].len();
        let mut cells = Vec::with_capacity(matrix.len() * cols);

        for (row, values) in matrix.iter().enumerate() {
            if values.len() != cols {
                return Err(GridError::NonRectangular {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            cells.extend(
                values
                    .iter()
                    .map(|&value| if value == 0 { Cell::Open } else { Cell::Wall }),
            );
        }

        Ok(Self {
            rows: matrix.len(),
            cols,
            cells,
        })
    }

    /// Export to the interchange matrix format (0 open, 1 wall).
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| match self.cells[row * self.cols + col] {
                        Cell::Open => 0,
                        Cell::Wall => 1,
                    })
                    .collect()
            })
            .collect()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the coordinate lies inside the grid.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.row * self.cols + coord.col)
        } else {
            None
        }
    }

    /// Cell at the coordinate, or `None` out of bounds.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|index| self.cells[index])
    }

    /// Overwrite one cell.
    ///
    /// # Panics
    ///
    /// Panics when the coordinate is out of bounds.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        let index = self.index(coord).expect("coordinate out of bounds");
        self.cells[index] = cell;
    }

    /// Whether the coordinate is inside the grid and open. Walls and
    /// out-of-bounds queries both answer false, so callers never need a
    /// separate bounds check.
    pub fn is_open(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Open))
    }

    /// In-bounds 4-neighbors in fixed north, south, west, east order.
    ///
    /// The order is contractual: every search expands neighbors in exactly
    /// this sequence, which pins down discovery order and with it the visit
    /// traces. Walls are not filtered here; callers pair this with
    /// [`Grid::is_open`] when they want passable neighbors only.
    pub fn neighbors4(&self, coord: Coord) -> Vec<Coord> {
        let Coord { row, col } = coord;
        let candidates = [
            row.checked_sub(1).map(|r| Coord::new(r, col)), // north
            Some(Coord::new(row + 1, col)),                 // south
            col.checked_sub(1).map(|c| Coord::new(row, c)), // west
            Some(Coord::new(row, col + 1)),                 // east
        ];

        candidates
            .into_iter()
            .flatten()
            .filter(|&neighbor| self.in_bounds(neighbor))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors4_order_is_north_south_west_east() {
        let grid = Grid::new(3, 3);

        let neighbors = grid.neighbors4(Coord::new(1, 1));

        assert_eq!(
            neighbors,
            vec![
                Coord::new(0, 1), // north
                Coord::new(2, 1), // south
                Coord::new(1, 0), // west
                Coord::new(1, 2), // east
            ]
        );
    }

    #[test]
    fn test_neighbors4_drops_out_of_bounds_cells() {
        let grid = Grid::new(2, 2);

        // Top-left corner keeps south and east only
        assert_eq!(
            grid.neighbors4(Coord::new(0, 0)),
            vec![Coord::new(1, 0), Coord::new(0, 1)]
        );
        // Bottom-right corner keeps north and west only
        assert_eq!(
            grid.neighbors4(Coord::new(1, 1)),
            vec![Coord::new(0, 1), Coord::new(1, 0)]
        );
    }

    #[test]
    fn test_neighbors4_reports_walls() {
        let grid = Grid::from_matrix(&[vec![0, 1], vec![0, 0]]).unwrap();

        // Adjacency and passability are separate questions
        assert!(grid.neighbors4(Coord::new(0, 0)).contains(&Coord::new(0, 1)));
        assert!(!grid.is_open(Coord::new(0, 1)));
    }

    #[test]
    fn test_is_open_false_for_walls_and_out_of_bounds() {
        let grid = Grid::from_matrix(&[vec![0, 1], vec![0, 0]]).unwrap();

        assert!(grid.is_open(Coord::new(0, 0)));
        assert!(!grid.is_open(Coord::new(0, 1)));
        assert!(!grid.is_open(Coord::new(2, 0)));
        assert!(!grid.is_open(Coord::new(0, 5)));
    }

    #[test]
    fn test_from_matrix_maps_zero_to_open_and_nonzero_to_wall() {
        let grid = Grid::from_matrix(&[vec![0, 1, 2], vec![9, 0, 0]]).unwrap();

        assert_eq!(grid.get(Coord::new(0, 0)), Some(Cell::Open));
        assert_eq!(grid.get(Coord::new(0, 1)), Some(Cell::Wall));
        assert_eq!(grid.get(Coord::new(0, 2)), Some(Cell::Wall));
        assert_eq!(grid.get(Coord::new(1, 0)), Some(Cell::Wall));
        assert_eq!(grid.to_matrix(), vec![vec![0, 1, 1], vec![1, 0, 0]]);
    }

    #[test]
    fn test_from_matrix_rejects_empty_input() {
        assert!(matches!(Grid::from_matrix(&[]), Err(GridError::EmptyGrid)));
        assert!(matches!(
            Grid::from_matrix(&[vec![]]),
            Err(GridError::EmptyGrid)
        ));
    }

    #[test]
    fn test_from_matrix_rejects_ragged_rows() {
        let result = Grid::from_matrix(&[vec![0, 0], vec![0]]);

        assert!(matches!(
            result,
            Err(GridError::NonRectangular {
                row: 1,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(manhattan(Coord::new(0, 0), Coord::new(4, 4)), 8);
        assert_eq!(manhattan(Coord::new(2, 5), Coord::new(2, 5)), 0);
        // Symmetric regardless of which coordinate is larger
        assert_eq!(manhattan(Coord::new(3, 1), Coord::new(0, 2)), 4);
        assert_eq!(manhattan(Coord::new(0, 2), Coord::new(3, 1)), 4);
    }

    #[test]
    fn test_coord_orders_row_before_column() {
        assert!(Coord::new(0, 9) < Coord::new(1, 0));
        assert!(Coord::new(2, 1) < Coord::new(2, 3));
    }
}
