use std::fmt::{Debug, Formatter};

use num_integer::Integer;

use crate::basic::Dir;

/// A cell on the board, `0 <= col < cols` and `0 <= row < rows`
/// for every cell produced by the simulation
#[derive(Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Hash, Add, Sub)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct GridDim {
    pub cols: i32,
    pub rows: i32,
}

impl GridDim {
    pub fn contains(self, cell: Cell) -> bool {
        (0..self.cols).contains(&cell.col) && (0..self.rows).contains(&cell.row)
    }

    pub fn num_cells(self) -> usize {
        self.cols.max(0) as usize * self.rows.max(0) as usize
    }

    pub fn center(self) -> Cell {
        Cell { col: self.cols / 2, row: self.rows / 2 }
    }
}

impl Cell {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Translate by `dist` cells, wrapping around both axes
    pub fn wrapping_translate(self, dir: Dir, dist: i32, dim: GridDim) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            col: (self.col + dx * dist).mod_floor(&dim.cols),
            row: (self.row + dy * dist).mod_floor(&dim.rows),
        }
    }

    /// Index in row-major order
    pub fn index(self, dim: GridDim) -> usize {
        (self.row * dim.cols + self.col) as usize
    }
}

impl Debug for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}, {}>", self.col, self.row)
    }
}

#[test]
fn test_wrapping_translate() {
    let dim = GridDim { cols: 40, rows: 30 };
    let cases = [
        (Cell::new(0, 0), Dir::L, Cell::new(39, 0)),
        (Cell::new(0, 0), Dir::U, Cell::new(0, 29)),
        (Cell::new(39, 29), Dir::R, Cell::new(0, 29)),
        (Cell::new(39, 29), Dir::D, Cell::new(39, 0)),
        (Cell::new(20, 15), Dir::R, Cell::new(21, 15)),
    ];
    for (start, dir, expected) in cases {
        let moved = start.wrapping_translate(dir, 1, dim);
        assert_eq!(moved, expected, "{:?} + {:?}", start, dir);
        assert!(dim.contains(moved));
    }
}

#[test]
fn test_num_cells_of_a_huge_board() {
    let dim = GridDim { cols: 100_000, rows: 100_000 };
    assert_eq!(dim.num_cells(), 10_000_000_000);
    assert_eq!(GridDim { cols: 40, rows: 30 }.num_cells(), 1200);
}
