use rand::Rng;

use crate::basic::{Cell, GridDim, Point};

/// Pixel layout of the board
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridGeometry {
    /// Side of a square cell in pixels
    pub cell_size: f32,
    pub dim: GridDim,
}

impl GridGeometry {
    pub fn new(cell_size: f32, cols: i32, rows: i32) -> Self {
        assert!(cell_size > 0. && cols > 0 && rows > 0, "degenerate grid");
        Self { cell_size, dim: GridDim { cols, rows } }
    }

    pub fn cols(&self) -> i32 {
        self.dim.cols
    }

    pub fn rows(&self) -> i32 {
        self.dim.rows
    }

    /// Top-left pixel of a cell relative to the board origin
    pub fn cell_origin(&self, cell: Cell) -> Point {
        Point {
            x: cell.col as f32 * self.cell_size,
            y: cell.row as f32 * self.cell_size,
        }
    }

    pub fn cell_center(&self, cell: Cell) -> Point {
        self.cell_origin(cell) + Point::square(self.cell_size / 2.)
    }

    /// Size of the whole board in pixels
    pub fn board_size(&self) -> Point {
        Point {
            x: self.dim.cols as f32 * self.cell_size,
            y: self.dim.rows as f32 * self.cell_size,
        }
    }

    /// Uniformly random cell not contained in `occupied`, `occupied` must not
    /// contain duplicates
    pub fn random_free_cell(&self, occupied: &[Cell], rng: &mut impl Rng) -> Option<Cell> {
        let total = self.dim.num_cells();
        let free_spaces = total - occupied.len();
        if free_spaces == 0 {
            return None;
        }

        let mut new_idx = rng.gen_range(0..free_spaces);
        let mut occupied_indices: Vec<_> = occupied.iter().map(|c| c.index(self.dim)).collect();
        occupied_indices.sort_unstable();
        for idx in occupied_indices {
            if idx <= new_idx {
                new_idx += 1;
            }
        }

        assert!(new_idx < total);
        Some(Cell {
            col: (new_idx % self.dim.cols as usize) as i32,
            row: (new_idx / self.dim.cols as usize) as i32,
        })
    }
}

#[test]
fn test_cell_center() {
    let grid = GridGeometry::new(20., 40, 30);
    assert_eq!(grid.cell_center(Cell::new(0, 0)), Point { x: 10., y: 10. });
    assert_eq!(grid.cell_center(Cell::new(2, 1)), Point { x: 50., y: 30. });
    assert_eq!(grid.board_size(), Point { x: 800., y: 600. });
}

#[test]
fn test_random_free_cell_skips_occupied() {
    let grid = GridGeometry::new(10., 3, 2);
    let mut occupied = vec![
        Cell::new(0, 0),
        Cell::new(1, 0),
        Cell::new(2, 0),
        Cell::new(0, 1),
        Cell::new(2, 1),
    ];
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        assert_eq!(grid.random_free_cell(&occupied, &mut rng), Some(Cell::new(1, 1)));
    }
    occupied.push(Cell::new(1, 1));
    assert_eq!(grid.random_free_cell(&occupied, &mut rng), None);
}
