pub use cell::{Cell, GridDim};
pub use dir::Dir;
pub use grid::GridGeometry;
pub use point::Point;

#[cfg(test)]
pub use point::assert_close;

mod cell;
mod dir;
mod grid;
mod point;
