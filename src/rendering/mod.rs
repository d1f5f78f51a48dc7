pub use food_mesh::draw_food;
pub use grid_mesh::{draw_grid, BACKGROUND};
pub use snake_mesh::draw_snake;

pub mod clean_arc;
mod eyes;
mod food_mesh;
mod grid_mesh;
pub mod image_skin;
pub mod shape;
mod snake_mesh;
pub mod sprite;
pub mod surface;
