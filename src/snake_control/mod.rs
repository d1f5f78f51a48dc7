pub use keyboard::{InputMapper, Intent};

mod keyboard;
