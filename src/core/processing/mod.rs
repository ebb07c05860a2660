pub mod compose;
pub mod grid;
