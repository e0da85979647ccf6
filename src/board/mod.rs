pub mod cell;
pub mod geometry;
pub mod state;
