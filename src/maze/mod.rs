pub mod ascii_utils;
pub mod cell;
pub mod direction;
pub mod error;
pub mod frontier;
pub mod generator;
pub mod grid;
pub mod loader;
pub mod solver;
