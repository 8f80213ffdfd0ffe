//! Plain data structures shared across the crate

pub mod figure;
pub mod info;

pub use figure::{FigureChoice, FigureGeometry};
pub use info::InfoLine;
