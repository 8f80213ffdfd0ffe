//! ponyfetch library
//!
//! Shows computer information beside a pony drawn by ponysay.

pub mod collectors;
pub mod config;
pub mod data;
pub mod display;
pub mod environment;
pub mod error;
pub mod figure;
pub mod utils;

pub use config::DisplayConfig;
pub use data::{FigureChoice, FigureGeometry, InfoLine};
pub use environment::EnvSnapshot;
pub use error::{PonyfetchError, Result};
