//! Small shared helpers (command spawning, file reading, parsing)

pub mod command;
pub mod file;
pub mod parsing;
