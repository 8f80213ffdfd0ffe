//! File reading utilities

use crate::error::{PonyfetchError, Result};
use std::fs;
use std::path::Path;

/// Safely read a file to string with error handling
pub fn read_file_safe<P: AsRef<Path>>(path: P) -> Result<String> {
    fs::read_to_string(path).map_err(PonyfetchError::from)
}

/// Read a file and trim trailing newlines, the usual shape of /proc entries
pub fn read_trimmed<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(read_file_safe(path)?.trim_end_matches('\n').to_string())
}

/// Check if a file exists safely
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}
