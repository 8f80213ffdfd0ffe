//! Command execution utilities

use crate::error::{PonyfetchError, Result};
use std::process::Command;

/// Execute a command and return stdout as String
pub fn run_command(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program).args(args).output()?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim_end_matches('\n').to_string())
    } else {
        Err(PonyfetchError::Detection(format!(
            "Command '{}' failed with exit code: {:?}",
            program,
            output.status.code()
        )))
    }
}

/// Execute a command line through `sh -c` and return stdout as String
pub fn run_shell(command_line: &str) -> Result<String> {
    run_command("sh", &["-c", command_line])
}
