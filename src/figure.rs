//! Figure selection, geometry query, and drawing through the external
//! figure tool

use crate::data::figure::FigureGeometry;
use crate::error::{PonyfetchError, Result};
use crate::utils::command::run_command;
use crate::utils::parsing::strip_escapes;
use rand::seq::SliceRandom;
use std::process::Command;

const FIGURE_TOOL: &str = "ponysay";

/// Pick one figure invocation uniformly at random
pub fn choose(ponies: &[Vec<String>]) -> Result<Vec<String>> {
    ponies
        .choose(&mut rand::thread_rng())
        .cloned()
        .ok_or_else(|| {
            PonyfetchError::Config("empty figure list, nothing to draw".to_string())
        })
}

/// Query the figure tool for the rendered dimensions of a figure
pub fn query_geometry(tokens: &[String]) -> Result<FigureGeometry> {
    let mut args = vec!["-i"];
    args.extend(tokens.iter().map(String::as_str));
    let dump = run_command(FIGURE_TOOL, &args)?;
    parse_geometry(&dump)
}

/// Parse the info dump into a geometry record.
///
/// Lines arrive colored; a line matches a key when it begins with
/// `KEY: ` once escapes are stripped. Every key is mandatory.
pub fn parse_geometry(dump: &str) -> Result<FigureGeometry> {
    Ok(FigureGeometry {
        width: select_info(dump, "WIDTH")?,
        height: select_info(dump, "HEIGHT")?,
        balloon_top: select_info(dump, "BALLOON TOP")?,
        balloon_bottom: select_info(dump, "BALLOON BOTTOM")?,
    })
}

fn select_info(dump: &str, key: &str) -> Result<usize> {
    let prefix = format!("{}: ", key);
    for line in dump.lines() {
        let plain = strip_escapes(line);
        if let Some(value) = plain.strip_prefix(&prefix) {
            return value.trim().parse().map_err(|_| {
                PonyfetchError::Parse(format!(
                    "figure info field '{}' is not an integer: {}",
                    key,
                    value.trim()
                ))
            });
        }
    }
    Err(PonyfetchError::Detection(format!(
        "figure info dump is missing '{}'",
        key
    )))
}

/// Draw the figure to the terminal.
///
/// The tool inherits our stdio and writes the terminal directly; its
/// output is authoritative and never intercepted.
pub fn draw(tokens: &[String]) -> Result<()> {
    let status = Command::new(FIGURE_TOOL)
        .arg("-o")
        .args(tokens)
        .status()?;
    if status.success() {
        Ok(())
    } else {
        Err(PonyfetchError::Detection(format!(
            "'{}' exited with code: {:?}",
            FIGURE_TOOL,
            status.code()
        )))
    }
}

/// Number of rows of the controlling terminal.
///
/// Asks the kernel directly first and falls back to spawning
/// `stty size`; `None` when neither side knows (not a terminal).
pub fn terminal_rows() -> Option<usize> {
    unsafe {
        let mut size: libc::winsize = std::mem::zeroed();
        if libc::ioctl(
            libc::STDOUT_FILENO,
            libc::TIOCGWINSZ,
            &mut size as *mut libc::winsize,
        ) == 0
            && size.ws_row > 0
        {
            return Some(size.ws_row as usize);
        }
    }

    let output = Command::new("stty")
        .arg("size")
        .stdin(std::process::Stdio::inherit())
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8_lossy(&output.stdout)
        .split_whitespace()
        .next()?
        .parse()
        .ok()
}
