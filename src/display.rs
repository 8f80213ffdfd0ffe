//! Panel formatting and terminal composition.
//!
//! The figure tool owns the upper-left of the screen; the info panel is
//! laid beside it purely with cursor-movement escapes so the figure's
//! cells are never overwritten.

use crate::config::DisplayConfig;
use crate::data::InfoLine;
use crate::environment::EnvSnapshot;
use crate::error::Result;
use crate::figure;
use crate::utils::command::run_shell;
use std::io::{self, Write};

/// Render one labeled fact with the configured SGR colors
fn format_line(line: &InfoLine, config: &DisplayConfig) -> String {
    format!(
        "\x1b[{}m{}:\x1b[00;{}m {}",
        config.tag_color, line.label, config.value_color, line.value
    )
}

/// Render the whole panel, one colored line per fact
pub fn format_panel(lines: &[InfoLine], config: &DisplayConfig) -> String {
    lines
        .iter()
        .map(|line| format_line(line, config))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prefix every line of `text` with a cursor-forward escape so the text
/// lands `left` columns to the right without touching what is already
/// on screen
pub fn indent(text: &str, left: usize) -> String {
    if left == 0 {
        return text.to_string();
    }
    let forward = format!("\x1b[{}C", left);
    format!("{}{}", forward, text.replace('\n', &format!("\n{}", forward)))
}

/// Rows left between the end of the panel and the bottom of the figure
pub fn remaining_rows(usable_height: usize, line_count: usize, top: usize) -> usize {
    (usable_height as i64 - line_count as i64 - top as i64 - 1).max(0) as usize
}

/// Draw the figure and lay the info panel beside it.
///
/// Stdout is flushed around the external draw call so our escapes and
/// the subprocess's own terminal writes interleave correctly.
pub fn compose(
    tokens: &[String],
    lines: &[InfoLine],
    config: &DisplayConfig,
    env: &EnvSnapshot,
    left: usize,
    usable_height: usize,
) -> Result<()> {
    let mut out = io::stdout();

    // Home the cursor and clear; some terminals misbehave when the
    // figure starts mid-screen.
    write!(out, "\x1b[H\x1b[2J")?;
    out.flush()?;

    figure::draw(tokens)?;
    out.flush()?;

    emit_palette_reset(&mut out, env)?;

    write!(out, "\x1b[{};1H", config.top + 1)?;
    out.flush()?;

    let panel = indent(&format_panel(lines, config), left);
    writeln!(out, "{}", panel)?;

    let line_count = panel.split('\n').count();
    let rows = remaining_rows(usable_height, line_count, config.top);
    if rows > 0 {
        write!(out, "\x1b[{}B", rows)?;
    }
    out.flush()?;
    Ok(())
}

/// Restore the terminal palette after the figure tool may have remapped
/// it: a literal palette string wins, else a palette-printing command,
/// else nothing
fn emit_palette_reset(out: &mut impl Write, env: &EnvSnapshot) -> Result<()> {
    if let Some(palette) = env.palette.as_deref().filter(|p| !p.is_empty()) {
        write!(out, "{}", palette)?;
    } else if let Some(cmd) = env.palette_cmd.as_deref().filter(|c| !c.is_empty()) {
        // Wrapped so the command's trailing newline does not leak an
        // empty line into the layout.
        write!(out, "{}", run_shell(cmd).unwrap_or_default())?;
    }
    Ok(())
}
