//! Figure choice and geometry structures

use serde::Deserialize;

/// One entry of the configured figure list.
///
/// A `Raw` entry is a single string that gets split on whitespace when
/// normalized; a `Tokens` entry is already an argument list and passes
/// through as-is.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum FigureChoice {
    Raw(String),
    Tokens(Vec<String>),
}

impl FigureChoice {
    /// Resolve the choice into a normalized argument list.
    ///
    /// Whitespace-splitting discards empty tokens, and tokens starting
    /// with `~` are tilde-expanded so figure files under the home
    /// directory can be named directly.
    pub fn normalize(&self) -> Vec<String> {
        let tokens: Vec<String> = match self {
            FigureChoice::Raw(s) => s
                .split_whitespace()
                .map(|t| t.to_string())
                .collect(),
            FigureChoice::Tokens(args) => {
                args.iter().filter(|a| !a.is_empty()).cloned().collect()
            }
        };
        tokens
            .into_iter()
            .map(|t| {
                if t.starts_with('~') {
                    shellexpand::tilde(&t).to_string()
                } else {
                    t
                }
            })
            .collect()
    }
}

/// Rendered dimensions reported by the figure tool's info dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FigureGeometry {
    pub width: usize,
    pub height: usize,
    pub balloon_top: usize,
    pub balloon_bottom: usize,
}

impl FigureGeometry {
    /// Rows of the figure outside the balloon area, i.e. the vertical
    /// space the info panel may share with the figure.
    pub fn usable_height(&self) -> usize {
        self.height
            .saturating_sub(self.balloon_top)
            .saturating_sub(self.balloon_bottom)
    }
}
