//! Info panel line structure

/// One labeled fact of the info panel.
///
/// Lines are built once per run, append-only, and rendered
/// top-to-bottom in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoLine {
    pub label: String,
    pub value: String,
}

impl InfoLine {
    pub fn new(label: &str, value: impl Into<String>) -> Self {
        InfoLine {
            label: label.to_string(),
            value: value.into(),
        }
    }
}
