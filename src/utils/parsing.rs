//! String parsing and formatting utilities

/// Extract value after the first colon, trimmed
pub fn extract_after_colon(line: &str) -> Option<String> {
    line.split(':')
        .nth(1)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Keep only one copy of adjacent duplicate items.
///
/// Only neighbouring duplicates collapse; equal items separated by a
/// different one survive. Callers sort first when they want global
/// uniqueness.
pub fn dedup_adjacent(items: Vec<String>) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if result.last() == Some(&item) {
            continue;
        }
        result.push(item);
    }
    result
}

/// Format a duration in seconds as `<days>d<HH>:<MM>:<SS.hh>`
pub fn strdur(seconds: f64) -> String {
    let s = seconds % 60.0;
    let rest = (seconds / 60.0).floor();
    let m = (rest % 60.0) as u64;
    let rest = (rest / 60.0).floor();
    let h = (rest % 24.0) as u64;
    let d = (rest / 24.0).floor() as u64;
    format!("{}d{:02}:{:02}:{:05.2}", d, h, m, s)
}

/// Strip ANSI SGR/CSI escape sequences from a line
pub fn strip_escapes(line: &str) -> String {
    let mut result = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            result.push(c);
            continue;
        }
        // CSI sequence: ESC [ parameters final-byte
        if let Some('[') = chars.clone().next() {
            chars.next();
            for c in chars.by_ref() {
                if ('\x40'..='\x7e').contains(&c) {
                    break;
                }
            }
        }
    }
    result
}
