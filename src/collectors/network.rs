//! Default gateway extraction from the IPv4 routing table

use crate::data::InfoLine;
use crate::utils::file::read_file_safe;
use std::path::Path;

/// One `Default gateway` line per gateway entry of the routing table.
///
/// The gateway field is the third tab-separated column; the header row
/// and all-zero entries are skipped.
pub fn collect_gateways(proc_root: &Path, lines: &mut Vec<InfoLine>) {
    let route = match read_file_safe(proc_root.join("net/route")) {
        Ok(content) => content,
        Err(_) => return,
    };
    for line in route.lines() {
        let field = match line.split('\t').nth(2) {
            Some(field) => field.trim(),
            None => continue,
        };
        if field.contains("Gateway") || field.contains("00000000") {
            continue;
        }
        if let Some(gateway) = decode_gateway(field) {
            lines.push(InfoLine::new("Default gateway", gateway));
        }
    }
}

/// Decode a little-endian hex routing-table address into dotted-quad
/// form: the byte pairs are read back-to-front.
pub fn decode_gateway(field: &str) -> Option<String> {
    if field.len() != 8 {
        return None;
    }
    let octet = |range: std::ops::Range<usize>| u8::from_str_radix(field.get(range)?, 16).ok();
    Some(format!(
        "{}.{}.{}.{}",
        octet(6..8)?,
        octet(4..6)?,
        octet(2..4)?,
        octet(0..2)?
    ))
}
