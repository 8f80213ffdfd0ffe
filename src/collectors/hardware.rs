//! CPU, load, uptime, and memory facts from the pseudo-file tree

use crate::data::InfoLine;
use crate::utils::file::{read_file_safe, read_trimmed};
use crate::utils::parsing::{dedup_adjacent, extract_after_colon, strdur};
use std::collections::HashMap;
use std::path::Path;

/// Processor model lines and the aggregate clock speed.
///
/// One `Processor model` line per distinct model (sorted, then
/// adjacent-deduplicated); the speed is the sum of every per-core MHz
/// figure.
pub fn collect_cpu(proc_root: &Path, lines: &mut Vec<InfoLine>) {
    let cpuinfo = match read_file_safe(proc_root.join("cpuinfo")) {
        Ok(content) => content,
        Err(_) => return,
    };

    let mut models: Vec<String> = cpuinfo
        .lines()
        .filter(|line| line.starts_with("model name"))
        .filter_map(extract_after_colon)
        .collect();
    models.sort();
    for model in dedup_adjacent(models) {
        lines.push(InfoLine::new("Processor model", model));
    }

    let mhz: f64 = cpuinfo
        .lines()
        .filter(|line| line.starts_with("cpu MHz"))
        .filter_map(extract_after_colon)
        .filter_map(|value| value.parse::<f64>().ok())
        .sum();
    lines.push(InfoLine::new("Current CPU speed", format!("{:.0} MHz", mhz)));
}

/// The loadavg line, passed through verbatim
pub fn collect_load_average(proc_root: &Path, lines: &mut Vec<InfoLine>) {
    if let Ok(loadavg) = read_trimmed(proc_root.join("loadavg")) {
        lines.push(InfoLine::new("Load average", loadavg));
    }
}

/// Uptime and idle time, each decomposed into days/hours/minutes/seconds
pub fn collect_uptime(proc_root: &Path, lines: &mut Vec<InfoLine>) {
    let content = match read_trimmed(proc_root.join("uptime")) {
        Ok(content) => content,
        Err(_) => return,
    };
    let durations: Vec<String> = content
        .split_whitespace()
        .filter_map(|field| field.parse::<f64>().ok())
        .map(strdur)
        .collect();
    // The file carries exactly two figures; anything else is malformed.
    if durations.len() == 2 {
        lines.push(InfoLine::new("Uptime", durations.join(" ")));
    }
}

/// Memory facts from the colon-delimited meminfo table, each line
/// independently optional
pub fn collect_memory(proc_root: &Path, lines: &mut Vec<InfoLine>) {
    let content = match read_file_safe(proc_root.join("meminfo")) {
        Ok(content) => content,
        Err(_) => return,
    };
    let mem = parse_meminfo(&content);
    let get = |key: &str| mem.get(key);

    if let (Some(total), Some(swap)) = (get("MemTotal"), get("SwapTotal")) {
        lines.push(InfoLine::new(
            "Total memory",
            format!("{} + {} swap", total, swap),
        ));
    }
    if let Some(corrupted) = get("HardwareCorrupted") {
        lines.push(InfoLine::new("Hardware corrupted memory", corrupted.clone()));
    }
    if let (Some(stack), Some(slab)) = (get("KernelStack"), get("Slab")) {
        lines.push(InfoLine::new(
            "Kernel memory",
            format!("{} stack + {} slab", stack, slab),
        ));
    }
    if let Some(shared) = get("Shmem") {
        lines.push(InfoLine::new("Shared memory", shared.clone()));
    }
    if let (Some(locked), Some(unevictable)) = (get("Mlocked"), get("Unevictable")) {
        lines.push(InfoLine::new(
            "Locked memory",
            format!("{}, {} unevictable", locked, unevictable),
        ));
    }
    if let Some(buffers) = get("Buffers") {
        lines.push(InfoLine::new("Memory buffers", buffers.clone()));
    }
    if let (Some(cached), Some(swap_cached)) = (get("Cached"), get("SwapCached")) {
        lines.push(InfoLine::new(
            "Cached memory",
            format!("{} + {} swap", cached, swap_cached),
        ));
    }
}

fn parse_meminfo(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .filter_map(|line| {
            let mut cells = line.splitn(2, ':');
            let key = cells.next()?.trim();
            let value = cells.next()?.trim();
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_proc(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "ponyfetch-test-{}-{}",
            std::process::id(),
            name
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn distinct_cpu_models_collapse_to_one_line_each() {
        let root = scratch_proc("cpu");
        fs::write(
            root.join("cpuinfo"),
            "model name\t: Big Core\ncpu MHz\t\t: 2000.00\n\
             model name\t: Little Core\ncpu MHz\t\t: 1000.00\n\
             model name\t: Big Core\ncpu MHz\t\t: 2000.00\n",
        )
        .unwrap();

        let mut lines = Vec::new();
        collect_cpu(&root, &mut lines);
        assert_eq!(
            lines,
            vec![
                InfoLine::new("Processor model", "Big Core"),
                InfoLine::new("Processor model", "Little Core"),
                InfoLine::new("Current CPU speed", "5000 MHz"),
            ]
        );

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn malformed_uptime_is_dropped() {
        let root = scratch_proc("uptime");
        fs::write(root.join("uptime"), "not numbers\n").unwrap();

        let mut lines = Vec::new();
        collect_uptime(&root, &mut lines);
        assert!(lines.is_empty());

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn memory_lines_are_independently_optional() {
        let root = scratch_proc("mem");
        fs::write(
            root.join("meminfo"),
            "MemTotal:       16308816 kB\nSwapTotal:       8388604 kB\n\
             Shmem:            123456 kB\nMlocked:               0 kB\n",
        )
        .unwrap();

        let mut lines = Vec::new();
        collect_memory(&root, &mut lines);
        // Mlocked alone is not enough for the locked-memory pair.
        assert_eq!(
            lines,
            vec![
                InfoLine::new("Total memory", "16308816 kB + 8388604 kB swap"),
                InfoLine::new("Shared memory", "123456 kB"),
            ]
        );

        let _ = fs::remove_dir_all(&root);
    }
}
