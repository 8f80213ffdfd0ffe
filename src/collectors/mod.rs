//! Fact collection for the info panel.
//!
//! Every probe is independently fault-isolated: a missing or malformed
//! data source drops that fact (or leaves its value empty) and never
//! suppresses the others.

pub mod hardware;
pub mod network;
pub mod system;

use crate::config::DisplayConfig;
use crate::data::InfoLine;
use crate::environment::EnvSnapshot;
use std::path::Path;

/// Gather the complete ordered info panel.
///
/// `proc_root` is the pseudo-file tree root (`/proc` in production);
/// when it does not exist the CPU/memory/network block is skipped
/// wholesale, with no placeholder lines.
pub fn collect_all(
    env: &EnvSnapshot,
    config: &DisplayConfig,
    proc_root: &Path,
) -> Vec<InfoLine> {
    let mut lines = Vec::new();
    system::collect_identity(env, &config.distro, &mut lines);
    if proc_root.exists() {
        hardware::collect_cpu(proc_root, &mut lines);
        hardware::collect_load_average(proc_root, &mut lines);
        hardware::collect_uptime(proc_root, &mut lines);
        hardware::collect_memory(proc_root, &mut lines);
        network::collect_gateways(proc_root, &mut lines);
    }
    system::collect_session(env, &mut lines);
    lines
}
