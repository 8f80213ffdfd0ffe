//! Environment snapshot and distribution name resolution

use crate::utils::command::run_shell;
use crate::utils::file::file_exists;
use std::env;
use std::ffi::CStr;

/// Read-only capture of every environment variable the program consumes.
///
/// Each field keeps the unset/set distinction: `None` means the variable
/// was absent, `Some("")` means it was set to the empty string. The
/// configuration search path treats both as "not defined", but they must
/// never be conflated into an empty-string directory root.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    pub user: Option<String>,
    pub home: Option<String>,
    pub shell: Option<String>,
    pub term: Option<String>,
    pub colorterm: Option<String>,
    pub display: Option<String>,
    pub wayland_display: Option<String>,
    pub desktop_session: Option<String>,
    pub editor: Option<String>,
    pub lang: Option<String>,
    pub xdg_config_home: Option<String>,
    pub xdg_config_dirs: Option<String>,
    pub palette: Option<String>,
    pub palette_cmd: Option<String>,
    /// Home directory of the real (not effective) user, from passwd.
    /// Differs from `home` when running under privilege elevation.
    pub real_home: Option<String>,
}

impl EnvSnapshot {
    /// Capture the environment once at startup
    pub fn capture() -> Self {
        EnvSnapshot {
            user: env::var("USER").ok(),
            home: env::var("HOME").ok(),
            shell: env::var("SHELL").ok(),
            term: env::var("TERM").ok(),
            colorterm: env::var("COLORTERM").ok(),
            display: env::var("DISPLAY").ok(),
            wayland_display: env::var("WAYLAND_DISPLAY").ok(),
            desktop_session: env::var("DESKTOP_SESSION").ok(),
            editor: env::var("EDITOR").ok(),
            lang: env::var("LANG").ok(),
            xdg_config_home: env::var("XDG_CONFIG_HOME").ok(),
            xdg_config_dirs: env::var("XDG_CONFIG_DIRS").ok(),
            palette: env::var("PONYSAY_KMS_PALETTE").ok(),
            palette_cmd: env::var("PONYSAY_KMS_PALETTE_CMD").ok(),
            real_home: real_user_home(),
        }
    }

    /// The home directory to report: the real user's if resolvable,
    /// otherwise whatever $HOME says
    pub fn effective_home(&self) -> &str {
        self.real_home
            .as_deref()
            .or(self.home.as_deref())
            .unwrap_or("")
    }
}

/// Resolve the real user's home directory through passwd
fn real_user_home() -> Option<String> {
    unsafe {
        let pw = libc::getpwuid(libc::getuid());
        if pw.is_null() {
            return None;
        }
        let dir = (*pw).pw_dir;
        if dir.is_null() {
            return None;
        }
        Some(CStr::from_ptr(dir).to_string_lossy().into_owned())
    }
}

/// Detect the distribution name from the standard release files.
///
/// Probes are subshells so the release files are sourced exactly the way
/// the distribution intends; any failure degrades to an empty string.
pub fn detect_distro() -> String {
    if file_exists("/etc/os-release") {
        if let Ok(name) = run_shell(". /etc/os-release && echo \"${PRETTY_NAME}\"") {
            if !name.is_empty() {
                return name;
            }
        }
    }
    if file_exists("/etc/lsb-release") {
        if let Ok(name) = run_shell(". /etc/lsb-release && echo \"${DISTRIB_DESCRIPTION}\"") {
            if !name.is_empty() {
                return name;
            }
        }
    }
    String::new()
}
