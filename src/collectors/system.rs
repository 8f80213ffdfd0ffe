//! Identity and session facts (user, kernel, shell, terminal, locale)

use crate::data::InfoLine;
use crate::environment::EnvSnapshot;
use crate::utils::command::run_command;
use std::ffi::CStr;

/// Kernel identification from uname(2)
struct Uname {
    nodename: String,
    sysname: String,
    release: String,
    version: String,
    machine: String,
}

fn utsname_field(raw: &[libc::c_char]) -> String {
    unsafe { CStr::from_ptr(raw.as_ptr()).to_string_lossy().into_owned() }
}

fn uname() -> Option<Uname> {
    unsafe {
        let mut buf: libc::utsname = std::mem::zeroed();
        if libc::uname(&mut buf) != 0 {
            return None;
        }
        Some(Uname {
            nodename: utsname_field(&buf.nodename),
            sysname: utsname_field(&buf.sysname),
            release: utsname_field(&buf.release),
            version: utsname_field(&buf.version),
            machine: utsname_field(&buf.machine),
        })
    }
}

/// Facts that never depend on the pseudo-file tree: user, host, and
/// kernel identity. Always emitted, with empty values where a source is
/// unavailable.
pub fn collect_identity(env: &EnvSnapshot, distro: &str, lines: &mut Vec<InfoLine>) {
    let uts = uname();

    lines.push(InfoLine::new("User", env.user.as_deref().unwrap_or("")));
    lines.push(InfoLine::new("Home", env.effective_home()));
    lines.push(InfoLine::new(
        "Hostname",
        uts.as_ref().map(|u| u.nodename.as_str()).unwrap_or(""),
    ));
    lines.push(InfoLine::new("Distribution", distro));

    let os_name = run_command("uname", &["--operating-system"]).unwrap_or_default();
    if let Some(uts) = &uts {
        lines.push(InfoLine::new(
            "Operating system",
            format!("{} with {} {} kernel", os_name, uts.sysname, uts.release),
        ));
        lines.push(InfoLine::new("Kernel version", uts.version.clone()));
        lines.push(InfoLine::new("Processor architecture", uts.machine.clone()));
    } else {
        lines.push(InfoLine::new("Operating system", os_name));
        lines.push(InfoLine::new("Kernel version", ""));
        lines.push(InfoLine::new("Processor architecture", ""));
    }
}

/// Shell, terminal, display, and session facts. Always emitted; an
/// absent variable renders as an empty value, not an omitted line.
pub fn collect_session(env: &EnvSnapshot, lines: &mut Vec<InfoLine>) {
    let shell = env.shell.as_deref().unwrap_or("");
    lines.push(InfoLine::new("Shell", shell));
    lines.push(InfoLine::new("Shell version", shell_version(shell)));
    lines.push(InfoLine::new("Teletypewriter", controlling_tty()));
    lines.push(InfoLine::new(
        "Terminal",
        format!(
            "{} {}",
            env.term.as_deref().unwrap_or(""),
            env.colorterm.as_deref().unwrap_or("")
        ),
    ));
    lines.push(InfoLine::new(
        "X display",
        env.display.as_deref().unwrap_or(""),
    ));
    lines.push(InfoLine::new(
        "Wayland display",
        env.wayland_display.as_deref().unwrap_or(""),
    ));
    lines.push(InfoLine::new(
        "Window manager",
        env.desktop_session.as_deref().unwrap_or(""),
    ));
    lines.push(InfoLine::new("Editor", env.editor.as_deref().unwrap_or("")));
    lines.push(InfoLine::new("Locale", env.lang.as_deref().unwrap_or("")));
}

/// First line of the shell's version banner, empty when the shell is
/// unknown or refuses to report one
fn shell_version(shell: &str) -> String {
    if shell.is_empty() {
        return String::new();
    }
    run_command(shell, &["--version"])
        .map(|banner| banner.lines().next().unwrap_or("").to_string())
        .unwrap_or_default()
}

/// Path of the controlling terminal device, preferring stderr's tty and
/// falling back to stdin's
fn controlling_tty() -> String {
    for fd in [libc::STDERR_FILENO, libc::STDIN_FILENO] {
        unsafe {
            let name = libc::ttyname(fd);
            if !name.is_null() {
                return CStr::from_ptr(name).to_string_lossy().into_owned();
            }
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_lines_render_absent_variables_as_empty() {
        let mut lines = Vec::new();
        collect_session(&EnvSnapshot::default(), &mut lines);

        let find = |label: &str| {
            lines
                .iter()
                .find(|l| l.label == label)
                .map(|l| l.value.clone())
        };
        assert_eq!(find("Shell"), Some(String::new()));
        assert_eq!(find("X display"), Some(String::new()));
        assert_eq!(find("Editor"), Some(String::new()));
        // TERM and COLORTERM are joined even when both are empty.
        assert_eq!(find("Terminal"), Some(" ".to_string()));
    }

    #[test]
    fn identity_lines_are_always_present() {
        let env = EnvSnapshot {
            user: Some("pinkie".to_string()),
            home: Some("/home/pinkie".to_string()),
            ..Default::default()
        };
        let mut lines = Vec::new();
        collect_identity(&env, "Canterlot OS", &mut lines);

        assert_eq!(lines[0], InfoLine::new("User", "pinkie"));
        assert_eq!(lines[3], InfoLine::new("Distribution", "Canterlot OS"));
        let labels: Vec<&str> = lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "User",
                "Home",
                "Hostname",
                "Distribution",
                "Operating system",
                "Kernel version",
                "Processor architecture",
            ]
        );
    }
}
