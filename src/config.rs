//! Display configuration: compiled-in defaults, the override file
//! search path, and TOML loading

use crate::data::figure::FigureChoice;
use crate::environment::EnvSnapshot;
use crate::error::{PonyfetchError, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// The one mutable configuration record of a run.
///
/// Created from compiled-in defaults, optionally overridden by exactly
/// one configuration file, and read-only afterwards.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Figure invocations to choose from, already normalized to token
    /// sequences
    pub ponies: Vec<Vec<String>>,
    /// Columns between the right side of the figure and the text
    pub padding: usize,
    /// Empty lines above the text
    pub top: usize,
    /// SGR parameters for the tag names
    pub tag_color: String,
    /// SGR parameters for the tag values
    pub value_color: String,
    /// Distribution name shown in the panel
    pub distro: String,
}

impl DisplayConfig {
    pub fn defaults(distro: String) -> Self {
        DisplayConfig {
            ponies: vec![vec!["+f".to_string(), "fyrefly".to_string()]],
            padding: 8,
            top: 1,
            tag_color: "01;35".to_string(),
            value_color: "01;34".to_string(),
            distro,
        }
    }
}

/// On-disk configuration document. Every field is optional; present
/// fields override the defaults. Unknown fields are rejected so typos
/// surface instead of silently doing nothing.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    ponies: Option<Vec<FigureChoice>>,
    padding: Option<usize>,
    top: Option<usize>,
    tag_color: Option<String>,
    value_color: Option<String>,
    distro: Option<String>,
}

/// Build the ordered candidate list of configuration file paths.
///
/// A candidate whose governing environment variable is unset or empty is
/// skipped outright; an unset variable must never become an
/// empty-string directory root.
pub fn candidate_paths(env: &EnvSnapshot) -> Vec<PathBuf> {
    let defined = |var: &Option<String>| -> Option<String> {
        var.as_deref().filter(|v| !v.is_empty()).map(String::from)
    };
    let mut paths = Vec::new();

    if let Some(xdg) = defined(&env.xdg_config_home) {
        paths.push(PathBuf::from(&xdg).join("ponyfetch/config.toml"));
        paths.push(PathBuf::from(&xdg).join("ponyfetch.toml"));
    }
    // $HOME first, then the real user's home: the same patterns rooted
    // differently, which matters under sudo
    for home in [defined(&env.home), defined(&env.real_home)]
        .into_iter()
        .flatten()
    {
        let home = PathBuf::from(home);
        paths.push(home.join(".config/ponyfetch/config.toml"));
        paths.push(home.join(".config/ponyfetch.toml"));
        paths.push(home.join(".config/.ponyfetch.toml"));
        paths.push(home.join(".ponyfetch.toml"));
    }
    if let Some(dirs) = defined(&env.xdg_config_dirs) {
        for dir in dirs.split(':').filter(|d| !d.is_empty()) {
            paths.push(PathBuf::from(dir).join("ponyfetch.toml"));
        }
    }
    paths.push(PathBuf::from("/etc/ponyfetch.toml"));
    paths
}

/// Load the highest-precedence configuration file, if any, into `config`.
///
/// Candidates that do not exist or cannot be opened are skipped
/// silently. The first candidate that opens is the one that counts:
/// later candidates are never touched, and a malformed document aborts
/// startup rather than falling back.
pub fn load_into(config: &mut DisplayConfig, env: &EnvSnapshot) -> Result<()> {
    for path in candidate_paths(env) {
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(_) => continue,
        };
        let file: ConfigFile = toml::from_str(&data).map_err(|err| {
            PonyfetchError::Config(format!("{}: {}", path.display(), err))
        })?;
        apply(config, file);
        break;
    }
    Ok(())
}

fn apply(config: &mut DisplayConfig, file: ConfigFile) {
    if let Some(ponies) = file.ponies {
        config.ponies = ponies.iter().map(FigureChoice::normalize).collect();
    }
    if let Some(padding) = file.padding {
        config.padding = padding;
    }
    if let Some(top) = file.top {
        config.top = top;
    }
    if let Some(tag_color) = file.tag_color {
        config.tag_color = tag_color;
    }
    if let Some(value_color) = file.value_color {
        config.value_color = value_color;
    }
    if let Some(distro) = file.distro {
        config.distro = distro;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("ponyfetch-test-{}-{}", std::process::id(), name));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn snapshot_with_home(home: &Path) -> EnvSnapshot {
        EnvSnapshot {
            home: Some(home.to_string_lossy().into_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn unset_and_empty_variables_are_skipped() {
        let unset = EnvSnapshot::default();
        let empty = EnvSnapshot {
            xdg_config_home: Some(String::new()),
            home: Some(String::new()),
            xdg_config_dirs: Some(String::new()),
            ..Default::default()
        };
        // Both degenerate to the single system-wide candidate, and no
        // candidate is ever rooted at "".
        for env in [unset, empty] {
            let paths = candidate_paths(&env);
            assert_eq!(paths, vec![PathBuf::from("/etc/ponyfetch.toml")]);
        }
    }

    #[test]
    fn candidates_follow_precedence_order() {
        let env = EnvSnapshot {
            xdg_config_home: Some("/xdg".to_string()),
            home: Some("/home/a".to_string()),
            real_home: Some("/home/b".to_string()),
            xdg_config_dirs: Some("/etc/xdg:/opt/xdg".to_string()),
            ..Default::default()
        };
        let paths = candidate_paths(&env);
        let expected: Vec<PathBuf> = [
            "/xdg/ponyfetch/config.toml",
            "/xdg/ponyfetch.toml",
            "/home/a/.config/ponyfetch/config.toml",
            "/home/a/.config/ponyfetch.toml",
            "/home/a/.config/.ponyfetch.toml",
            "/home/a/.ponyfetch.toml",
            "/home/b/.config/ponyfetch/config.toml",
            "/home/b/.config/ponyfetch.toml",
            "/home/b/.config/.ponyfetch.toml",
            "/home/b/.ponyfetch.toml",
            "/etc/xdg/ponyfetch.toml",
            "/opt/xdg/ponyfetch.toml",
            "/etc/ponyfetch.toml",
        ]
        .iter()
        .map(PathBuf::from)
        .collect();
        assert_eq!(paths, expected);
    }

    #[test]
    fn first_existing_candidate_wins_and_later_ones_are_never_parsed() {
        let home = scratch_dir("precedence");
        fs::create_dir_all(home.join(".config/ponyfetch")).unwrap();
        fs::write(
            home.join(".config/ponyfetch/config.toml"),
            "padding = 3\n",
        )
        .unwrap();
        // A lower-precedence candidate with invalid content: if it were
        // ever opened, loading would fail.
        fs::write(home.join(".ponyfetch.toml"), "this is not toml [").unwrap();

        let mut config = DisplayConfig::defaults(String::new());
        load_into(&mut config, &snapshot_with_home(&home)).unwrap();
        assert_eq!(config.padding, 3);

        let _ = fs::remove_dir_all(&home);
    }

    #[test]
    fn malformed_configuration_is_fatal() {
        let home = scratch_dir("malformed");
        fs::write(home.join(".ponyfetch.toml"), "padding = \"lots\"\n").unwrap();

        let mut config = DisplayConfig::defaults(String::new());
        let err = load_into(&mut config, &snapshot_with_home(&home));
        assert!(matches!(err, Err(PonyfetchError::Config(_))));

        let _ = fs::remove_dir_all(&home);
    }

    #[test]
    fn file_fields_override_defaults() {
        let home = scratch_dir("override");
        fs::write(
            home.join(".ponyfetch.toml"),
            r#"
ponies = ["+f rarity", ["-f", "my pony"]]
top = 2
tag_color = "01;32"
distro = "Ponyville GNU/Linux"
"#,
        )
        .unwrap();

        let mut config = DisplayConfig::defaults("probed".to_string());
        load_into(&mut config, &snapshot_with_home(&home)).unwrap();
        assert_eq!(
            config.ponies,
            vec![vec!["+f", "rarity"], vec!["-f", "my pony"]]
        );
        assert_eq!(config.top, 2);
        assert_eq!(config.tag_color, "01;32");
        assert_eq!(config.value_color, "01;34");
        assert_eq!(config.padding, 8);
        assert_eq!(config.distro, "Ponyville GNU/Linux");

        let _ = fs::remove_dir_all(&home);
    }

    #[test]
    fn no_candidate_leaves_defaults_untouched() {
        let mut config = DisplayConfig::defaults("probed".to_string());
        let env = EnvSnapshot {
            home: Some("/nonexistent/ponyfetch-test-home".to_string()),
            ..Default::default()
        };
        load_into(&mut config, &env).unwrap();
        assert_eq!(config.padding, 8);
        assert_eq!(config.distro, "probed");
    }
}
