use ponyfetch::config::{self, DisplayConfig};
use ponyfetch::environment::{self, EnvSnapshot};
use ponyfetch::{collectors, display, figure, Result};
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("ponyfetch: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let env = EnvSnapshot::capture();
    let mut config = DisplayConfig::defaults(environment::detect_distro());
    config::load_into(&mut config, &env)?;

    let tokens = figure::choose(&config.ponies)?;
    let geometry = figure::query_geometry(&tokens)?;
    let left = config.padding + geometry.width;
    let mut usable_height = geometry.usable_height();
    if let Some(rows) = figure::terminal_rows() {
        usable_height = usable_height.min(rows);
    }

    let lines = collectors::collect_all(&env, &config, Path::new("/proc"));
    display::compose(&tokens, &lines, &config, &env, left, usable_height)
}
