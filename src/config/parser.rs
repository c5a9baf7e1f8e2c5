use crate::config::types::SpiderConfig;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::{Path, PathBuf};

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(SpiderConfig)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use web_spider::config::load_config;
///
/// let config = load_config(Path::new("spider.toml")).unwrap();
/// println!("User agent: {}", config.fetch.user_agent);
/// ```
pub fn load_config(path: &Path) -> Result<SpiderConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from a TOML string
///
/// Missing tables and keys fall back to their defaults.
pub fn parse_config(content: &str) -> Result<SpiderConfig, ConfigError> {
    let config: SpiderConfig = toml::from_str(content)?;

    validate(&config)?;

    Ok(config)
}

/// Resolves an output path the way a shell user expects
///
/// A leading `~` is expanded to the home directory and relative paths are
/// anchored at the current working directory. The file itself does not need
/// to exist.
///
/// # Arguments
///
/// * `raw` - The path as given on the command line or in the config file
///
/// # Returns
///
/// * `Ok(PathBuf)` - Absolute path
/// * `Err(std::io::Error)` - The current directory could not be determined
pub fn resolve_output_path(raw: &str) -> std::io::Result<PathBuf> {
    let expanded = expand_home(raw);

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(std::env::current_dir()?.join(expanded))
    }
}

fn expand_home(raw: &str) -> PathBuf {
    let home = std::env::var_os("HOME").map(PathBuf::from);

    match (raw, home) {
        ("~", Some(home)) => home,
        (path, Some(home)) if path.starts_with("~/") => home.join(&path[2..]),
        (path, _) => PathBuf::from(path),
    }
}
