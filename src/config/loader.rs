use std::fs;
use std::path::{Path, PathBuf};

use super::core::FibseqConfig;
use crate::errors::{Error, Result};

/// Name of the configuration file searched for in the working directory and its parents
pub const CONFIG_FILE_NAME: &str = ".fibseq.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse config from a TOML string
pub fn parse_config(contents: &str) -> std::result::Result<FibseqConfig, String> {
    toml::from_str::<FibseqConfig>(contents).map_err(|e| e.to_string())
}

/// Load a config file the user named explicitly.
///
/// Unlike discovery, a missing or malformed file is an error here.
pub fn load_config_file(path: &Path) -> Result<FibseqConfig> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::configuration(path, format!("failed to read: {}", e)))?;
    let config = parse_config(&contents).map_err(|message| Error::configuration(path, message))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Outcome of looking for a config file in one directory
#[derive(Debug, PartialEq)]
enum Discovery {
    Missing,
    Loaded(FibseqConfig),
    Invalid,
}

/// Try loading a discovered config file
fn try_load_config_from_path(config_path: &Path) -> Discovery {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Discovery::Missing,
        Err(e) => {
            handle_read_error(config_path, &e);
            return Discovery::Invalid;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Discovery::Loaded(config)
        }
        Err(e) => {
            log::warn!(
                "Ignoring invalid config {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            Discovery::Invalid
        }
    }
}

/// Log a config file that exists but cannot be read
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    log::warn!(
        "Failed to read config file {}: {}. Using defaults.",
        config_path.display(),
        error
    );
}

/// Generate `start` and its ancestors, at most `max_depth` directories in total
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for the nearest config file.
///
/// The nearest file that exists decides: if it is invalid, defaults are used
/// and files further up are not consulted.
pub fn load_config_from(start: &Path) -> FibseqConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| match try_load_config_from_path(&path) {
            Discovery::Missing => None,
            Discovery::Loaded(config) => Some(config),
            Discovery::Invalid => Some(FibseqConfig::default()),
        })
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            FibseqConfig::default()
        })
}

/// Search the current directory and its ancestors for the nearest config file
pub fn load_config() -> FibseqConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(&dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            FibseqConfig::default()
        }
    }
}
