//! Configuration loaded from `.fibseq.toml`.
//!
//! The file only supplies defaults for the command-line driver; flags given
//! on the command line always win.

mod core;
mod loader;

pub use self::core::{FibseqConfig, OutputConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};
