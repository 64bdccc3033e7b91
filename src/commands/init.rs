use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::io::Write;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"# fibseq configuration

[output]
# Number of values to print when --count is not given
count = 10
# "text" or "json"
format = "text"
"#;

/// Write the default configuration file into `dir`, reporting to `out`
pub fn init_config<W: Write>(dir: &Path, force: bool, mut out: W) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if io::file_exists(&config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    tracing::info!(path = %config_path.display(), "wrote configuration");
    writeln!(out, "Created {} configuration file", CONFIG_FILE_NAME)?;

    Ok(())
}
