use crate::cli::GenerateArgs;
use crate::config::FibseqConfig;
use crate::io::output::{create_writer, OutputFormat, SequenceReport};
use crate::sequence::{generate, DEFAULT_COUNT};
use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, info_span};

/// Fully resolved settings for one run of the generate command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateConfig {
    pub count: i64,
    pub format: OutputFormat,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            format: OutputFormat::default(),
        }
    }
}

impl GenerateConfig {
    /// Command-line flags win over the config file, which wins over built-in defaults
    pub fn resolve(args: &GenerateArgs, file: &FibseqConfig) -> Self {
        let defaults = Self::default();
        Self {
            count: args
                .count
                .or_else(|| file.default_count())
                .unwrap_or(defaults.count),
            format: args
                .format
                .or_else(|| file.default_format())
                .unwrap_or(defaults.format),
        }
    }
}

pub fn handle_generate<W: Write>(config: GenerateConfig, out: W) -> Result<()> {
    let _span = info_span!("generate", count = config.count).entered();

    let sequence = generate(config.count)
        .with_context(|| format!("Failed to generate sequence of {} values", config.count))?;
    debug!(len = sequence.len(), format = ?config.format, "generated sequence");

    let report = SequenceReport::new(config.count, sequence);
    create_writer(config.format, out)
        .write_report(&report)
        .context("Failed to write sequence")?;
    Ok(())
}
