use serde::{Deserialize, Serialize};

use crate::io::output::OutputFormat;

/// Root configuration structure for fibseq
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FibseqConfig {
    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

/// Defaults for the generate command
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Number of values to print when `--count` is not given
    #[serde(default)]
    pub count: Option<i64>,

    /// Output format when `--format` is not given
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl FibseqConfig {
    pub fn default_count(&self) -> Option<i64> {
        self.output.as_ref().and_then(|o| o.count)
    }

    pub fn default_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }
}
