use clap::error::ErrorKind;
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "fibseq")]
#[command(about = "Print the leading values of the Fibonacci sequence", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,
}

/// Options for printing a sequence (the default action)
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Number of values to print (default 10; zero or negative prints an empty sequence)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file (defaults to the nearest .fibseq.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default .fibseq.toml to the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

impl GenerateArgs {
    fn is_empty(&self) -> bool {
        self.count.is_none() && self.format.is_none() && self.config.is_none()
    }
}

impl Cli {
    /// Reject generate flags combined with a subcommand.
    ///
    /// Only the generate flags conflict; the global `-v` may appear anywhere.
    pub fn validate(&self) -> Result<(), clap::Error> {
        if self.command.is_some() && !self.generate.is_empty() {
            return Err(Cli::command().error(
                ErrorKind::ArgumentConflict,
                "--count, --format and --config cannot be used with a subcommand",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = Cli::parse_from(["fibseq"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.generate.count, None);
        assert_eq!(cli.generate.format, None);
        assert_eq!(cli.verbosity, 0);
    }

    #[test]
    fn test_negative_count_is_accepted() {
        let cli = Cli::parse_from(["fibseq", "--count", "-3"]);
        assert_eq!(cli.generate.count, Some(-3));
    }

    #[test]
    fn test_non_integer_count_is_rejected() {
        assert!(Cli::try_parse_from(["fibseq", "--count", "2.5"]).is_err());
        assert!(Cli::try_parse_from(["fibseq", "-n", "ten"]).is_err());
    }

    #[test]
    fn test_format_and_verbosity() {
        let cli = Cli::parse_from(["fibseq", "-n", "4", "--format", "json", "-vv"]);
        assert_eq!(cli.generate.count, Some(4));
        assert_eq!(cli.generate.format, Some(OutputFormat::Json));
        assert_eq!(cli.verbosity, 2);
    }

    #[test]
    fn test_init_subcommand() {
        let cli = Cli::parse_from(["fibseq", "init", "--force"]);
        assert!(matches!(cli.command, Some(Commands::Init { force: true })));
    }

    #[test]
    fn test_init_conflicts_with_generate_flags() {
        let cli = Cli::try_parse_from(["fibseq", "--count", "3", "init"]).unwrap();
        let err = cli.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_verbose_allowed_before_and_after_init() {
        for args in [["fibseq", "-v", "init"], ["fibseq", "init", "-v"]] {
            let cli = Cli::try_parse_from(args).unwrap();
            assert!(cli.validate().is_ok());
            assert!(matches!(cli.command, Some(Commands::Init { force: false })));
            assert_eq!(cli.verbosity, 1);
        }
    }

    #[test]
    fn test_generate_flags_alone_validate() {
        let cli = Cli::try_parse_from(["fibseq", "-vv", "-n", "3"]).unwrap();
        assert!(cli.validate().is_ok());
    }
}
