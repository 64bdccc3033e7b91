use anyhow::Result;
use fibseq::cli::{self, Cli, Commands};
use fibseq::commands::{self as cmd, GenerateConfig};
use fibseq::config::{load_config, load_config_file, FibseqConfig};

fn main() -> Result<()> {
    let cli = cli::parse_args();
    cli::init_logging(cli.verbosity);

    match cli.command {
        Some(Commands::Init { force }) => {
            let cwd = std::env::current_dir()?;
            cmd::init_config(&cwd, force, std::io::stdout().lock())
        }
        None => handle_generate_command(&cli),
    }
}

fn handle_generate_command(cli: &Cli) -> Result<()> {
    let file_config = resolve_file_config(cli)?;
    let config = GenerateConfig::resolve(&cli.generate, &file_config);
    cmd::handle_generate(config, std::io::stdout().lock())
}

// Explicit --config must load; discovery falls back to defaults
fn resolve_file_config(cli: &Cli) -> Result<FibseqConfig> {
    match cli.generate.config.as_deref() {
        Some(path) => Ok(load_config_file(path)?),
        None => Ok(load_config()),
    }
}
