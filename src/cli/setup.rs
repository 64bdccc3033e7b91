//! Runtime setup for the command-line driver.

use tracing_subscriber::EnvFilter;

/// Map `-v` occurrences to a default filter directive
pub fn log_level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flag. `log` records from
/// the config loader are forwarded through the same subscriber.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level_for(verbosity)));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        // Already installed (e.g. by a test harness)
        eprintln!("Note: logging already configured: {}", e);
    }
}
