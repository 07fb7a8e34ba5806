//! Logging init: tracing to stderr, verbosity taken from the CLI.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
/// `RUST_LOG` overrides the verbosity derived from `-v` flags.
pub fn init(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,linkmatch={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .init();
}
