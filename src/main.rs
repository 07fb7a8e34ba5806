use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing::{error, info};

use linkmatch::cli::{Cli, Commands};
use linkmatch::config::{AppConfig, ConfigError};
use linkmatch::{export, harvest, records, score};

fn main() -> Result<()> {
    let cli = Cli::parse();
    linkmatch::logging::init(cli.verbose);

    // Handle --init first (before any other processing)
    if cli.init {
        match AppConfig::create_default_config() {
            Ok(path) => {
                println!("Created default configuration file at: {}", path.display());
                println!("Edit this file to customize settings, then run linkmatch again.");
                return Ok(());
            }
            Err(e) => {
                eprintln!("Failed to create configuration file: {}", e);
                std::process::exit(1);
            }
        }
    }

    let config = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(ConfigError::FileNotFound(path)) => {
            // Config not found - prompt to create if interactive
            match AppConfig::prompt_create_config() {
                Ok(Some(created_path)) => {
                    println!("Created default configuration file at: {}", created_path.display());
                    println!("Edit this file to customize settings, then run linkmatch again.");
                    return Ok(());
                }
                Ok(None) => {
                    eprintln!("Configuration file not found at: {}", path.display());
                    eprintln!("Run with --init to create a default configuration file.");
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Failed to create configuration file: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    match &cli.command {
        Some(Commands::Harvest {
            input,
            output,
            page_delay_secs,
        }) => run_harvest_command(&config, input, output, *page_delay_secs),
        Some(Commands::Score {
            firms,
            acquirors,
            output,
        }) => run_score_command(&config, firms, acquirors, output),
        None => {
            eprintln!("No command given. Use 'harvest' or 'score' (see --help).");
            std::process::exit(1);
        }
    }
}

fn run_harvest_command(
    config: &AppConfig,
    input: &str,
    output: &str,
    page_delay_secs: Option<u64>,
) -> Result<()> {
    let firms = records::load_firms(Path::new(input))?;
    if firms.is_empty() {
        error!(
            "No records found in {}. Ensure the file exists and has a 'conml' column.",
            input
        );
        return Ok(());
    }

    let mut search = config.search.clone();
    if let Some(secs) = page_delay_secs {
        search.page_delay_secs = secs;
    }

    info!(
        "Harvesting links for {} firms via {}",
        firms.len(),
        search.engine_url
    );

    let rows = harvest::run_harvest(&firms, &search)?;
    export::export_harvest_csv(&rows, output)?;

    let total_links: usize = rows.iter().map(|row| row.urls.len()).sum();
    println!(
        "Harvested {} links across {} firms. Results written to {}",
        total_links,
        rows.len(),
        output
    );

    Ok(())
}

fn run_score_command(
    config: &AppConfig,
    firms: &str,
    acquirors: &str,
    output: &str,
) -> Result<()> {
    let summary = score::run_scorer(
        Path::new(firms),
        Path::new(acquirors),
        output,
        &config.parsing,
        &config.scoring,
    )?;

    export::print_score_summary(&summary);

    Ok(())
}
