use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "linkmatch")]
#[command(about = "Harvests search-result links for company names and scores URL overlap between firm and acquiror tables")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Create default configuration file at ./config/linkmatch.toml
    #[arg(long, global = true)]
    pub init: bool,

    /// Verbose logging (use -v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Collect search-result links for every company name in a CSV
    Harvest {
        /// Input CSV with a 'conml' column holding company names
        #[arg(short, long, value_name = "FILE")]
        input: String,

        /// Output CSV path ('conml' plus the harvested 'url' list column)
        #[arg(short, long, default_value = "harvested_urls.csv")]
        output: String,

        /// Override the fixed per-page delay from the config (seconds)
        #[arg(long, value_name = "SECS")]
        page_delay_secs: Option<u64>,
    },

    /// Score URL overlap between a firms table and an acquirors table
    Score {
        /// Firms CSV with 'conml' and 'url' columns
        #[arg(long, value_name = "FILE")]
        firms: String,

        /// Acquirors CSV with 'AcquirorName' and 'url' columns
        #[arg(long, value_name = "FILE")]
        acquirors: String,

        /// Output CSV path for the (firm, acquiror, count) match triples
        #[arg(short, long, default_value = "url_matches.csv")]
        output: String,
    },
}
