pub mod browser;
pub mod cli;
pub mod config;
pub mod export;
pub mod harvest;
pub mod logging;
pub mod records;
pub mod score;
pub mod urllist;

pub use records::{AcquirorRecord, FirmRecord};
pub use score::{MatchTriple, ScoreSummary};
