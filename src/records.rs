//! Input record loading for the harvester and the scorer.
//!
//! The thesis tables are spreadsheet-era CSV dumps: an optional unlabeled
//! index column followed by the name column and (for the scorer) a `url`
//! column holding a serialized URL list. Extra columns are ignored; header
//! aliases cover the casings seen in the data.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// One row of the sales-firm table.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FirmRecord {
    /// Company name
    #[serde(rename = "conml", alias = "Conml", alias = "CONML", alias = "company", alias = "Company")]
    pub name: String,

    /// Raw serialized URL-list cell, if the table carries one
    #[serde(default, rename = "url", alias = "URL", alias = "urls")]
    pub urls: Option<String>,
}

/// One row of the SDC acquiror table.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AcquirorRecord {
    /// Acquiror company name
    #[serde(
        rename = "AcquirorName",
        alias = "acquirorname",
        alias = "acquiror_name",
        alias = "Acquiror Name"
    )]
    pub name: String,

    /// Raw serialized URL-list cell, if the table carries one
    #[serde(default, rename = "url", alias = "URL", alias = "urls")]
    pub urls: Option<String>,
}

/// Load the firms table from a CSV file.
pub fn load_firms(path: &Path) -> Result<Vec<FirmRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read firms file: {}", path.display()))?;
    let records = parse_firms(&content)?;
    info!("Loaded {} firm records from {}", records.len(), path.display());
    Ok(records)
}

/// Load the acquiror table from a CSV file.
pub fn load_acquirors(path: &Path) -> Result<Vec<AcquirorRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read acquirors file: {}", path.display()))?;
    let records = parse_acquirors(&content)?;
    info!("Loaded {} acquiror records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse firm records from CSV content.
pub fn parse_firms(content: &str) -> Result<Vec<FirmRecord>> {
    parse_table(content).context("Failed to parse firms table")
}

/// Parse acquiror records from CSV content.
pub fn parse_acquirors(content: &str) -> Result<Vec<AcquirorRecord>> {
    parse_table(content).context("Failed to parse acquirors table")
}

fn parse_table<T: DeserializeOwned>(content: &str) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: T = result.context("Failed to parse CSV record")?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_firms_basic() {
        let content = "conml,url\nAlpha AG,\"['http://alpha.example']\"\nBeta GmbH,[]";
        let records = parse_firms(content).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Alpha AG");
        assert_eq!(records[0].urls.as_deref(), Some("['http://alpha.example']"));
        assert_eq!(records[1].urls.as_deref(), Some("[]"));
    }

    #[test]
    fn test_parse_firms_with_index_column() {
        // pandas-style dump: unlabeled index column first
        let content = ",conml,url\n0,Alpha AG,\"['http://alpha.example']\"\n1,Beta GmbH,[]";
        let records = parse_firms(content).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Alpha AG");
        assert_eq!(records[1].name, "Beta GmbH");
    }

    #[test]
    fn test_parse_firms_without_url_column() {
        let content = "conml\nAlpha AG\nBeta GmbH";
        let records = parse_firms(content).unwrap();

        assert_eq!(records.len(), 2);
        assert!(records[0].urls.is_none());
        assert!(records[1].urls.is_none());
    }

    #[test]
    fn test_parse_acquirors_basic() {
        let content = ",AcquirorName,url\n0,Gamma Corp,\"['http://gamma.example', 'http://g2.example']\"";
        let records = parse_acquirors(content).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Gamma Corp");
        assert_eq!(
            records[0].urls.as_deref(),
            Some("['http://gamma.example', 'http://g2.example']")
        );
    }

    #[test]
    fn test_parse_header_aliases() {
        let firms = parse_firms("Company,URL\nAlpha AG,[]").unwrap();
        assert_eq!(firms[0].name, "Alpha AG");

        let acquirors = parse_acquirors("acquirorname,URL\nGamma Corp,[]").unwrap();
        assert_eq!(acquirors[0].name, "Gamma Corp");
    }

    #[test]
    fn test_parse_missing_name_column_fails() {
        let content = "something,url\nAlpha AG,[]";
        assert!(parse_firms(content).is_err());
    }

    #[test]
    fn test_parse_empty_table() {
        let records = parse_firms("conml,url\n").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_whitespace_trimmed() {
        let content = "conml,url\n  Alpha AG  ,  []  ";
        let records = parse_firms(content).unwrap();
        assert_eq!(records[0].name, "Alpha AG");
        assert_eq!(records[0].urls.as_deref(), Some("[]"));
    }
}
