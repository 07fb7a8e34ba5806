//! Pairwise URL-overlap scoring between the firms and acquirors tables.
//!
//! Three sequential passes over in-memory tables: parse every row's URL cell
//! into a set, fill a dense rows-by-columns matrix with exact-string
//! intersection sizes, then re-scan the matrix and emit a named triple for
//! every nonzero cell. Ordering is firm-major, acquiror-minor throughout, so
//! re-running on unchanged inputs produces byte-identical output.

use anyhow::Result;
use chrono::Utc;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use crate::config::{ParsingConfig, ScoringConfig};
use crate::export;
use crate::records::{load_acquirors, load_firms};
use crate::urllist::parse_url_list;

/// A nonzero overlap between one firm row and one acquiror row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchTriple {
    pub firm_name: String,
    pub acquiror_name: String,
    pub match_count: usize,
}

/// Summary of a completed scoring run.
#[derive(Debug, Clone)]
pub struct ScoreSummary {
    pub firm_rows: usize,
    pub acquiror_rows: usize,
    pub match_triples: usize,
    pub distinct_firms_matched: usize,
    pub distinct_acquirors_matched: usize,
    pub output_file: String,
    pub started_at: String,
    pub completed_at: String,
}

/// Parse one row's raw URL cell into a set of exact URL strings.
/// A missing cell behaves like an empty list.
pub fn url_set(cell: Option<&str>, min_fragment_len: usize) -> HashSet<String> {
    parse_url_list(cell.unwrap_or(""), min_fragment_len)
        .into_iter()
        .collect()
}

/// Compute the dense overlap matrix: rows = firms, columns = acquirors,
/// cell = cardinality of the exact-string intersection of the two sets.
/// Logs a progress line every `progress_interval` firm rows.
pub fn score_matrix(
    firm_sets: &[HashSet<String>],
    acquiror_sets: &[HashSet<String>],
    progress_interval: usize,
) -> Vec<Vec<usize>> {
    let total = firm_sets.len();
    let mut matrix = vec![vec![0usize; acquiror_sets.len()]; total];

    for (row, firm_urls) in firm_sets.iter().enumerate() {
        for (col, acquiror_urls) in acquiror_sets.iter().enumerate() {
            matrix[row][col] = firm_urls.intersection(acquiror_urls).count();
        }

        let done = row + 1;
        if progress_interval > 0 && done % progress_interval == 0 {
            info!(
                "Scored {} / {} firm rows ({:.2}%)",
                done,
                total,
                done as f64 * 100.0 / total as f64
            );
        }
    }

    matrix
}

/// Second full pass over the matrix: translate every nonzero cell into a
/// named triple. Zero cells are never emitted; a name may appear in multiple
/// triples.
pub fn collect_matches(
    firm_names: &[String],
    acquiror_names: &[String],
    matrix: &[Vec<usize>],
) -> Vec<MatchTriple> {
    let mut matches = Vec::new();

    for (row, firm_name) in firm_names.iter().enumerate() {
        for (col, acquiror_name) in acquiror_names.iter().enumerate() {
            let match_count = matrix[row][col];
            if match_count > 0 {
                matches.push(MatchTriple {
                    firm_name: firm_name.clone(),
                    acquiror_name: acquiror_name.clone(),
                    match_count,
                });
            }
        }
    }

    matches
}

/// Run the full scoring pipeline: load both tables, parse URL cells, fill the
/// matrix, collect nonzero triples, and write them to `output_path`.
pub fn run_scorer(
    firms_path: &Path,
    acquirors_path: &Path,
    output_path: &str,
    parsing: &ParsingConfig,
    scoring: &ScoringConfig,
) -> Result<ScoreSummary> {
    let started_at = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();

    let firms = load_firms(firms_path)?;
    let acquirors = load_acquirors(acquirors_path)?;

    let firm_sets: Vec<HashSet<String>> = firms
        .iter()
        .map(|record| url_set(record.urls.as_deref(), parsing.min_fragment_len))
        .collect();
    let acquiror_sets: Vec<HashSet<String>> = acquirors
        .iter()
        .map(|record| url_set(record.urls.as_deref(), parsing.min_fragment_len))
        .collect();

    info!(
        "Scoring {} firm rows against {} acquiror rows",
        firms.len(),
        acquirors.len()
    );

    let matrix = score_matrix(&firm_sets, &acquiror_sets, scoring.progress_interval);

    let firm_names: Vec<String> = firms.iter().map(|record| record.name.clone()).collect();
    let acquiror_names: Vec<String> = acquirors.iter().map(|record| record.name.clone()).collect();
    let matches = collect_matches(&firm_names, &acquiror_names, &matrix);

    export::export_matches_csv(&matches, output_path)?;

    let distinct_firms_matched = matches
        .iter()
        .map(|m| m.firm_name.as_str())
        .collect::<HashSet<_>>()
        .len();
    let distinct_acquirors_matched = matches
        .iter()
        .map(|m| m.acquiror_name.as_str())
        .collect::<HashSet<_>>()
        .len();

    Ok(ScoreSummary {
        firm_rows: firms.len(),
        acquiror_rows: acquirors.len(),
        match_triples: matches.len(),
        distinct_firms_matched,
        distinct_acquirors_matched,
        output_file: output_path.to_string(),
        started_at,
        completed_at: Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    })
}
