//! CSV export for both pipelines.
//!
//! Both output tables keep the shape of the original thesis dumps: an
//! unlabeled index column followed by the data columns, so downstream
//! scripts that expect that layout keep working. The harvested `url` column
//! holds the serialized URL list the scorer's parser consumes.

use anyhow::{Context, Result};
use csv::Writer;
use std::fs::File;
use tracing::{debug, info};

use crate::harvest::HarvestedRow;
use crate::score::{MatchTriple, ScoreSummary};
use crate::urllist::serialize_url_list;

/// Write harvested rows: index + `conml` + `url`.
pub fn export_harvest_csv(rows: &[HarvestedRow], output_path: &str) -> Result<()> {
    debug!("Exporting {} harvested rows to CSV: {}", rows.len(), output_path);

    let file = File::create(output_path)
        .with_context(|| format!("Failed to create output file: {}", output_path))?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(["", "conml", "url"])?;
    for (index, row) in rows.iter().enumerate() {
        wtr.write_record([
            index.to_string(),
            row.name.clone(),
            serialize_url_list(&row.urls),
        ])?;
    }

    wtr.flush()?;
    info!("Successfully exported {} harvested rows to CSV: {}", rows.len(), output_path);

    Ok(())
}

/// Write match triples: index + `firm_name` + `acquiror_name` + `match_count`.
pub fn export_matches_csv(matches: &[MatchTriple], output_path: &str) -> Result<()> {
    debug!("Exporting {} match triples to CSV: {}", matches.len(), output_path);

    let file = File::create(output_path)
        .with_context(|| format!("Failed to create output file: {}", output_path))?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(["", "firm_name", "acquiror_name", "match_count"])?;
    for (index, m) in matches.iter().enumerate() {
        wtr.write_record([
            index.to_string(),
            m.firm_name.clone(),
            m.acquiror_name.clone(),
            m.match_count.to_string(),
        ])?;
    }

    wtr.flush()?;
    info!("Successfully exported {} match triples to CSV: {}", matches.len(), output_path);

    Ok(())
}

/// Print the post-run scorer summary to stdout.
pub fn print_score_summary(summary: &ScoreSummary) {
    println!("\n=== Score Summary ===");
    println!("Started:  {}", summary.started_at);
    println!("Finished: {}", summary.completed_at);
    println!("Firm rows scored: {}", summary.firm_rows);
    println!("Acquiror rows scored: {}", summary.acquiror_rows);
    println!("Match triples emitted: {}", summary.match_triples);
    println!("Distinct firms matched: {}", summary.distinct_firms_matched);
    println!("Distinct acquirors matched: {}", summary.distinct_acquirors_matched);
    println!("Results exported: {}", summary.output_file);
    println!("=====================\n");
}
