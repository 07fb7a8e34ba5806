//! Browser-driven link harvesting for company names.
//!
//! For each input name the harvester builds a search query URL, loads it in a
//! headless Chrome tab, sleeps a fixed delay, and collects the hrefs of the
//! result anchors in document order. One browser session and one tab serve
//! the whole run; any navigation or extraction failure aborts the run.

use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use scraper::{Html, Selector};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

use crate::browser::create_browser;
use crate::config::SearchConfig;
use crate::records::FirmRecord;

/// One harvested output row: the company name and its collected links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestedRow {
    pub name: String,
    pub urls: Vec<String>,
}

/// Build the search query URL for a company name.
/// `&` is escaped as `%26` so it survives as query text; nothing else is
/// escaped.
pub fn build_query_url(engine_url: &str, name: &str) -> String {
    let escaped = name.replace('&', "%26");
    format!("{}{}", engine_url, escaped)
}

/// Extract result hrefs from a rendered search page, in document order.
/// A page with no matching anchors yields an empty list, not an error.
pub fn extract_result_links(html: &str, selector: &Selector) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(selector)
        .filter_map(|anchor| anchor.value().attr("href"))
        .map(str::to_string)
        .collect()
}

/// Harvest search-result links for every record, in input order.
pub fn run_harvest(records: &[FirmRecord], search: &SearchConfig) -> Result<Vec<HarvestedRow>> {
    let selector = Selector::parse(&search.result_selector).map_err(|e| {
        anyhow!(
            "Invalid result selector '{}': {}",
            search.result_selector,
            e
        )
    })?;

    let browser = create_browser()?;
    let tab = browser
        .new_tab()
        .map_err(|e| anyhow!("Failed to create browser tab: {}", e))?;

    let total = records.len();
    let progress = ProgressBar::new(total as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
    );

    let mut rows = Vec::with_capacity(total);

    for (index, record) in records.iter().enumerate() {
        let query_url = build_query_url(&search.engine_url, &record.name);
        info!(
            "Firm {} of {} ({:.1}%): {}",
            index + 1,
            total,
            (index + 1) as f64 * 100.0 / total as f64,
            query_url
        );
        progress.set_message(record.name.clone());

        tab.navigate_to(&query_url)
            .map_err(|e| anyhow!("Failed to navigate to {}: {}", query_url, e))?;
        tab.wait_until_navigated()
            .map_err(|e| anyhow!("Page failed to load for {}: {}", query_url, e))?;

        // Fixed delay only; the result page renders asynchronously and
        // exposes no completion signal to key off.
        thread::sleep(Duration::from_secs(search.page_delay_secs));

        let html = tab
            .get_content()
            .map_err(|e| anyhow!("Failed to get page content for {}: {}", query_url, e))?;

        let links = extract_result_links(&html, &selector);
        debug!("Collected {} links for '{}'", links.len(), record.name);

        rows.push(HarvestedRow {
            name: record.name.clone(),
            urls: links,
        });
        progress.inc(1);
    }

    progress.finish_and_clear();
    info!("Harvest complete: {} firms processed", total);

    Ok(rows)
}
