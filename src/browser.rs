//! Headless Chrome session management.
//!
//! One browser is launched at the start of a harvest run and reused for every
//! query. Dropping the handle terminates the Chrome process, so an aborted run
//! does not leave it behind.

use anyhow::{anyhow, Result};
use headless_chrome::{Browser, LaunchOptions};

/// Create a headless Chrome browser instance.
/// Automatically disables the sandbox when running inside a container
/// (detected via /.dockerenv or the LINKMATCH_CONTAINER env var) and honors
/// CHROME_PATH for a non-default Chrome binary.
pub fn create_browser() -> Result<Browser> {
    let is_container = std::env::var("LINKMATCH_CONTAINER").is_ok()
        || std::path::Path::new("/.dockerenv").exists();

    let chrome_path: Option<std::path::PathBuf> =
        std::env::var("CHROME_PATH").ok().map(std::path::PathBuf::from);

    let mut builder = LaunchOptions::default_builder();
    if is_container {
        builder.sandbox(false);
    }
    if chrome_path.is_some() {
        builder.path(chrome_path);
    }

    let options = builder
        .build()
        .map_err(|e| anyhow!("Failed to build Chrome launch options: {}", e))?;

    Browser::new(options).map_err(|e| anyhow!("Failed to launch headless Chrome: {}", e))
}
