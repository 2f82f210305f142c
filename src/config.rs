use crate::api::{DEFAULT_TIMEOUT, GENIUS_BASE_URL};
use std::path::PathBuf;
use std::time::Duration;

/// Runtime settings for a single interactive run
#[derive(Debug, Clone)]
pub struct Config {
    /// Host serving the search API and song pages
    pub base_url: String,
    /// Per-request timeout for both outbound calls
    pub timeout: Duration,
    /// Where the rendered page is written
    pub output_path: PathBuf,
    /// Launch the default browser once the page is written
    pub open_browser: bool,
}

impl Config {
    pub fn new(output_path: PathBuf) -> Self {
        Self {
            base_url: GENIUS_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            output_path,
            open_browser: true,
        }
    }
}
