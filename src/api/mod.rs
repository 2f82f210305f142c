pub mod types;

use crate::error::{FetchError, SONG_NOT_FOUND};
use std::time::Duration;
use types::{SearchResponse, SongResult};

pub const GENIUS_BASE_URL: &str = "https://genius.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct GeniusClient {
    client: reqwest::Client,
    base_url: String,
}

impl GeniusClient {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(GENIUS_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Client against an arbitrary Genius-compatible host
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn search_url(&self, song_name: &str, artist_name: &str) -> String {
        format!(
            "{}/api/search/multi?q={}",
            self.base_url,
            urlencoding::encode(&format!("{} {}", song_name, artist_name))
        )
    }

    /// Search Genius and return the first hit of the "song" section
    pub async fn search_song(
        &self,
        song_name: &str,
        artist_name: &str,
    ) -> Result<SongResult, FetchError> {
        let url = self.search_url(song_name, artist_name);
        tracing::info!("Searching Genius: {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let search = response.json::<SearchResponse>().await?;

        search.into_first_song()?.ok_or_else(|| {
            tracing::debug!("No song section for: {} - {}", song_name, artist_name);
            FetchError::NotFound(SONG_NOT_FOUND)
        })
    }

    /// Fetch the raw markup of a lyrics page
    pub async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!("Fetching lyrics page: {}", url);

        let response = self.client.get(url).send().await?.error_for_status()?;
        let html = response.text().await?;

        tracing::debug!("Received {} bytes", html.len());
        Ok(html)
    }
}
