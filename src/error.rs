use thiserror::Error;

pub const SONG_NOT_FOUND: &str = "Song not found on Genius.";
pub const LYRICS_NOT_FOUND: &str = "Lyrics not found on the page.";

/// Errors surfaced to callers of the library and the interactive driver
#[derive(Debug, Error)]
pub enum Error {
    /// Anything that went wrong while resolving or extracting lyrics
    #[error("Failed to fetch lyrics: {0}")]
    LyricsFetchFailed(String),

    /// The output page could not be written
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Underlying causes of a failed lyrics fetch. Never escapes the crate
/// without being wrapped into [`Error::LyricsFetchFailed`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    NotFound(&'static str),

    #[error(transparent)]
    Network(#[from] reqwest::Error),

    #[error("Unexpected search response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::LyricsFetchFailed(err.to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
