use crate::api::GeniusClient;
use crate::error::{FetchError, Result, LYRICS_NOT_FOUND};
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::OnceLock;

/// Marker Genius puts on every element holding lyric text. The site owns
/// this markup; update it here when the page structure changes.
pub const LYRICS_CONTAINER_SELECTOR: &str = r#"[data-lyrics-container="true"]"#;

static LINE_BREAK_REGEX: OnceLock<Regex> = OnceLock::new();
static TAG_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_line_break_regex() -> &'static Regex {
    LINE_BREAK_REGEX.get_or_init(|| Regex::new(r"(?i)<br\s*/?>").unwrap())
}

fn get_tag_regex() -> &'static Regex {
    TAG_REGEX.get_or_init(|| Regex::new(r"<[^>]*>").unwrap())
}

/// Resolve a song on Genius and return its lyrics as plain text.
///
/// Every failure along the way (network, decoding, nothing found) comes back
/// as [`crate::Error::LyricsFetchFailed`] carrying the cause's message.
pub async fn fetch_lyrics(
    client: &GeniusClient,
    song_name: &str,
    artist_name: &str,
) -> Result<String> {
    let song = client.search_song(song_name, artist_name).await?;
    tracing::info!(
        url = %song.url,
        title = song.full_title.as_deref().unwrap_or(""),
        "Resolved song page"
    );

    let html = client.fetch_page(&song.url).await?;
    let lyrics = extract_lyrics(&html)?;
    tracing::info!(chars = lyrics.len(), "Extracted lyrics");

    Ok(lyrics)
}

/// Pull newline-formatted lyric text out of a Genius song page.
///
/// Containers are joined by a blank line, `<br>` becomes `\n`, every other
/// tag is dropped and the result is trimmed.
pub fn extract_lyrics(html: &str) -> Result<String, FetchError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(LYRICS_CONTAINER_SELECTOR).expect("valid selector");

    let mut lyrics = String::new();
    for container in document.select(&selector) {
        lyrics.push_str(&markup_to_text(&container.inner_html()));
        lyrics.push_str("\n\n");
    }

    let trimmed = lyrics.trim();
    if trimmed.is_empty() {
        return Err(FetchError::NotFound(LYRICS_NOT_FOUND));
    }

    Ok(trimmed.to_string())
}

fn markup_to_text(markup: &str) -> String {
    let with_breaks = get_line_break_regex().replace_all(markup, "\n");
    get_tag_regex().replace_all(&with_breaks, "").into_owned()
}
