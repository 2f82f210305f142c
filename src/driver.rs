use crate::api::GeniusClient;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::{lyrics, page};
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const SONG_PROMPT: &str = "Enter the song name: ";
pub const ARTIST_PROMPT: &str = "Enter the artist name: ";

/// Run one interactive session: prompt for song and artist, fetch the
/// lyrics, write the page and open it.
///
/// Returns the path of the written page. Fetch failures come back as
/// `Error::LyricsFetchFailed`, a failed write as `Error::Io`.
pub async fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &Config,
) -> Result<PathBuf> {
    let song_name = prompt(input, output, SONG_PROMPT)?;
    let artist_name = prompt(input, output, ARTIST_PROMPT)?;
    tracing::info!("Query: song={:?} artist={:?}", song_name, artist_name);

    let client = GeniusClient::with_base_url(&config.base_url, config.timeout)?;
    let lyrics = lyrics::fetch_lyrics(&client, &song_name, &artist_name).await?;

    let path = page::write_page(&config.output_path, &lyrics, &song_name, &artist_name)?;

    if config.open_browser {
        page::open_in_browser(&path);
    }

    Ok(path)
}

/// Report how a session ended. A failed fetch becomes one line on `err`
/// and counts as a normal exit; a failed page write is handed back.
pub fn report<W: Write>(outcome: Result<PathBuf>, err: &mut W) -> anyhow::Result<()> {
    match outcome {
        Ok(path) => {
            tracing::info!("Session finished: {}", path.display());
            Ok(())
        }
        Err(Error::Io(e)) => Err(e.into()),
        Err(e) => {
            tracing::error!("{}", e);
            writeln!(err, "{}", e)?;
            Ok(())
        }
    }
}

/// Print `message` and read one line. Only the line terminator is
/// removed; an empty line or end of input yields an empty string.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    output.write_all(message.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}
