use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Build the standalone lyrics page. Values are inserted verbatim.
pub fn render_html(lyrics: &str, song_name: &str, artist_name: &str) -> String {
    format!(
        r#"
    <!DOCTYPE html>
    <html lang="en">
    <head>
      <meta charset="UTF-8" />
      <meta name="viewport" content="width=device-width, initial-scale=1.0" />
      <title>Lyrics: {song_name} - {artist_name}</title>
      <style>
        body {{
          font-family: Arial, sans-serif;
          background-color: #1e1e1e;
          color: #ffffff;
          margin: 0;
          padding: 20px;
          display: flex;
          flex-direction: column;
          align-items: center;
        }}
        #lyrics {{
          white-space: pre-wrap;
          text-align: center;
        }}
      </style>
    </head>
    <body>
      <h1>{song_name} - {artist_name}</h1>
      <div id="lyrics">{lyrics}</div>
    </body>
    </html>
  "#
    )
}

/// Render and write the page, replacing whatever is already at `path`
pub fn write_page(
    path: &Path,
    lyrics: &str,
    song_name: &str,
    artist_name: &str,
) -> std::io::Result<PathBuf> {
    std::fs::write(path, render_html(lyrics, song_name, artist_name))?;
    tracing::info!("Wrote lyrics page: {}", path.display());
    Ok(path.to_path_buf())
}

/// Hand the file to the platform's default application. Fire and forget:
/// a missing opener or a failed launch never fails the run.
pub fn open_in_browser(path: &Path) {
    let mut command = opener_command(path);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    match command.spawn() {
        Ok(_) => tracing::debug!("Launched opener for {}", path.display()),
        Err(e) => tracing::debug!("Could not launch opener for {}: {}", path.display(), e),
    }
}

#[cfg(target_os = "macos")]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}
