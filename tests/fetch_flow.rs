use loafy::api::{GeniusClient, DEFAULT_TIMEOUT};
use loafy::{Config, Error};
use std::io::Cursor;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const SEARCH_PATH: &str = "/api/search/multi?q=Yesterday%20The%20Beatles";
const SONG_PATH: &str = "/Beatles-yesterday-lyrics";

struct Route {
    path: String,
    content_type: &'static str,
    body: String,
}

/// Serve canned responses on an ephemeral port. Unknown paths get a 404.
async fn serve(routes: Vec<Route>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let routes = Arc::new(routes);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let routes = routes.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 16 * 1024];
                let mut read = 0;
                loop {
                    let n = socket.read(&mut buf[read..]).await.unwrap_or(0);
                    read += n;
                    if n == 0
                        || read == buf.len()
                        || buf[..read].windows(4).any(|w| w == b"\r\n\r\n")
                    {
                        break;
                    }
                }

                let request = String::from_utf8_lossy(&buf[..read]);
                let path = request.split_whitespace().nth(1).unwrap_or("/");

                let (status, content_type, body) =
                    match routes.iter().find(|route| route.path == path) {
                        Some(route) => ("200 OK", route.content_type, route.body.as_str()),
                        None => ("404 Not Found", "text/plain", "not found"),
                    };

                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{addr}")
}

fn search_route(body: String) -> Route {
    Route {
        path: SEARCH_PATH.to_string(),
        content_type: "application/json",
        body,
    }
}

fn song_search_json(base_url: &str) -> String {
    format!(
        r#"{{"meta":{{"status":200}},"response":{{"sections":[
            {{"type":"top_hit","hits":[]}},
            {{"type":"lyric","hits":[{{"highlights":[],"result":{{"title":"Yesterday"}}}}]}},
            {{"type":"video"}},
            {{"type":"song","hits":[{{"result":{{"url":"{base_url}{SONG_PATH}","full_title":"Yesterday by The Beatles"}}}}]}}
        ]}}}}"#
    )
}

fn lyrics_route(containers: &str) -> Route {
    Route {
        path: SONG_PATH.to_string(),
        content_type: "text/html; charset=utf-8",
        body: format!(
            "<!DOCTYPE html><html><head><title>Yesterday</title></head><body>\
             <div class=\"header\">Yesterday Lyrics</div>{containers}</body></html>"
        ),
    }
}

/// Search host whose only song hit points at a page on a second host
async fn genius_with_page(containers: &str) -> String {
    let page_base = serve(vec![lyrics_route(containers)]).await;
    serve(vec![search_route(song_search_json(&page_base))]).await
}

#[tokio::test]
async fn test_fetches_yesterday() {
    let base = genius_with_page(
        r#"<div data-lyrics-container="true">Yesterday<br>All my troubles seemed so far away</div>"#,
    )
    .await;
    let client = GeniusClient::with_base_url(&base, DEFAULT_TIMEOUT).unwrap();

    let lyrics = loafy::fetch_lyrics(&client, "Yesterday", "The Beatles")
        .await
        .unwrap();

    assert_eq!(lyrics, "Yesterday\nAll my troubles seemed so far away");
}

#[tokio::test]
async fn test_missing_song_section_fails() {
    let base = serve(vec![search_route(
        r#"{"response":{"sections":[{"type":"artist","hits":[]}]}}"#.to_string(),
    )])
    .await;
    let client = GeniusClient::with_base_url(&base, DEFAULT_TIMEOUT).unwrap();

    let err = loafy::fetch_lyrics(&client, "Yesterday", "The Beatles")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::LyricsFetchFailed(_)));
    assert_eq!(
        err.to_string(),
        "Failed to fetch lyrics: Song not found on Genius."
    );
}

#[tokio::test]
async fn test_blank_lyrics_fail() {
    let base =
        genius_with_page(r#"<div data-lyrics-container="true">  <br>  </div>"#).await;
    let client = GeniusClient::with_base_url(&base, DEFAULT_TIMEOUT).unwrap();

    let err = loafy::fetch_lyrics(&client, "Yesterday", "The Beatles")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::LyricsFetchFailed(_)));
    assert!(err.to_string().contains("Lyrics not found on the page."));
}

#[tokio::test]
async fn test_http_error_is_wrapped() {
    let base = serve(Vec::new()).await;
    let client = GeniusClient::with_base_url(&base, DEFAULT_TIMEOUT).unwrap();

    let err = loafy::fetch_lyrics(&client, "Yesterday", "The Beatles")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::LyricsFetchFailed(_)));
    assert!(err.to_string().starts_with("Failed to fetch lyrics: "));
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_unexpected_search_shape_is_wrapped() {
    let base = serve(vec![search_route(r#"{"meta":{"status":200}}"#.to_string())]).await;
    let client = GeniusClient::with_base_url(&base, DEFAULT_TIMEOUT).unwrap();

    let err = loafy::fetch_lyrics(&client, "Yesterday", "The Beatles")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::LyricsFetchFailed(_)));
}

#[tokio::test]
async fn test_session_writes_page() {
    let base = genius_with_page(
        r#"<div data-lyrics-container="true">Yesterday<br>All my troubles seemed so far away</div>"#,
    )
    .await;
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        base_url: base,
        open_browser: false,
        ..Config::new(dir.path().join("lyrics.html"))
    };

    let mut input = Cursor::new("Yesterday\nThe Beatles\n");
    let mut output = Vec::new();
    let path = loafy::driver::run(&mut input, &mut output, &config)
        .await
        .unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "Enter the song name: Enter the artist name: "
    );
    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("<h1>Yesterday - The Beatles</h1>"));
    assert!(html.contains(
        "<div id=\"lyrics\">Yesterday\nAll my troubles seemed so far away</div>"
    ));

    // Same inputs, same remote content: identical bytes
    let mut input = Cursor::new("Yesterday\nThe Beatles\n");
    loafy::driver::run(&mut input, &mut Vec::new(), &config)
        .await
        .unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), html);
}

#[tokio::test]
async fn test_session_fetch_failure_leaves_no_page() {
    let base = serve(vec![search_route(
        r#"{"response":{"sections":[]}}"#.to_string(),
    )])
    .await;
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("lyrics.html");
    let config = Config {
        base_url: base,
        open_browser: false,
        ..Config::new(output_path.clone())
    };

    let mut input = Cursor::new("Yesterday\nThe Beatles\n");
    let err = loafy::driver::run(&mut input, &mut Vec::new(), &config)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Song not found on Genius."));
    assert!(!output_path.exists());
}

#[tokio::test]
async fn test_session_write_failure_is_io() {
    let base = genius_with_page(r#"<div data-lyrics-container="true">la</div>"#).await;
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        base_url: base,
        open_browser: false,
        ..Config::new(dir.path().join("missing").join("lyrics.html"))
    };

    let mut input = Cursor::new("Yesterday\nThe Beatles\n");
    let err = loafy::driver::run(&mut input, &mut Vec::new(), &config)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Io(_)));
}
