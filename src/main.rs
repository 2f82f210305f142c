use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Fetch song lyrics from Genius and open them in your browser
#[derive(Parser, Debug)]
#[command(name = "loafy", version, about)]
struct Cli {
    /// Write the page but don't launch a browser
    #[arg(long)]
    no_open: bool,

    /// Timeout in seconds for each request to Genius
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    timeout: u64,

    #[arg(long, env = "GENIUS_BASE_URL", default_value = loafy::api::GENIUS_BASE_URL, hide = true)]
    base_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so stdout stays free for the prompts
    let _guard = match loafy::logging::file_writer(loafy::paths::get_log_dir()) {
        Some((non_blocking, guard)) => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| "loafy=debug,reqwest=warn".into()),
                )
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .init();
            Some(guard)
        }
        None => None,
    };

    let config = loafy::Config {
        base_url: cli.base_url,
        timeout: Duration::from_secs(cli.timeout),
        output_path: loafy::paths::get_output_path()?,
        open_browser: !cli.no_open,
    };

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    let outcome = loafy::driver::run(&mut input, &mut output, &config).await;
    loafy::driver::report(outcome, &mut std::io::stderr())
}
