//! # Enable Sysadmin Reader
//!
//! A small CLI that fetches the Red Hat Enable Sysadmin RSS feed and prints
//! the articles as a table of titles, links and descriptions.
//!
//! ## Usage
//!
//! ```sh
//! enable_sysadmin_reader
//! enable_sysadmin_reader --url https://example.com/rss.xml
//! ```
//!
//! ## Architecture
//!
//! A single pass with no state between runs:
//! 1. **Fetch**: one HTTP GET of the feed document
//! 2. **Extract**: permissive XML parse into `{title, link, description}` records
//! 3. **Render**: three-column table on stdout, with the article count in the caption

use clap::Parser;
use std::error::Error;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod error;
mod feed;
mod fetch;
mod table;

use cli::Cli;
use feed::parse_rss;
use fetch::get_rss;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();

    let args = Cli::parse();
    debug!(url = %args.url, "Parsed CLI arguments");

    // Fetch failures terminate visibly with a non-zero exit; there is no
    // fallback content to show.
    let raw_rss = get_rss(&args.url).await?;
    let articles = parse_rss(&raw_rss)?;
    info!(count = articles.len(), "Extracted feed articles");

    println!("{}", table::caption(articles.len()));
    println!("{}", table::render(&articles));

    let elapsed = start_time.elapsed();
    debug!(?elapsed, "Execution complete");

    Ok(())
}
