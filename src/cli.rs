//! Command-line interface definitions for the Enable Sysadmin reader.
//!
//! This module defines the CLI arguments using the `clap` crate. The surface
//! is deliberately tiny: a single optional `--url` flag.

use clap::Parser;

use crate::fetch::DEFAULT_FEED_URL;

/// Display the latest Enable Sysadmin RSS articles as a table.
///
/// # Examples
///
/// ```sh
/// # Read the default Enable Sysadmin feed
/// enable_sysadmin_reader
///
/// # Read a different feed
/// enable_sysadmin_reader --url https://example.com/rss.xml
/// ```
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Override the RSS url for Enable Sysadmin
    #[arg(long, default_value = DEFAULT_FEED_URL)]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        let cli = Cli::parse_from(["enable_sysadmin_reader"]);
        assert_eq!(cli.url, DEFAULT_FEED_URL);
    }

    #[test]
    fn test_url_override() {
        let cli = Cli::parse_from([
            "enable_sysadmin_reader",
            "--url",
            "https://example.com/feed.xml",
        ]);
        assert_eq!(cli.url, "https://example.com/feed.xml");
    }
}
