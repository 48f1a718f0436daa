//! Error taxonomy for fetching and parsing the feed.
//!
//! Three failure conditions are distinguished so the caller can tell a bad
//! URL, a network problem, a non-success HTTP response, and unparseable XML
//! apart. A missing `title`/`link`/`description` inside an item is never an
//! error; it is represented as `None` on the record.

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between a feed URL and a list of articles.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The feed URL could not be parsed at all.
    #[error("invalid feed URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Network-level failure: DNS, connection refused, timeout, TLS.
    #[error("network failure while fetching feed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered, but outside the 2xx range. The response body is
    /// discarded so an error page is never mistaken for feed content.
    #[error("feed request returned HTTP {status} for {url}")]
    Status { status: StatusCode, url: String },

    /// The input could not be interpreted as XML in any recoverable sense.
    /// A well-formed feed with zero items is *not* a parse failure.
    #[error("feed is not parseable XML: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_carries_code_and_url() {
        let err = FeedError::Status {
            status: StatusCode::NOT_FOUND,
            url: "https://example.com/rss.xml".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("https://example.com/rss.xml"));
    }

    #[test]
    fn test_invalid_url_conversion() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: FeedError = parse_err.into();
        assert!(matches!(err, FeedError::InvalidUrl(_)));
    }
}
