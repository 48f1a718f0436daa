//! HTTP retrieval of the feed document.
//!
//! One synchronous-in-spirit GET per invocation: no retries, no caching, no
//! connection reuse across calls. The client identifies itself with a custom
//! user agent and refuses to hand back the body of a non-2xx response, so an
//! error page can never be mistaken for feed content.

use std::time::Duration;

use tracing::{debug, info, instrument};
use url::Url;

use crate::error::FeedError;

/// The Enable Sysadmin feed endpoint, used when no `--url` is given.
pub const DEFAULT_FEED_URL: &str = "https://www.redhat.com/sysadmin/rss.xml";

/// Identifying user agent sent with every feed request.
const USER_AGENT: &str = "EnableSysadminRssReader";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch the raw feed document from `url`.
///
/// # Errors
///
/// - [`FeedError::InvalidUrl`] if `url` doesn't parse as a URL.
/// - [`FeedError::Http`] on network-level failure (DNS, refused, timeout).
/// - [`FeedError::Status`] when the server answers outside the 2xx range.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn get_rss(url: &str) -> Result<String, FeedError> {
    Url::parse(url)?;

    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    debug!("Requesting feed");
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::Status {
            status,
            url: url.to_string(),
        });
    }

    let body = response.text().await?;
    info!(bytes = body.len(), "Fetched feed");
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// Serve a single canned HTTP response on an ephemeral local port.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 2048];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/rss.xml")
    }

    #[tokio::test]
    async fn test_invalid_url_is_rejected_before_any_request() {
        let err = get_rss("not a url at all").await.unwrap_err();
        assert!(matches!(err, FeedError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_unresolvable_host_is_a_network_failure() {
        let err = get_rss("http://feed.invalid/rss.xml").await.unwrap_err();
        assert!(matches!(err, FeedError::Http(_)));
    }

    #[tokio::test]
    async fn test_success_returns_body_text() {
        let url = serve_once("200 OK", "<rss><channel></channel></rss>");
        let body = get_rss(&url).await.unwrap();
        assert_eq!(body, "<rss><channel></channel></rss>");
    }

    #[tokio::test]
    async fn test_404_is_a_fetch_failure_not_content() {
        let url = serve_once("404 Not Found", "<html>not the feed</html>");
        let err = get_rss(&url).await.unwrap_err();
        match err {
            FeedError::Status { status, url: u } => {
                assert_eq!(status.as_u16(), 404);
                assert_eq!(u, url);
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }
}
