use crate::feed::row::ArticleRow;
use futures::StreamExt;
use reqwest::redirect::Policy;
use std::time::Duration;
use thiserror::Error;

/// Sheet-to-JSON endpoint backing the Help Center.
pub const DEFAULT_ENDPOINT: &str =
    "https://opensheet.elk.sh/1eoEtPzIkFh7BqNQOreGzg7bKdRPJhxk0CNpE9vtUNFU/HelpTopics";

const MAX_FEED_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Errors that can occur while loading the article feed.
///
/// All of them are surfaced to the user the same way: a transient
/// notification and an empty help center.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS, connection, TLS, body read)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP response with non-2xx status code
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Body was not a JSON array of objects
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Response body exceeded the 10MB size limit
    #[error("Response too large")]
    ResponseTooLarge,
}

/// Redirect policy for the sheet endpoint: at most 3 hops, no loops.
fn redirect_policy() -> Policy {
    Policy::custom(|attempt| {
        if attempt.previous().len() >= 3 {
            return attempt.error("Too many redirects (max 3)");
        }
        if attempt.previous().iter().any(|prev| prev == attempt.url()) {
            return attempt.error("Redirect loop detected");
        }
        tracing::debug!(
            to = %attempt.url(),
            hop = attempt.previous().len() + 1,
            "Following redirect"
        );
        attempt.follow()
    })
}

/// Build the HTTP client used for every feed load.
pub fn build_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .redirect(redirect_policy())
        .pool_max_idle_per_host(2)
        .pool_idle_timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .build()
}

/// Fetch the article feed once and parse it into rows.
///
/// A single best-effort attempt: no retries, and no timeout beyond what the
/// client was built with. Cells that are missing or blank never fail the
/// parse; only a body that is not a JSON array of objects does.
///
/// # Errors
///
/// - [`FetchError::Network`] - Connection, TLS, or body read errors
/// - [`FetchError::HttpStatus`] - Non-2xx HTTP response
/// - [`FetchError::ResponseTooLarge`] - Body exceeded 10MB
/// - [`FetchError::Parse`] - Malformed JSON
pub async fn load(client: &reqwest::Client, endpoint: &str) -> Result<Vec<ArticleRow>, FetchError> {
    tracing::debug!(endpoint = %endpoint, "Fetching help topics");

    let response = client.get(endpoint).send().await?;

    if !response.status().is_success() {
        return Err(FetchError::HttpStatus(response.status().as_u16()));
    }

    let bytes = read_limited_bytes(response, MAX_FEED_SIZE).await?;
    let rows: Vec<ArticleRow> = serde_json::from_slice(&bytes)?;

    tracing::info!(rows = rows.len(), "Loaded help topics");
    Ok(rows)
}

async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, FetchError> {
    // Fast path: check Content-Length header
    if let Some(len) = response.content_length() {
        if len as usize > limit {
            return Err(FetchError::ResponseTooLarge);
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FetchError::ResponseTooLarge);
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SHEET_JSON: &str = r#"[
        {"Category": "Get Started", "Title": "Welcome", "Content": "Hi"},
        {"Category": "", "Title": "Orphan"},
        {"Title": "No category key"}
    ]"#;

    #[tokio::test]
    async fn test_load_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/HelpTopics"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(SHEET_JSON)
                    .insert_header("Content-Type", "application/json"),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = build_client().unwrap();
        let rows = load(&client, &format!("{}/HelpTopics", mock_server.uri()))
            .await
            .unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].title.as_deref(), Some("Welcome"));
        assert_eq!(rows[1].category, None);
        assert_eq!(rows[2].category, None);
    }

    #[tokio::test]
    async fn test_load_404_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let result = load(&client, &mock_server.uri()).await;
        match result.unwrap_err() {
            FetchError::HttpStatus(404) => {}
            e => panic!("Expected HttpStatus(404), got {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_load_500_does_not_retry() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let result = load(&client, &mock_server.uri()).await;
        assert!(matches!(result, Err(FetchError::HttpStatus(500))));
    }

    #[tokio::test]
    async fn test_load_malformed_json() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let result = load(&client, &mock_server.uri()).await;
        assert!(matches!(result, Err(FetchError::Parse(_))));
    }

    #[tokio::test]
    async fn test_load_object_instead_of_array() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"error": "sheet"}"#))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let result = load(&client, &mock_server.uri()).await;
        assert!(matches!(result, Err(FetchError::Parse(_))));
    }

    #[tokio::test]
    async fn test_load_empty_array() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let rows = load(&client, &mock_server.uri()).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_load_unreachable_host() {
        let uri = {
            let mock_server = MockServer::start().await;
            mock_server.uri()
        };

        let client = reqwest::Client::new();
        let result = load(&client, &format!("{}/HelpTopics", uri)).await;
        assert!(matches!(result, Err(FetchError::Network(_))));
    }

    /// JSON array padded with whitespace to `len` bytes.
    fn padded_array(len: usize) -> Vec<u8> {
        let mut body = vec![b' '; len];
        body[0] = b'[';
        body[len - 1] = b']';
        body
    }

    /// One-shot HTTP server that sends no Content-Length and closes the
    /// connection after the body, so the client has to stream to EOF.
    async fn serve_unsized(body: Vec<u8>) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            let head = b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nConnection: close\r\n\r\n";
            // The client may hang up early once it hits the limit
            let _ = socket.write_all(head).await;
            let _ = socket.write_all(&body).await;
            let _ = socket.shutdown().await;
        });
        format!("http://{}/HelpTopics", addr)
    }

    #[tokio::test]
    async fn test_load_rejects_oversized_content_length() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(padded_array(MAX_FEED_SIZE + 1))
                    .insert_header("Content-Type", "application/json"),
            )
            .mount(&mock_server)
            .await;

        let result = load(&build_client().unwrap(), &mock_server.uri()).await;
        assert!(matches!(result, Err(FetchError::ResponseTooLarge)));
    }

    #[tokio::test]
    async fn test_load_rejects_oversized_stream() {
        let endpoint = serve_unsized(padded_array(MAX_FEED_SIZE + 1)).await;
        let result = load(&build_client().unwrap(), &endpoint).await;
        assert!(matches!(result, Err(FetchError::ResponseTooLarge)));
    }

    #[tokio::test]
    async fn test_load_accepts_unsized_body_under_limit() {
        let endpoint = serve_unsized(SHEET_JSON.as_bytes().to_vec()).await;
        let rows = load(&build_client().unwrap(), &endpoint).await.unwrap();
        assert_eq!(rows.len(), 3);
    }
}
