//! Page fetching.
//!
//! A single GET with the configured browser-like User-Agent. One attempt per
//! audit: no retries, no caching. Non-success statuses short-circuit the
//! pipeline before any extraction happens.

use log::debug;

use crate::error_handling::AuditError;

/// Fetches the page body for the given URL.
///
/// # Arguments
///
/// * `client` - The shared HTTP client (carries User-Agent and timeout)
/// * `url` - The URL to fetch
///
/// # Returns
///
/// The raw response body as text.
///
/// # Errors
///
/// * [`AuditError::Transport`] if the request fails outright
/// * [`AuditError::FetchStatus`] for any non-2xx response
/// * [`AuditError::Extraction`] if the body cannot be read or decoded
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String, AuditError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    debug!("GET {} -> {}", url, status);
    if !status.is_success() {
        return Err(AuditError::FetchStatus {
            code: status.as_u16(),
        });
    }

    response
        .text()
        .await
        .map_err(|e| AuditError::Extraction(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{matchers::*, responders::*, Expectation, Server};

    fn test_client() -> reqwest::Client {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .user_agent("Mozilla/5.0")
            .build()
            .expect("Failed to create HTTP client")
    }

    #[tokio::test]
    async fn test_fetch_page_success_returns_body() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/page"))
                .respond_with(status_code(200).body("<html><title>Hi</title></html>")),
        );

        let body = fetch_page(&test_client(), &server.url("/page").to_string())
            .await
            .expect("fetch should succeed");
        assert!(body.contains("<title>Hi</title>"));
    }

    #[tokio::test]
    async fn test_fetch_page_sends_user_agent() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/ua"),
                request::headers(contains(("user-agent", "Mozilla/5.0"))),
            ])
            .respond_with(status_code(200).body("ok")),
        );

        let body = fetch_page(&test_client(), &server.url("/ua").to_string())
            .await
            .expect("fetch should succeed");
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_fetch_page_non_success_status() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/missing"))
                .respond_with(status_code(404).body("Not Found")),
        );

        let err = fetch_page(&test_client(), &server.url("/missing").to_string())
            .await
            .expect_err("404 should be an error");
        assert!(matches!(err, AuditError::FetchStatus { code: 404 }));
        assert_eq!(
            err.to_string(),
            "Failed to fetch the page (Status Code: 404)"
        );
    }

    #[tokio::test]
    async fn test_fetch_page_server_error_status() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/broken"))
                .respond_with(status_code(500).body("Internal Server Error")),
        );

        let err = fetch_page(&test_client(), &server.url("/broken").to_string())
            .await
            .expect_err("500 should be an error");
        assert!(matches!(err, AuditError::FetchStatus { code: 500 }));
    }

    #[tokio::test]
    async fn test_fetch_page_connection_refused() {
        // Port 1 is essentially guaranteed to refuse connections
        let err = fetch_page(&test_client(), "http://127.0.0.1:1/")
            .await
            .expect_err("connection refused should be an error");
        assert!(matches!(err, AuditError::Transport(_)));
    }
}
