//! Outbound JSON HTTP client
//!
//! Thin wrapper around `reqwest` for delivering JSON payloads to upstream
//! services. One request per call: no retries, no backoff.

use std::time::Duration;

use serde::Serialize;

/// Default request timeout for upstream calls
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Error raised when a request could not be completed
#[derive(Debug, Clone, thiserror::Error)]
pub enum HttpClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Request failed: {0}")]
    Transport(String),
}

/// Upstream response: status plus body parsed as JSON when possible
#[derive(Debug, Clone, PartialEq)]
pub struct JsonResponse {
    pub status: u16,
    /// `Value::Null` when the body is empty or not JSON
    pub body: serde_json::Value,
}

impl JsonResponse {
    /// 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// JSON-over-HTTP client with a fixed per-request timeout
#[derive(Debug, Clone)]
pub struct JsonHttpClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl JsonHttpClient {
    /// Create a client with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self, HttpClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpClientError::Build(e.to_string()))?;
        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// POST `body` as JSON to `url`
    ///
    /// Any HTTP status is returned as a response; only transport failures
    /// and timeouts are errors.
    pub async fn post_json<T>(&self, url: &str, body: &T) -> Result<JsonResponse, HttpClientError>
    where
        T: Serialize + ?Sized,
    {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|e| self.classify(e))?;
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

        Ok(JsonResponse { status, body })
    }

    fn classify(&self, err: reqwest::Error) -> HttpClientError {
        if err.is_timeout() {
            HttpClientError::Timeout(self.timeout)
        } else {
            HttpClientError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one request with a canned response, returning the raw request
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/customers", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request).to_string();
                if let Some(end) = text.find("\r\n\r\n") {
                    let content_length = text
                        .lines()
                        .find_map(|l| {
                            l.to_ascii_lowercase()
                                .strip_prefix("content-length:")
                                .map(|v| v.trim().parse::<usize>().unwrap())
                        })
                        .unwrap_or(0);
                    if request.len() >= end + 4 + content_length {
                        break;
                    }
                }
                if n == 0 {
                    break;
                }
            }
            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&request).to_string()
        });

        (url, handle)
    }

    #[tokio::test]
    async fn test_post_json_success() {
        let (url, server) = serve_once("HTTP/1.1 201 Created", r#"{"id":7}"#).await;
        let client = JsonHttpClient::new(DEFAULT_TIMEOUT).unwrap();

        let response = client
            .post_json(&url, &serde_json::json!({"type": "INDIVIDUAL"}))
            .await
            .unwrap();

        assert_eq!(response.status, 201);
        assert!(response.is_success());
        assert_eq!(response.body["id"], 7);

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /customers"));
        assert!(request.to_ascii_lowercase().contains("content-type: application/json"));
        assert!(request.contains(r#"{"type":"INDIVIDUAL"}"#));
    }

    #[tokio::test]
    async fn test_post_json_error_status_is_not_an_error() {
        let (url, server) = serve_once("HTTP/1.1 500 Internal Server Error", "oops").await;
        let client = JsonHttpClient::new(DEFAULT_TIMEOUT).unwrap();

        let response = client.post_json(&url, &serde_json::json!({})).await.unwrap();

        assert_eq!(response.status, 500);
        assert!(!response.is_success());
        assert_eq!(response.body, serde_json::Value::Null);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_post_json_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/customers", listener.local_addr().unwrap());
        drop(listener);

        let client = JsonHttpClient::new(Duration::from_secs(2)).unwrap();
        let result = client.post_json(&url, &serde_json::json!({})).await;

        assert!(matches!(result, Err(HttpClientError::Transport(_))));
    }

    /// Accept one connection and hold it open without answering
    async fn silent_upstream() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/customers", listener.local_addr().unwrap());
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });
        url
    }

    #[tokio::test]
    async fn test_post_json_times_out() {
        let url = silent_upstream().await;
        let client = JsonHttpClient::new(Duration::from_millis(200)).unwrap();

        let result = client.post_json(&url, &serde_json::json!({})).await;

        assert!(
            matches!(result, Err(HttpClientError::Timeout(after)) if after == Duration::from_millis(200))
        );
    }

    #[test]
    fn test_is_success_range() {
        let ok = JsonResponse {
            status: 204,
            body: serde_json::Value::Null,
        };
        let redirect = JsonResponse {
            status: 302,
            body: serde_json::Value::Null,
        };
        assert!(ok.is_success());
        assert!(!redirect.is_success());
    }

    #[test]
    fn test_error_display() {
        let err = HttpClientError::Timeout(Duration::from_secs(3));
        assert_eq!(err.to_string(), "Request timed out after 3s");
    }
}
