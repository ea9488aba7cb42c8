use std::time::Duration;

use thiserror::Error;

const NUMBERS_API_BASE: &str = "http://numbersapi.com";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur while fetching a trivia sentence.
///
/// Any transport or body-decode failure ends up here; there is no
/// status-code branching. The UI replaces every failure with a fixed
/// fallback message, so the variants only matter for logs.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Request could not be sent or the body could not be read.
    #[error("quote request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// HTTP client for `GET {base}/{number}/trivia`.
#[derive(Clone)]
pub struct QuoteClient {
    client: reqwest::Client,
    base_url: String,
}

impl QuoteClient {
    pub fn new() -> Result<Self, QuoteError> {
        Self::with_base_url(NUMBERS_API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, QuoteError> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch the trivia sentence for `number`.
    ///
    /// The response body is decoded as UTF-8 text regardless of status code
    /// — numbersapi answers errors with a plain-text sentence too, so a
    /// non-2xx body is still a displayable result.
    pub async fn trivia(&self, number: i64) -> Result<String, QuoteError> {
        let url = format!("{}/{}/trivia", self.base_url, number);
        let response = self.client.get(&url).send().await?;
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::mock_server::{MockResponse, MockTriviaServer};
    use std::net::TcpListener;

    #[tokio::test]
    async fn trivia_returns_response_body() {
        let server = MockTriviaServer::start().await;
        server
            .enqueue_response(MockResponse::text("42 is a cool number"))
            .await;

        let client = QuoteClient::with_base_url(server.base_url()).expect("client");
        let text = client.trivia(42).await.expect("fetch");
        assert_eq!(text, "42 is a cool number");
    }

    #[tokio::test]
    async fn trivia_requests_the_number_path() {
        let server = MockTriviaServer::start().await;
        server
            .enqueue_response(MockResponse::text("7 is a prime"))
            .await;

        let client = QuoteClient::with_base_url(server.base_url()).expect("client");
        client.trivia(7).await.expect("fetch");
        assert_eq!(server.requested_paths().await, vec!["/7/trivia".to_string()]);
    }

    #[tokio::test]
    async fn non_2xx_body_is_still_decoded() {
        let server = MockTriviaServer::start().await;
        server
            .enqueue_response(MockResponse::error(404, "42 is an unremarkable number."))
            .await;

        let client = QuoteClient::with_base_url(server.base_url()).expect("client");
        let text = client.trivia(42).await.expect("fetch");
        assert_eq!(text, "42 is an unremarkable number.");
    }

    #[tokio::test]
    async fn connection_refused_is_an_error() {
        // Bind-then-drop to get a port nothing is listening on.
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
            listener.local_addr().expect("local addr")
        };
        let client = QuoteClient::with_base_url(format!("http://{}", addr)).expect("client");
        assert!(client.trivia(1).await.is_err());
    }
}
