use reqwest::Client;
use thiserror::Error;

use super::protocol::{ChatReply, ChatRequest, RESPONSE_PATH};

/// A request that did not produce a parseable reply.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to reach collaborator endpoint {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Collaborator reply from {url} is not a usable JSON body: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The external service that turns a user message into a reply.
#[allow(async_fn_in_trait)]
pub trait Collaborator {
    async fn get_response(&self, request: &ChatRequest) -> Result<ChatReply, TransportError>;
}

/// [`Collaborator`] reached over HTTP at `{endpoint}/get-response/`.
pub struct HttpCollaborator {
    client: Client,
    url: String,
}

impl HttpCollaborator {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: Client::new(),
            url: response_url(endpoint),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Joins the endpoint base URL and the response path.
pub fn response_url(endpoint: &str) -> String {
    format!("{}{RESPONSE_PATH}", endpoint.trim_end_matches('/'))
}

impl Collaborator for HttpCollaborator {
    async fn get_response(&self, request: &ChatRequest) -> Result<ChatReply, TransportError> {
        tracing::debug!(url = %self.url, language = %request.language, "posting message");

        let request_error = |source| TransportError::Request {
            url: self.url.clone(),
            source,
        };

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(request_error)?;

        // The status is informational only: error pages that still carry a
        // JSON body are treated like any other reply.
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %self.url, %status, "collaborator returned an error status");
        }

        let body = response.bytes().await.map_err(request_error)?;

        ChatReply::from_json(&body).map_err(|source| TransportError::Decode {
            url: self.url.clone(),
            source,
        })
    }
}
