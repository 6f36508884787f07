use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Other(String),
}

/// Delivers one URL-encoded form POST to the collection endpoint.
///
/// Implementations must not interpret the response: the endpoint does not
/// grant read access, so only transport-level failures are reported.
#[async_trait]
pub trait LeadTransport: Send + Sync {
    async fn deliver(&self, endpoint: &Url, fields: &[(&'static str, String)])
        -> Result<(), TransportError>;
}

#[derive(Clone, Default)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl LeadTransport for HttpTransport {
    async fn deliver(
        &self,
        endpoint: &Url,
        fields: &[(&'static str, String)],
    ) -> Result<(), TransportError> {
        // Opaque: neither the status nor the body is inspected.
        let _response = self
            .http
            .post(endpoint.clone())
            .form(fields)
            .send()
            .await?;
        Ok(())
    }
}
