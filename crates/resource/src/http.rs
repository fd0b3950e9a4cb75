//! Remote image fetching over HTTP(S).

use async_trait::async_trait;
use reportcard_traits::{ImageSource, ResourceError, SharedResourceData};
use std::sync::Arc;
use std::time::Duration;

/// Downloads image bytes with a shared reqwest client.
///
/// The client carries the request timeout; a timed-out request surfaces as
/// [`ResourceError::Timeout`].
#[derive(Debug, Clone)]
pub struct HttpImageSource {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpImageSource {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, ResourceError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| ResourceError::LoadFailed {
                path: "<http client>".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { client, timeout })
    }

    /// Wraps an existing client, e.g. one shared with the host application.
    pub fn with_client(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl ImageSource for HttpImageSource {
    async fn fetch(&self, url: &str) -> Result<SharedResourceData, ResourceError> {
        let classify = |e: reqwest::Error| {
            if e.is_timeout() {
                ResourceError::Timeout {
                    location: url.to_string(),
                    millis: self.timeout.as_millis(),
                }
            } else {
                ResourceError::LoadFailed {
                    path: url.to_string(),
                    message: e.to_string(),
                }
            }
        };

        let response = self.client.get(url).send().await.map_err(classify)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ResourceError::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let bytes = response.bytes().await.map_err(classify)?;
        log::debug!("Fetched {} bytes from {}", bytes.len(), url);
        Ok(Arc::new(bytes.to_vec()))
    }

    fn name(&self) -> &'static str {
        "HttpImageSource"
    }
}
