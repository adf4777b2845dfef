use crate::domain::ports::PageFetcher;
use crate::utils::error::{Result, ScoreError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("phonomoton/", env!("CARGO_PKG_VERSION"));

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Wraps an existing client so callers control its lifetime and settings.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn with_settings(timeout_seconds: u64, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .user_agent(user_agent)
            .build()?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("Making page request to: {}", url);
        let response = self.client.get(url).send().await?;

        tracing::debug!("Page response status: {}", response.status());
        if !response.status().is_success() {
            return Err(ScoreError::HttpStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        tracing::debug!("Fetched {} bytes", body.len());
        Ok(body)
    }
}
