use async_trait::async_trait;
use log::debug;

use super::PacedClient;
use crate::config::settings::PagerSettings;
use crate::domain::UsersResponse;
use crate::errors::FetchError;

/// Anything that can hand the iterator one page of users for a request URL
#[async_trait]
pub trait PageSource: Send {
    async fn fetch_page(&mut self, url: &str) -> Result<UsersResponse, FetchError>;
}

/// Page source backed by the real user directory over HTTP
pub struct HttpPageSource {
    client: PacedClient,
}

impl HttpPageSource {
    pub fn new(settings: &PagerSettings) -> anyhow::Result<Self> {
        let client = PacedClient::new(
            &settings.user_agent,
            settings.timeout_secs,
            settings.pacing_ms,
        )?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&mut self, url: &str) -> Result<UsersResponse, FetchError> {
        debug!("GET {}", url);
        let response = self.client.get(url).await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
