use crate::rate_limiter::RequestPacer;
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

/// HTTP client with optional request pacing
pub struct PacedClient {
    client: Client,
    pacer: RequestPacer,
}

impl PacedClient {
    pub fn new(user_agent: &str, timeout_secs: Option<u64>, pacing_ms: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        let pacer = RequestPacer::new(pacing_ms);

        Ok(Self { client, pacer })
    }

    pub async fn get(&mut self, url: &str) -> reqwest::Result<reqwest::Response> {
        self.pacer.wait().await;
        self.client.get(url).send().await
    }

    fn build_client(user_agent: &str, timeout_secs: Option<u64>) -> Result<Client> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build().context("Failed to build HTTP client")
    }
}
