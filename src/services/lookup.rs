use anyhow::Result;
use log::info;

use crate::config::settings::PagerSettings;
use crate::domain::{QueryParams, UsersResponse};
use crate::errors::with_fetch_context;
use crate::http::{HttpPageSource, PageSource};
use crate::pagination::{PAGE_SIZE, build_url};

/// One-shot page requests outside the interactive shell
pub struct LookupService {
    settings: PagerSettings,
}

impl LookupService {
    pub fn new(settings: PagerSettings) -> Self {
        Self { settings }
    }

    /// The URL the iterator would request for this page
    pub fn page_url(&self, page: u32) -> Result<String> {
        let params = QueryParams {
            page,
            results: PAGE_SIZE,
        };
        Ok(build_url(&self.settings.endpoint, &params)?)
    }

    /// Fetch one page and return it as pretty JSON
    pub async fn fetch_page_json(&self, page: u32) -> Result<String> {
        let url = self.page_url(page)?;
        let mut source = HttpPageSource::new(&self.settings)?;

        let response: UsersResponse = with_fetch_context(source.fetch_page(&url).await, &url)?;
        info!(
            "Fetched {} users from page {}",
            response.results.len(),
            response.info.page
        );

        Ok(serde_json::to_string_pretty(&response)?)
    }
}
