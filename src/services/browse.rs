use anyhow::Result;
use log::info;
use tokio::io::BufReader;

use crate::config::settings::PagerSettings;
use crate::http::HttpPageSource;
use crate::pagination::UserIterator;
use crate::shell;

/// Interactive terminal browsing of the user directory
pub struct BrowseService {
    settings: PagerSettings,
}

impl BrowseService {
    pub fn new(settings: PagerSettings) -> Self {
        Self { settings }
    }

    pub async fn run(&self) -> Result<()> {
        let source = HttpPageSource::new(&self.settings)?;
        let iterator = UserIterator::new(self.settings.endpoint.clone(), source);
        info!("Browsing users from {}", iterator.endpoint());

        let input = BufReader::new(tokio::io::stdin());
        shell::run(iterator, input, std::io::stdout()).await
    }
}
