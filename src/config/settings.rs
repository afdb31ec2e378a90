pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";
pub const ENDPOINT_ENV: &str = "USER_PAGER_ENDPOINT";

/// Where and how the directory is queried
#[derive(Debug, Clone)]
pub struct PagerSettings {
    pub endpoint: String,
    pub user_agent: String,
    pub timeout_secs: Option<u64>,
    pub pacing_ms: u64,
}

impl Default for PagerSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: "UserPager/0.1".to_string(),
            timeout_secs: None, // no timeout unless asked for
            pacing_ms: 0,
        }
    }
}

impl PagerSettings {
    /// Defaults with the endpoint taken from the environment when set
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Some(endpoint) = endpoint_from_env() {
            settings.endpoint = endpoint;
        }
        settings
    }

    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        self
    }

    pub fn with_timeout(mut self, timeout_secs: Option<u64>) -> Self {
        if timeout_secs.is_some() {
            self.timeout_secs = timeout_secs;
        }
        self
    }

    pub fn with_pacing(mut self, pacing_ms: Option<u64>) -> Self {
        if let Some(ms) = pacing_ms {
            self.pacing_ms = ms;
        }
        self
    }
}

fn endpoint_from_env() -> Option<String> {
    std::env::var(ENDPOINT_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub pager: PagerSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            pager: PagerSettings::from_env(),
        }
    }
}
