use anyhow::Context as _;
use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can end a page fetch early
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid endpoint {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server answered with status {0}")]
    Status(StatusCode),
    #[error("malformed page response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// How a fetch failure is reported in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// A typed error with a message worth extracting
    Structured,
    /// Anything we have no shape for
    Unknown,
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Other(_) => FailureKind::Unknown,
            _ => FailureKind::Structured,
        }
    }
}

/// Write a failed fetch to the log according to its kind
pub fn log_fetch_failure(error: &FetchError) {
    match error.kind() {
        FailureKind::Structured => log::error!("error fetching users: {}", error),
        FailureKind::Unknown => log::error!("Unexpected error: {:?}", error),
    }
}

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Wrap result with fetch context
pub fn with_fetch_context<T, E>(result: Result<T, E>, url: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(fetch_context(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_errors_are_structured() {
        let status = FetchError::Status(StatusCode::BAD_GATEWAY);
        let decode = FetchError::from(serde_json::from_str::<u32>("nope").unwrap_err());

        assert_eq!(status.kind(), FailureKind::Structured);
        assert_eq!(decode.kind(), FailureKind::Structured);
        assert!(status.to_string().contains("502"));
    }

    #[test]
    fn test_other_errors_are_unknown() {
        let error = FetchError::from(anyhow::anyhow!("socket on fire"));

        assert_eq!(error.kind(), FailureKind::Unknown);
        assert_eq!(error.to_string(), "socket on fire");
    }

    #[test]
    fn test_fetch_context_names_url() {
        let result: Result<(), FetchError> = Err(FetchError::Status(StatusCode::NOT_FOUND));
        let error = with_fetch_context(result, "https://example.test/api/").unwrap_err();

        assert_eq!(error.to_string(), "Failed to fetch from: https://example.test/api/");
    }
}
