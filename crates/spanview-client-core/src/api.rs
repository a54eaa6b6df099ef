use serde::{Deserialize, Serialize};

/// Default root for the query service, relative to the page origin.
pub const DEFAULT_API_ROOT: &str = "/api/";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiConfigError {
    #[error("api root must not be empty")]
    EmptyApiRoot,
    #[error("api root must be an absolute path or an http(s) url: {0:?}")]
    InvalidApiRoot(String),
    #[error("api root has not been configured")]
    ApiRootNotSet,
}

/// Process-wide query-service client configuration. One instance exists per
/// shell process; bootstrap assigns its root before any surface builds a
/// request URL. The transport itself lives with the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiClient {
    api_root: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns the API root. Re-assignment is allowed (each shell instance
    /// bootstraps the shared client) and simply overwrites the value.
    pub fn set_api_root(&mut self, raw: &str) -> Result<(), ApiConfigError> {
        self.api_root = Some(normalize_api_root(raw)?);
        Ok(())
    }

    pub fn api_root(&self) -> Option<&str> {
        self.api_root.as_deref()
    }

    pub fn is_configured(&self) -> bool {
        self.api_root.is_some()
    }

    /// Joins `suffix` onto the configured root, e.g. `traces/abc123` under
    /// `/api/` becomes `/api/traces/abc123`.
    pub fn endpoint(&self, suffix: &str) -> Result<String, ApiConfigError> {
        let Some(root) = self.api_root.as_deref() else {
            return Err(ApiConfigError::ApiRootNotSet);
        };
        Ok(format!("{root}{}", suffix.trim_start_matches('/')))
    }
}

/// Normalizes an API root to end in exactly one `/`. Roots are either
/// origin-relative absolute paths or full http(s) urls.
pub fn normalize_api_root(raw: &str) -> Result<String, ApiConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiConfigError::EmptyApiRoot);
    }
    if !(trimmed.starts_with('/')
        || trimmed.starts_with("http://")
        || trimmed.starts_with("https://"))
    {
        return Err(ApiConfigError::InvalidApiRoot(raw.to_string()));
    }
    Ok(format!("{}/", trimmed.trim_end_matches('/')))
}
