//! Configuration options for the needs API client

use std::str::FromStr;
use std::time::Duration;

use crate::error::Error;

/// Default back-end location
pub const DEFAULT_API_URL: &str = "https://localhost:7001/api";

/// How the draft list is sent to the back-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitMode {
    /// One POST carrying the whole list
    #[default]
    Batch,

    /// One POST per entry; the first failure aborts the rest
    PerEntry,
}

impl FromStr for SubmitMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "batch" => Ok(SubmitMode::Batch),
            "per-entry" | "per_entry" | "single" => Ok(SubmitMode::PerEntry),
            other => Err(Error::general(format!("unknown submit mode: {}", other))),
        }
    }
}

/// Configuration options for the needs API client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL of the API, including the `/api` prefix
    pub base_url: String,

    /// The request timeout
    pub request_timeout: Option<Duration>,

    /// How submissions are sent
    pub submit_mode: SubmitMode,

    /// Value of the `X-Client-Info` header
    pub client_info: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Some(Duration::from_secs(30)),
            submit_mode: SubmitMode::Batch,
            client_info: concat!("brigade-needs/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientOptions {
    /// Read options from `NEEDS_API_URL`, `NEEDS_API_TIMEOUT_SECS` and
    /// `NEEDS_SUBMIT_MODE`, falling back to the defaults for unset variables
    pub fn from_env() -> Result<Self, Error> {
        let mut options = Self::default();

        if let Ok(url) = std::env::var("NEEDS_API_URL") {
            options.base_url = url;
        }
        if let Ok(secs) = std::env::var("NEEDS_API_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|_| Error::general(format!("invalid NEEDS_API_TIMEOUT_SECS: {}", secs)))?;
            options.request_timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }
        if let Ok(mode) = std::env::var("NEEDS_SUBMIT_MODE") {
            options.submit_mode = mode.parse()?;
        }

        Ok(options)
    }

    /// Set the base URL
    pub fn with_base_url(mut self, value: &str) -> Self {
        self.base_url = value.to_string();
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set the submit mode
    pub fn with_submit_mode(mut self, value: SubmitMode) -> Self {
        self.submit_mode = value;
        self
    }

    /// Set the client info header
    pub fn with_client_info(mut self, value: &str) -> Self {
        self.client_info = value.to_string();
        self
    }
}
