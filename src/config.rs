//! Client configuration.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::{AcousticError, Result};

/// Base URL used when none is configured (US-6 pod).
pub const DEFAULT_BASE_URL: &str = "https://api-campaign-us-6.goacoustic.com";

/// Per-request HTTP timeout applied when none is configured.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Delay between consecutive status polls when none is configured.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(20);

/// Status polls allowed before giving up (30 minutes at the default interval).
const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 90;

/// Credentials and endpoint settings for [`AcousticClient`](crate::AcousticClient).
#[derive(Debug, Clone)]
pub struct AcousticConfig {
    /// OAuth client identity.
    pub client_id: String,
    /// Secret paired with the client identity.
    pub client_secret: String,
    /// Long-lived token exchanged for short-lived access tokens.
    pub refresh_token: String,
    /// API base URL. Organizations live on regional pods, so this varies.
    pub base_url: String,
    /// Per-request HTTP timeout.
    pub request_timeout: Duration,
    /// Job-status polling behavior.
    pub poll: PollPolicy,
}

impl AcousticConfig {
    /// Configuration with the default pod, timeout and poll policy.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            refresh_token: refresh_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            poll: PollPolicy::default(),
        }
    }

    /// Point the client at a different regional pod.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the per-request HTTP timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Override the polling policy.
    pub fn with_poll_policy(mut self, poll: PollPolicy) -> Self {
        self.poll = poll;
        self
    }

    /// Validate the configured base URL and strip any trailing slash.
    pub(crate) fn normalized_base_url(&self) -> Result<String> {
        Url::parse(&self.base_url).map_err(|e| {
            AcousticError::InvalidArgument(format!("base url {:?}: {e}", self.base_url))
        })?;
        Ok(self.base_url.trim_end_matches('/').to_string())
    }

    /// Build the HTTP client used for every call.
    pub(crate) fn build_http_client(&self) -> Result<Client> {
        Ok(Client::builder().timeout(self.request_timeout).build()?)
    }
}

/// Fixed-interval polling bound.
///
/// Report jobs on the vendor side can take minutes to finish. Polling waits
/// `interval` between status checks and gives up after `max_attempts` checks,
/// so the worst-case wait is roughly `interval * max_attempts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollPolicy {
    /// Delay between consecutive status polls.
    pub interval: Duration,
    /// Maximum number of status polls before giving up.
    pub max_attempts: u32,
}

impl PollPolicy {
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: DEFAULT_MAX_POLL_ATTEMPTS,
        }
    }
}
