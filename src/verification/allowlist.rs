/// Allow-list retrieval and parsing
use std::time::Duration;

use crate::error::VerifyError;

/// Bound on the allow-list fetch. The upstream list is a static text file;
/// anything slower is treated as a failed fetch rather than waited out.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Anything that can return the plaintext allow-list body for a URL.
///
/// Production uses [`HttpAllowListSource`]; tests substitute in-memory fakes
/// so the verification logic runs without network access.
pub trait AllowListSource {
    /// Fetch the raw body at `url`.
    fn fetch(&self, url: &str) -> Result<String, VerifyError>;
}

/// Fetches the allow list over HTTP(S) with a bounded timeout.
pub struct HttpAllowListSource {
    timeout: Duration,
}

impl HttpAllowListSource {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl AllowListSource for HttpAllowListSource {
    fn fetch(&self, url: &str) -> Result<String, VerifyError> {
        let fetch_failed = |cause: String| VerifyError::FetchFailed {
            url: url.to_string(),
            cause,
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .danger_accept_invalid_certs(false) // Enforce SSL verification
            .build()
            .map_err(|e| fetch_failed(format!("failed to create HTTP client: {e}")))?;

        let response = client
            .get(url)
            .send()
            .map_err(|e| fetch_failed(e.to_string()))?;

        if response.status() != 200 {
            return Err(fetch_failed(format!(
                "status code {}",
                response.status().as_u16()
            )));
        }

        response.text().map_err(|e| fetch_failed(e.to_string()))
    }
}

/// Split a fetched body into trimmed entries.
///
/// One entry per line, surrounding whitespace removed, empty lines kept as
/// empty strings; the membership check is verbatim equality against these.
pub fn parse_entries(body: &str) -> Vec<String> {
    body.lines().map(|line| line.trim().to_string()).collect()
}
