use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::digest::PasswordDigest;
use crate::error::Error;

/// Environment variable overriding the lookup endpoint base URL.
pub const BREACH_API_URL_ENV: &str = "PASSVET_BREACH_API_URL";

/// Public Pwned Passwords range endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.pwnedpasswords.com";

/// Default bound on a single range request, connect through body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Base delay for exponential backoff (doubles each retry).
pub const RETRY_BASE_DELAY_MS: u64 = 100;

/// Outcome of a breach lookup.
///
/// `Unknown` records that the query could not complete. It is a separate
/// variant rather than a defaulted boolean so that a failed lookup can never
/// read as "not breached".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreachStatus {
    /// The digest suffix appeared in the range response.
    Found,
    /// The full range response was scanned without a match.
    NotFound,
    /// The lookup failed; exposure is undetermined.
    Unknown,
}

/// Settings for [`BreachClient`].
#[derive(Debug, Clone)]
pub struct BreachClientConfig {
    /// Base URL of the range endpoint, without the `/range/` path.
    pub base_url: String,
    /// Bound on a single HTTP request.
    pub timeout: Duration,
    /// Extra attempts after the first failed request. Zero disables retries.
    pub max_retries: u32,
    /// Backoff base delay, doubled on each retry.
    pub retry_base_delay: Duration,
}

impl Default for BreachClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: 0,
            retry_base_delay: Duration::from_millis(RETRY_BASE_DELAY_MS),
        }
    }
}

impl BreachClientConfig {
    /// Default configuration, honoring the `PASSVET_BREACH_API_URL` override.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var(BREACH_API_URL_ENV)
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            ..Self::default()
        }
    }
}

/// k-anonymity lookup client.
///
/// Wraps a pooled [`reqwest::Client`]; cheap to clone and safe to share
/// across tasks. Dropping a future returned by [`check`](Self::check) aborts
/// the in-flight request.
#[derive(Debug, Clone)]
pub struct BreachClient {
    http: reqwest::Client,
    config: BreachClientConfig,
}

impl BreachClient {
    /// Builds a client with the request timeout from `config` applied
    /// client-wide.
    pub fn new(config: BreachClientConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(Error::ClientBuild)?;
        Ok(Self { http, config })
    }

    /// Queries the range endpoint for the digest's prefix and scans the
    /// response for its suffix.
    ///
    /// Returns [`BreachStatus::Found`] or [`BreachStatus::NotFound`] on a
    /// completed query. Timeouts, transport errors, and non-2xx statuses are
    /// an [`Error`] after the configured retries are exhausted; callers
    /// choose whether to degrade that to [`BreachStatus::Unknown`] or
    /// propagate it. Only the prefix is sent; the suffix match happens
    /// locally.
    pub async fn check(&self, digest: &PasswordDigest) -> Result<BreachStatus, Error> {
        let prefix = digest.prefix();
        let url = format!("{}/range/{}", self.config.base_url, prefix);

        let mut last_error = None;
        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                let delay = self.config.retry_base_delay * (1 << attempt.min(10));
                tracing::warn!(prefix, attempt, "retrying range query");
                tokio::time::sleep(delay).await;
            }

            match self.http.get(&url).send().await {
                Ok(response) => {
                    if !response.status().is_success() {
                        last_error = Some(Error::HttpStatus {
                            prefix: prefix.to_string(),
                            status: response.status().as_u16(),
                        });
                        continue;
                    }

                    match response.text().await {
                        Ok(body) => {
                            tracing::debug!(prefix, "range query completed");
                            return Ok(scan_range(&body, digest.suffix()));
                        }
                        Err(e) => {
                            last_error = Some(Error::HttpRequest {
                                prefix: prefix.to_string(),
                                source: e,
                            });
                            continue;
                        }
                    }
                }
                Err(e) => {
                    last_error = Some(Error::HttpRequest {
                        prefix: prefix.to_string(),
                        source: e,
                    });
                    continue;
                }
            }
        }

        Err(last_error.unwrap_or_else(|| Error::AttemptsExhausted {
            prefix: prefix.to_string(),
            attempts: self.config.max_retries + 1,
        }))
    }
}

/// Scans a newline-separated `SUFFIX:COUNT` body for an exact suffix match.
///
/// Comparison is case-sensitive; both sides are uppercase hex. The count
/// column is not used.
fn scan_range(body: &str, suffix: &str) -> BreachStatus {
    for line in body.lines() {
        if line.is_empty() {
            continue;
        }
        let record_suffix = line.split(':').next().unwrap_or(line);
        if record_suffix == suffix {
            return BreachStatus::Found;
        }
    }
    BreachStatus::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUFFIX: &str = "FB2927D828AF22F592134E8932480637C0D";

    #[test]
    fn scan_finds_matching_record() {
        let body = "00A4A8D501AA5A9902F3F7F8BD9560B1439:5\r\nFB2927D828AF22F592134E8932480637C0D:1";
        assert_eq!(scan_range(body, SUFFIX), BreachStatus::Found);
    }

    #[test]
    fn scan_misses_when_no_record_matches() {
        let body = "00A4A8D501AA5A9902F3F7F8BD9560B1439:5\n11B5B9E612BB6B0013A4A809CE0671C2540:2";
        assert_eq!(scan_range(body, SUFFIX), BreachStatus::NotFound);
    }

    #[test]
    fn scan_is_case_sensitive() {
        let body = "fb2927d828af22f592134e8932480637c0d:1";
        assert_eq!(scan_range(body, SUFFIX), BreachStatus::NotFound);
    }

    #[test]
    fn scan_requires_full_suffix_not_substring() {
        // A record that merely starts with the suffix's first characters
        // must not match.
        let body = "FB2927D828AF22F592134E8932480637C0:1";
        assert_eq!(scan_range(body, SUFFIX), BreachStatus::NotFound);
    }

    #[test]
    fn scan_handles_empty_body_and_blank_lines() {
        assert_eq!(scan_range("", SUFFIX), BreachStatus::NotFound);
        assert_eq!(
            scan_range("\n\nFB2927D828AF22F592134E8932480637C0D:1\n", SUFFIX),
            BreachStatus::Found
        );
    }

    #[test]
    fn default_config_targets_public_endpoint() {
        let config = BreachClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_retries, 0);
    }
}
