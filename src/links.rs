//! Hyperlink extraction and liveness classification.
//!
//! Extraction pulls every absolute `http`/`https` URL out of scanned text;
//! classification probes each one with a bounded HEAD request. The two are
//! deliberately independent so tests can script the probe.

use std::time::Duration;

use regex::Regex;

use crate::error::Error;

/// Sentinel status for "the request failed entirely" (connection refused,
/// timeout, DNS failure).
pub const STATUS_PROBE_FAILED: i32 = -1;

/// Inclusive status range treated as "alive". The upper bound deliberately
/// admits auth-gated responses (401/403): a link behind a login is live
/// infrastructure, not rot.
const ALIVE_RANGE: std::ops::RangeInclusive<i32> = 200..=403;

/// Per-probe timeout. A hung host must not stall its whole task.
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Cap on redirect hops so a probe cannot loop forever.
const MAX_REDIRECTS: usize = 5;

/// Classifies a URL by its probe result.
pub fn is_alive(status: i32) -> bool {
    return ALIVE_RANGE.contains(&status);
}

/// Extract every absolute `http`/`https` URL from file text, in order of
/// appearance. A URL runs from its scheme to the next whitespace; trailing
/// punctuation that is almost always prose or markdown syntax (`)`, `.`,
/// `,`, quotes, ...) is trimmed so `(http://example.com/x)` probes cleanly.
///
/// # Panics
///
/// Panics if the hardcoded URL regex is invalid (compile-time invariant).
pub fn extract_urls(content: &str) -> Vec<String> {
    let pattern = Regex::new(r"https?://[^\s]+").expect("valid regex");
    return pattern
        .find_iter(content)
        .map(|m| trim_trailing_punctuation(m.as_str()).to_string())
        .collect();
}

/// Trim punctuation that terminates a URL in running text.
fn trim_trailing_punctuation(url: &str) -> &str {
    return url.trim_end_matches([')', ']', '>', '.', ',', ';', ':', '!', '?', '"', '\'']);
}

/// Probes a URL for liveness. Implementations must apply their own bounded
/// timeout; the core only interprets the returned status.
pub trait LinkProber: Send + Sync {
    /// Returns the HTTP status code observed for `url`, or
    /// [`STATUS_PROBE_FAILED`] when no response was obtained at all.
    fn probe(&self, url: &str) -> i32;
}

/// Live prober issuing HEAD requests over a blocking HTTP client.
pub struct HttpProber {
    /// Shared client: one connection pool, one timeout, one redirect cap.
    client: reqwest::blocking::Client,
}

impl HttpProber {
    /// Build a prober. TLS verification is a per-run setting passed in
    /// explicitly, never ambient process state.
    ///
    /// # Errors
    ///
    /// Returns `Error::ProberSetup` if the HTTP client cannot be built.
    pub fn new(ssl_verify: bool) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(PROBE_TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .danger_accept_invalid_certs(!ssl_verify)
            .build()
            .map_err(|e| {
                return Error::ProberSetup {
                    reason: e.to_string(),
                };
            })?;
        return Ok(Self { client });
    }
}

impl LinkProber for HttpProber {
    fn probe(&self, url: &str) -> i32 {
        return match self.client.head(url).send() {
            Ok(response) => i32::from(response.status().as_u16()),
            Err(_) => STATUS_PROBE_FAILED,
        };
    }
}
