use std::time::Duration;

use url::Url;

/// Base URL of the ladder service. Validated, and normalized without a
/// trailing slash so endpoint paths can be appended directly.
pub fn base_url() -> Result<String, url::ParseError> {
    let raw = std::env::var("LADDER_BASE_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
    let parsed = Url::parse(&raw)?;
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

/// Delay between queue status refreshes.
pub fn poll_interval() -> Duration {
    let millis = std::env::var("LADDER_POLL_INTERVAL_MS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(15_000);
    Duration::from_millis(millis)
}

/// Per-request timeout for the HTTP client.
pub fn http_timeout() -> Duration {
    let millis = std::env::var("LADDER_HTTP_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(10_000);
    Duration::from_millis(millis)
}
