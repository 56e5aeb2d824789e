use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Panics if the TLS backend cannot be initialized.
pub(crate) fn http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(timeout)
        .build()
        .expect("failed to build HTTP client")
}
