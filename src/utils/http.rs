use once_cell::sync::Lazy;

/// Shared HTTP client for all API calls.
///
/// No request timeout is configured: the UI surfaces long-running fetches as
/// loading states and all recovery is user-initiated.
static CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent(concat!("MuseRS/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            log::warn!("[Http] Client builder failed ({}), using defaults", e);
            reqwest::Client::new()
        })
});

/// Get the shared HTTP client.
pub fn client() -> &'static reqwest::Client {
    &CLIENT
}
