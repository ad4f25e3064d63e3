use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The catalog credential is absent from the environment. Not retryable.
    #[error("Catalog API key is missing (set JAMENDO_CLIENT_ID)")]
    MissingCredential,
    /// The backend or catalog answered with a non-2xx status. The message is
    /// the body's `detail`/`error` field when present.
    #[error("{0}")]
    Upstream(String),
    #[error("Failed to connect: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Pull a human-readable message out of an error body. Backend errors carry
/// `{"detail": …}`, proxy-style errors carry `{"error": …}`.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .or_else(|| value.get("error"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_field_wins_over_error_field() {
        let body = r#"{"detail": "Generation failed: oom", "error": "other"}"#;
        assert_eq!(
            extract_detail(body),
            Some("Generation failed: oom".to_string())
        );
    }

    #[test]
    fn non_json_body_yields_none() {
        assert_eq!(extract_detail("<html>502</html>"), None);
        assert_eq!(extract_detail(r#"{"detail": 42}"#), None);
    }
}
