//! Deployment configuration, read once at startup.
//!
//! Every call site that needs a backend address goes through this struct so
//! deployments can repoint the generation backend or the catalog API with
//! environment variables instead of code changes.

use std::sync::Arc;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_CATALOG_URL: &str = "https://api.jamendo.com/v3.0";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the local generation/proxy backend.
    pub backend_url: String,
    /// Base URL of the remote track catalog API.
    pub catalog_url: String,
    /// Catalog API credential. Absence is a configuration error surfaced
    /// when a catalog-credentialed endpoint is first used, never a panic.
    pub catalog_client_id: Option<String>,
}

impl Config {
    /// Load configuration from the process environment (and `.env` if present).
    pub fn from_env() -> Arc<Self> {
        // .env is optional; missing file is not an error
        let _ = dotenvy::dotenv();

        let backend_url = std::env::var("MUSE_BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let catalog_url = std::env::var("JAMENDO_API_URL")
            .unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string());
        let catalog_client_id = std::env::var("JAMENDO_CLIENT_ID").ok();

        let config = Self::from_values(backend_url, catalog_url, catalog_client_id);
        log::info!(
            "[Config] backend={} catalog={} client_id={}",
            config.backend_url,
            config.catalog_url,
            if config.catalog_client_id.is_some() {
                "set"
            } else {
                "missing"
            }
        );
        Arc::new(config)
    }

    fn from_values(
        backend_url: String,
        catalog_url: String,
        catalog_client_id: Option<String>,
    ) -> Self {
        Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
            catalog_url: catalog_url.trim_end_matches('/').to_string(),
            catalog_client_id: catalog_client_id
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_normalized() {
        let config = Config::from_values(
            "http://localhost:8000///".to_string(),
            "https://api.example.com/v3.0/".to_string(),
            None,
        );
        assert_eq!(config.backend_url, "http://localhost:8000");
        assert_eq!(config.catalog_url, "https://api.example.com/v3.0");
    }

    #[test]
    fn blank_client_id_is_treated_as_missing() {
        let config = Config::from_values(
            "http://localhost:8000".to_string(),
            "https://api.example.com/v3.0".to_string(),
            Some("   ".to_string()),
        );
        assert!(config.catalog_client_id.is_none());
    }
}
