use async_trait::async_trait;
use contracts::usecases::u501_import_csv::{ImportOutcome, ImportRequest};
use std::fs::OpenOptions;
use std::io::Write;
use thiserror::Error;

use crate::shared::config::Config;

/// Catalog service failures, already reduced to operator-facing text
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The service answered with a non-success status
    #[error("{0}")]
    Api(String),

    /// No response at all (DNS, connect, timeout)
    #[error("network error: {0}")]
    Network(String),
}

/// Seam to the catalog's upsert endpoint. The HTTP implementation below
/// is the production one; tests drive the coordinator through an
/// in-memory fake.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Upsert the whole batch keyed by sku. An existing record with a
    /// matching sku is updated, otherwise one is created; per-row
    /// rejections come back inside the outcome, not as an error.
    async fn upsert_batch(&self, request: &ImportRequest) -> Result<ImportOutcome, CatalogError>;
}

/// HTTP client for the product catalog admin API
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.catalog.base_url, config.catalog.timeout_secs)
    }

    /// Append to the request log file
    fn log_to_file(&self, message: &str) {
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open("catalog_api_requests.log")
        {
            let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
            let _ = writeln!(file, "[{}] {}", timestamp, message);
        }
    }
}

/// Reduce an HTTP error body to a human string. The catalog API wraps
/// failures as {"message": "..."}; anything else falls back to a generic
/// line carrying the status code.
fn extract_error_message(body: &str, status: reqwest::StatusCode) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(|m| m.as_str())
                .map(|s| s.to_string())
        })
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| format!("import failed (HTTP {})", status.as_u16()))
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn upsert_batch(&self, request: &ImportRequest) -> Result<ImportOutcome, CatalogError> {
        let url = format!("{}/admin/products/import", self.base_url);

        self.log_to_file(&format!(
            "=== REQUEST ===\nPOST {} ({} rows)",
            url,
            request.rows.len()
        ));

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Catalog upsert request failed: {}", e);
                CatalogError::Network(e.to_string())
            })?;

        let status = response.status();
        self.log_to_file(&format!("Response status: {}", status));

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            self.log_to_file(&format!("ERROR Response body:\n{}", body));
            let message = extract_error_message(&body, status);
            tracing::error!("Catalog upsert rejected: {}", message);
            return Err(CatalogError::Api(message));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        self.log_to_file(&format!("=== RESPONSE BODY ===\n{}\n", body));

        serde_json::from_str::<ImportOutcome>(&body)
            .map_err(|e| CatalogError::Api(format!("unexpected response shape: {}", e)))
    }
}
