use reqwest::Client;

use crate::domain::{
    common::{HistoryStoreConfig, entities::app_errors::CoreError},
    history::{entities::HistoryRow, ports::HistoryStore},
};

/// Client of the external scan history service.
#[derive(Debug, Clone)]
pub struct HttpHistoryStore {
    client: Client,
    base_url: String,
}

impl HttpHistoryStore {
    pub fn new(config: &HistoryStoreConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build history store HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn store_error(context: &str, e: impl std::fmt::Display) -> CoreError {
    tracing::error!("History store {}: {}", context, e);
    CoreError::ExternalServiceError(format!("History store {}: {}", context, e))
}

impl HistoryStore for HttpHistoryStore {
    async fn save(&self, row: HistoryRow) -> Result<(), CoreError> {
        let response = self
            .client
            .post(self.url("/add-product"))
            .json(&row)
            .send()
            .await
            .map_err(|e| store_error("request failed", e))?;

        if !response.status().is_success() {
            return Err(store_error("rejected scan", response.status()));
        }

        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<HistoryRow>, CoreError> {
        let response = self
            .client
            .get(self.url("/history"))
            .send()
            .await
            .map_err(|e| store_error("request failed", e))?;

        if !response.status().is_success() {
            return Err(store_error("returned error", response.status()));
        }

        let mut rows: Vec<HistoryRow> = response
            .json()
            .await
            .map_err(|e| store_error("returned unreadable rows", e))?;
        rows.truncate(limit);
        Ok(rows)
    }
}
