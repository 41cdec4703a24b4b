//! HTTP client for the produce API

use crate::core::models::Produce;
use crate::core::query::ListProduceParams;
use crate::sdk::{config::ClientConfig, errors::*};
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

/// Path of the produce API relative to the endpoint
const PRODUCE_PATH: &str = "/api/v1/produce";

/// HTTP client for the produce API
#[derive(Debug, Clone)]
pub struct ProduceClient {
    config: ClientConfig,
    http_client: reqwest::Client,
}

impl ProduceClient {
    /// Build a client with the configured timeout
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.endpoint.trim().is_empty() {
            return Err(ClientError::ConfigError("Endpoint cannot be empty".to_string()));
        }

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Get client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn produce_url(&self) -> String {
        format!("{}{}", self.config.base_url(), PRODUCE_PATH)
    }

    /// Fetch the inventory; only non-empty parameters are sent
    pub async fn list_produce(
        &self,
        params: &ListProduceParams,
    ) -> Result<(Vec<Produce>, StatusCode)> {
        let pairs = params.to_query_pairs();
        debug!(url = %self.produce_url(), ?pairs, "Listing produce");

        let response = self
            .http_client
            .get(self.produce_url())
            .query(&pairs)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await?;
            return Err(ClientError::ApiError { status, message });
        }

        let records = response.json::<Vec<Produce>>().await?;
        Ok((records, status))
    }

    /// Submit a raw JSON batch and return the decoded response body
    ///
    /// The body is sent as given; the server decides whether it is malformed.
    pub async fn create_produce(&self, body: &str) -> Result<(serde_json::Value, StatusCode)> {
        debug!(url = %self.produce_url(), "Creating produce");

        let response = self
            .http_client
            .post(self.produce_url())
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        let value = if text.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text))
        };

        Ok((value, status))
    }

    /// Delete one record by code and return the raw response body
    pub async fn delete_produce(&self, produce_code: &str) -> Result<(String, StatusCode)> {
        let url = format!("{}/{}", self.produce_url(), produce_code);
        debug!(%url, "Deleting produce");

        let response = self.http_client.delete(url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        Ok((text, status))
    }
}
