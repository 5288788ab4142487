//! HTTP client for article API requests.
//!
//! This module wraps `reqwest` for GET requests against the API base URL,
//! checking the status and decoding the JSON body into a model.

use super::FeedError;
use log::*;
use serde::de::DeserializeOwned;
use std::time::Duration;

const REQUEST_TIMEOUT_IN_SECS: u64 = 15;

/// Makes requests to the article API and tries to conform response data to
/// the given model.
///
pub struct Client {
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str) -> Result<Self, FeedError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_IN_SECS))
            .build()?;
        Ok(Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client,
        })
    }

    /// Return model data for the resource at `path` or error.
    ///
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, FeedError> {
        let request_url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        trace!("GET {} {:?}", request_url, params);

        let response = self
            .http_client
            .get(&request_url)
            .query(params)
            .send()
            .await?;
        let status = response.status();

        // Check status before trying to deserialize
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            error!("API request to {} failed with status {}", request_url, status);
            return Err(FeedError::Response {
                status: status.as_u16(),
                message,
            });
        }

        let response_bytes = response.bytes().await?;
        serde_json::from_slice::<T>(&response_bytes).map_err(|e| {
            error!(
                "Failed to deserialize response from {}: {}. Response body: {}",
                request_url,
                e,
                String::from_utf8_lossy(&response_bytes)
            );
            FeedError::Parse(e)
        })
    }
}
