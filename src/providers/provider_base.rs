use log::warn;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

use super::{ProviderError, ProviderResult};

/// Base provider struct that implements common functionality
pub struct BaseProvider {
    pub class_id: String,
    pub client: Client,
}

impl BaseProvider {
    /// Create a new base provider
    pub fn new(class_id: String, headers: HashMap<String, String>, timeout: Duration) -> Self {
        let mut default_headers = reqwest::header::HeaderMap::new();
        for (key, value) in &headers {
            if let (Ok(name), Ok(val)) = (
                reqwest::header::HeaderName::from_bytes(key.as_bytes()),
                reqwest::header::HeaderValue::from_str(value),
            ) {
                default_headers.insert(name, val);
            }
        }

        let client = Client::builder()
            .default_headers(default_headers)
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!(
                    "Failed to build HTTP client for {}: {}; falling back to default client",
                    class_id, e
                );
                Client::new()
            });

        Self { class_id, client }
    }

    /// Make an HTTP GET request
    pub async fn get_request(
        &self,
        url: &str,
        params: Option<&[(&str, &str)]>,
    ) -> ProviderResult<Response> {
        let mut request = self.client.get(url);

        if let Some(p) = params {
            request = request.query(p);
        }

        request
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(format!("Request failed: {}", e)))
    }

    /// Download and decode JSON content, failing on any non-success status
    pub async fn download_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: Option<&[(&str, &str)]>,
    ) -> ProviderResult<T> {
        let response = self.get_request(url, params).await?;
        log::debug!(
            "[{}] Downloaded {} (Status: {})",
            self.class_id,
            response.url(),
            response.status()
        );

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::HttpStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(format!("JSON parse error: {}", e)))
    }
}

/// Enforces a minimum interval between consecutive calls
pub struct RateLimiter {
    last_call: Mutex<Option<Instant>>,
    min_interval: Duration,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            last_call: Mutex::new(None),
            min_interval,
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Sleep until `min_interval` has passed since the previous call.
    /// The first call never waits.
    pub async fn wait_if_needed(&self) {
        let mut last_call = self.last_call.lock().await;

        if let Some(previous) = *last_call {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }

        *last_call = Some(Instant::now());
    }
}
