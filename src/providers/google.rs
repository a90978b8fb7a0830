use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde_json::Value;

use crate::app_config::RemoteConfig;
use crate::errors::ProviderError;
use crate::providers::RemoteTranslator;

/// Client for the public Google Translate `translate_a/single` endpoint
#[derive(Debug)]
pub struct GoogleTranslate {
    /// HTTP client for API requests
    client: Client,
    /// Endpoint URL
    endpoint: String,
    /// Value of the `client` query parameter
    client_id: String,
    /// Source language code (`sl`)
    source_language: String,
    /// Target language code (`tl`)
    target_language: String,
}

impl GoogleTranslate {
    /// Create a new client. Without a timeout the transport default applies.
    pub fn new(
        endpoint: impl Into<String>,
        client_id: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Self {
            client: builder.build().unwrap_or_default(),
            endpoint: endpoint.into(),
            client_id: client_id.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
        }
    }

    /// Create a client from the `remote` section of the configuration
    pub fn from_config(config: &RemoteConfig) -> Self {
        Self::new(
            config.endpoint.clone(),
            config.client.clone(),
            config.source_language.clone(),
            config.target_language.clone(),
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Rebuild the translated text from a response body.
    ///
    /// The body is a JSON array whose first element lists the translated
    /// segments as `[translated, original, ...]` tuples, in output order.
    pub fn parse_response(body: &str) -> Result<String, ProviderError> {
        let json: Value = serde_json::from_str(body)
            .map_err(|e| ProviderError::ParseError(format!("invalid JSON: {}", e)))?;

        let segments = json
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| ProviderError::ParseError("missing segment array at index 0".to_string()))?;

        let mut translation = String::new();
        for (index, segment) in segments.iter().enumerate() {
            let text = segment.get(0).and_then(Value::as_str).ok_or_else(|| {
                ProviderError::ParseError(format!("segment {} has no translated text", index))
            })?;
            translation.push_str(text);
        }

        Ok(translation)
    }
}

#[async_trait]
impl RemoteTranslator for GoogleTranslate {
    fn name(&self) -> &str {
        "google"
    }

    async fn translate(&self, text: &str) -> Result<String, ProviderError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", self.client_id.as_str()),
                ("sl", self.source_language.as_str()),
                ("tl", self.target_language.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ProviderError::ConnectionError(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Google Translate error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("failed to read response body: {}", e)))?;

        let translation = Self::parse_response(&body)?;
        debug!("Google Translate: {:?} -> {:?}", text, translation);
        Ok(translation)
    }
}
