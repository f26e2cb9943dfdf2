// Remote model-serving classifier.
//
// For deployments where the trained model lives behind an inference
// service. The service receives one normalized text per request:
//
//   POST <url>  {"text": "..."}  ->  {"fake_probability": 0.73}
//
// Errors (transport, non-2xx, bad body) are returned to the caller. There
// is no retry.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::Classifier;

/// HTTP-backed classifier.
pub struct RemoteClassifier {
    client: Client,
    url: String,
}

impl RemoteClassifier {
    /// Create a classifier that posts to the given endpoint.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl Classifier for RemoteClassifier {
    async fn predict_probability(&self, text: &str) -> Result<f64> {
        let request = PredictRequest { text };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .with_context(|| format!("Failed to call classifier at {}", self.url))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Classifier returned {}: {}", status, body);
        }

        let result: PredictResponse = response
            .json()
            .await
            .context("Failed to parse classifier response")?;

        debug!(
            fake_probability = result.fake_probability,
            text_preview = %crate::output::truncate_chars(text, 50),
            "Remote classifier scored text"
        );

        Ok(result.fake_probability)
    }
}

// --- Wire types ---

#[derive(Serialize)]
pub struct PredictRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    pub fake_probability: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let json = serde_json::to_string(&PredictRequest { text: "hello world" }).unwrap();
        assert_eq!(json, r#"{"text":"hello world"}"#);
    }

    #[test]
    fn test_response_parses_probability() {
        let resp: PredictResponse =
            serde_json::from_str(r#"{"fake_probability": 0.73, "model": "v2"}"#).unwrap();
        assert!((resp.fake_probability - 0.73).abs() < 1e-10);
    }

    #[test]
    fn test_response_without_probability_is_rejected() {
        assert!(serde_json::from_str::<PredictResponse>(r#"{"label": "fake"}"#).is_err());
    }
}
