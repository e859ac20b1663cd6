use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::model::{BackendScanResponse, RelayError, ScanData, ScanOutcome, ScanSubmission};
use crate::config::Config;

/// Client for the backend scanning service. One outbound POST per submission,
/// awaited to completion; no retries, no caching.
#[derive(Clone)]
pub struct RelayClient {
    http: Client,
    backend_url: String,
}

impl RelayClient {
    pub fn new(config: &Config) -> Result<Self, RelayError> {
        let http = Client::builder().timeout(config.backend_timeout).build()?;

        Ok(RelayClient {
            http,
            backend_url: config.backend_url.clone(),
        })
    }

    /// Forward a submission to the scan backend and normalize the response.
    /// Transport failures, non-200 statuses and undecodable bodies all
    /// collapse into `ScanOutcome::Failure`; nothing propagates to the caller.
    pub async fn relay(&self, submission: ScanSubmission) -> ScanOutcome {
        match self.try_relay(submission).await {
            Ok(data) => ScanOutcome::Success(data),
            Err(e) => {
                tracing::error!("scan relay failed: {}", e);
                ScanOutcome::failure(e.to_string())
            }
        }
    }

    async fn try_relay(&self, submission: ScanSubmission) -> Result<ScanData, RelayError> {
        let body = submission.into_body();
        tracing::debug!(hosts = body.ips_or_hostnames.len(), "relaying scan request");

        let response = self
            .http
            .post(&self.backend_url)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if status != StatusCode::OK {
            tracing::warn!("scan backend returned {}", status);
            return Err(RelayError::Backend {
                message: failure_message(status, &text),
            });
        }

        let backend: BackendScanResponse = serde_json::from_str(&text)?;
        Ok(backend.into())
    }
}

/// Best-effort message from an error response: a `message`/`error` field if
/// the body is a JSON object, the raw body otherwise, the status reason as a
/// last resort.
fn failure_message(status: StatusCode, body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str(body) {
        for key in ["message", "error"] {
            if let Some(Value::String(msg)) = map.get(key) {
                return msg.clone();
            }
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("scan backend request failed")
        .to_string()
}
