use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Host list collected from a submitted form. Values are forwarded as-is:
/// no IP/hostname validation, order preserved, duplicates allowed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanSubmission {
    pub hosts: Vec<String>,
}

impl ScanSubmission {
    pub fn new(hosts: Vec<String>) -> Self {
        ScanSubmission { hosts }
    }

    pub fn push(&mut self, host: impl Into<String>) {
        self.hosts.push(host.into());
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Wire shape expected by the scan backend.
    pub fn into_body(self) -> ScanRequestBody {
        ScanRequestBody {
            ips_or_hostnames: self.hosts,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScanRequestBody {
    pub ips_or_hostnames: Vec<String>,
}

/// Top-level fields of a successful backend response, passed through unparsed.
#[derive(Deserialize, Debug)]
pub struct BackendScanResponse {
    pub host: Value,
    pub scan_results: Value,
    pub port_history: Value,
    #[serde(default)]
    pub changes: Value,
}

/// Backend fields renamed for the page renderer.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScanData {
    pub host_data: Value,
    pub scan_results: Value,
    pub port_history: Value,
    pub changes: Value,
}

impl From<BackendScanResponse> for ScanData {
    fn from(resp: BackendScanResponse) -> Self {
        ScanData {
            host_data: resp.host,
            scan_results: resp.scan_results,
            port_history: resp.port_history,
            changes: resp.changes,
        }
    }
}

/// Outcome of one relay invocation. Errors never escalate past this boundary;
/// the caller decides how to present a failure.
#[derive(Debug)]
pub enum ScanOutcome {
    Success(ScanData),
    Failure { message: String },
}

impl ScanOutcome {
    pub fn failure(message: impl Into<String>) -> Self {
        ScanOutcome::Failure {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("scan backend request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{message}")]
    Backend { message: String },
    #[error("invalid response from scan backend: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_preserves_submission_order() {
        let submission =
            ScanSubmission::new(vec!["10.0.0.1".to_string(), "example.com".to_string()]);

        let body = serde_json::to_value(submission.into_body()).unwrap();
        assert_eq!(
            body,
            json!({ "ips_or_hostnames": ["10.0.0.1", "example.com"] })
        );
    }

    #[test]
    fn request_body_allows_duplicates_and_empty_list() {
        let dup = ScanSubmission::new(vec!["h".to_string(), "h".to_string()]);
        assert_eq!(dup.into_body().ips_or_hostnames, vec!["h", "h"]);

        let empty = ScanSubmission::default();
        assert!(empty.is_empty());
        assert_eq!(
            serde_json::to_value(empty.into_body()).unwrap(),
            json!({ "ips_or_hostnames": [] })
        );
    }

    #[test]
    fn scan_data_renames_backend_fields() {
        let backend: BackendScanResponse = serde_json::from_value(json!({
            "host": { "hostname": "example.com", "ip_address": "10.0.0.1" },
            "scan_results": [{ "port": 80, "status": "open" }],
            "port_history": [{ "port": 80, "status": "open" }],
            "changes": { "80": "added" }
        }))
        .unwrap();

        let data = serde_json::to_value(ScanData::from(backend)).unwrap();
        assert_eq!(data["hostData"]["hostname"], "example.com");
        assert_eq!(data["scanResults"][0]["port"], 80);
        assert_eq!(data["portHistory"][0]["status"], "open");
        assert_eq!(data["changes"]["80"], "added");
    }

    #[test]
    fn missing_changes_defaults_to_null() {
        let backend: BackendScanResponse = serde_json::from_value(json!({
            "host": {},
            "scan_results": [],
            "port_history": []
        }))
        .unwrap();

        assert!(backend.changes.is_null());
    }
}
