use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::relay::{ScanOutcome, ScanSubmission};
use crate::AppState;

/// Form handler for the scan page. Collects the submitted hosts, relays them
/// to the scan backend as JSON and hands the normalized result to the page.
pub async fn submit_scan(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let submission = match collect_submission(&mut multipart).await {
        Ok(s) => s,
        Err(message) => {
            tracing::warn!("rejected malformed scan form: {}", message);
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "message": message })),
            )
                .into_response();
        }
    };

    match state.relay.relay(submission).await {
        ScanOutcome::Success(data) => {
            Json(json!({ "success": true, "data": data })).into_response()
        }
        ScanOutcome::Failure { message } => (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "success": false, "message": message })),
        )
            .into_response(),
    }
}

/// Pulls hosts out of the form in field order. Text fields named
/// `ip_or_hostname` contribute one host each; an uploaded file contributes
/// one host per non-empty line. Values are not validated here.
async fn collect_submission(multipart: &mut Multipart) -> Result<ScanSubmission, String> {
    let mut submission = ScanSubmission::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| e.to_string())? {
        if field.file_name().is_some() {
            let text = field.text().await.map_err(|e| e.to_string())?;
            for line in text.lines() {
                let line = line.trim();
                if !line.is_empty() {
                    submission.push(line);
                }
            }
        } else if field.name() == Some("ip_or_hostname") {
            submission.push(field.text().await.map_err(|e| e.to_string())?);
        }
    }

    Ok(submission)
}
