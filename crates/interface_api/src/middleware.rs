//! API middleware

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use chrono::Utc;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{info, warn};

use domain_assessment::AuditEntry;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request logging middleware
///
/// Logs every API request with its request id, status, and duration.
pub async fn audit_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let start = Utc::now();

    let response = next.run(request).await;

    let duration = Utc::now() - start;
    let status = response.status();

    info!(
        method = %method,
        uri = %uri,
        request_id = %request_id,
        status = %status.as_u16(),
        duration_ms = duration.num_milliseconds(),
        "API request"
    );

    response
}

/// Writes every finalized decision to the `audit` log target
pub async fn log_finalized(mut rx: broadcast::Receiver<AuditEntry>) {
    loop {
        match rx.recv().await {
            Ok(entry) => {
                let assessment = entry.assessment();
                info!(
                    target: "audit",
                    assessment_id = %assessment.id(),
                    claim_id = %assessment.claim_id(),
                    policy_type = %assessment.policy_type(),
                    probability = %assessment.fraud_probability(),
                    ai_recommendation = %entry.ai_recommendation(),
                    final_decision = %entry.final_decision(),
                    agreed = entry.reviewer_agreed(),
                    "Decision recorded"
                );
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!(target: "audit", skipped, "Audit log fell behind");
            }
            Err(RecvError::Closed) => break,
        }
    }
}
