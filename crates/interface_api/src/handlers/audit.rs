//! Audit history and metrics handlers

use axum::{extract::State, Json};

use domain_assessment::ReviewMetrics;

use crate::dto::review::AuditResponse;
use crate::AppState;

/// Lists finalized assessments, newest first
pub async fn list_audit(State(state): State<AppState>) -> Json<AuditResponse> {
    Json(state.service.history().await.into())
}

/// Gets metrics over the archive
pub async fn get_metrics(State(state): State<AppState>) -> Json<ReviewMetrics> {
    Json(state.service.metrics().await)
}
