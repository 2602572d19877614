//! Review handlers

use axum::{extract::State, Json};

use domain_assessment::{AssessmentResult, AuditEntry, SessionSummary};

use crate::dto::review::DecisionRequest;
use crate::{error::ApiError, AppState};

/// Gets the assessment awaiting review
pub async fn get_pending(
    State(state): State<AppState>,
) -> Result<Json<AssessmentResult>, ApiError> {
    state
        .service
        .pending()
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("No assessment is pending review".to_string()))
}

/// Records the reviewer's decision
pub async fn decide(
    State(state): State<AppState>,
    Json(request): Json<DecisionRequest>,
) -> Result<Json<AuditEntry>, ApiError> {
    let decision = request.decision().map_err(ApiError::BadRequest)?;
    let entry = state.service.finalize(decision).await?;
    Ok(Json(entry))
}

/// Gets the session state summary
pub async fn get_session(State(state): State<AppState>) -> Json<SessionSummary> {
    Json(state.service.summary().await)
}
