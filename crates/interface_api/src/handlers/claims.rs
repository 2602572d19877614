//! Claims handlers

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;
use validator::Validate;

use domain_assessment::AssessmentResult;
use domain_claims::{ClaimForm, ClaimRecord};

use crate::dto::claims::{SubmitClaimRequest, SubmitFormRequest};
use crate::{error::ApiError, AppState};

/// Submits a structured claim for scoring
pub async fn submit_claim(
    State(state): State<AppState>,
    Json(request): Json<SubmitClaimRequest>,
) -> Result<(StatusCode, Json<AssessmentResult>), ApiError> {
    request.validate()?;
    let claim = ClaimRecord::try_from(request)?;
    score(&state, claim).await
}

/// Submits raw form text applied over the form defaults
pub async fn submit_form(
    State(state): State<AppState>,
    Json(request): Json<SubmitFormRequest>,
) -> Result<(StatusCode, Json<AssessmentResult>), ApiError> {
    let mut form = ClaimForm::new();
    form.apply(request.into_text_fields()?)?;
    score(&state, form.build()).await
}

async fn score(
    state: &AppState,
    claim: ClaimRecord,
) -> Result<(StatusCode, Json<AssessmentResult>), ApiError> {
    info!(claim_id = %claim.id, category = %claim.category(), "Claim submitted");
    let assessment = state.service.submit(claim).await?;
    Ok((StatusCode::CREATED, Json(assessment)))
}
