//! HTTP API Layer
//!
//! This crate provides the REST API for claim submission and fraud review
//! using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for claims, review, audit, and health
//! - **Middleware**: Request ids, tracing, request and decision logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::from_config(config));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_assessment::ClaimEvaluationService;

use crate::config::ApiConfig;
use crate::handlers::{audit, claims, health, review};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ClaimEvaluationService>,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(service: Arc<ClaimEvaluationService>, config: ApiConfig) -> Self {
        Self { service, config }
    }

    /// Builds the service with the configured scoring provider
    pub fn from_config(config: ApiConfig) -> Self {
        let service = ClaimEvaluationService::new(config.build_scorer());
        Self::new(Arc::new(service), config)
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let claims_routes = Router::new()
        .route("/", post(claims::submit_claim))
        .route("/form", post(claims::submit_form));

    let review_routes = Router::new()
        .route("/pending", get(review::get_pending))
        .route("/decision", post(review::decide))
        .route("/session", get(review::get_session));

    let api_routes = Router::new()
        .nest("/claims", claims_routes)
        .nest("/review", review_routes)
        .route("/audit", get(audit::list_audit))
        .route("/metrics", get(audit::get_metrics))
        .layer(axum_middleware::from_fn(audit_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
