//! Fraud Assessment Domain
//!
//! This crate implements the claim-evaluation workflow: a scoring provider
//! turns a claim into an assessment, a human reviewer accepts or rejects it,
//! and the finalized decision is appended to the audit archive.
//!
//! # Review Lifecycle
//!
//! ```text
//! Idle --present--> Pending --finalize--> Idle (entry archived)
//!                   Pending --present--> Pending (previous assessment discarded)
//! ```
//!
//! There is a single pending slot. A newer assessment always replaces the
//! one waiting for review, and finalizing with nothing pending is a no-op.

pub mod probability;
pub mod assessment;
pub mod scoring;
pub mod review;
pub mod archive;
pub mod session;
pub mod metrics;
pub mod service;
pub mod error;

pub use probability::{FraudProbability, Recommendation, RiskTier, ACCEPT_THRESHOLD, HIGH_RISK_THRESHOLD};
pub use assessment::{AssessmentResult, AuditEntry, FeatureImpact, HumanDecision};
pub use scoring::{ScoringProvider, ScoringBackend, RandomScorer, HeuristicScorer, SimulatedLatency};
pub use review::{Reviewer, ReviewState, ReviewEvent, ReviewOutcome};
pub use archive::{AuditArchive, History};
pub use session::{EvaluationSession, SessionEvent, ReviewPhase};
pub use metrics::{ConfusionMatrix, ReviewMetrics};
pub use service::{ClaimEvaluationService, SessionSummary};
pub use error::AssessmentError;
