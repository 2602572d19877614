//! Core Kernel - Foundational types for the claim review system
//!
//! This crate provides the building blocks shared by the domain crates:
//! - Strongly-typed identifiers for claims and assessments
//! - Port error and health types used by scoring adapters

pub mod identifiers;
pub mod ports;

pub use identifiers::{ClaimId, AssessmentId};
pub use ports::{PortError, DomainPort, AdapterHealth, HealthCheckResult, HealthCheckable};
