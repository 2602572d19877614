//! Ports and Adapters Infrastructure
//!
//! Domain crates define port traits (for example the scoring provider port in
//! `domain_assessment`) that extend the marker traits here. Adapters implement
//! those traits: a local placeholder scorer today, a model-serving client
//! tomorrow, swappable without touching intake, review, or the archive.
//!
//! ```text
//!   Claim Intake ──► ScoringProvider (port) ──► Reviewer ──► Archive
//!                         ▲        ▲
//!                         │        │
//!                  RandomScorer  HeuristicScorer  (adapters)
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for port operations
///
/// Every adapter reports failures through this type so the application
/// service can treat a local stub and a remote model the same way.
#[derive(Debug, Error)]
pub enum PortError {
    /// The adapter rejected its input
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// The operation timed out
    #[error("Timeout after {duration_ms}ms: {operation}")]
    Timeout {
        operation: String,
        duration_ms: u64,
    },

    /// The backing system is unavailable
    #[error("Service unavailable: {service}")]
    ServiceUnavailable {
        service: String,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Creates a ServiceUnavailable error
    pub fn unavailable(service: impl Into<String>) -> Self {
        PortError::ServiceUnavailable {
            service: service.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PortError::Timeout { .. } | PortError::ServiceUnavailable { .. }
        )
    }
}

/// Marker trait for all domain ports
///
/// Ports are shared across request handlers, so they must be thread-safe.
pub trait DomainPort: Send + Sync + 'static {}

/// Health status for an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    /// Adapter is healthy and operational
    Healthy,
    /// Adapter is unhealthy and not operational
    Unhealthy,
}

impl AdapterHealth {
    /// Whether requests can still be served
    pub fn is_operational(&self) -> bool {
        !matches!(self, AdapterHealth::Unhealthy)
    }
}

/// Health check result for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Adapter identifier
    pub adapter_id: String,
    /// Current health status
    pub status: AdapterHealth,
    /// Latency of the health check in milliseconds
    pub latency_ms: u64,
    /// Optional message with additional details
    pub message: Option<String>,
    /// Timestamp of the health check
    pub checked_at: DateTime<Utc>,
}

impl HealthCheckResult {
    /// A healthy result for an in-process adapter
    pub fn healthy(adapter_id: impl Into<String>) -> Self {
        Self {
            adapter_id: adapter_id.into(),
            status: AdapterHealth::Healthy,
            latency_ms: 0,
            message: None,
            checked_at: Utc::now(),
        }
    }

    /// An unhealthy result with the reason
    pub fn unhealthy(adapter_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            status: AdapterHealth::Unhealthy,
            ..Self::healthy(adapter_id)
        }
        .with_message(reason)
    }

    /// Attaches a message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Trait for adapters that support health checks
#[async_trait::async_trait]
pub trait HealthCheckable: Send + Sync {
    /// Performs a health check on the adapter
    async fn health_check(&self) -> HealthCheckResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_transient() {
        let timeout = PortError::Timeout {
            operation: "score".to_string(),
            duration_ms: 5000,
        };
        assert!(timeout.is_transient());
        assert!(PortError::unavailable("model-server").is_transient());
        assert!(!PortError::validation("bad claim").is_transient());
    }

    #[test]
    fn test_healthy_result() {
        let result = HealthCheckResult::healthy("random").with_message("in-process");
        assert_eq!(result.status, AdapterHealth::Healthy);
        assert!(result.status.is_operational());
        assert_eq!(result.message.as_deref(), Some("in-process"));
        assert!(!AdapterHealth::Unhealthy.is_operational());
    }
}
