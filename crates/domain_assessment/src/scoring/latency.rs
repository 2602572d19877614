//! Latency simulation for in-process scorers

use async_trait::async_trait;
use std::time::Duration;

use core_kernel::{DomainPort, HealthCheckResult, HealthCheckable, PortError};
use domain_claims::ClaimRecord;
use crate::assessment::AssessmentResult;
use crate::scoring::ScoringProvider;

/// Delays every score by a fixed duration before delegating
pub struct SimulatedLatency<P> {
    inner: P,
    delay: Duration,
}

impl<P: ScoringProvider> SimulatedLatency<P> {
    pub fn new(inner: P, delay: Duration) -> Self {
        Self { inner, delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<P: ScoringProvider> DomainPort for SimulatedLatency<P> {}

#[async_trait]
impl<P: ScoringProvider> HealthCheckable for SimulatedLatency<P> {
    async fn health_check(&self) -> HealthCheckResult {
        self.inner.health_check().await
    }
}

#[async_trait]
impl<P: ScoringProvider> ScoringProvider for SimulatedLatency<P> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn score(&self, claim: &ClaimRecord) -> Result<AssessmentResult, PortError> {
        tokio::time::sleep(self.delay).await;
        self.inner.score(claim).await
    }
}
