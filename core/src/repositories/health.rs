//! Store reachability probe used by the health endpoint.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Probe for checking that the backing store is reachable and configured
#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Round-trip to the store; `Err` means the service should report
    /// itself unhealthy
    async fn ping(&self) -> Result<(), DomainError>;
}

/// Probe that always reports healthy, for tests
pub struct NoopHealthProbe;

#[async_trait]
impl HealthProbe for NoopHealthProbe {
    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
