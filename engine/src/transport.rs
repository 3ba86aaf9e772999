//! Submission transport seam.
//!
//! The contact form drives a single async operation: `send(input)`. The
//! default configuration is a fixed-latency stub that always succeeds, but
//! the error type accommodates a real network backend (timeout, transport
//! failure, server-side rejection) without changing the state machine shape.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use folio_types::FormInput;

/// Why a send failed after it was attempted. Maps into
/// [`SubmissionState::Failed`](crate::SubmissionState::Failed).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("request timed out")]
    Timeout,
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Delivers a contact-form submission somewhere.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    async fn send(&self, input: &FormInput) -> Result<(), SendError>;
}

/// Latency of the default stub transport, matching the delay the site has
/// always shown for a simulated send.
pub const DEFAULT_SEND_LATENCY: Duration = Duration::from_millis(1500);

/// Stub transport: sleeps for a fixed latency, then succeeds.
#[derive(Debug, Clone)]
pub struct FixedDelayTransport {
    latency: Duration,
}

impl FixedDelayTransport {
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for FixedDelayTransport {
    fn default() -> Self {
        Self::new(DEFAULT_SEND_LATENCY)
    }
}

#[async_trait]
impl Transport for FixedDelayTransport {
    async fn send(&self, _input: &FormInput) -> Result<(), SendError> {
        tokio::time::sleep(self.latency).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{FixedDelayTransport, Transport};
    use folio_types::FormInput;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn fixed_delay_always_succeeds() {
        let transport = FixedDelayTransport::new(Duration::from_millis(1500));
        let outcome = transport.send(&FormInput::default()).await;
        assert_eq!(outcome, Ok(()));
    }
}
