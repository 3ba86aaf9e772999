//! Contact-form submission lifecycle.
//!
//! # State Machine
//! ```text
//! ┌──────┐ submit(valid) ┌────────────┐ send ok   ┌───────────┐
//! │ Idle │ ────────────> │ Submitting │ ────────> │ Succeeded │
//! └──────┘               └────────────┘           └───────────┘
//!    ^                      │      ^                    │
//!    │ reset()              │      │ submit(valid)      │ reset()
//!    │                send err     │                    │
//!    │                      v      │                    │
//!    │                  ┌─────────────────┐             │
//!    └───────────────── │ Failed(reason)  │ <───────────┘ (never: success
//!                       └─────────────────┘              requires reset)
//! ```
//!
//! `submit` while `Submitting` is rejected ([`SubmitError::Busy`]) - the only
//! concurrency guard in the system, preventing duplicate in-flight sends.
//! Validation failures are synchronous and leave the machine untouched; they
//! never reach `Failed` because no send was attempted.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tracing::{debug, info, warn};

use folio_types::{FormInput, ValidationError};

use crate::transport::{SendError, Transport};

/// Submission lifecycle state. Exactly one variant holds at any instant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// True once the last attempt reached a terminal outcome.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed(_))
    }
}

/// Why `submit` returned without starting a send.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// A send is already in flight; the caller should suppress the duplicate
    /// request. Not fatal and not a state transition.
    #[error("a submission is already in flight")]
    Busy,
}

/// Owns the submission state machine exclusively; the raw field text stays
/// with the input buffers and is read only at submit time.
#[derive(Debug)]
pub struct ContactForm {
    transport: Arc<dyn Transport>,
    state: SubmissionState,
    inflight: Option<oneshot::Receiver<Result<(), SendError>>>,
}

impl ContactForm {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            state: SubmissionState::Idle,
            inflight: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// The view must disable the submit control while a send is pending and
    /// after a success (until [`reset`](Self::reset)). Retry after a failure
    /// is always allowed.
    #[must_use]
    pub fn submit_disabled(&self) -> bool {
        matches!(
            self.state,
            SubmissionState::Submitting | SubmissionState::Succeeded
        )
    }

    /// Validate and start a send.
    ///
    /// The transition to `Submitting` happens synchronously, before the
    /// spawned task gets a chance to run: the very next frame must already
    /// show the form as in flight.
    pub fn submit(&mut self, input: &FormInput) -> Result<(), SubmitError> {
        if self.state.is_submitting() {
            return Err(SubmitError::Busy);
        }
        input.validate()?;

        self.state = SubmissionState::Submitting;

        let (tx, rx) = oneshot::channel();
        let transport = Arc::clone(&self.transport);
        let input = input.clone();
        tokio::spawn(async move {
            let outcome = transport.send(&input).await;
            // A closed receiver means the form was torn down mid-flight;
            // the completion is discarded rather than mutating dead state.
            let _ = tx.send(outcome);
        });
        self.inflight = Some(rx);
        debug!("submission started");
        Ok(())
    }

    /// Drive an outstanding send to resolution.
    ///
    /// Called from the host's frame tick. Every `Submitting` entry resolves
    /// to exactly one of `Succeeded`/`Failed`: a send task that dies without
    /// reporting (channel closed) counts as a failure, so the machine can
    /// never be stuck in `Submitting` once the operation is gone.
    ///
    /// Returns true when the state changed on this call.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.inflight.as_mut() else {
            return false;
        };
        let outcome = match rx.try_recv() {
            Err(TryRecvError::Empty) => return false,
            Ok(outcome) => outcome,
            Err(TryRecvError::Closed) => {
                warn!("send task dropped without reporting");
                Err(SendError::Transport(
                    "send task stopped before completing".to_string(),
                ))
            }
        };
        self.inflight = None;
        self.state = match outcome {
            Ok(()) => {
                info!("submission delivered");
                SubmissionState::Succeeded
            }
            Err(err) => {
                warn!(error = %err, "submission failed");
                SubmissionState::Failed(err.to_string())
            }
        };
        true
    }

    /// Return to `Idle` from a resolved state, for presenting a fresh form.
    /// No-op while `Idle` or `Submitting`.
    pub fn reset(&mut self) {
        if self.state.is_resolved() {
            self.state = SubmissionState::Idle;
        }
    }
}
