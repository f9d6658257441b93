//! # Session Bootstrapper
//!
//! Fires silent restoration of a previously established session at process
//! start without delaying UI startup.
//!
//! `bootstrap()` spawns the restoration onto the async runtime and returns
//! immediately; the startup path renders UI regardless of how long the
//! capability takes or whether it succeeds. The outcome is delivered exactly
//! once, through the returned [`RestorationHandle`] and mirrored onto the
//! event bus. No timeout, no retry, no cancellation: once started,
//! restoration always resolves to exactly one of the three outcomes.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use bridge_traits::SignInCapability;
use core_runtime::events::{CoreEvent, EventBus, SessionEvent};
use tokio::sync::oneshot;
use tracing::{debug, info, instrument, warn};

use crate::error::{Result, SessionError};
use crate::types::{BootstrapState, RestorationOutcome};

const STATE_NOT_STARTED: u8 = 0;
const STATE_PENDING: u8 = 1;
const STATE_RESOLVED: u8 = 2;

/// Observer handle for the one restoration outcome of this process.
///
/// Returned by [`SessionBootstrapper::bootstrap`]. The application layer
/// awaits it to decide the initial UI state; dropping it does not cancel
/// restoration.
#[derive(Debug)]
pub struct RestorationHandle {
    rx: oneshot::Receiver<RestorationOutcome>,
}

impl RestorationHandle {
    /// Await the restoration outcome.
    ///
    /// Resolves exactly once. If the restoration task is torn down before
    /// resolving (runtime shutdown), this reports `Failed` rather than
    /// hanging.
    pub async fn outcome(self) -> RestorationOutcome {
        self.rx.await.unwrap_or_else(|_| RestorationOutcome::Failed {
            reason: "restoration task dropped before resolving".to_string(),
        })
    }

    /// Poll for the outcome without blocking.
    ///
    /// Returns `None` while restoration is still pending.
    pub fn try_outcome(&mut self) -> Option<RestorationOutcome> {
        self.rx.try_recv().ok()
    }
}

/// One-shot silent session restoration at process start.
///
/// State machine: `NotStarted -> Pending -> Resolved`, with no transition
/// back. A second `bootstrap()` call is rejected.
pub struct SessionBootstrapper {
    capability: Arc<dyn SignInCapability>,
    event_bus: EventBus,
    state: Arc<AtomicU8>,
}

impl SessionBootstrapper {
    pub fn new(capability: Arc<dyn SignInCapability>, event_bus: EventBus) -> Self {
        Self {
            capability,
            event_bus,
            state: Arc::new(AtomicU8::new(STATE_NOT_STARTED)),
        }
    }

    /// Current startup lifecycle state.
    pub fn state(&self) -> BootstrapState {
        match self.state.load(Ordering::Acquire) {
            STATE_PENDING => BootstrapState::Pending,
            STATE_RESOLVED => BootstrapState::Resolved,
            _ => BootstrapState::NotStarted,
        }
    }

    /// Fire restoration of a prior session and return immediately.
    ///
    /// Must be called from within a Tokio runtime context; the restoration
    /// itself runs on a spawned task. The returned handle resolves to the
    /// single [`RestorationOutcome`] of this process.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyBootstrapped`] if restoration was
    /// already fired during this process lifetime.
    #[instrument(skip(self))]
    pub fn bootstrap(&self) -> Result<RestorationHandle> {
        self.state
            .compare_exchange(
                STATE_NOT_STARTED,
                STATE_PENDING,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .map_err(|_| SessionError::AlreadyBootstrapped)?;

        info!("firing silent session restoration");
        self.event_bus
            .emit(CoreEvent::Session(SessionEvent::RestorationStarted))
            .ok();

        let (tx, rx) = oneshot::channel();
        let capability = Arc::clone(&self.capability);
        let event_bus = self.event_bus.clone();
        let state = Arc::clone(&self.state);

        tokio::spawn(async move {
            let outcome = match capability.restore_previous_session().await {
                Ok(Some(session)) if session.is_valid() => {
                    info!(subject = %session.subject, "prior session restored");
                    RestorationOutcome::Restored(session)
                }
                Ok(Some(_)) => {
                    warn!("stored session is no longer valid, starting logged out");
                    RestorationOutcome::Failed {
                        reason: "stored session is no longer valid".to_string(),
                    }
                }
                Ok(None) => {
                    debug!("no prior session found");
                    RestorationOutcome::NoPriorSession
                }
                Err(err) => {
                    warn!(error = %err, "session restoration failed, starting logged out");
                    RestorationOutcome::Failed {
                        reason: err.to_string(),
                    }
                }
            };

            state.store(STATE_RESOLVED, Ordering::Release);

            let event = match &outcome {
                RestorationOutcome::Restored(session) => SessionEvent::Restored {
                    subject: session.subject.to_string(),
                },
                RestorationOutcome::NoPriorSession => SessionEvent::NoPriorSession,
                RestorationOutcome::Failed { reason } => SessionEvent::RestorationFailed {
                    reason: reason.clone(),
                },
            };
            event_bus.emit(CoreEvent::Session(event)).ok();

            if tx.send(outcome).is_err() {
                debug!("restoration observer dropped before outcome delivery");
            }
        });

        Ok(RestorationHandle { rx })
    }
}
