use bridge_traits::Session;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of the one-shot silent restoration attempt.
///
/// Produced exactly once per process lifetime by the
/// [`SessionBootstrapper`](crate::SessionBootstrapper) and consumed by the
/// application layer to decide the initial UI state. Never retried.
///
/// Capability errors and "no user returned for a promised session" both map
/// to `Failed`: the practical handling (start logged out) is identical, so
/// the distinction is deliberately collapsed. The `reason` string is kept so
/// a finer taxonomy can be layered on later without reshaping the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome")]
pub enum RestorationOutcome {
    /// A prior session was silently restored.
    Restored(Session),
    /// No prior session exists; the user never signed in or signed out.
    NoPriorSession,
    /// Restoration produced no usable session.
    Failed {
        /// Human-readable reason, for diagnostics only.
        reason: String,
    },
}

impl RestorationOutcome {
    /// Whether a session was restored.
    pub fn is_restored(&self) -> bool {
        matches!(self, RestorationOutcome::Restored(_))
    }

    /// The restored session, if any.
    pub fn session(&self) -> Option<&Session> {
        match self {
            RestorationOutcome::Restored(session) => Some(session),
            _ => None,
        }
    }
}

impl fmt::Display for RestorationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestorationOutcome::Restored(session) => {
                write!(f, "restored session for {}", session.subject)
            }
            RestorationOutcome::NoPriorSession => write!(f, "no prior session"),
            RestorationOutcome::Failed { reason } => write!(f, "restoration failed: {}", reason),
        }
    }
}

/// Startup lifecycle of the bootstrapper.
///
/// # State Transitions
///
/// ```text
/// NotStarted -> Pending -> Resolved
/// ```
///
/// There is no transition back: a second `bootstrap()` call is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BootstrapState {
    /// `bootstrap()` has not been called yet.
    #[default]
    NotStarted,
    /// Restoration has been fired and has not resolved.
    Pending,
    /// Restoration resolved to exactly one outcome.
    Resolved,
}

impl BootstrapState {
    /// Whether restoration has been fired (pending or resolved).
    pub fn is_started(&self) -> bool {
        !matches!(self, BootstrapState::NotStarted)
    }

    /// Whether the one outcome for this process has been produced.
    pub fn is_resolved(&self) -> bool {
        matches!(self, BootstrapState::Resolved)
    }
}

impl fmt::Display for BootstrapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapState::NotStarted => write!(f, "not started"),
            BootstrapState::Pending => write!(f, "pending"),
            BootstrapState::Resolved => write!(f, "resolved"),
        }
    }
}
