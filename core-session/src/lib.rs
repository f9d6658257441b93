//! # Session Bootstrap Module
//!
//! Platform-level bootstrap for the single-sign-on session lifecycle.
//!
//! ## Overview
//!
//! This crate implements the session-restoration and redirect-completion
//! protocol that runs on each platform entry point:
//!
//! - **Bridge Registrar**: exposes the sign-in capability to the application
//!   layer by binding the well-known channel, answering any call that reaches
//!   it with an explicit "not implemented" reply (the native SDK intercepts
//!   the real sign-in operations before they get here).
//! - **Session Bootstrapper**: fires silent session restoration at process
//!   start without ever blocking the startup path, and delivers exactly one
//!   [`RestorationOutcome`] per process lifetime.
//! - **Redirect Completer**: hands an OS-delivered callback URL to the
//!   capability synchronously, within the callback that received it.
//!
//! The [`SessionBootstrap`] trait captures the shared contract; the
//! `bridge-android` and `bridge-ios` crates translate their host lifecycle
//! hooks onto it.
//!
//! ## Startup flow
//!
//! ```text
//! process start
//!   └─> register_bridge()          (channel exists, unhandled calls answered)
//!   └─> bootstrap()                (restoration fired, returns immediately)
//!         └─> RestorationHandle    (application layer awaits the outcome)
//! ...
//! OS delivers callback URL
//!   └─> complete_redirect(url)     (synchronous handoff, bool result)
//! ```

pub mod bootstrap;
pub mod error;
pub mod protocol;
pub mod redirect;
pub mod registrar;
pub mod types;

pub use bootstrap::{RestorationHandle, SessionBootstrapper};
pub use error::{Result, SessionError};
pub use protocol::{SessionBootstrap, SessionBootstrapEngine};
pub use redirect::RedirectCompleter;
pub use registrar::{BridgeRegistrar, SIGN_IN_CHANNEL};
pub use types::{BootstrapState, RestorationOutcome};
