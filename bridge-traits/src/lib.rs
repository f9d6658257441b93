//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host platform.
//!
//! ## Overview
//!
//! This crate defines the contract between the session bootstrap core and the
//! platform-specific host code. Each trait represents a capability that the
//! core requires but that is provided differently per host (Android engine
//! configuration, iOS application delegate).
//!
//! ## Traits
//!
//! ### Sign-In
//! - [`SignInCapability`](signin::SignInCapability) - The opaque native
//!   sign-in service: silent restoration, interactive sign-in, redirect
//!   handling. Owned entirely by the platform SDK; the core only calls it.
//!
//! ### Bridge Channel
//! - [`BridgeMessenger`](channel::BridgeMessenger) - Binds handlers to named
//!   channels on the application-layer message boundary.
//! - [`BridgeHandler`](channel::BridgeHandler) - Receives calls arriving on a
//!   bound channel and must always produce a reply.
//!
//! ### Utilities
//! - [`LoggerSink`](log::LoggerSink) - Forward structured logs to host
//!   logging pipelines (OSLog, Logcat).
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type.
//! Host implementations should convert platform-specific failures into
//! `BridgeError` with actionable messages.
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` bounds so implementations can be
//! shared freely across async tasks behind `Arc`.

pub mod channel;
pub mod error;
pub mod log;
pub mod signin;

pub use error::BridgeError;

// Re-export commonly used types
pub use channel::{BridgeCall, BridgeHandler, BridgeMessenger, BridgeReply, InProcessMessenger};
pub use log::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
pub use signin::{CredentialHandle, Session, SignInCapability, SubjectId};
