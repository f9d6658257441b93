//! # Android Entry Adapter
//!
//! Translates the Android activity lifecycle into the platform-independent
//! session bootstrap protocol.
//!
//! ## Overview
//!
//! On Android the host framework hands us a single hook: engine
//! configuration, invoked while the activity is coming up. Both bridge
//! registration and silent session restoration hang off that one hook;
//! there is no separate open-URL entry point because the sign-in library
//! completes its redirect through its own activity result plumbing.
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_android::AndroidEntryPoint;
//! use core_session::SessionBootstrapEngine;
//!
//! let entry = AndroidEntryPoint::new(Arc::new(engine));
//! let restoration = entry.configure_engine()?;
//! ```

mod entry;

pub use entry::AndroidEntryPoint;
