//! # iOS Entry Adapter
//!
//! Translates the iOS application delegate lifecycle into the
//! platform-independent session bootstrap protocol.
//!
//! ## Overview
//!
//! iOS hands us two hooks: did-finish-launching, where bridge registration
//! and silent session restoration run, and open-URL, where the OS delivers
//! the sign-in redirect back to the app. The open-URL hook is synchronous;
//! the delegate answers within the callback whether the URL was consumed.
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_ios::IosEntryPoint;
//!
//! let entry = IosEntryPoint::new(Arc::new(engine));
//! let restoration = entry.did_finish_launching()?;
//! // later, from the OS open-URL callback:
//! let handled = entry.open_url(&url);
//! ```

mod delegate;

pub use delegate::IosEntryPoint;
