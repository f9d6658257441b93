//! Workspace placeholder crate.
//!
//! This crate exists to expose shared feature flags that map to the individual
//! workspace crates (e.g., `core-session`, `bridge-android`, `bridge-ios`).
//! Host applications can depend on `sso-workspace` and enable the documented
//! features without needing to wire each crate individually.

#[cfg(feature = "android-host")]
pub use bridge_android;
#[cfg(feature = "ios-host")]
pub use bridge_ios;
#[cfg(any(feature = "android-host", feature = "ios-host"))]
pub use core_session;
