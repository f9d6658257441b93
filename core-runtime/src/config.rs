//! # Core Configuration Module
//!
//! Provides configuration management for the session bootstrap core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a
//! `CoreConfig` instance that holds all dependencies and settings the core
//! requires. It enforces fail-fast validation so a mis-wired host surfaces a
//! descriptive error at startup rather than a hang later.
//!
//! ## Required Dependencies
//!
//! - `SignInCapability` - the platform-native sign-in service
//! - `BridgeMessenger` - the application-layer channel boundary
//! - a non-empty client identifier (read from platform configuration by the
//!   host, e.g. the iOS `GIDClientID` plist entry)
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::CoreConfig;
//! use std::sync::Arc;
//!
//! let config = CoreConfig::builder()
//!     .client_id("1234567890-abc.apps.googleusercontent.com")
//!     .capability(Arc::new(NativeSignIn::new()))
//!     .messenger(Arc::new(HostMessenger::new()))
//!     .build()?;
//! ```

use crate::error::{Error, Result};
use bridge_traits::{BridgeMessenger, SignInCapability};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// OAuth client identifier handed to the sign-in capability at startup.
///
/// The value comes from platform configuration (plist/resources); this core
/// never parses it, only carries it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ClientId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Core configuration for the session bootstrap layer.
///
/// Use [`CoreConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct CoreConfig {
    /// OAuth client identifier from platform configuration.
    pub client_id: ClientId,

    /// Platform-native sign-in capability (required).
    pub capability: Arc<dyn SignInCapability>,

    /// Application-layer bridge messenger (required).
    pub messenger: Arc<dyn BridgeMessenger>,

    /// Buffer size for the core event bus.
    pub event_buffer_size: usize,
}

impl fmt::Debug for CoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoreConfig")
            .field("client_id", &self.client_id)
            .field("capability", &"SignInCapability { ... }")
            .field("messenger", &"BridgeMessenger { ... }")
            .field("event_buffer_size", &self.event_buffer_size)
            .finish()
    }
}

impl CoreConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }
}

/// Builder for [`CoreConfig`] with fail-fast validation.
#[derive(Default)]
pub struct CoreConfigBuilder {
    client_id: Option<ClientId>,
    capability: Option<Arc<dyn SignInCapability>>,
    messenger: Option<Arc<dyn BridgeMessenger>>,
    event_buffer_size: Option<usize>,
}

impl CoreConfigBuilder {
    /// Set the OAuth client identifier.
    pub fn client_id(mut self, client_id: impl Into<ClientId>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Inject the platform-native sign-in capability.
    pub fn capability(mut self, capability: Arc<dyn SignInCapability>) -> Self {
        self.capability = Some(capability);
        self
    }

    /// Inject the application-layer bridge messenger.
    pub fn messenger(mut self, messenger: Arc<dyn BridgeMessenger>) -> Self {
        self.messenger = Some(messenger);
        self
    }

    /// Set the event bus buffer size.
    pub fn event_buffer_size(mut self, size: usize) -> Self {
        self.event_buffer_size = Some(size);
        self
    }

    /// Validates the configuration and builds a [`CoreConfig`].
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` when the client identifier is missing or
    /// empty, and `Error::CapabilityMissing` when a required bridge
    /// implementation was not injected.
    pub fn build(self) -> Result<CoreConfig> {
        let client_id = self
            .client_id
            .ok_or_else(|| Error::Config("client id is required".to_string()))?;

        if client_id.is_empty() {
            return Err(Error::Config("client id must not be empty".to_string()));
        }

        let capability = self.capability.ok_or_else(|| Error::CapabilityMissing {
            capability: "SignInCapability".to_string(),
            message: "No sign-in capability provided. \
                      Inject the platform-native sign-in adapter."
                .to_string(),
        })?;

        let messenger = self.messenger.ok_or_else(|| Error::CapabilityMissing {
            capability: "BridgeMessenger".to_string(),
            message: "No bridge messenger provided. \
                      Inject the host framework's channel messenger."
                .to_string(),
        })?;

        Ok(CoreConfig {
            client_id,
            capability,
            messenger,
            event_buffer_size: self
                .event_buffer_size
                .unwrap_or(crate::events::DEFAULT_EVENT_BUFFER_SIZE),
        })
    }
}
