//! Bridge Channel Abstractions
//!
//! The message-passing boundary between the cross-platform application layer
//! and native host code. General-purpose marshalling belongs to the host
//! framework; this module only models named channels, incoming calls, and the
//! replies a handler must always produce.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{BridgeError, Result};

/// A method invocation arriving from the application layer on a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeCall {
    /// Method name as sent by the application layer.
    pub method: String,
    /// Argument mapping; `Null` when the call carries no arguments.
    pub arguments: serde_json::Value,
}

impl BridgeCall {
    pub fn new(method: impl Into<String>, arguments: serde_json::Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// A call with no arguments.
    pub fn bare(method: impl Into<String>) -> Self {
        Self::new(method, serde_json::Value::Null)
    }
}

/// The reply a handler returns to the application-layer caller.
///
/// Every incoming call must be answered with one of these; leaving a call
/// unanswered hangs the caller's pending future indefinitely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "payload")]
pub enum BridgeReply {
    /// The call was handled; the payload is the method result.
    Success(serde_json::Value),
    /// The call was handled but failed.
    Error { code: String, message: String },
    /// The handler does not implement this method. Informational, not an
    /// error state: the caller distinguishes this from a dropped call.
    NotImplemented,
}

impl BridgeReply {
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, BridgeReply::NotImplemented)
    }
}

/// Receives calls arriving on a bound channel.
///
/// Implementations must never panic and must always return a reply.
#[async_trait::async_trait]
pub trait BridgeHandler: Send + Sync {
    async fn on_call(&self, call: BridgeCall) -> BridgeReply;
}

/// Binds handlers to named channels on the host message boundary.
///
/// Implemented by host glue over the application framework's messenger. A
/// mis-initialized host framework surfaces as
/// [`BridgeError::ChannelUnavailable`], which callers treat as a fatal
/// startup configuration error.
pub trait BridgeMessenger: Send + Sync {
    /// Bind `handler` to `channel`, replacing any previous handler.
    fn set_handler(&self, channel: &str, handler: Arc<dyn BridgeHandler>) -> Result<()>;

    /// Whether a handler is currently bound to `channel`.
    fn has_handler(&self, channel: &str) -> bool;
}

/// In-process messenger for tests and host-less development.
///
/// Keeps the channel table in memory and exposes [`dispatch`] so tests can
/// drive calls the way the application layer would. Dispatching on a channel
/// with no bound handler is a configuration bug and yields
/// [`BridgeError::NotAvailable`], which is distinct from a bound handler
/// answering [`BridgeReply::NotImplemented`].
///
/// [`dispatch`]: InProcessMessenger::dispatch
#[derive(Default)]
pub struct InProcessMessenger {
    handlers: Mutex<HashMap<String, Arc<dyn BridgeHandler>>>,
}

impl InProcessMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a call to the handler bound on `channel` and return its reply.
    pub async fn dispatch(&self, channel: &str, call: BridgeCall) -> Result<BridgeReply> {
        let handler = {
            let handlers = self
                .handlers
                .lock()
                .map_err(|_| BridgeError::OperationFailed("messenger state poisoned".into()))?;
            handlers.get(channel).cloned()
        };

        match handler {
            Some(handler) => Ok(handler.on_call(call).await),
            None => Err(BridgeError::NotAvailable(format!(
                "no handler bound for channel '{channel}'"
            ))),
        }
    }
}

impl BridgeMessenger for InProcessMessenger {
    fn set_handler(&self, channel: &str, handler: Arc<dyn BridgeHandler>) -> Result<()> {
        let mut handlers = self
            .handlers
            .lock()
            .map_err(|_| BridgeError::OperationFailed("messenger state poisoned".into()))?;
        handlers.insert(channel.to_string(), handler);
        Ok(())
    }

    fn has_handler(&self, channel: &str) -> bool {
        self.handlers
            .lock()
            .map(|handlers| handlers.contains_key(channel))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoHandler;

    #[async_trait::async_trait]
    impl BridgeHandler for EchoHandler {
        async fn on_call(&self, call: BridgeCall) -> BridgeReply {
            BridgeReply::Success(serde_json::json!({ "method": call.method }))
        }
    }

    #[test]
    fn test_bridge_call_bare() {
        let call = BridgeCall::bare("init");
        assert_eq!(call.method, "init");
        assert!(call.arguments.is_null());
    }

    #[test]
    fn test_bridge_reply_serialization() {
        let reply = BridgeReply::NotImplemented;
        let json = serde_json::to_string(&reply).unwrap();
        let deserialized: BridgeReply = serde_json::from_str(&json).unwrap();
        assert!(deserialized.is_not_implemented());
    }

    #[tokio::test]
    async fn test_dispatch_to_bound_handler() {
        let messenger = InProcessMessenger::new();
        messenger
            .set_handler("test/channel", Arc::new(EchoHandler))
            .unwrap();
        assert!(messenger.has_handler("test/channel"));

        let reply = messenger
            .dispatch("test/channel", BridgeCall::bare("ping"))
            .await
            .unwrap();
        assert_eq!(
            reply,
            BridgeReply::Success(serde_json::json!({ "method": "ping" }))
        );
    }

    #[tokio::test]
    async fn test_dispatch_without_handler_is_config_error() {
        let messenger = InProcessMessenger::new();
        let result = messenger
            .dispatch("unbound/channel", BridgeCall::bare("ping"))
            .await;
        assert!(matches!(result, Err(BridgeError::NotAvailable(_))));
    }

    #[tokio::test]
    async fn test_set_handler_replaces_previous() {
        let messenger = InProcessMessenger::new();
        messenger
            .set_handler("test/channel", Arc::new(EchoHandler))
            .unwrap();
        messenger
            .set_handler("test/channel", Arc::new(EchoHandler))
            .unwrap();
        assert!(messenger.has_handler("test/channel"));
    }
}
