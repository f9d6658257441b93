//! # Bridge Registrar
//!
//! Makes the application-layer channel for the sign-in capability exist and
//! behave predictably for unhandled calls.
//!
//! The native sign-in plugin intercepts and answers the real sign-in
//! operations before they reach the handler bound here, so any call that
//! *does* arrive is, by definition, not one this registrar implements. The
//! handler answers every such call with an explicit
//! [`BridgeReply::NotImplemented`] so the application-layer caller is never
//! left with a pending call.

use std::sync::Arc;

use bridge_traits::channel::{BridgeCall, BridgeHandler, BridgeMessenger, BridgeReply};
use core_runtime::events::{BridgeEvent, CoreEvent, EventBus};
use tracing::{debug, info};

use crate::error::Result;

/// Well-known channel name the application layer uses for the sign-in
/// plugin. Must match the application layer byte for byte.
pub const SIGN_IN_CHANNEL: &str = "plugins.flutter.io/google_sign_in";

/// Fallback handler bound to the sign-in channel.
///
/// Answers everything with `NotImplemented`; a reply is always delivered
/// within the same request lifecycle.
struct SignInChannelHandler {
    event_bus: EventBus,
}

#[async_trait::async_trait]
impl BridgeHandler for SignInChannelHandler {
    async fn on_call(&self, call: BridgeCall) -> BridgeReply {
        debug!(
            channel = SIGN_IN_CHANNEL,
            method = %call.method,
            "bridge call reached fallback handler, answering not-implemented"
        );
        self.event_bus
            .emit(CoreEvent::Bridge(BridgeEvent::UnhandledCall {
                channel: SIGN_IN_CHANNEL.to_string(),
                method: call.method,
            }))
            .ok();
        BridgeReply::NotImplemented
    }
}

/// Binds the fallback handler for the sign-in channel.
pub struct BridgeRegistrar {
    event_bus: EventBus,
}

impl BridgeRegistrar {
    pub fn new(event_bus: EventBus) -> Self {
        Self { event_bus }
    }

    /// Bind the sign-in channel handler on `messenger`.
    ///
    /// Idempotent: a channel that already has a handler is left untouched.
    ///
    /// # Errors
    ///
    /// Fails only when the host framework cannot provide the channel, which
    /// is a fatal startup configuration error and is surfaced, not swallowed.
    pub fn register(&self, messenger: &Arc<dyn BridgeMessenger>) -> Result<()> {
        if messenger.has_handler(SIGN_IN_CHANNEL) {
            debug!(
                channel = SIGN_IN_CHANNEL,
                "sign-in channel already registered, skipping"
            );
            return Ok(());
        }

        messenger.set_handler(
            SIGN_IN_CHANNEL,
            Arc::new(SignInChannelHandler {
                event_bus: self.event_bus.clone(),
            }),
        )?;

        info!(channel = SIGN_IN_CHANNEL, "sign-in bridge channel registered");
        self.event_bus
            .emit(CoreEvent::Bridge(BridgeEvent::ChannelRegistered {
                channel: SIGN_IN_CHANNEL.to_string(),
            }))
            .ok();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SessionError;
    use bridge_traits::channel::InProcessMessenger;
    use bridge_traits::BridgeError;

    fn registrar_and_messenger() -> (BridgeRegistrar, Arc<InProcessMessenger>) {
        let event_bus = EventBus::new(16);
        (BridgeRegistrar::new(event_bus), Arc::new(InProcessMessenger::new()))
    }

    #[tokio::test]
    async fn test_register_binds_channel() {
        let (registrar, messenger) = registrar_and_messenger();
        let dyn_messenger: Arc<dyn BridgeMessenger> = messenger.clone();

        registrar.register(&dyn_messenger).unwrap();
        assert!(messenger.has_handler(SIGN_IN_CHANNEL));
    }

    #[tokio::test]
    async fn test_unrecognized_call_gets_not_implemented() {
        let (registrar, messenger) = registrar_and_messenger();
        let dyn_messenger: Arc<dyn BridgeMessenger> = messenger.clone();
        registrar.register(&dyn_messenger).unwrap();

        let reply = messenger
            .dispatch(SIGN_IN_CHANNEL, BridgeCall::bare("someUnknownMethod"))
            .await
            .unwrap();
        assert!(reply.is_not_implemented());
    }

    #[tokio::test]
    async fn test_every_call_is_answered() {
        let (registrar, messenger) = registrar_and_messenger();
        let dyn_messenger: Arc<dyn BridgeMessenger> = messenger.clone();
        registrar.register(&dyn_messenger).unwrap();

        // The plugin normally intercepts these; if they reach us they still
        // get an explicit reply rather than a hang.
        for method in ["init", "signIn", "signOut", "disconnect"] {
            let reply = messenger
                .dispatch(SIGN_IN_CHANNEL, BridgeCall::bare(method))
                .await
                .unwrap();
            assert!(reply.is_not_implemented(), "method {method} was dropped");
        }
    }

    #[tokio::test]
    async fn test_register_is_idempotent() {
        let (registrar, messenger) = registrar_and_messenger();
        let dyn_messenger: Arc<dyn BridgeMessenger> = messenger.clone();

        registrar.register(&dyn_messenger).unwrap();
        registrar.register(&dyn_messenger).unwrap();

        assert!(messenger.has_handler(SIGN_IN_CHANNEL));
    }

    #[tokio::test]
    async fn test_unhandled_call_emits_event() {
        let event_bus = EventBus::new(16);
        let mut events = event_bus.subscribe();
        let registrar = BridgeRegistrar::new(event_bus);
        let messenger = Arc::new(InProcessMessenger::new());
        let dyn_messenger: Arc<dyn BridgeMessenger> = messenger.clone();
        registrar.register(&dyn_messenger).unwrap();

        // Registration event first
        let registered = events.recv().await.unwrap();
        assert!(matches!(
            registered,
            CoreEvent::Bridge(BridgeEvent::ChannelRegistered { .. })
        ));

        messenger
            .dispatch(SIGN_IN_CHANNEL, BridgeCall::bare("clearAuthCache"))
            .await
            .unwrap();

        let unhandled = events.recv().await.unwrap();
        assert_eq!(
            unhandled,
            CoreEvent::Bridge(BridgeEvent::UnhandledCall {
                channel: SIGN_IN_CHANNEL.to_string(),
                method: "clearAuthCache".to_string(),
            })
        );
    }

    struct BrokenMessenger;

    impl BridgeMessenger for BrokenMessenger {
        fn set_handler(
            &self,
            channel: &str,
            _handler: Arc<dyn BridgeHandler>,
        ) -> bridge_traits::error::Result<()> {
            Err(BridgeError::ChannelUnavailable(channel.to_string()))
        }

        fn has_handler(&self, _channel: &str) -> bool {
            false
        }
    }

    #[tokio::test]
    async fn test_registration_failure_is_surfaced() {
        let (registrar, _) = registrar_and_messenger();
        let broken: Arc<dyn BridgeMessenger> = Arc::new(BrokenMessenger);

        let result = registrar.register(&broken);
        assert!(matches!(
            result,
            Err(SessionError::Registration(BridgeError::ChannelUnavailable(_)))
        ));
    }
}
