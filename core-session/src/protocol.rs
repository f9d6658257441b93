//! # Session Bootstrap Protocol
//!
//! The shared contract both platform entry adapters drive, plus the default
//! engine composing the registrar, bootstrapper, and redirect completer over
//! an injected capability and messenger.
//!
//! Host lifecycle hooks differ per platform (engine configuration on
//! Android, launch options plus open-URL on iOS), but the protocol they
//! translate into is identical; abstracting it here keeps the
//! restoration/redirect contract in one place instead of duplicated per
//! platform.

use std::sync::Arc;

use bridge_traits::{BridgeMessenger, Session, SignInCapability};
use core_runtime::config::CoreConfig;
use core_runtime::events::{CoreEvent, EventBus, SessionEvent};
use tracing::instrument;
use url::Url;

use crate::bootstrap::{RestorationHandle, SessionBootstrapper};
use crate::error::Result;
use crate::redirect::RedirectCompleter;
use crate::registrar::BridgeRegistrar;
use crate::types::BootstrapState;

/// The platform-independent bootstrap contract.
///
/// One implementation per process; platform adapters translate their native
/// lifecycle hooks into these calls.
pub trait SessionBootstrap: Send + Sync {
    /// Wire the application-layer channel for the sign-in capability.
    ///
    /// Idempotent. Failure is a fatal startup configuration error.
    fn register_bridge(&self) -> Result<()>;

    /// Fire silent session restoration; never blocks the startup path.
    fn bootstrap(&self) -> Result<RestorationHandle>;

    /// Hand an OS-delivered callback URL to the in-flight sign-in exchange.
    ///
    /// Must be called synchronously within the OS callback that delivered
    /// the URL. Returns whether the capability recognized the URL.
    fn complete_redirect(&self, url: &Url) -> bool;
}

/// Default [`SessionBootstrap`] implementation.
///
/// Composes the [`BridgeRegistrar`], [`SessionBootstrapper`], and
/// [`RedirectCompleter`] over the capability and messenger from
/// [`CoreConfig`].
pub struct SessionBootstrapEngine {
    capability: Arc<dyn SignInCapability>,
    messenger: Arc<dyn BridgeMessenger>,
    event_bus: EventBus,
    registrar: BridgeRegistrar,
    bootstrapper: SessionBootstrapper,
    completer: RedirectCompleter,
}

impl SessionBootstrapEngine {
    /// Build the engine from a validated core configuration.
    pub fn from_config(config: &CoreConfig) -> Self {
        Self::new(
            Arc::clone(&config.capability),
            Arc::clone(&config.messenger),
            EventBus::new(config.event_buffer_size),
        )
    }

    pub fn new(
        capability: Arc<dyn SignInCapability>,
        messenger: Arc<dyn BridgeMessenger>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            registrar: BridgeRegistrar::new(event_bus.clone()),
            bootstrapper: SessionBootstrapper::new(Arc::clone(&capability), event_bus.clone()),
            completer: RedirectCompleter::new(Arc::clone(&capability), event_bus.clone()),
            capability,
            messenger,
            event_bus,
        }
    }

    /// The event bus this engine emits session and bridge events on.
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Current startup lifecycle state.
    pub fn state(&self) -> BootstrapState {
        self.bootstrapper.state()
    }

    /// Start an interactive sign-in flow on the capability.
    ///
    /// Pure pass-through apart from event emission: the flow may leave the
    /// app for an external browser and is completed later through
    /// [`SessionBootstrap::complete_redirect`].
    #[instrument(skip(self))]
    pub async fn sign_in(&self) -> bridge_traits::error::Result<Session> {
        self.event_bus
            .emit(CoreEvent::Session(SessionEvent::SignInStarted))
            .ok();
        self.capability.sign_in().await
    }
}

impl SessionBootstrap for SessionBootstrapEngine {
    fn register_bridge(&self) -> Result<()> {
        self.registrar.register(&self.messenger)
    }

    fn bootstrap(&self) -> Result<RestorationHandle> {
        self.bootstrapper.bootstrap()
    }

    fn complete_redirect(&self, url: &Url) -> bool {
        self.completer.complete_redirect(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::channel::InProcessMessenger;
    use bridge_traits::error::Result as BridgeResult;
    use bridge_traits::{BridgeError, CredentialHandle};

    struct StubCapability;

    #[async_trait::async_trait]
    impl SignInCapability for StubCapability {
        async fn restore_previous_session(&self) -> BridgeResult<Option<Session>> {
            Ok(None)
        }

        async fn sign_in(&self) -> BridgeResult<Session> {
            Ok(Session::new("user-9", CredentialHandle::new("tok")))
        }

        fn handle_redirect(&self, url: &Url) -> bool {
            url.scheme() == "com.test.app"
        }
    }

    fn engine() -> SessionBootstrapEngine {
        SessionBootstrapEngine::new(
            Arc::new(StubCapability),
            Arc::new(InProcessMessenger::new()),
            EventBus::new(16),
        )
    }

    #[tokio::test]
    async fn test_engine_drives_full_startup() {
        let engine = engine();

        engine.register_bridge().unwrap();
        let handle = engine.bootstrap().unwrap();
        assert_eq!(
            handle.outcome().await,
            crate::types::RestorationOutcome::NoPriorSession
        );
        assert_eq!(engine.state(), BootstrapState::Resolved);
    }

    #[tokio::test]
    async fn test_engine_redirect_pass_through() {
        let engine = engine();
        let url = Url::parse("com.test.app:/oauth2redirect").unwrap();
        assert!(engine.complete_redirect(&url));

        let unrelated = Url::parse("mailto:user@example.com").unwrap();
        assert!(!engine.complete_redirect(&unrelated));
    }

    #[tokio::test]
    async fn test_engine_sign_in_emits_event() {
        let engine = engine();
        let mut events = engine.event_bus().subscribe();

        let session = engine.sign_in().await.unwrap();
        assert_eq!(session.subject.as_str(), "user-9");
        assert_eq!(
            events.recv().await.unwrap(),
            CoreEvent::Session(SessionEvent::SignInStarted)
        );
    }

    #[tokio::test]
    async fn test_from_config() {
        let config = CoreConfig::builder()
            .client_id("client-1")
            .capability(Arc::new(StubCapability))
            .messenger(Arc::new(InProcessMessenger::new()))
            .event_buffer_size(8)
            .build()
            .unwrap();

        let engine = SessionBootstrapEngine::from_config(&config);
        engine.register_bridge().unwrap();
        assert!(config.messenger.has_handler(crate::SIGN_IN_CHANNEL));
    }

    struct FailingCapability;

    #[async_trait::async_trait]
    impl SignInCapability for FailingCapability {
        async fn restore_previous_session(&self) -> BridgeResult<Option<Session>> {
            Err(BridgeError::OperationFailed("offline".to_string()))
        }

        async fn sign_in(&self) -> BridgeResult<Session> {
            Err(BridgeError::OperationFailed("offline".to_string()))
        }

        fn handle_redirect(&self, _url: &Url) -> bool {
            false
        }
    }

    #[tokio::test]
    async fn test_engine_surfaces_failed_restoration() {
        let engine = SessionBootstrapEngine::new(
            Arc::new(FailingCapability),
            Arc::new(InProcessMessenger::new()),
            EventBus::new(16),
        );

        let outcome = engine.bootstrap().unwrap().outcome().await;
        assert!(matches!(
            outcome,
            crate::types::RestorationOutcome::Failed { .. }
        ));
    }
}
