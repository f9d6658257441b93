//! # Redirect Completer
//!
//! Delivers an externally received callback URL to the in-flight sign-in
//! exchange so it can complete.
//!
//! The handoff is synchronous: the OS may discard the URL or lose the app
//! resumption context if delivery is deferred past the callback that
//! received it. No local "is a sign-in pending" state is kept; the
//! capability alone tracks that, so duplicate or unsolicited URLs are simply
//! forwarded and ignored downstream if unrecognized.

use std::sync::Arc;

use bridge_traits::SignInCapability;
use core_runtime::events::{CoreEvent, EventBus, SessionEvent};
use tracing::debug;
use url::Url;

/// Synchronous pass-through from the OS open-URL callback to the capability.
///
/// Calls are independent; invoking it multiple times, even concurrently,
/// shares no mutable state in this core.
pub struct RedirectCompleter {
    capability: Arc<dyn SignInCapability>,
    event_bus: EventBus,
}

impl RedirectCompleter {
    pub fn new(capability: Arc<dyn SignInCapability>, event_bus: EventBus) -> Self {
        Self {
            capability,
            event_bus,
        }
    }

    /// Forward `url` to the capability and report whether it was consumed as
    /// part of an auth flow.
    ///
    /// A `false` return is informational, not an error: the URL was simply
    /// not part of a tracked sign-in exchange.
    pub fn complete_redirect(&self, url: &Url) -> bool {
        let recognized = self.capability.handle_redirect(url);
        debug!(
            scheme = url.scheme(),
            recognized, "redirect URL handed to sign-in capability"
        );
        self.event_bus
            .emit(CoreEvent::Session(SessionEvent::RedirectDelivered {
                recognized,
            }))
            .ok();
        recognized
    }
}
