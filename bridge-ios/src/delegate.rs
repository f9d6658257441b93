//! iOS Application Delegate Translation

use std::sync::Arc;

use core_session::{RestorationHandle, Result, SessionBootstrap};
use tracing::{debug, info};
use url::Url;

/// Drives the bootstrap protocol from the iOS application delegate hooks.
pub struct IosEntryPoint {
    bootstrap: Arc<dyn SessionBootstrap>,
}

impl IosEntryPoint {
    pub fn new(bootstrap: Arc<dyn SessionBootstrap>) -> Self {
        Self { bootstrap }
    }

    /// Did-finish-launching hook.
    ///
    /// Registers the bridge channel, then fires silent session restoration.
    /// Returns before restoration resolves; launch is never delayed waiting
    /// for a stored session.
    ///
    /// # Errors
    ///
    /// Registration failure or a repeated invocation in the same process
    /// aborts launch configuration; both are startup bugs, not runtime
    /// conditions.
    pub fn did_finish_launching(&self) -> Result<RestorationHandle> {
        info!("application launching: bridge registration and session restoration");
        self.bootstrap.register_bridge()?;
        self.bootstrap.bootstrap()
    }

    /// Open-URL hook.
    ///
    /// Forwards the OS-delivered callback URL to the in-flight sign-in
    /// exchange, synchronously within this callback. Returns whether the URL
    /// was consumed; `false` tells the OS to offer it to other handlers.
    pub fn open_url(&self, url: &Url) -> bool {
        let handled = self.bootstrap.complete_redirect(url);
        debug!(scheme = url.scheme(), handled, "open-URL callback processed");
        handled
    }
}
