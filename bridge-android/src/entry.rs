//! Android Activity Lifecycle Translation

use std::sync::Arc;

use core_session::{RestorationHandle, Result, SessionBootstrap};
use tracing::info;

/// Drives the bootstrap protocol from the Android engine-configuration hook.
pub struct AndroidEntryPoint {
    bootstrap: Arc<dyn SessionBootstrap>,
}

impl AndroidEntryPoint {
    pub fn new(bootstrap: Arc<dyn SessionBootstrap>) -> Self {
        Self { bootstrap }
    }

    /// Engine-configuration hook.
    ///
    /// Registers the bridge channel, then fires silent session restoration.
    /// Returns before restoration resolves so activity startup is never
    /// delayed.
    ///
    /// # Errors
    ///
    /// Registration failure or a repeated invocation in the same process
    /// aborts configuration; both are startup bugs, not runtime conditions.
    pub fn configure_engine(&self) -> Result<RestorationHandle> {
        info!("configuring engine: bridge registration and session restoration");
        self.bootstrap.register_bridge()?;
        self.bootstrap.bootstrap()
    }
}
