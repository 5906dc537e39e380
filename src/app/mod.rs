// SPDX-License-Identifier: MPL-2.0
//! Consumer-facing lifecycle for the local image list.
//!
//! A UI mounts [`LocalImages`] once; the handle starts one load cycle on the
//! current tokio runtime and publishes the [`LoadState`] through a watch
//! channel. Dropping (or unmounting) the handle cancels the cycle, so a
//! consumer that is gone never receives a late write.

pub mod paths;

use crate::application::ImageLoader;
use crate::domain::media::LoadState;
use crate::error::LoadError;
use std::sync::Arc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// One mount of the local image list.
///
/// # Example
///
/// ```no_run
/// use local_photos::app::LocalImages;
/// use local_photos::directory_scanner::FsDiscovery;
/// use local_photos::infrastructure::DecoderProbe;
/// use local_photos::application::ImageLoader;
///
/// # async fn run() {
/// let loader = ImageLoader::new(FsDiscovery::new(".", "public/photos"), DecoderProbe::new());
/// let mut images = LocalImages::mount(loader);
/// assert!(images.state().is_loading);
///
/// let state = images.loaded().await;
/// for item in &state.items {
///     println!("{} {}x{}", item.src, item.width, item.height);
/// }
/// # }
/// ```
pub struct LocalImages {
    state: watch::Receiver<LoadState>,
    cancel: CancellationToken,
}

impl LocalImages {
    /// Starts a load cycle and returns the handle observing it.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn mount(loader: impl Into<Arc<ImageLoader>>) -> Self {
        let loader = loader.into();
        let (sender, state) = watch::channel(LoadState::loading());
        let cancel = CancellationToken::new();

        let token = cancel.clone();
        tokio::spawn(async move {
            match loader.load(&token).await {
                // A closed channel means the handle is gone; nothing to report to.
                Some(result) => {
                    let _ = sender.send(result);
                }
                None => debug!("Local images unmounted before loading finished"),
            }
        });

        Self { state, cancel }
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> LoadState {
        self.state.borrow().clone()
    }

    /// Waits until the cycle has settled and returns the final state.
    pub async fn loaded(&mut self) -> LoadState {
        if let Ok(state) = self.state.wait_for(LoadState::is_settled).await {
            return state.clone();
        }
        // The load task ended without publishing.
        LoadState::failed(
            LoadError::Unexpected("Loading stopped before producing a result".into()).to_string(),
        )
    }

    /// Waits for the next state replacement. Returns `None` once no further
    /// replacement can happen.
    pub async fn changed(&mut self) -> Option<LoadState> {
        self.state.changed().await.ok()?;
        Some(self.state.borrow_and_update().clone())
    }

    /// Tears the mount down, abandoning any in-flight probes.
    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for LocalImages {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
