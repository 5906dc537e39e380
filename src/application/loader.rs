// SPDX-License-Identifier: MPL-2.0
//! The load cycle: discover, resolve, probe, aggregate.
//!
//! [`ImageLoader`] turns whatever an [`AssetDiscovery`] adapter lists into an
//! ordered list of [`MediaItem`]s. Every outcome, including failures, ends as a
//! [`LoadState`]; nothing is returned to the caller as an error.

use crate::application::port::{AssetDiscovery, DiscoveredAsset, ImageProbe};
use crate::config::{Config, DEFAULT_BASE_URL, DEFAULT_URL_SEGMENT, ENV_BASE_URL};
use crate::domain::media::{LoadState, MediaItem};
use crate::error::LoadError;
use crate::media;
use futures_util::future::{join_all, FutureExt};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

// =============================================================================
// BaseUrl
// =============================================================================

/// Source of the deployment base URL, read once per load cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BaseUrl {
    /// Read `BASE_URL` from the environment, falling back to `/`.
    #[default]
    Environment,

    /// Use this value as is.
    Fixed(String),
}

impl BaseUrl {
    /// Uses `value` when it is set and non-blank, the environment otherwise.
    #[must_use]
    pub fn from_override(value: Option<String>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => BaseUrl::Fixed(v),
            _ => BaseUrl::Environment,
        }
    }

    /// Returns the base URL, always ending with `/`.
    #[must_use]
    pub fn resolve(&self) -> String {
        let raw = match self {
            BaseUrl::Fixed(value) => value.clone(),
            BaseUrl::Environment => std::env::var(ENV_BASE_URL)
                .ok()
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        };
        media::url::normalize_base(&raw)
    }
}

// =============================================================================
// ImageLoader
// =============================================================================

/// Runs load cycles over one discovery adapter and one probe.
pub struct ImageLoader {
    discovery: Arc<dyn AssetDiscovery>,
    probe: Arc<dyn ImageProbe>,
    base_url: BaseUrl,
    segment: String,
}

impl ImageLoader {
    /// Creates a loader with the default URL settings (`BASE_URL` env or `/`,
    /// then `photos/`).
    pub fn new(
        discovery: impl AssetDiscovery + 'static,
        probe: impl ImageProbe + 'static,
    ) -> Self {
        Self::from_shared(Arc::new(discovery), Arc::new(probe))
    }

    /// Creates a loader from adapters that are already shared.
    pub fn from_shared(discovery: Arc<dyn AssetDiscovery>, probe: Arc<dyn ImageProbe>) -> Self {
        Self {
            discovery,
            probe,
            base_url: BaseUrl::default(),
            segment: DEFAULT_URL_SEGMENT.to_string(),
        }
    }

    /// Sets where the base URL comes from.
    #[must_use]
    pub fn with_base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = base_url;
        self
    }

    /// Sets the segment inserted between the base URL and the file name.
    #[must_use]
    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.segment = segment.into();
        self
    }

    /// Applies the `[urls]` section of a config.
    #[must_use]
    pub fn configured(self, config: &Config) -> Self {
        self.with_base_url(BaseUrl::from_override(config.urls.base_url.clone()))
            .with_segment(config.urls.segment.clone())
    }

    /// Runs one load cycle unless `cancel` fires first.
    ///
    /// Returns `None` when the cycle was abandoned; in-flight probes are
    /// dropped and nothing is produced for the (gone) consumer.
    pub async fn load(&self, cancel: &CancellationToken) -> Option<LoadState> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                debug!("Load cycle cancelled before completion");
                None
            }
            state = self.run() => Some(state),
        }
    }

    /// Runs one load cycle to completion.
    ///
    /// A panicking discovery adapter settles the cycle as an unexpected
    /// failure instead of unwinding into the caller.
    pub async fn run(&self) -> LoadState {
        let outcome = AssertUnwindSafe(self.collect_items())
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| Err(LoadError::Unexpected(panic_message(payload.as_ref()))));

        match outcome {
            Ok(items) => {
                info!(count = items.len(), "Loaded local images");
                LoadState::loaded(items)
            }
            Err(err) => {
                match &err {
                    LoadError::Unexpected(_) => error!(error = %err, "Error loading local images"),
                    _ => warn!(error = %err, "No local images to show"),
                }
                LoadState::failed(err.to_string())
            }
        }
    }

    async fn collect_items(&self) -> Result<Vec<MediaItem>, LoadError> {
        let mut assets = self.discovery.discover()?;
        if assets.is_empty() {
            return Err(LoadError::DiscoveryEmpty {
                location: self.discovery.location().to_string(),
            });
        }
        sort_assets(&mut assets);

        let base_url = self.base_url.resolve();
        debug!(count = assets.len(), %base_url, "Probing discovered images");

        let probes = assets.iter().enumerate().map(|(index, asset)| {
            let src = media::resolve_src(&base_url, &self.segment, &asset.path);
            self.probe_item(index, asset, src)
        });

        // join_all yields results in input order, whatever the completion order.
        let items: Vec<MediaItem> = join_all(probes).await.into_iter().flatten().collect();

        if items.is_empty() {
            return Err(LoadError::AllImagesFailed);
        }
        Ok(items)
    }

    async fn probe_item(
        &self,
        index: usize,
        asset: &DiscoveredAsset,
        src: String,
    ) -> Option<MediaItem> {
        let probed = AssertUnwindSafe(async { self.probe.probe(asset).await })
            .catch_unwind()
            .await;

        match probed {
            Ok(Ok(dimensions)) => Some(MediaItem::new(index, src, dimensions)),
            Ok(Err(err)) => {
                warn!(%src, error = %err, "Failed to load image");
                None
            }
            Err(payload) => {
                warn!(%src, reason = %panic_message(payload.as_ref()), "Image probe panicked");
                None
            }
        }
    }
}

/// Extracts the text of a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Unexpected error while loading images".to_string()
    }
}

/// Orders assets by file name, then by full key, so the list never depends on
/// the adapter's enumeration order.
fn sort_assets(assets: &mut [DiscoveredAsset]) {
    assets.sort_by(|a, b| {
        a.file_name()
            .cmp(b.file_name())
            .then_with(|| a.path.cmp(&b.path))
    });
}
