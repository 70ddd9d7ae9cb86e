//! Screen Manager
//!
//! Owns the current resolved layout and swaps in replacements atomically on
//! reconfiguration.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::screens::ScreensInfo;
use crate::source::{GeometrySource, Result};

/// Holds the current [`ScreensInfo`] and rebuilds it on demand.
///
/// Readers take cheap [`Arc`] handles via [`screens`](Self::screens); a
/// rebuild constructs the replacement off to the side and publishes it under
/// the write lock, so a lookup in flight can never observe a half-built list
/// or freed storage. The previous layout is released when its last reader
/// drops its handle. There is no partial update: any configuration change is
/// a full rebuild.
///
/// When to rebuild is the caller's decision — typically on a reconfiguration
/// notification from the display server.
pub struct ScreenManager<S: GeometrySource> {
    source: S,
    current: RwLock<Arc<ScreensInfo>>,
}

impl<S: GeometrySource> ScreenManager<S> {
    /// Query `source` and build the initial layout.
    ///
    /// # Arguments
    ///
    /// * `source` - Geometry source; the manager owns it for re-queries
    ///
    /// # Returns
    ///
    /// A manager holding the freshly resolved layout
    ///
    /// # Errors
    ///
    /// Propagates the source's query failure.
    pub fn new(source: S) -> Result<Self> {
        let info = ScreensInfo::query(&source)?;
        info!(
            "Screen layout initialized: {} screens (extension active: {})",
            info.len(),
            info.extension_active()
        );

        Ok(Self {
            source,
            current: RwLock::new(Arc::new(info)),
        })
    }

    /// Handle to the current resolved layout.
    ///
    /// The handle stays valid across rebuilds; it just goes stale.
    pub fn screens(&self) -> Arc<ScreensInfo> {
        self.current.read().clone()
    }

    /// Re-query the source and replace the layout wholesale.
    ///
    /// The replacement is resolved before the write lock is taken, so
    /// readers are only ever excluded for the pointer swap itself.
    ///
    /// # Errors
    ///
    /// Propagates the source's query failure; on failure the current layout
    /// is left in place.
    pub fn rebuild(&self) -> Result<()> {
        let info = Arc::new(ScreensInfo::query(&self.source)?);
        debug!("Screen layout rebuilt: {} screens", info.len());

        *self.current.write() = info;
        Ok(())
    }

    /// Look up the screen containing `(x, y)` in the current layout.
    ///
    /// See [`ScreensInfo::locate`] for the wildcard and fallback semantics.
    pub fn locate(&self, x: i32, y: i32, fallback: usize) -> usize {
        self.current.read().locate(x, y, fallback)
    }
}
