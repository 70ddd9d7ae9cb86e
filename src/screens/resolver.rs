//! Screen List Resolution
//!
//! Collapses a raw, possibly redundant monitor report into the canonical
//! deduplicated screen list.

use tracing::{debug, warn};

use crate::geometry::ScreenRect;
use crate::source::{GeometrySource, Result};

/// Resolved screen layout of one display session.
///
/// Built atomically from a single raw geometry query and immutable until the
/// next rebuild replaces it wholesale. No two entries share an `(x, y)`
/// origin, and entry order is the order of first occurrence in the raw
/// report — [`locate`](Self::locate) returns the *first* matching entry, so
/// the order is load-bearing.
///
/// The rectangle storage is exclusively owned; dropping the value releases
/// it in one step. Share it behind an [`Arc`](std::sync::Arc) if lookups may
/// run concurrently with a rebuild (see
/// [`ScreenManager`](crate::ScreenManager)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreensInfo {
    pub(super) extension_active: bool,
    pub(super) screens: Vec<ScreenRect>,
}

impl ScreensInfo {
    /// Resolve a raw rectangle list into a canonical screen list.
    ///
    /// With `extension_active` false the raw list is taken as-is: root
    /// display areas never overlap by construction, so there is nothing to
    /// deduplicate. With it true, reports sharing an origin describe the
    /// same physical area at different sizes; they merge into one entry
    /// keeping the largest extent on each axis, and later duplicates are
    /// dropped. First-occurrence order is retained.
    ///
    /// The scan is O(n²) in the raw count, which is bounded by the number of
    /// physical outputs. Zero-sized rectangles are not validated here;
    /// whatever the display source reports passes through.
    pub fn resolve(raw: Vec<ScreenRect>, extension_active: bool) -> Self {
        if !extension_active {
            return Self {
                extension_active: false,
                screens: raw,
            };
        }

        let raw_count = raw.len();
        let mut screens: Vec<ScreenRect> = Vec::with_capacity(raw_count);

        for rect in raw {
            match screens.iter_mut().find(|s| s.origin() == rect.origin()) {
                Some(existing) => {
                    existing.width = existing.width.max(rect.width);
                    existing.height = existing.height.max(rect.height);
                }
                None => screens.push(rect),
            }
        }
        screens.shrink_to_fit();

        debug!("Resolved {} screens from {} raw outputs", screens.len(), raw_count);

        Self {
            extension_active: true,
            screens,
        }
    }

    /// Build a layout by querying a geometry source.
    ///
    /// Uses the extension path when `source` reports the multi-monitor
    /// extension active, the per-root fallback otherwise.
    ///
    /// # Errors
    ///
    /// Propagates the source's query failure. An inactive extension is not a
    /// failure; it selects the fallback path.
    pub fn query<S: GeometrySource>(source: &S) -> Result<Self> {
        let extension_active = source.extension_active();

        let raw = if extension_active {
            source.query_outputs()?
        } else {
            source.query_root_areas()?
        };

        if extension_active && raw.is_empty() {
            warn!("Multi-monitor extension active but reported no outputs");
        }

        Ok(Self::resolve(raw, extension_active))
    }

    /// Whether the multi-monitor extension produced this layout.
    pub fn extension_active(&self) -> bool {
        self.extension_active
    }

    /// Resolved screen rectangles, in first-occurrence order.
    pub fn screens(&self) -> &[ScreenRect] {
        &self.screens
    }

    /// Number of resolved screens.
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// Whether the layout has no screens. Does not happen on a live display
    /// connection: even the fallback path yields one rectangle per root.
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Screen rectangle at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&ScreenRect> {
        self.screens.get(index)
    }
}
