//! Raw Geometry Sources
//!
//! The seam between this crate and the display server. A source reports
//! whether the multi-monitor extension is active and produces the raw
//! rectangle list the resolver consumes: one rectangle per reported output
//! when the extension is active, one per root display area otherwise.
//!
//! An absent or unresponsive extension is an expected configuration state,
//! not an error: it surfaces as [`GeometrySource::extension_active`]
//! returning `false`, which routes the build down the root-area path.

#[cfg(feature = "x11")]
mod x11;

#[cfg(feature = "x11")]
pub use x11::X11GeometrySource;

use thiserror::Error;

use crate::geometry::ScreenRect;

/// Source result type
pub type Result<T> = std::result::Result<T, SourceError>;

/// Display-source error types
#[derive(Error, Debug)]
pub enum SourceError {
    /// Could not establish the display connection
    #[error("Display connection failed: {0}")]
    Connect(String),

    /// A geometry query failed at the protocol level
    #[error("Geometry query failed: {0}")]
    Query(String),
}

/// Provider of raw monitor geometry.
///
/// Callers query [`extension_active`](Self::extension_active) first and pick
/// the matching query method; [`ScreensInfo::query`](crate::ScreensInfo::query)
/// does exactly that. Root areas always originate at (0, 0) and never
/// overlap, so they need no deduplication downstream.
#[cfg_attr(test, mockall::automock)]
pub trait GeometrySource {
    /// Whether the multi-monitor extension answered the activity probe
    /// affirmatively. A missing reply is reported as `false`.
    fn extension_active(&self) -> bool;

    /// One rectangle per reported output, in the order the display server
    /// reports them. Only meaningful while the extension is active.
    fn query_outputs(&self) -> Result<Vec<ScreenRect>>;

    /// One rectangle per root display area, origin fixed at (0, 0), extent
    /// equal to that root's pixel dimensions. The fallback path.
    fn query_root_areas(&self) -> Result<Vec<ScreenRect>>;
}
