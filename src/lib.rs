//! # screenmap
//!
//! Monitor layout resolution and point-to-screen lookup for window managers.
//!
//! A window manager needs two answers from the display server before it can
//! place a window: what physical screens exist, and which of them contains a
//! given point. The raw answer to the first question is messy — a
//! multi-monitor extension may report the same physical area more than once,
//! at different sizes, when outputs are cloned or overlapped. This crate
//! resolves that raw report into a canonical screen list and answers
//! containment queries against it.
//!
//! # Architecture
//!
//! ```text
//! GeometrySource (X11 / custom)
//!   └─> ScreensInfo::resolve (origin-merge deduplication)
//!         └─> ScreensInfo (immutable resolved layout)
//!               ├─> ScreensInfo::locate (first-match point lookup)
//!               └─> ScreenManager (atomic rebuild on reconfiguration)
//! ```
//!
//! # Data Flow
//!
//! **Build Path:** display server → [`GeometrySource`] → [`ScreensInfo`]
//!
//! **Query Path:** caller → [`ScreensInfo::locate`] → screen index
//!
//! A layout is built wholesale from a single raw query and never mutated;
//! monitor reconfiguration is handled by building a replacement and swapping
//! it in ([`ScreenManager::rebuild`]).

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Screen geometry value types
pub mod geometry;

/// Resolved screen layout, point lookup, and lifecycle management
pub mod screens;

/// Raw geometry sources
pub mod source;

pub use geometry::ScreenRect;
pub use screens::{ScreenManager, ScreensInfo};
#[cfg(feature = "x11")]
pub use source::X11GeometrySource;
pub use source::{GeometrySource, SourceError};
