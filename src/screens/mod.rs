//! Resolved Screen Layout
//!
//! Turns raw monitor reports into a canonical screen list and answers
//! "which screen contains this point" queries against it.
//!
//! # Overview
//!
//! Multi-monitor extensions report one rectangle per output, and cloned or
//! overlapping outputs produce several reports for the same physical area at
//! different sizes:
//!
//! ```text
//! raw report                      resolved
//! ┌──────────────┐
//! │ (0,0) 1920x1080  ──┐
//! │ (0,0) 1920x1200  ──┴──────>  (0,0) 1920x1200
//! │ (1920,0) 1280x1024 ───────>  (1920,0) 1280x1024
//! └──────────────┘
//! ```
//!
//! Resolution merges reports that share an origin, keeping the largest
//! extent on each axis, and retains first-occurrence order. Point lookup
//! walks the resolved list in that order and returns the first match, so
//! ordering is part of the contract, not a cosmetic detail.
//!
//! # Lifecycle
//!
//! A [`ScreensInfo`] is built wholesale from one raw query and stays
//! immutable until a reconfiguration replaces it. [`ScreenManager`] owns the
//! current layout, hands out shared read handles, and swaps in replacements
//! atomically so a lookup in flight never observes a half-built list.
//!
//! # Example
//!
//! ```no_run
//! use screenmap::{ScreenManager, X11GeometrySource};
//!
//! # fn main() -> Result<(), screenmap::SourceError> {
//! let source = X11GeometrySource::connect()?;
//! let manager = ScreenManager::new(source)?;
//!
//! // Which screen should a window at (2000, 500) land on?
//! let screen = manager.locate(2000, 500, 0);
//! println!("placing on screen {screen}");
//!
//! // On a reconfiguration notification:
//! manager.rebuild()?;
//! # Ok(())
//! # }
//! ```

mod locator;
mod manager;
mod resolver;

pub use manager::ScreenManager;
pub use resolver::ScreensInfo;
