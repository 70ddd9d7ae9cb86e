//! X11 Geometry Source
//!
//! Queries monitor geometry from an X server: Xinerama screens when the
//! extension is active, per-root screen dimensions otherwise.

use tracing::debug;
use x11rb::connection::Connection;
use x11rb::protocol::xinerama::ConnectionExt as _;
use x11rb::rust_connection::RustConnection;

use crate::geometry::ScreenRect;
use crate::source::{GeometrySource, Result, SourceError};

/// Geometry source backed by an X server connection.
pub struct X11GeometrySource {
    conn: RustConnection,
}

impl X11GeometrySource {
    /// Connect to the display named by `$DISPLAY`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Connect`] if the display cannot be reached.
    pub fn connect() -> Result<Self> {
        let (conn, _screen_num) =
            x11rb::connect(None).map_err(|e| SourceError::Connect(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Wrap an already-established connection.
    pub fn from_connection(conn: RustConnection) -> Self {
        Self { conn }
    }
}

impl GeometrySource for X11GeometrySource {
    fn extension_active(&self) -> bool {
        // A failed probe means no Xinerama, not a failed build.
        self.conn
            .xinerama_is_active()
            .ok()
            .and_then(|cookie| cookie.reply().ok())
            .map_or(false, |reply| reply.state != 0)
    }

    fn query_outputs(&self) -> Result<Vec<ScreenRect>> {
        let reply = self
            .conn
            .xinerama_query_screens()
            .map_err(|e| SourceError::Query(e.to_string()))?
            .reply()
            .map_err(|e| SourceError::Query(e.to_string()))?;

        let outputs: Vec<ScreenRect> = reply
            .screen_info
            .iter()
            .map(|info| {
                ScreenRect::new(
                    info.x_org as i32,
                    info.y_org as i32,
                    info.width as u32,
                    info.height as u32,
                )
            })
            .collect();

        debug!("Xinerama reported {} outputs", outputs.len());
        Ok(outputs)
    }

    fn query_root_areas(&self) -> Result<Vec<ScreenRect>> {
        let areas: Vec<ScreenRect> = self
            .conn
            .setup()
            .roots
            .iter()
            .map(|screen| {
                ScreenRect::new(
                    0,
                    0,
                    screen.width_in_pixels as u32,
                    screen.height_in_pixels as u32,
                )
            })
            .collect();

        debug!("Using {} root display areas", areas.len());
        Ok(areas)
    }
}
