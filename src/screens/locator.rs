//! Point-to-Screen Lookup
//!
//! First-match containment queries over a resolved layout.

use crate::screens::ScreensInfo;

impl ScreensInfo {
    /// Index of the first screen containing the point, or `fallback`.
    ///
    /// A negative coordinate is a wildcard that disables the test on that
    /// axis entirely: `locate(-1, y, fb)` returns the first screen whose
    /// vertical span contains `y` regardless of its horizontal bounds, and
    /// symmetrically for `locate(x, -1, fb)`. The wildcard is unconditional
    /// — a negative coordinate never fails a test, even when some screen's
    /// span actually covers negative positions.
    ///
    /// When the multi-monitor extension is inactive there is no ambiguity to
    /// resolve and the caller's fallback is authoritative; the screen list
    /// is not inspected. `fallback` is returned as given in either case, not
    /// range-checked against the list.
    ///
    /// Pure and allocation-free; safe to call arbitrarily often between
    /// rebuilds.
    pub fn locate(&self, x: i32, y: i32, fallback: usize) -> usize {
        if !self.extension_active {
            return fallback;
        }

        self.screens
            .iter()
            .position(|s| (x < 0 || s.spans_x(x)) && (y < 0 || s.spans_y(y)))
            .unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ScreenRect;

    fn rect(x: i32, y: i32, width: u32, height: u32) -> ScreenRect {
        ScreenRect::new(x, y, width, height)
    }

    /// Dual-head layout: 1920x1200 at the origin, 1280x1024 to its right.
    fn dual_head() -> ScreensInfo {
        ScreensInfo::resolve(
            vec![rect(0, 0, 1920, 1200), rect(1920, 0, 1280, 1024)],
            true,
        )
    }

    // =========================================================================
    // Containment Tests
    // =========================================================================

    #[test]
    fn test_point_on_first_screen() {
        assert_eq!(dual_head().locate(100, 100, 0), 0);
    }

    #[test]
    fn test_point_on_second_screen() {
        assert_eq!(dual_head().locate(2000, 500, 0), 1);
    }

    #[test]
    fn test_no_match_returns_fallback() {
        assert_eq!(dual_head().locate(5000, 5000, 0), 0);
        assert_eq!(dual_head().locate(5000, 5000, 1), 1);
    }

    #[test]
    fn test_fallback_is_not_range_checked() {
        // Callers own the fallback; an out-of-range index comes back as-is
        assert_eq!(dual_head().locate(5000, 5000, 7), 7);
    }

    #[test]
    fn test_boundary_belongs_to_next_screen() {
        // Spans are half-open: x == 1920 is outside screen 0, inside screen 1
        assert_eq!(dual_head().locate(1919, 0, 9), 0);
        assert_eq!(dual_head().locate(1920, 0, 9), 1);
    }

    #[test]
    fn test_first_match_wins_in_list_order() {
        // Same geometry reported at two origins that both cover (50, 50)
        let info = ScreensInfo::resolve(
            vec![rect(-100, -100, 400, 400), rect(0, 0, 400, 400)],
            true,
        );
        assert_eq!(info.locate(50, 50, 9), 0);
    }

    // =========================================================================
    // Wildcard Axis Tests
    // =========================================================================

    #[test]
    fn test_wildcard_x_matches_on_y_alone() {
        // y = 1100 is only inside the taller first screen
        assert_eq!(dual_head().locate(-1, 1100, 9), 0);
        // y = 500 is inside both; first match wins
        assert_eq!(dual_head().locate(-1, 500, 9), 0);
    }

    #[test]
    fn test_wildcard_y_matches_on_x_alone() {
        assert_eq!(dual_head().locate(2000, -1, 9), 1);
        assert_eq!(dual_head().locate(100, -1, 9), 0);
    }

    #[test]
    fn test_both_axes_wildcard_matches_first_screen() {
        assert_eq!(dual_head().locate(-1, -1, 9), 0);
    }

    #[test]
    fn test_wildcard_ignores_negative_screen_spans() {
        // A screen left of the origin does cover x = -500, but any negative
        // x is a wildcard, so the first y-match wins instead
        let info = ScreensInfo::resolve(
            vec![rect(0, 0, 1920, 1080), rect(-1920, 0, 1920, 1080)],
            true,
        );
        assert_eq!(info.locate(-500, 100, 9), 0);
    }

    #[test]
    fn test_wildcard_no_match_on_other_axis_returns_fallback() {
        assert_eq!(dual_head().locate(-1, 4000, 9), 9);
    }

    // =========================================================================
    // Inactive Fast Path Tests
    // =========================================================================

    #[test]
    fn test_inactive_extension_always_returns_fallback() {
        // The list would contain the point; it is not consulted
        let info = ScreensInfo::resolve(vec![rect(0, 0, 1920, 1080)], false);

        assert_eq!(info.locate(100, 100, 3), 3);
        assert_eq!(info.locate(-1, -1, 3), 3);
        assert_eq!(info.locate(5000, 5000, 0), 0);
    }
}
