// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// A screen rectangle in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Left column.
    pub x: u16,
    /// Top row.
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Bounds {
    /// Whether the point lies inside the rectangle.
    #[must_use]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && u32::from(x) < u32::from(self.x) + u32::from(self.width)
            && u32::from(y) < u32::from(self.y) + u32::from(self.height)
    }
}

/// An overlay that closes when the pointer goes down outside of it.
///
/// The outside-click listener only exists while the overlay is open, so
/// nothing is left listening after it closes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DismissibleOverlay {
    open: bool,
    bounds: Option<Bounds>,
}

impl DismissibleOverlay {
    /// Creates a closed overlay.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            open: false,
            bounds: None,
        }
    }

    /// Opens the overlay.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the overlay and forgets its bounds.
    pub fn close(&mut self) {
        self.open = false;
        self.bounds = None;
    }

    /// Whether the overlay is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Whether outside pointer-downs are being observed.
    #[must_use]
    pub const fn is_listening(&self) -> bool {
        self.open
    }

    /// Records where the overlay was last drawn.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        if self.open {
            self.bounds = Some(bounds);
        }
    }

    /// The last drawn bounds while open.
    #[must_use]
    pub const fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Handles a pointer-down and returns `true` if it dismissed the overlay.
    ///
    /// Before the overlay has been drawn there is nothing to be outside of, so
    /// the event is ignored.
    pub fn pointer_down(&mut self, x: u16, y: u16) -> bool {
        if !self.is_listening() {
            return false;
        }

        match self.bounds {
            Some(bounds) if !bounds.contains(x, y) => {
                tracing::info!(x, y, "overlay dismissed by outside click");
                self.close();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Bounds = Bounds {
        x: 10,
        y: 5,
        width: 20,
        height: 10,
    };

    #[test]
    fn bounds_contains_edges() {
        assert!(AREA.contains(10, 5));
        assert!(AREA.contains(29, 14));
        assert!(!AREA.contains(30, 14));
        assert!(!AREA.contains(9, 5));
    }

    #[test]
    fn outside_click_closes_open_overlay() {
        let mut overlay = DismissibleOverlay::new();
        overlay.open();
        overlay.set_bounds(AREA);
        assert!(overlay.is_listening());

        assert!(!overlay.pointer_down(15, 7));
        assert!(overlay.is_open());

        assert!(overlay.pointer_down(0, 0));
        assert!(!overlay.is_open());
        assert!(!overlay.is_listening());
        assert_eq!(overlay.bounds(), None);
    }

    #[test]
    fn closed_overlay_ignores_clicks() {
        let mut overlay = DismissibleOverlay::new();
        overlay.set_bounds(AREA);
        assert!(!overlay.is_listening());
        assert!(!overlay.pointer_down(0, 0));
        assert_eq!(overlay.bounds(), None);
    }

    #[test]
    fn undrawn_overlay_stays_open() {
        let mut overlay = DismissibleOverlay::new();
        overlay.open();
        assert!(!overlay.pointer_down(0, 0));
        assert!(overlay.is_open());
    }
}
