use std::fmt;

use crate::BorderProfile;

/// A rectangle in screen coordinates, described by its four edges.
///
/// Matches the layout of the Win32 `RECT`: `right` and `bottom` are
/// exclusive edges, so `width() == right - left`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Returns whether the edges are ordered (`left <= right`, `top <= bottom`).
    ///
    /// An inverted rectangle must never be handed to the cursor clip.
    pub fn is_valid(&self) -> bool {
        self.left <= self.right && self.top <= self.bottom
    }

    /// Shrinks the rectangle by a border inset on every side.
    ///
    /// The result is not checked; a border larger than the window
    /// produces an inverted rectangle. Edges saturate at the `i32` range.
    pub fn inset(&self, border: &BorderProfile) -> Rect {
        Rect {
            left: self.left.saturating_add(border.left),
            top: self.top.saturating_add(border.top),
            right: self.right.saturating_sub(border.right),
            bottom: self.bottom.saturating_sub(border.bottom),
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Left : {}, Top : {}, Right : {}, Bottom : {}",
            self.left, self.top, self.right, self.bottom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_subtracts_border_from_dimensions() {
        // Arrange
        let window = Rect::new(100, 50, 900, 650);
        let border = BorderProfile::new(4, 27, 4, 4);

        // Act
        let client = window.inset(&border);

        // Assert
        assert_eq!(client.width(), window.width() - 4 - 4);
        assert_eq!(client.height(), window.height() - 27 - 4);
        assert!(client.is_valid());
    }

    #[test]
    fn inset_larger_than_window_is_inverted() {
        // Arrange
        let window = Rect::new(0, 0, 10, 20);
        let border = BorderProfile::new(8, 23, 8, 8);

        // Act
        let client = window.inset(&border);

        // Assert
        assert!(client.width() < 0);
        assert!(!client.is_valid());
    }

    #[test]
    fn inset_saturates_at_extreme_edges() {
        // Arrange
        let window = Rect::new(i32::MIN, 0, i32::MAX, 10);
        let border = BorderProfile::new(-1, 0, -1, 0);

        // Act
        let client = window.inset(&border);

        // Assert
        assert_eq!(client.left, i32::MIN);
        assert_eq!(client.right, i32::MAX);
    }

    #[test]
    fn zero_sized_rect_is_valid() {
        assert!(Rect::new(5, 5, 5, 5).is_valid());
    }

    #[test]
    fn display_lists_all_edges() {
        let text = Rect::new(4, 27, 796, 596).to_string();
        assert_eq!(text, "Left : 4, Top : 27, Right : 796, Bottom : 596");
    }
}
