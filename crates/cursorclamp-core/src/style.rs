use std::ops::BitOr;

/// The style word of a window (`GWL_STYLE`).
///
/// Only the decoration bits matter here. Bit values are the Win32 ones
/// so platform code can wrap the raw word without translation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WindowStyle(pub u32);

impl WindowStyle {
    /// `WS_BORDER`: thin-line border.
    pub const BORDER: WindowStyle = WindowStyle(0x0080_0000);
    /// `WS_DLGFRAME`: dialog-box border.
    pub const DLGFRAME: WindowStyle = WindowStyle(0x0040_0000);
    /// `WS_CAPTION`: title bar, which is `WS_BORDER | WS_DLGFRAME`.
    pub const CAPTION: WindowStyle = WindowStyle(0x00C0_0000);
    /// `WS_THICKFRAME`: sizing border.
    pub const THICKFRAME: WindowStyle = WindowStyle(0x0004_0000);

    pub fn bits(self) -> u32 {
        self.0
    }

    /// Returns whether every bit of `other` is set.
    pub fn contains(self, other: WindowStyle) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn has_caption(self) -> bool {
        self.contains(Self::CAPTION)
    }

    pub fn has_thick_frame(self) -> bool {
        self.contains(Self::THICKFRAME)
    }

    pub fn has_border(self) -> bool {
        self.contains(Self::BORDER)
    }
}

impl BitOr for WindowStyle {
    type Output = WindowStyle;

    fn bitor(self, rhs: WindowStyle) -> WindowStyle {
        WindowStyle(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_requires_both_bits() {
        assert!(WindowStyle::CAPTION.has_caption());
        assert!(!WindowStyle::BORDER.has_caption());
        assert!(!WindowStyle::DLGFRAME.has_caption());
    }

    #[test]
    fn caption_implies_border() {
        assert!(WindowStyle::CAPTION.has_border());
    }

    #[test]
    fn unrelated_bits_are_ignored() {
        // WS_VISIBLE | WS_SYSMENU
        let style = WindowStyle(0x1000_0000 | 0x0008_0000) | WindowStyle::THICKFRAME;

        assert!(style.has_thick_frame());
        assert!(!style.has_caption());
        assert!(!style.has_border());
    }
}
