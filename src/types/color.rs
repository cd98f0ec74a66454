//! Entity color

use std::fmt;

/// Color of an entity
///
/// `ByLayer` and `ByBlock` defer to the owning layer or block reference;
/// `Index` is an indexed palette entry (1-255); `Rgb` is a true color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    ByLayer,
    ByBlock,
    Index(u8),
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    pub const RED: Color = Color::Index(1);
    pub const YELLOW: Color = Color::Index(2);
    pub const GREEN: Color = Color::Index(3);
    pub const CYAN: Color = Color::Index(4);
    pub const BLUE: Color = Color::Index(5);
    pub const MAGENTA: Color = Color::Index(6);
    pub const WHITE: Color = Color::Index(7);

    /// Create a true color from RGB values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// True when the color is resolved through the layer or block
    pub fn is_inherited(&self) -> bool {
        matches!(self, Color::ByLayer | Color::ByBlock)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::ByLayer => write!(f, "ByLayer"),
            Color::ByBlock => write!(f, "ByBlock"),
            Color::Index(i) => write!(f, "Index({})", i),
            Color::Rgb { r, g, b } => write!(f, "RGB({}, {}, {})", r, g, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_by_layer() {
        assert_eq!(Color::default(), Color::ByLayer);
        assert!(Color::default().is_inherited());
        assert!(!Color::RED.is_inherited());
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::BLUE.to_string(), "Index(5)");
        assert_eq!(Color::from_rgb(1, 2, 3).to_string(), "RGB(1, 2, 3)");
    }
}
