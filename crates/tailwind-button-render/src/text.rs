//! Font descriptors handed to the host for label text.
//!
//! Shaping and glyph rasterization belong to the host; a [`Font`] only says
//! which size and weight to use.

use std::fmt;

/// A numeric font weight on the CSS 100-900 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const MEDIUM: Self = Self(500);
    pub const SEMIBOLD: Self = Self(600);

    /// Get the numeric weight.
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.0 {
            500 => "medium",
            600 => "semibold",
            other => return write!(f, "{other}"),
        };
        f.write_str(name)
    }
}

/// Size and weight of the system font used for a label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    /// Point size.
    pub size: f32,
    /// Weight.
    pub weight: FontWeight,
}

impl Font {
    /// Create a font descriptor.
    #[inline]
    pub const fn new(size: f32, weight: FontWeight) -> Self {
        Self { size, weight }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_ordering() {
        assert!(FontWeight::SEMIBOLD > FontWeight::MEDIUM);
        assert_eq!(FontWeight::MEDIUM.value(), 500);
    }

    #[test]
    fn test_weight_display() {
        assert_eq!(FontWeight::SEMIBOLD.to_string(), "semibold");
        assert_eq!(FontWeight(450).to_string(), "450");
    }
}
