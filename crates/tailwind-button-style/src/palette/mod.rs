//! The Tailwind color palette.
//!
//! A fixed table of 22 color families by 10 shades. Lookups are total: every
//! `(ColorFamily, Shade)` pair has an entry, and a raw shade number outside
//! the canonical set resolves to the 500 entry of its family.
//!
//! # Example
//!
//! ```
//! use tailwind_button_style::palette::{self, ColorFamily, Rgb, Shade};
//!
//! assert_eq!(palette::lookup(ColorFamily::Amber, Shade::S500), Rgb::new(245, 158, 11));
//!
//! // 450 is not a shade; the family's 500 entry is used instead.
//! assert_eq!(
//!     palette::lookup_value(ColorFamily::Amber, 450),
//!     palette::lookup(ColorFamily::Amber, Shade::S500),
//! );
//! ```

mod family;
mod shade;
mod table;
mod token;

use std::fmt;

use tailwind_button_core::logging::targets;
use tailwind_button_render::Color;

pub use family::ColorFamily;
pub use shade::Shade;
pub use token::PaletteColor;

/// An opaque 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from 8-bit channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to a normalized, opaque renderer color.
    #[inline]
    pub fn to_color(self) -> Color {
        Color::from_rgb8(self.r, self.g, self.b)
    }

    /// WCAG 2.x relative luminance, 0.0 (black) to 1.0 (white).
    pub fn relative_luminance(self) -> f64 {
        fn linearize(channel: u8) -> f64 {
            let c = f64::from(channel) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        rgb.to_color()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Look up the color for a family and shade.
#[inline]
pub fn lookup(family: ColorFamily, shade: Shade) -> Rgb {
    table::TABLE[family.index()][shade.index()]
}

/// Look up the color for a family and a raw shade number.
///
/// Numbers outside 50, 100, 200, ... 900 fall back to the family's 500 entry.
pub fn lookup_value(family: ColorFamily, shade: u16) -> Rgb {
    let resolved = Shade::from_value(shade).unwrap_or_else(|| {
        tracing::debug!(
            target: targets::PALETTE,
            family = %family,
            shade,
            fallback = Shade::FALLBACK.value(),
            "shade not in palette, using fallback"
        );
        Shade::FALLBACK
    });
    lookup(family, resolved)
}

/// All ten shades of a family, lightest first.
pub fn shades(family: ColorFamily) -> [Rgb; 10] {
    table::TABLE[family.index()]
}
