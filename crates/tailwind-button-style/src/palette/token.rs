//! Utility-class color tokens such as `amber-500`.

use std::fmt;
use std::str::FromStr;

use tailwind_button_render::Color;

use super::{ColorFamily, Rgb, Shade, lookup};
use crate::error::Error;

/// A single palette entry, named the way utility classes name it.
///
/// Parses from `"<family>-<shade>"` or a bare family name, which means shade
/// 500. Displays as the full `"<family>-<shade>"` token.
///
/// ```
/// use tailwind_button_style::palette::{ColorFamily, PaletteColor, Shade};
///
/// let token: PaletteColor = "sky-600".parse().unwrap();
/// assert_eq!(token, PaletteColor::new(ColorFamily::Sky, Shade::S600));
/// assert_eq!("rose".parse::<PaletteColor>().unwrap().to_string(), "rose-500");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteColor {
    pub family: ColorFamily,
    pub shade: Shade,
}

impl PaletteColor {
    #[inline]
    pub const fn new(family: ColorFamily, shade: Shade) -> Self {
        Self { family, shade }
    }

    /// The table entry for this token.
    #[inline]
    pub fn rgb(self) -> Rgb {
        lookup(self.family, self.shade)
    }

    /// The table entry as a renderer color.
    #[inline]
    pub fn color(self) -> Color {
        self.rgb().to_color()
    }
}

impl FromStr for PaletteColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(Error::invalid_color_token(s, "empty token"));
        }

        match token.rsplit_once('-') {
            None => {
                let family = token
                    .parse()
                    .map_err(|_| Error::invalid_color_token(s, "unknown color family"))?;
                Ok(Self::new(family, Shade::FALLBACK))
            }
            Some((family, shade)) => {
                let family = family
                    .parse()
                    .map_err(|_| Error::invalid_color_token(s, "unknown color family"))?;
                let shade = shade
                    .parse()
                    .map_err(|_| Error::invalid_color_token(s, "shade is not 50, 100, 200 ... 900"))?;
                Ok(Self::new(family, shade))
            }
        }
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.family, self.shade)
    }
}
