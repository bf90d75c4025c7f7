//! Named hue groups.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the 22 named color families, each with ten shades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFamily {
    Slate,
    Gray,
    Zinc,
    Neutral,
    Stone,
    Red,
    Orange,
    Amber,
    Yellow,
    Lime,
    Green,
    Emerald,
    Teal,
    Cyan,
    Sky,
    #[default]
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Pink,
    Rose,
}

impl ColorFamily {
    /// Every family, in palette order.
    pub const ALL: [ColorFamily; 22] = [
        ColorFamily::Slate,
        ColorFamily::Gray,
        ColorFamily::Zinc,
        ColorFamily::Neutral,
        ColorFamily::Stone,
        ColorFamily::Red,
        ColorFamily::Orange,
        ColorFamily::Amber,
        ColorFamily::Yellow,
        ColorFamily::Lime,
        ColorFamily::Green,
        ColorFamily::Emerald,
        ColorFamily::Teal,
        ColorFamily::Cyan,
        ColorFamily::Sky,
        ColorFamily::Blue,
        ColorFamily::Indigo,
        ColorFamily::Violet,
        ColorFamily::Purple,
        ColorFamily::Fuchsia,
        ColorFamily::Pink,
        ColorFamily::Rose,
    ];

    /// Lowercase name, as used in utility-class tokens.
    pub const fn name(self) -> &'static str {
        match self {
            ColorFamily::Slate => "slate",
            ColorFamily::Gray => "gray",
            ColorFamily::Zinc => "zinc",
            ColorFamily::Neutral => "neutral",
            ColorFamily::Stone => "stone",
            ColorFamily::Red => "red",
            ColorFamily::Orange => "orange",
            ColorFamily::Amber => "amber",
            ColorFamily::Yellow => "yellow",
            ColorFamily::Lime => "lime",
            ColorFamily::Green => "green",
            ColorFamily::Emerald => "emerald",
            ColorFamily::Teal => "teal",
            ColorFamily::Cyan => "cyan",
            ColorFamily::Sky => "sky",
            ColorFamily::Blue => "blue",
            ColorFamily::Indigo => "indigo",
            ColorFamily::Violet => "violet",
            ColorFamily::Purple => "purple",
            ColorFamily::Fuchsia => "fuchsia",
            ColorFamily::Pink => "pink",
            ColorFamily::Rose => "rose",
        }
    }

    /// Row of this family in the palette table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for ColorFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ColorFamily::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::unknown_color_family(name))
    }
}

impl fmt::Display for ColorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
