//! Shade levels within a color family.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A lightness level within a color family. Higher numbers are darker.
///
/// Serializes as the bare number (`500`), and only the ten canonical values
/// deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
}

impl Shade {
    /// Every shade, lightest first.
    pub const ALL: [Shade; 10] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
    ];

    /// The shade used when a requested level does not exist.
    pub const FALLBACK: Shade = Shade::S500;

    /// Look up a shade by its numeric level.
    pub const fn from_value(value: u16) -> Option<Shade> {
        match value {
            50 => Some(Shade::S50),
            100 => Some(Shade::S100),
            200 => Some(Shade::S200),
            300 => Some(Shade::S300),
            400 => Some(Shade::S400),
            500 => Some(Shade::S500),
            600 => Some(Shade::S600),
            700 => Some(Shade::S700),
            800 => Some(Shade::S800),
            900 => Some(Shade::S900),
            _ => None,
        }
    }

    /// The numeric level, e.g. `500`.
    pub const fn value(self) -> u16 {
        match self {
            Shade::S50 => 50,
            Shade::S100 => 100,
            Shade::S200 => 200,
            Shade::S300 => 300,
            Shade::S400 => 400,
            Shade::S500 => 500,
            Shade::S600 => 600,
            Shade::S700 => 700,
            Shade::S800 => 800,
            Shade::S900 => 900,
        }
    }

    /// Position in [`Shade::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The next lighter shade, or `S50` itself.
    pub const fn lighter(self) -> Shade {
        match self.index() {
            0 => Shade::S50,
            i => Self::ALL[i - 1],
        }
    }

    /// The next darker shade, or `S900` itself.
    pub const fn darker(self) -> Shade {
        match self.index() {
            9 => Shade::S900,
            i => Self::ALL[i + 1],
        }
    }
}

impl Default for Shade {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl TryFrom<u16> for Shade {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Shade::from_value(value).ok_or_else(|| Error::invalid_shade(value))
    }
}

impl From<Shade> for u16 {
    fn from(shade: Shade) -> Self {
        shade.value()
    }
}

impl FromStr for Shade {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u16 = s.trim().parse().map_err(|_| Error::invalid_shade(s))?;
        Shade::try_from(value).map_err(|_| Error::invalid_shade(s))
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
