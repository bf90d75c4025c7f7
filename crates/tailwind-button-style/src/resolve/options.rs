//! The enumerated options a button is styled with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::palette::{ColorFamily, Shade};

/// Button size preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large];

    pub const fn name(self) -> &'static str {
        match self {
            ButtonSize::Small => "small",
            ButtonSize::Medium => "medium",
            ButtonSize::Large => "large",
        }
    }
}

impl FromStr for ButtonSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ButtonSize::ALL
            .into_iter()
            .find(|size| size.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::unknown_size(name))
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Visual treatment of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualStyle {
    /// Filled with a vertical gradient and white text.
    #[default]
    Solid,
    /// Transparent with a colored border.
    Outline,
    /// Pale tinted fill.
    Light,
    /// No fill until hovered.
    Subtle,
}

impl VisualStyle {
    pub const ALL: [VisualStyle; 4] = [
        VisualStyle::Solid,
        VisualStyle::Outline,
        VisualStyle::Light,
        VisualStyle::Subtle,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            VisualStyle::Solid => "solid",
            VisualStyle::Outline => "outline",
            VisualStyle::Light => "light",
            VisualStyle::Subtle => "subtle",
        }
    }
}

impl FromStr for VisualStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        VisualStyle::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::unknown_style(name))
    }
}

impl fmt::Display for VisualStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The visual part of a button's configuration.
///
/// Every field has a default, so a partial TOML table deserializes:
///
/// ```
/// use tailwind_button_style::{ButtonSize, ButtonStyle, ColorFamily, VisualStyle};
///
/// let style: ButtonStyle = toml::from_str(r#"color = "amber""#).unwrap();
/// assert_eq!(style.size, ButtonSize::Medium);
/// assert_eq!(style.style, VisualStyle::Solid);
/// assert_eq!(style.color, ColorFamily::Amber);
/// assert_eq!(style.shade, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonStyle {
    pub size: ButtonSize,
    pub style: VisualStyle,
    pub color: ColorFamily,
    /// Explicit accent shade, replacing the style's own choice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shade: Option<Shade>,
}

impl ButtonStyle {
    /// Create a style with every option at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size.
    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set the visual style.
    pub fn with_style(mut self, style: VisualStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the color family.
    pub fn with_color(mut self, color: ColorFamily) -> Self {
        self.color = color;
        self
    }

    /// Set an explicit accent shade.
    pub fn with_shade(mut self, shade: impl Into<Option<Shade>>) -> Self {
        self.shade = shade.into();
        self
    }
}
