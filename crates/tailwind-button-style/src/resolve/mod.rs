//! Button attribute resolution.
//!
//! [`resolve`] maps a [`ButtonStyle`] and a hover flag to the concrete
//! [`ResolvedAttributes`] a button is laid out and painted with. It is pure
//! and cheap enough to call every frame.
//!
//! # Colors
//!
//! Without an explicit shade each style picks its own shades from the
//! family, idle / hovered:
//!
//! | Style | Background | Foreground | Border |
//! |---|---|---|---|
//! | solid | gradient 600→500 / 700→600 | white | none |
//! | outline | transparent | 600 / 700 | 300 / 400, 2px |
//! | light | 50 / 100 | 600 / 700 | none |
//! | subtle | transparent / 50 | 500 / 600 | none |
//!
//! An explicit shade `S` replaces the accent of the style and hovering uses
//! the next darker shade:
//!
//! | Style | Accent |
//! |---|---|
//! | solid | flat background `S` / `S+1` |
//! | outline | border and foreground `S` / `S+1` |
//! | light | background `S` / `S+1` |
//! | subtle | hovered background `S` |
//!
//! A label drawn on an explicit fill is white when `S` is 400 or darker and
//! keeps the style's tinted foreground otherwise.
//!
//! The shadow is always the family's 500 shade.

mod attributes;
mod metrics;
mod options;

use tailwind_button_core::logging::targets;
use tailwind_button_render::{BoxShadow, Color};

use crate::palette::{self, PaletteColor, Shade};

pub use attributes::{Background, Border, ResolvedAttributes};
pub use metrics::{SizeMetrics, StyleMetrics};
pub use options::{ButtonSize, ButtonStyle, VisualStyle};

/// Stroke width of the outline style's border.
pub const OUTLINE_BORDER_WIDTH: f32 = 2.0;

/// Lightest explicit fill shade that takes a white label.
pub const WHITE_LABEL_MIN_SHADE: Shade = Shade::S400;

/// Compute the visual attributes of a button.
///
/// # Example
///
/// ```
/// use tailwind_button_style::{resolve, Background, ButtonSize, ButtonStyle, ColorFamily};
///
/// let style = ButtonStyle::new()
///     .with_size(ButtonSize::Large)
///     .with_color(ColorFamily::Amber);
/// let idle = resolve(&style, false);
///
/// assert_eq!(idle.padding_horizontal, 20.0);
/// assert_eq!(idle.scale, 1.0);
/// assert!(matches!(idle.background, Background::Gradient { .. }));
/// ```
pub fn resolve(style: &ButtonStyle, hovered: bool) -> ResolvedAttributes {
    let size = style.size.metrics();
    let look = style.style.metrics();
    let family = style.color;
    let tone = |shade: Shade| palette::lookup(family, shade).to_color();
    let accent = |shade: Shade| if hovered { shade.darker() } else { shade };
    let pick = |idle: Shade, hover: Shade| if hovered { hover } else { idle };

    let shadow = BoxShadow::new(tone(Shade::S500).with_alpha(look.shadow_opacity))
        .with_offset(0.0, look.shadow_y_offset)
        .with_blur(look.shadow_radius);

    let label_on = |fill: Shade, tinted: Color| {
        if fill >= WHITE_LABEL_MIN_SHADE {
            Color::WHITE
        } else {
            tinted
        }
    };

    let (background, foreground, border) = match style.style {
        VisualStyle::Solid => match style.shade {
            Some(shade) => (
                Background::Flat(tone(accent(shade))),
                label_on(shade, tone(pick(Shade::S600, Shade::S700))),
                None,
            ),
            None => (
                Background::Gradient {
                    top: tone(pick(Shade::S600, Shade::S700)),
                    bottom: tone(pick(Shade::S500, Shade::S600)),
                },
                Color::WHITE,
                None,
            ),
        },
        VisualStyle::Outline => {
            let (edge, text) = match style.shade {
                Some(shade) => (accent(shade), accent(shade)),
                None => (pick(Shade::S300, Shade::S400), pick(Shade::S600, Shade::S700)),
            };
            let border = Border::new(tone(edge), OUTLINE_BORDER_WIDTH);
            (Background::Transparent, tone(text), Some(border))
        }
        VisualStyle::Light => {
            let tinted = tone(pick(Shade::S600, Shade::S700));
            match style.shade {
                Some(shade) => (
                    Background::Flat(tone(accent(shade))),
                    label_on(shade, tinted),
                    None,
                ),
                None => (
                    Background::Flat(tone(pick(Shade::S50, Shade::S100))),
                    tinted,
                    None,
                ),
            }
        }
        VisualStyle::Subtle => {
            let tinted = tone(pick(Shade::S500, Shade::S600));
            match (hovered, style.shade) {
                (false, _) => (Background::Transparent, tinted, None),
                (true, Some(shade)) => (Background::Flat(tone(shade)), label_on(shade, tinted), None),
                (true, None) => (Background::Flat(tone(Shade::S50)), tinted, None),
            }
        }
    };

    tracing::trace!(
        target: targets::RESOLVE,
        size = %style.size,
        style = %style.style,
        accent = %PaletteColor::new(family, style.shade.unwrap_or(Shade::S500)),
        hovered,
        "resolved button attributes"
    );

    ResolvedAttributes {
        spacing: size.spacing,
        icon_size: size.icon_size,
        font: size.font,
        padding_horizontal: size.padding_horizontal,
        padding_vertical: size.padding_vertical,
        min_width: size.min_width,
        corner_radius: size.corner_radius,
        hover_scale: look.hover_scale,
        scale: if hovered { look.hover_scale } else { 1.0 },
        shadow,
        foreground,
        background,
        border,
    }
}
