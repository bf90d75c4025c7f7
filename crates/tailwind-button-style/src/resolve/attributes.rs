//! Resolved visual attributes.

use tailwind_button_render::{BoxShadow, Color, Font, Paint, Rect};

/// How the button capsule is filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Background {
    /// Nothing is drawn.
    Transparent,
    /// A single color.
    Flat(Color),
    /// A top-to-bottom gradient.
    Gradient { top: Color, bottom: Color },
}

impl Background {
    /// Check if painting this background draws nothing.
    pub fn is_transparent(&self) -> bool {
        match self {
            Background::Transparent => true,
            Background::Flat(color) => color.is_transparent(),
            Background::Gradient { top, bottom } => {
                top.is_transparent() && bottom.is_transparent()
            }
        }
    }

    /// The paint that fills `rect` with this background, if anything is drawn.
    pub fn to_paint(&self, rect: Rect) -> Option<Paint> {
        match *self {
            _ if self.is_transparent() => None,
            Background::Transparent => None,
            Background::Flat(color) => Some(Paint::solid(color)),
            Background::Gradient { top, bottom } => {
                Some(Paint::vertical_gradient(rect, top, bottom))
            }
        }
    }

    fn endpoints(&self) -> (Color, Color) {
        match *self {
            Background::Transparent => (Color::TRANSPARENT, Color::TRANSPARENT),
            Background::Flat(color) => (color, color),
            Background::Gradient { top, bottom } => (top, bottom),
        }
    }

    /// Blend toward another background.
    ///
    /// Flat and transparent backgrounds blend to a flat color; if either side
    /// is a gradient the result is a gradient.
    pub fn lerp(self, other: Background, t: f32) -> Background {
        if t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return other;
        }

        let (a_top, a_bottom) = self.endpoints();
        let (b_top, b_bottom) = other.endpoints();
        match (self, other) {
            (Background::Transparent, Background::Transparent) => Background::Transparent,
            (Background::Gradient { .. }, _) | (_, Background::Gradient { .. }) => {
                Background::Gradient {
                    top: a_top.lerp(b_top, t),
                    bottom: a_bottom.lerp(b_bottom, t),
                }
            }
            _ => Background::Flat(a_top.lerp(b_top, t)),
        }
    }
}

/// An outline stroke following the capsule's corner radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub color: Color,
    pub width: f32,
}

impl Border {
    #[inline]
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// Everything needed to lay out and paint one button in one hover state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedAttributes {
    /// Gap between icon and label.
    pub spacing: f32,
    pub icon_size: f32,
    pub font: Font,
    pub padding_horizontal: f32,
    pub padding_vertical: f32,
    pub min_width: f32,
    pub corner_radius: f32,
    /// Scale the style applies while hovered.
    pub hover_scale: f32,
    /// Scale to draw at: 1.0 when idle, `hover_scale` when hovered.
    pub scale: f32,
    pub shadow: BoxShadow,
    /// Label and icon color.
    pub foreground: Color,
    pub background: Background,
    pub border: Option<Border>,
}

impl ResolvedAttributes {
    /// Attributes part-way through a hover transition.
    ///
    /// Only the hover-dependent fields (scale, background, foreground and
    /// border) are blended; everything else is taken from `idle`. `t` is
    /// clamped to 0.0..=1.0, and the endpoints return the inputs unchanged.
    pub fn interpolate(idle: &Self, hovered: &Self, t: f32) -> Self {
        if t <= 0.0 {
            return *idle;
        }
        if t >= 1.0 {
            return *hovered;
        }

        let border = match (idle.border, hovered.border) {
            (Some(a), Some(b)) => Some(Border::new(
                a.color.lerp(b.color, t),
                a.width + (b.width - a.width) * t,
            )),
            (Some(a), None) => Some(Border::new(a.color.lerp(Color::TRANSPARENT, t), a.width)),
            (None, Some(b)) => Some(Border::new(Color::TRANSPARENT.lerp(b.color, t), b.width)),
            (None, None) => None,
        };

        Self {
            scale: idle.scale + (hovered.scale - idle.scale) * t,
            background: idle.background.lerp(hovered.background, t),
            foreground: idle.foreground.lerp(hovered.foreground, t),
            border,
            ..*idle
        }
    }
}
