//! Paint styles for filling and stroking button shapes.
//!
//! Buttons need three kinds of ink: a flat or vertically graded fill for the
//! capsule, a stroke for the outline style, and a soft drop shadow.

use crate::types::{Color, Point, Rect};

/// A paint style for filling shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// Solid color fill.
    Solid(Color),
    /// Linear gradient fill.
    LinearGradient(LinearGradient),
}

impl Paint {
    /// Create a solid color paint.
    #[inline]
    pub const fn solid(color: Color) -> Self {
        Self::Solid(color)
    }

    /// Create a linear gradient paint.
    #[inline]
    pub fn linear_gradient(start: Point, end: Point, stops: Vec<GradientStop>) -> Self {
        Self::LinearGradient(LinearGradient { start, end, stops })
    }

    /// Create a two-stop gradient running from the top edge of `rect` to its
    /// bottom edge.
    pub fn vertical_gradient(rect: Rect, top: Color, bottom: Color) -> Self {
        let x = rect.center().x;
        Self::linear_gradient(
            Point::new(x, rect.top()),
            Point::new(x, rect.bottom()),
            vec![GradientStop::new(0.0, top), GradientStop::new(1.0, bottom)],
        )
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

/// A linear gradient definition.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    /// Start point of the gradient line.
    pub start: Point,
    /// End point of the gradient line.
    pub end: Point,
    /// Color stops, ordered by offset.
    pub stops: Vec<GradientStop>,
}

/// A color stop in a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient line (0.0 to 1.0).
    pub offset: f32,
    /// Color at this position.
    pub color: Color,
}

impl GradientStop {
    /// Create a new gradient stop.
    #[inline]
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Stroke style for outlining shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// The paint used for the stroke.
    pub paint: Paint,
    /// Stroke width in pixels, centered on the path.
    pub width: f32,
}

impl Stroke {
    /// Create a new stroke with the given paint and width.
    #[inline]
    pub fn new(paint: impl Into<Paint>, width: f32) -> Self {
        Self {
            paint: paint.into(),
            width,
        }
    }
}

/// A drop shadow cast by a shape.
///
/// # Example
///
/// ```
/// use tailwind_button_render::{BoxShadow, Color};
///
/// let shadow = BoxShadow::new(Color::BLACK.with_alpha(0.3))
///     .with_offset(0.0, 2.0)
///     .with_blur(3.0);
/// assert_eq!(shadow.offset_y, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShadow {
    /// Shadow color, alpha included.
    pub color: Color,
    /// Horizontal offset (positive = right).
    pub offset_x: f32,
    /// Vertical offset (positive = down).
    pub offset_y: f32,
    /// Blur radius. Zero gives a hard edge.
    pub blur_radius: f32,
}

impl BoxShadow {
    /// Create a new shadow with the given color, no offset and no blur.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            offset_x: 0.0,
            offset_y: 0.0,
            blur_radius: 0.0,
        }
    }

    /// Set the offset.
    #[inline]
    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    /// Set the blur radius. Negative values are clamped to zero.
    #[inline]
    pub fn with_blur(mut self, radius: f32) -> Self {
        self.blur_radius = radius.max(0.0);
        self
    }

    /// Check whether drawing this shadow would produce any visible pixels.
    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.color.is_transparent()
    }

    /// Bounds covered by the shadow of a shape occupying `rect`.
    pub fn expanded_bounds(&self, rect: Rect) -> Rect {
        let expand = self.blur_radius;
        Rect::new(
            rect.left() + self.offset_x - expand,
            rect.top() + self.offset_y - expand,
            rect.width() + expand * 2.0,
            rect.height() + expand * 2.0,
        )
    }
}

impl Default for BoxShadow {
    fn default() -> Self {
        Self::new(Color::TRANSPARENT)
    }
}
