//! Core renderer trait defining the drawing interface buttons paint through.
//!
//! A host toolkit implements [`Renderer`] on top of whatever backend it owns.
//! [`DisplayList`](crate::DisplayList) is the in-crate implementation that
//! records calls instead of rasterizing them.

use crate::paint::{BoxShadow, Paint, Stroke};
use crate::text::Font;
use crate::types::{Color, Rect, RoundedRect};

/// The 2D drawing interface.
///
/// # State Stack
///
/// The renderer maintains a stack of transforms. `save` pushes the current
/// transform and `restore` pops it. Calls must be balanced.
///
/// ```ignore
/// renderer.save();
/// renderer.translate(cx, cy);
/// renderer.scale(1.03, 1.03);
/// renderer.translate(-cx, -cy);
/// renderer.fill_rounded_rect(rect, Color::WHITE);
/// renderer.restore();
/// ```
pub trait Renderer {
    // =========================================================================
    // State Management
    // =========================================================================

    /// Save the current render state.
    fn save(&mut self);

    /// Restore the previously saved render state.
    fn restore(&mut self);

    // =========================================================================
    // Transforms
    // =========================================================================

    /// Apply a translation to the current transform.
    fn translate(&mut self, tx: f32, ty: f32);

    /// Apply a scale to the current transform.
    fn scale(&mut self, sx: f32, sy: f32);

    // =========================================================================
    // Shapes
    // =========================================================================

    /// Fill a rounded rectangle.
    fn fill_rounded_rect(&mut self, rect: RoundedRect, paint: impl Into<Paint>);

    /// Stroke a rounded rectangle outline. The stroke is centered on the edge.
    fn stroke_rounded_rect(&mut self, rect: RoundedRect, stroke: &Stroke);

    /// Draw a drop shadow for a rounded rectangle.
    fn draw_box_shadow_rounded(&mut self, rect: RoundedRect, shadow: &BoxShadow);

    // =========================================================================
    // Content
    // =========================================================================

    /// Draw a single line of text starting at the top-left corner of `rect`.
    ///
    /// Text wider than `rect` is truncated to it; it never wraps.
    fn draw_text(&mut self, text: &str, font: &Font, rect: Rect, color: Color);

    /// Draw the host icon glyph named `icon` fitted into `rect`.
    fn draw_icon(&mut self, icon: &str, rect: Rect, color: Color);
}
