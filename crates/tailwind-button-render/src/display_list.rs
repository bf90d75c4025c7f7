//! A [`Renderer`] that records drawing calls.
//!
//! Hosts that batch or replay drawing can paint a button into a
//! [`DisplayList`] and walk its [`RenderCommand`]s afterwards. Tests use it to
//! assert on exactly what a button drew.

use crate::paint::{BoxShadow, Paint, Stroke};
use crate::renderer::Renderer;
use crate::text::Font;
use crate::types::{Color, Rect, RoundedRect};

/// Log target for display list recording.
const TARGET: &str = "tailwind_button_render::display_list";

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Push the render state.
    Save,
    /// Pop the render state.
    Restore,
    /// Translate the current transform.
    Translate { tx: f32, ty: f32 },
    /// Scale the current transform.
    Scale { sx: f32, sy: f32 },
    /// Fill a rounded rectangle.
    FillRoundedRect { rect: RoundedRect, paint: Paint },
    /// Stroke a rounded rectangle outline.
    StrokeRoundedRect { rect: RoundedRect, stroke: Stroke },
    /// Draw a rounded drop shadow.
    BoxShadow { rect: RoundedRect, shadow: BoxShadow },
    /// Draw a line of text clipped to `rect`.
    Text {
        text: String,
        font: Font,
        rect: Rect,
        color: Color,
    },
    /// Draw an icon glyph.
    Icon { name: String, rect: Rect, color: Color },
}

impl RenderCommand {
    /// Check if this command puts pixels on screen, as opposed to changing
    /// state.
    pub fn is_draw(&self) -> bool {
        !matches!(
            self,
            Self::Save | Self::Restore | Self::Translate { .. } | Self::Scale { .. }
        )
    }
}

/// A recording renderer.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<RenderCommand>,
    depth: usize,
}

impl DisplayList {
    /// Create an empty display list.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded commands, in call order.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Iterate over only the commands that draw something.
    pub fn draw_commands(&self) -> impl Iterator<Item = &RenderCommand> {
        self.commands.iter().filter(|c| c.is_draw())
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Current save depth. Zero once every `save` has been restored.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Renderer for DisplayList {
    fn save(&mut self) {
        self.depth += 1;
        self.commands.push(RenderCommand::Save);
    }

    fn restore(&mut self) {
        if self.depth == 0 {
            tracing::warn!(
                target: TARGET,
                "restore without matching save ignored"
            );
            return;
        }
        self.depth -= 1;
        self.commands.push(RenderCommand::Restore);
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.commands.push(RenderCommand::Translate { tx, ty });
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.commands.push(RenderCommand::Scale { sx, sy });
    }

    fn fill_rounded_rect(&mut self, rect: RoundedRect, paint: impl Into<Paint>) {
        self.commands.push(RenderCommand::FillRoundedRect {
            rect,
            paint: paint.into(),
        });
    }

    fn stroke_rounded_rect(&mut self, rect: RoundedRect, stroke: &Stroke) {
        self.commands.push(RenderCommand::StrokeRoundedRect {
            rect,
            stroke: stroke.clone(),
        });
    }

    fn draw_box_shadow_rounded(&mut self, rect: RoundedRect, shadow: &BoxShadow) {
        self.commands.push(RenderCommand::BoxShadow {
            rect,
            shadow: *shadow,
        });
    }

    fn draw_text(&mut self, text: &str, font: &Font, rect: Rect, color: Color) {
        self.commands.push(RenderCommand::Text {
            text: text.to_owned(),
            font: *font,
            rect,
            color,
        });
    }

    fn draw_icon(&mut self, icon: &str, rect: Rect, color: Color) {
        self.commands.push(RenderCommand::Icon {
            name: icon.to_owned(),
            rect,
            color,
        });
    }
}
