//! The view tree a button renders to.
//!
//! A [`ButtonView`] is a capsule container holding an optional icon followed
//! by a single-line label, laid out in a horizontal row. Text measurement
//! belongs to the host, so sizing and layout take the label's measured size
//! as input.

use tailwind_button_render::{Color, Font, Point, Rect, Renderer, RoundedRect, Size, Stroke};
use tailwind_button_style::ResolvedAttributes;

/// The icon slot.
#[derive(Debug, Clone, PartialEq)]
pub struct IconNode {
    /// Host icon id, e.g. `"crown.fill"`.
    pub name: String,
    /// Edge length of the square icon.
    pub size: f32,
    pub color: Color,
}

/// The label slot.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelNode {
    pub text: String,
    pub font: Font,
    pub color: Color,
    /// Labels never wrap; the host truncates to the label rect.
    pub single_line: bool,
}

/// Rects produced by [`ButtonView::layout`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonLayout {
    /// The capsule, before scaling.
    pub frame: Rect,
    pub icon: Option<Rect>,
    pub label: Rect,
}

/// One frame of a button: attributes plus content.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonView {
    pub attributes: ResolvedAttributes,
    pub icon: Option<IconNode>,
    pub label: LabelNode,
}

impl ButtonView {
    /// Build the view for `text` and an optional icon id.
    pub fn new(text: &str, icon: Option<&str>, attributes: ResolvedAttributes) -> Self {
        Self {
            icon: icon.map(|name| IconNode {
                name: name.to_owned(),
                size: attributes.icon_size,
                color: attributes.foreground,
            }),
            label: LabelNode {
                text: text.to_owned(),
                font: attributes.font,
                color: attributes.foreground,
                single_line: true,
            },
            attributes,
        }
    }

    /// Width taken by the icon and the gap after it.
    fn icon_advance(&self) -> f32 {
        match &self.icon {
            Some(icon) => icon.size + self.attributes.spacing,
            None => 0.0,
        }
    }

    /// Natural size for a label measuring `label_size`.
    ///
    /// Width never drops below the resolved minimum width.
    pub fn preferred_size(&self, label_size: Size) -> Size {
        let a = &self.attributes;
        let icon_height = self.icon.as_ref().map_or(0.0, |icon| icon.size);
        let content_width = self.icon_advance() + label_size.width;

        Size::new(
            (a.padding_horizontal * 2.0 + content_width).max(a.min_width),
            a.padding_vertical * 2.0 + icon_height.max(label_size.height),
        )
    }

    /// Place the icon and label inside `bounds`.
    ///
    /// The content row is centered within the padded frame. If it does not
    /// fit, the label rect is narrowed.
    pub fn layout(&self, bounds: Rect, label_size: Size) -> ButtonLayout {
        let a = &self.attributes;
        let inner = bounds.inset(a.padding_horizontal, a.padding_vertical);
        let center_y = inner.center().y;

        let advance = self.icon_advance();
        let row_width = (advance + label_size.width).min(inner.width());
        let left = inner.left() + (inner.width() - row_width) / 2.0;

        let icon = self.icon.as_ref().map(|icon| {
            Rect::new(left, center_y - icon.size / 2.0, icon.size, icon.size)
        });
        let label = Rect::new(
            left + advance,
            center_y - label_size.height / 2.0,
            (row_width - advance).max(0.0),
            label_size.height,
        );

        ButtonLayout {
            frame: bounds,
            icon,
            label,
        }
    }

    /// Area this view may touch when painted into `bounds`, covering the
    /// hover scale and the shadow.
    pub fn visual_bounds(&self, bounds: Rect) -> Rect {
        let scaled = bounds.scale_about_center(self.attributes.scale);
        if self.attributes.shadow.is_visible() {
            scaled.union(&self.attributes.shadow.expanded_bounds(scaled))
        } else {
            scaled
        }
    }

    /// Paint into `bounds`.
    ///
    /// Order: shadow, background, border, icon, label, all scaled about the
    /// center of `bounds`. The shadow is cast only by a filled or bordered
    /// capsule.
    pub fn paint<R: Renderer>(&self, renderer: &mut R, bounds: Rect, label_size: Size) {
        let a = &self.attributes;
        let capsule = RoundedRect::new(bounds, a.corner_radius);
        let fill = a.background.to_paint(bounds);

        renderer.save();

        if a.scale != 1.0 {
            let Point { x, y } = bounds.center();
            renderer.translate(x, y);
            renderer.scale(a.scale, a.scale);
            renderer.translate(-x, -y);
        }

        if a.shadow.is_visible() && (fill.is_some() || a.border.is_some()) {
            renderer.draw_box_shadow_rounded(capsule, &a.shadow);
        }

        if let Some(paint) = fill {
            renderer.fill_rounded_rect(capsule, paint);
        }

        if let Some(border) = a.border {
            let stroke = Stroke::new(border.color, border.width);
            renderer.stroke_rounded_rect(capsule.deflate(border.width / 2.0), &stroke);
        }

        let layout = self.layout(bounds, label_size);
        if let (Some(icon), Some(rect)) = (&self.icon, layout.icon) {
            renderer.draw_icon(&icon.name, rect, icon.color);
        }
        if !self.label.text.is_empty() {
            renderer.draw_text(
                &self.label.text,
                &self.label.font,
                layout.label,
                self.label.color,
            );
        }

        renderer.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tailwind_button_render::{DisplayList, RenderCommand};
    use tailwind_button_style::{ButtonSize, ButtonStyle, VisualStyle, resolve};

    fn view(style: ButtonStyle, icon: Option<&str>, hovered: bool) -> ButtonView {
        ButtonView::new("Continue", icon, resolve(&style, hovered))
    }

    #[test]
    fn test_nodes_carry_resolved_values() {
        let style = ButtonStyle::new().with_style(VisualStyle::Light);
        let v = view(style, Some("arrow.right"), false);
        let icon = v.icon.as_ref().unwrap();
        assert_eq!(icon.size, 16.0);
        assert_eq!(icon.color, v.attributes.foreground);
        assert_eq!(v.label.color, v.attributes.foreground);
        assert_eq!(v.label.font, v.attributes.font);
        assert!(v.label.single_line);
    }

    #[test]
    fn test_preferred_size_respects_min_width() {
        let v = view(ButtonStyle::new(), None, false);
        assert_eq!(v.preferred_size(Size::new(20.0, 17.0)), Size::new(100.0, 37.0));
    }

    #[test]
    fn test_preferred_size_with_icon() {
        let style = ButtonStyle::new().with_size(ButtonSize::Large);
        let v = view(style, Some("crown.fill"), false);
        // 20 * 2 + 18 + 12 + 90 = 160; 14 * 2 + max(18, 19) = 47
        assert_eq!(v.preferred_size(Size::new(90.0, 19.0)), Size::new(160.0, 47.0));
    }

    #[test]
    fn test_layout_centers_row() {
        let v = view(ButtonStyle::new(), Some("star"), false);
        let layout = v.layout(Rect::new(0.0, 0.0, 200.0, 40.0), Size::new(60.0, 16.0));

        // row = 16 + 8 + 60 = 84 wide, inside 168 of padded width
        let icon = layout.icon.unwrap();
        assert_eq!(icon, Rect::new(58.0, 12.0, 16.0, 16.0));
        assert_eq!(layout.label, Rect::new(82.0, 12.0, 60.0, 16.0));
        assert_eq!(layout.frame, Rect::new(0.0, 0.0, 200.0, 40.0));
    }

    #[test]
    fn test_layout_narrows_overflowing_label() {
        let v = view(ButtonStyle::new(), None, false);
        let layout = v.layout(Rect::new(0.0, 0.0, 100.0, 40.0), Size::new(300.0, 16.0));
        assert_eq!(layout.label.left(), 16.0);
        assert_eq!(layout.label.width(), 68.0);
    }

    #[test]
    fn test_overflowing_label_paints_into_narrowed_rect() {
        let mut list = DisplayList::new();
        view(ButtonStyle::new(), None, false).paint(
            &mut list,
            Rect::new(0.0, 0.0, 100.0, 40.0),
            Size::new(300.0, 16.0),
        );

        let text_rect = list.draw_commands().find_map(|command| match command {
            RenderCommand::Text { rect, .. } => Some(*rect),
            _ => None,
        });
        assert_eq!(text_rect, Some(Rect::new(16.0, 12.0, 68.0, 16.0)));
    }

    #[test]
    fn test_subtle_idle_paints_no_capsule() {
        let style = ButtonStyle::new().with_style(VisualStyle::Subtle);
        let mut list = DisplayList::new();
        view(style, None, false).paint(
            &mut list,
            Rect::new(0.0, 0.0, 100.0, 36.0),
            Size::new(50.0, 16.0),
        );

        let draws: Vec<_> = list.draw_commands().collect();
        assert_eq!(draws.len(), 1);
        assert!(matches!(draws[0], RenderCommand::Text { .. }));
    }

    #[test]
    fn test_visual_bounds_cover_scale_and_shadow() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 40.0);
        let v = view(ButtonStyle::new(), None, true);
        let visual = v.visual_bounds(bounds);
        assert!(visual.left() < bounds.left());
        assert!(visual.bottom() > bounds.bottom() + 2.0);
    }
}
