//! Scalar tables keyed by size and by visual style.

use tailwind_button_render::{Font, FontWeight};

use super::options::{ButtonSize, VisualStyle};

/// Dimensions that depend only on [`ButtonSize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeMetrics {
    /// Gap between icon and label.
    pub spacing: f32,
    /// Edge length of the square icon.
    pub icon_size: f32,
    pub font: Font,
    pub padding_horizontal: f32,
    pub padding_vertical: f32,
    pub min_width: f32,
    pub corner_radius: f32,
}

impl ButtonSize {
    /// The dimension table row for this size.
    pub const fn metrics(self) -> SizeMetrics {
        match self {
            ButtonSize::Large => SizeMetrics {
                spacing: 12.0,
                icon_size: 18.0,
                font: Font::new(16.0, FontWeight::SEMIBOLD),
                padding_horizontal: 20.0,
                padding_vertical: 14.0,
                min_width: 120.0,
                corner_radius: 14.0,
            },
            ButtonSize::Medium => SizeMetrics {
                spacing: 8.0,
                icon_size: 16.0,
                font: Font::new(14.0, FontWeight::MEDIUM),
                padding_horizontal: 16.0,
                padding_vertical: 10.0,
                min_width: 100.0,
                corner_radius: 12.0,
            },
            ButtonSize::Small => SizeMetrics {
                spacing: 6.0,
                icon_size: 14.0,
                font: Font::new(12.0, FontWeight::MEDIUM),
                padding_horizontal: 12.0,
                padding_vertical: 8.0,
                min_width: 80.0,
                corner_radius: 10.0,
            },
        }
    }
}

/// Shadow and hover constants that depend only on [`VisualStyle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleMetrics {
    /// Scale applied while hovered.
    pub hover_scale: f32,
    pub shadow_radius: f32,
    pub shadow_y_offset: f32,
    /// Alpha applied to the family's 500 shade for the shadow.
    pub shadow_opacity: f32,
}

impl VisualStyle {
    /// The shadow table row for this style.
    pub const fn metrics(self) -> StyleMetrics {
        match self {
            VisualStyle::Solid => StyleMetrics {
                hover_scale: 1.03,
                shadow_radius: 3.0,
                shadow_y_offset: 2.0,
                shadow_opacity: 0.3,
            },
            VisualStyle::Outline => StyleMetrics {
                hover_scale: 1.03,
                shadow_radius: 0.0,
                shadow_y_offset: 1.0,
                shadow_opacity: 0.1,
            },
            VisualStyle::Light => StyleMetrics {
                hover_scale: 1.03,
                shadow_radius: 1.0,
                shadow_y_offset: 1.0,
                shadow_opacity: 0.1,
            },
            VisualStyle::Subtle => StyleMetrics {
                hover_scale: 1.0,
                shadow_radius: 0.0,
                shadow_y_offset: 1.0,
                shadow_opacity: 0.1,
            },
        }
    }
}
