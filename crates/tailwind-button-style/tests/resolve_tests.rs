//! Integration tests for button attribute resolution.

use tailwind_button_render::{Color, FontWeight};
use tailwind_button_style::prelude::*;
use tailwind_button_style::palette;

fn tone(family: ColorFamily, shade: Shade) -> Color {
    palette::lookup(family, shade).to_color()
}

fn every_style() -> impl Iterator<Item = ButtonStyle> {
    ButtonSize::ALL.into_iter().flat_map(|size| {
        VisualStyle::ALL.into_iter().flat_map(move |style| {
            ColorFamily::ALL.into_iter().map(move |color| {
                ButtonStyle::new()
                    .with_size(size)
                    .with_style(style)
                    .with_color(color)
            })
        })
    })
}

#[test]
fn large_solid_amber_idle() {
    let style = ButtonStyle::new()
        .with_size(ButtonSize::Large)
        .with_style(VisualStyle::Solid)
        .with_color(ColorFamily::Amber);
    let attrs = resolve(&style, false);

    assert_eq!(attrs.padding_horizontal, 20.0);
    assert_eq!(attrs.padding_vertical, 14.0);
    assert_eq!(attrs.corner_radius, 14.0);
    assert_eq!(attrs.min_width, 120.0);
    assert_eq!(attrs.spacing, 12.0);
    assert_eq!(attrs.icon_size, 18.0);
    assert_eq!(attrs.font.size, 16.0);
    assert_eq!(attrs.font.weight, FontWeight::SEMIBOLD);
    assert_eq!(attrs.foreground, Color::WHITE);
    assert_eq!(
        attrs.background,
        Background::Gradient {
            top: Color::from_rgb8(217, 119, 6),
            bottom: Color::from_rgb8(245, 158, 11),
        }
    );
    assert_eq!(attrs.border, None);
    assert_eq!(attrs.shadow.blur_radius, 3.0);
    assert_eq!(attrs.shadow.offset_y, 2.0);
    assert_eq!(attrs.shadow.offset_x, 0.0);
    assert_eq!(
        attrs.shadow.color,
        Color::from_rgb8(245, 158, 11).with_alpha(0.3)
    );
    assert_eq!(attrs.scale, 1.0);
}

#[test]
fn small_outline_slate_hovered() {
    let style = ButtonStyle::new()
        .with_size(ButtonSize::Small)
        .with_style(VisualStyle::Outline)
        .with_color(ColorFamily::Slate);
    let attrs = resolve(&style, true);

    let border = attrs.border.expect("outline has a border");
    assert_eq!(border.color, Color::from_rgb8(148, 163, 184));
    assert_eq!(border.width, 2.0);
    assert_eq!(attrs.background, Background::Transparent);
    assert_eq!(attrs.foreground, Color::from_rgb8(51, 65, 85));
    assert_eq!(attrs.hover_scale, 1.03);
    assert_eq!(attrs.scale, 1.03);
    assert_eq!(attrs.padding_horizontal, 12.0);
    assert_eq!(attrs.padding_vertical, 8.0);
    assert_eq!(attrs.corner_radius, 10.0);
    assert_eq!(attrs.min_width, 80.0);
}

#[test]
fn hover_changes_only_colors_and_scale() {
    for style in every_style() {
        let idle = resolve(&style, false);
        let mut hovered = resolve(&style, true);

        assert_eq!(hovered.border.is_some(), idle.border.is_some(), "{style:?}");

        hovered.background = idle.background;
        hovered.foreground = idle.foreground;
        hovered.scale = idle.scale;
        if let (Some(h), Some(i)) = (hovered.border.as_mut(), idle.border) {
            h.color = i.color;
        }
        assert_eq!(hovered, idle, "{style:?}");
    }
}

#[test]
fn resolution_is_idempotent() {
    for style in every_style() {
        for hovered in [false, true] {
            assert_eq!(resolve(&style, hovered), resolve(&style, hovered));
        }
    }
}

#[test]
fn idle_scale_is_one_and_hover_scale_is_style_constant() {
    for style in every_style() {
        let idle = resolve(&style, false);
        let hovered = resolve(&style, true);
        assert_eq!(idle.scale, 1.0);
        assert_eq!(hovered.scale, style.style.metrics().hover_scale);
        assert_eq!(idle.hover_scale, hovered.hover_scale);
    }
}

#[test]
fn only_outline_has_a_border() {
    for style in every_style() {
        let attrs = resolve(&style, false);
        assert_eq!(
            attrs.border.is_some(),
            style.style == VisualStyle::Outline,
            "{style:?}"
        );
    }
}

#[test]
fn outline_border_follows_shades() {
    let style = ButtonStyle::new()
        .with_style(VisualStyle::Outline)
        .with_color(ColorFamily::Violet);
    let idle = resolve(&style, false);
    assert_eq!(
        idle.border.map(|b| b.color),
        Some(tone(ColorFamily::Violet, Shade::S300))
    );
    assert_eq!(idle.foreground, tone(ColorFamily::Violet, Shade::S600));
}

#[test]
fn explicit_shade_on_light_keeps_foreground_shades() {
    let style = ButtonStyle::new()
        .with_style(VisualStyle::Light)
        .with_color(ColorFamily::Orange)
        .with_shade(Shade::S200);
    let idle = resolve(&style, false);
    let hovered = resolve(&style, true);
    assert_eq!(idle.background, Background::Flat(tone(ColorFamily::Orange, Shade::S200)));
    assert_eq!(hovered.background, Background::Flat(tone(ColorFamily::Orange, Shade::S300)));
    assert_eq!(idle.foreground, tone(ColorFamily::Orange, Shade::S600));
    assert_eq!(hovered.foreground, tone(ColorFamily::Orange, Shade::S700));
}

#[test]
fn label_never_matches_flat_fill() {
    let shades = std::iter::once(None).chain(Shade::ALL.into_iter().map(Some));
    for shade in shades {
        for base in every_style() {
            let style = base.with_shade(shade);
            for hovered in [false, true] {
                let attrs = resolve(&style, hovered);
                if let Background::Flat(fill) = attrs.background {
                    assert_ne!(
                        attrs.foreground, fill,
                        "label invisible for {style:?}, hovered {hovered}"
                    );
                }
            }
        }
    }
}
