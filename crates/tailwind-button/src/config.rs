//! Button configuration and TOML button sheets.
//!
//! A [`ButtonConfig`] is everything a [`Button`](crate::Button) is built from.
//! A [`ButtonSheet`] describes many buttons in TOML; the host supplies the
//! actions when turning it into buttons.
//!
//! # Sheet format
//!
//! ```toml
//! [[button]]
//! text = "Premium"
//! icon = "crown.fill"
//! size = "large"
//! style = "solid"
//! color = "amber"
//! shade = 600
//!
//! [[button]]
//! text = "Cancel"
//! style = "outline"
//! accent = "slate-500"   # sets color and shade together
//! ```

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tailwind_button_core::logging::targets;
use tailwind_button_style::{
    ButtonSize, ButtonStyle, ColorFamily, PaletteColor, Shade, VisualStyle,
};

use crate::button::Button;
use crate::error::{Error, Result};

/// The callback a button runs when activated.
pub type Action = Arc<dyn Fn() + Send + Sync>;

/// Immutable construction parameters for one button.
#[derive(Clone)]
pub struct ButtonConfig {
    text: String,
    icon: Option<String>,
    style: ButtonStyle,
    action: Action,
}

impl ButtonConfig {
    /// Create a configuration with the default style (medium, solid, blue).
    pub fn new<F>(text: impl Into<String>, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::with_action(text, Arc::new(action))
    }

    /// Create a configuration around an already shared action.
    pub fn with_action(text: impl Into<String>, action: Action) -> Self {
        Self {
            text: text.into(),
            icon: None,
            style: ButtonStyle::default(),
            action,
        }
    }

    /// Set the icon id. The host resolves it to a glyph.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.style.size = size;
        self
    }

    pub fn with_style(mut self, style: VisualStyle) -> Self {
        self.style.style = style;
        self
    }

    pub fn with_color(mut self, color: ColorFamily) -> Self {
        self.style.color = color;
        self
    }

    /// Set an explicit accent shade.
    pub fn with_shade(mut self, shade: impl Into<Option<Shade>>) -> Self {
        self.style.shade = shade.into();
        self
    }

    /// Replace every visual option at once.
    pub fn with_button_style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// The label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The icon id, if any.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// The visual options.
    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    /// The activation callback.
    pub fn action(&self) -> &Action {
        &self.action
    }
}

impl fmt::Debug for ButtonConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonConfig")
            .field("text", &self.text)
            .field("icon", &self.icon)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

/// One `[[button]]` entry of a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonSpec {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub size: ButtonSize,
    pub style: VisualStyle,
    pub color: ColorFamily,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shade: Option<Shade>,
    /// A `"<family>-<shade>"` token. Overrides `color` and `shade` when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

impl ButtonSpec {
    /// The visual options this entry describes.
    pub fn button_style(&self) -> tailwind_button_style::Result<ButtonStyle> {
        let style = ButtonStyle::new()
            .with_size(self.size)
            .with_style(self.style)
            .with_color(self.color)
            .with_shade(self.shade);

        match &self.accent {
            Some(token) => {
                let accent: PaletteColor = token.parse()?;
                Ok(style.with_color(accent.family).with_shade(accent.shade))
            }
            None => Ok(style),
        }
    }

    /// Build a configuration, attaching `action`.
    pub fn into_config<F>(self, action: F) -> tailwind_button_style::Result<ButtonConfig>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let style = self.button_style()?;
        let mut config = ButtonConfig::new(self.text, action).with_button_style(style);
        config.icon = self.icon;
        Ok(config)
    }

    fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.icon.as_deref().is_none_or(|i| i.trim().is_empty())
    }
}

/// A list of button descriptions loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ButtonSheet {
    #[serde(rename = "button", default)]
    buttons: Vec<ButtonSpec>,
}

impl ButtonSheet {
    /// Create a sheet from already built entries.
    pub fn new(buttons: Vec<ButtonSpec>) -> Self {
        Self { buttons }
    }

    /// Parse and validate a sheet from TOML text.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let sheet: Self = toml::from_str(source)?;
        sheet.validate()?;
        tracing::debug!(
            target: targets::CONFIG,
            buttons = sheet.buttons.len(),
            "loaded button sheet"
        );
        Ok(sheet)
    }

    /// Read, parse and validate a sheet file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "reading button sheet");
        Self::from_toml_str(&source)
    }

    /// Check every entry: each needs text or an icon, and accent tokens must
    /// parse.
    pub fn validate(&self) -> Result<()> {
        for (index, spec) in self.buttons.iter().enumerate() {
            if spec.is_empty() {
                return Err(Error::EmptyButton { index });
            }
            spec.button_style().map_err(|e| Error::style(index, e))?;
        }
        Ok(())
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    pub fn buttons(&self) -> &[ButtonSpec] {
        &self.buttons
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Build every button, asking `action_for` for each entry's action.
    pub fn into_buttons<F, A>(self, mut action_for: F) -> Result<Vec<Button>>
    where
        F: FnMut(&ButtonSpec) -> A,
        A: Fn() + Send + Sync + 'static,
    {
        self.buttons
            .into_iter()
            .enumerate()
            .map(|(index, spec)| {
                let action = action_for(&spec);
                spec.into_config(action)
                    .map(Button::new)
                    .map_err(|e| Error::style(index, e))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_config_builder() {
        let config = ButtonConfig::new("Premium", || {})
            .with_icon("crown.fill")
            .with_size(ButtonSize::Large)
            .with_color(ColorFamily::Amber)
            .with_shade(Shade::S600);
        assert_eq!(config.text(), "Premium");
        assert_eq!(config.icon(), Some("crown.fill"));
        assert_eq!(config.style().size, ButtonSize::Large);
        assert_eq!(config.style().style, VisualStyle::Solid);
        assert_eq!(config.style().color, ColorFamily::Amber);
        assert_eq!(config.style().shade, Some(Shade::S600));
    }

    #[test]
    fn test_config_action_is_shared() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        let config = ButtonConfig::new("Go", move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        let copy = config.clone();
        (config.action())();
        (copy.action())();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_config_debug_hides_action() {
        let debug = format!("{:?}", ButtonConfig::new("Go", || {}));
        assert!(debug.contains("\"Go\""));
        assert!(!debug.contains("action"));
    }

    #[test]
    fn test_accent_overrides_color() {
        let spec = ButtonSpec {
            text: "Delete".into(),
            color: ColorFamily::Blue,
            shade: Some(Shade::S300),
            accent: Some("rose-700".into()),
            ..Default::default()
        };
        let style = spec.button_style().unwrap();
        assert_eq!(style.color, ColorFamily::Rose);
        assert_eq!(style.shade, Some(Shade::S700));
    }

    #[test]
    fn test_bad_accent_token() {
        let spec = ButtonSpec {
            text: "Delete".into(),
            accent: Some("rose-750".into()),
            ..Default::default()
        };
        assert!(matches!(
            spec.button_style(),
            Err(tailwind_button_style::Error::InvalidColorToken { .. })
        ));
    }

    #[test]
    fn test_parse_sheet() {
        let sheet = ButtonSheet::from_toml_str(
            r#"
            [[button]]
            text = "Premium"
            icon = "crown.fill"
            size = "large"
            color = "amber"
            shade = 600

            [[button]]
            text = "Cancel"
            style = "outline"
            "#,
        )
        .unwrap();

        assert_eq!(sheet.len(), 2);
        let first = &sheet.buttons()[0];
        assert_eq!(first.icon.as_deref(), Some("crown.fill"));
        assert_eq!(first.size, ButtonSize::Large);
        assert_eq!(first.style, VisualStyle::Solid);
        assert_eq!(first.shade, Some(Shade::S600));

        let second = &sheet.buttons()[1];
        assert_eq!(second.size, ButtonSize::Medium);
        assert_eq!(second.style, VisualStyle::Outline);
        assert_eq!(second.color, ColorFamily::Blue);
    }

    #[test]
    fn test_empty_sheet() {
        let sheet = ButtonSheet::from_toml_str("").unwrap();
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_empty_button_rejected() {
        let err = ButtonSheet::from_toml_str(
            r#"
            [[button]]
            text = "Ok"

            [[button]]
            color = "red"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::EmptyButton { index: 1 }));
    }

    #[test]
    fn test_icon_only_button_allowed() {
        let sheet = ButtonSheet::from_toml_str(
            r#"
            [[button]]
            icon = "gear"
            "#,
        )
        .unwrap();
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn test_unknown_color_is_toml_error() {
        let err = ButtonSheet::from_toml_str(
            r#"
            [[button]]
            text = "Ok"
            color = "magenta"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_bad_accent_reports_index() {
        let err = ButtonSheet::from_toml_str(
            r#"
            [[button]]
            text = "Ok"
            accent = "teal-5000"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Style { index: 0, .. }));
        assert!(err.to_string().contains("button 0"));
    }

    #[test]
    fn test_sheet_round_trips_through_toml() {
        let sheet = ButtonSheet::new(vec![ButtonSpec {
            text: "Save".into(),
            style: VisualStyle::Light,
            color: ColorFamily::Emerald,
            ..Default::default()
        }]);
        let text = sheet.to_toml_string().unwrap();
        assert_eq!(ButtonSheet::from_toml_str(&text).unwrap(), sheet);
    }
}
