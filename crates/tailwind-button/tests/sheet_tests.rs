//! Integration tests for loading button sheets.

use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tailwind_button::prelude::*;
use tailwind_button::{Error, style};

const SHEET: &str = r#"
[[button]]
text = "Premium"
icon = "crown.fill"
size = "large"
color = "amber"
shade = 600

[[button]]
text = "Cancel"
style = "outline"
accent = "slate-500"

[[button]]
icon = "gear"
style = "subtle"
"#;

#[test]
fn test_load_sheet_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SHEET.as_bytes()).unwrap();

    let sheet = ButtonSheet::from_file(file.path()).unwrap();
    assert_eq!(sheet.len(), 3);

    let premium = &sheet.buttons()[0];
    assert_eq!(premium.icon.as_deref(), Some("crown.fill"));
    assert_eq!(premium.size, ButtonSize::Large);
    assert_eq!(premium.style, VisualStyle::Solid);
    assert_eq!(premium.color, ColorFamily::Amber);
    assert_eq!(premium.shade, Some(Shade::S600));

    let cancel = sheet.buttons()[1].button_style().unwrap();
    assert_eq!(cancel.color, ColorFamily::Slate);
    assert_eq!(cancel.shade, Some(Shade::S500));
    assert_eq!(cancel.size, ButtonSize::Medium);

    let gear = &sheet.buttons()[2];
    assert!(gear.text.is_empty());
    assert_eq!(gear.color, ColorFamily::Blue);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("buttons.toml");

    let err = ButtonSheet::from_file(&path).unwrap_err();
    match &err {
        Error::Io { path: reported, .. } => assert_eq!(reported, &path),
        other => panic!("expected Io error, got {other:?}"),
    }
    assert!(err.to_string().contains("buttons.toml"));
}

#[test]
fn test_out_of_range_shade_is_rejected() {
    let err = ButtonSheet::from_toml_str("[[button]]\ntext = \"x\"\nshade = 450\n").unwrap_err();
    assert!(matches!(err, Error::Toml(_)));
}

#[test]
fn test_unknown_color_is_rejected() {
    let err = ButtonSheet::from_toml_str("[[button]]\ntext = \"x\"\ncolor = \"mauve\"\n").unwrap_err();
    assert!(matches!(err, Error::Toml(_)));
}

#[test]
fn test_bad_accent_reports_index() {
    let source = "[[button]]\ntext = \"ok\"\n\n[[button]]\ntext = \"bad\"\naccent = \"teal-55\"\n";
    let err = ButtonSheet::from_toml_str(source).unwrap_err();
    assert!(matches!(
        err,
        Error::Style {
            index: 1,
            source: style::Error::InvalidColorToken { .. }
        }
    ));
}

#[test]
fn test_empty_entry_is_rejected() {
    let source = "[[button]]\ntext = \"ok\"\n\n[[button]]\nstyle = \"light\"\n";
    let err = ButtonSheet::from_toml_str(source).unwrap_err();
    assert!(matches!(err, Error::EmptyButton { index: 1 }));
}

#[test]
fn test_sheet_builds_working_buttons() {
    let clicks = Arc::new(AtomicUsize::new(0));
    let sheet = ButtonSheet::from_toml_str(SHEET).unwrap();

    let mut buttons = sheet
        .into_buttons(|spec| {
            let clicks = clicks.clone();
            let weight = if spec.text == "Premium" { 10 } else { 1 };
            move || {
                clicks.fetch_add(weight, Ordering::SeqCst);
            }
        })
        .unwrap();

    assert_eq!(buttons.len(), 3);
    assert_eq!(buttons[0].text(), "Premium");
    assert_eq!(buttons[1].style().style, VisualStyle::Outline);
    assert_eq!(buttons[2].icon(), Some("gear"));

    for button in &mut buttons {
        button.handle_event(&ButtonEvent::key_release(Key::Space));
    }
    assert_eq!(clicks.load(Ordering::SeqCst), 12);
}

#[test]
fn test_sheet_round_trips_through_toml() {
    let sheet = ButtonSheet::from_toml_str(SHEET).unwrap();
    let text = sheet.to_toml_string().unwrap();
    assert_eq!(ButtonSheet::from_toml_str(&text).unwrap(), sheet);
}
