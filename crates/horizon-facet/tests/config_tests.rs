//! Integration tests for loading toolkit configuration from disk.

use std::io::Write;

use horizon_facet::prelude::*;
use horizon_facet::{ConfigError, ToolkitConfig};

const SAMPLE: &str = r##"
theme = "high-contrast"
show_focus_color = false

[pagination]
window_size = 9
page_size = 50

[overrides.pagination]
fill-selected = "#112233"
"##;

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let config = ToolkitConfig::load(file.path()).unwrap();
    let context = config.theme_context().unwrap();
    let theme = context.current_theme();
    assert_eq!(theme.id, ThemeId::HighContrast);
    assert!(!theme.show_focus_color);

    let mut pager = Pagination::new(&theme);
    config.apply_pagination(&mut pager);
    pager.set_total_items(10_000);
    assert_eq!(pager.window_size(), 9);
    assert_eq!(pager.total_pages(), 200);

    pager.set_active_page(100);
    let selected = pager.style().resolve(
        ColorRole::Fill,
        &WidgetVisualState::new().selected(true),
    );
    assert_eq!(Some(selected), Color::from_hex("#112233"));
}

#[test]
fn save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("facet.toml");

    let mut config = ToolkitConfig::from_toml_str(SAMPLE).unwrap();
    config.theme = "dark".into();
    config.save(&path).unwrap();

    let reloaded = ToolkitConfig::load(&path).unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn missing_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    match ToolkitConfig::load(&path) {
        Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected an I/O error, got {other:?}"),
    }
    assert_eq!(
        ToolkitConfig::load_or_default(&path).unwrap(),
        ToolkitConfig::default()
    );
}

#[test]
fn extreme_window_sizes_are_coerced() {
    for (text, expected) in [
        ("[pagination]\nwindow_size = -9223372036854775808", 5),
        ("[pagination]\nwindow_size = 9223372036854775807", 13),
    ] {
        let config = ToolkitConfig::from_toml_str(text).unwrap();
        let mut pager = Pagination::new(&Theme::light());
        config.apply_pagination(&mut pager);
        assert_eq!(pager.window_size(), expected);
    }
}
