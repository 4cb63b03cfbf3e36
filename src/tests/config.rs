use super::{resolve_marker, Config};
use crate::error::Error;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_defaults_from_empty_file() {
    let cfg = Config::parse("").unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.marker_byte(), b'*');
}

#[test]
fn test_marker_from_toml() {
    let cfg = Config::parse("marker = \"-\"\n").unwrap();
    assert_eq!(cfg.marker, "-");
    assert_eq!(cfg.marker_byte(), b'-');
}

#[test]
fn test_empty_marker_defers_to_renderer() {
    let cfg = Config::parse("marker = \"\"\n").unwrap();
    assert_eq!(cfg.marker_byte(), 0);
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "marker = \"+\"").unwrap();

    let cfg = Config::load_from(file.path());
    assert_eq!(cfg.marker_byte(), b'+');
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config::load_from(&dir.path().join("toclist.toml"));
    assert_eq!(cfg, Config::default());
}

#[test]
fn test_malformed_file_uses_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "marker = [not toml").unwrap();

    assert!(Config::parse("marker = [not toml").is_err());
    assert_eq!(Config::load_from(file.path()), Config::default());
}

#[test]
fn test_non_ascii_marker_is_ignored() {
    let cfg = Config::parse("marker = \"•\"\n").unwrap();
    assert_eq!(cfg.marker, "•");
    assert_eq!(cfg.marker_byte(), 0);

    let rendered = crate::render::ListRenderer::new(cfg.marker_byte())
        .render(&crate::toc::Toc::new(vec![crate::toc::Item::new("Foo")]))
        .unwrap();
    assert_eq!(serde_json::to_value(&rendered).unwrap()["marker"], "*");
}

#[test]
fn test_multi_character_marker_is_ignored() {
    let cfg = Config::parse("marker = \"--\"\n").unwrap();
    assert_eq!(cfg.marker_byte(), 0);
}

#[test]
fn test_resolve_marker_prefers_command_line() {
    let cfg = Config::parse("marker = \"-\"\n").unwrap();
    assert_eq!(resolve_marker(Some('+'), &cfg).unwrap(), b'+');
}

#[test]
fn test_resolve_marker_falls_back_to_config() {
    let cfg = Config::parse("marker = \"-\"\n").unwrap();
    assert_eq!(resolve_marker(None, &cfg).unwrap(), b'-');
    assert_eq!(resolve_marker(None, &Config::default()).unwrap(), b'*');
}

#[test]
fn test_resolve_marker_rejects_non_ascii() {
    let err = resolve_marker(Some('é'), &Config::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidMarker('é')));
    assert!(err.to_string().contains("single ASCII character"));
}
