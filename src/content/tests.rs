//! Content domain: tests for gameplay config parsing.

use std::path::Path;

use super::{GameplayConfig, load_gameplay_config, parse_gameplay_config};

#[test]
fn test_shipped_config_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data/gameplay.ron");
    let config = load_gameplay_config(&path).expect("shipped gameplay.ron should parse");

    assert_eq!(config.level, 0);
    assert_eq!(config.sfx_seed, Some(1337));
    assert_eq!(config.bgm.tracks.len(), 4);
    assert!(!config.layout.props.is_empty());
    assert!(config.movement.jump_cancel_force > 0.0);
}

#[test]
fn test_partial_config_uses_defaults() {
    let config = parse_gameplay_config(
        "inline",
        "(level: 2, movement: (move_speed: 250.0), bgm: (win_fade_secs: 5.0))",
    )
    .expect("partial config should parse");
    let defaults = GameplayConfig::default();

    assert_eq!(config.level, 2);
    assert_eq!(config.sfx_seed, None);
    assert_eq!(config.movement.move_speed, 250.0);
    assert_eq!(config.movement.gravity, defaults.movement.gravity);
    assert_eq!(config.bgm.win_fade_secs, 5.0);
    assert_eq!(config.bgm.lose_fade_secs, defaults.bgm.lose_fade_secs);
    assert_eq!(config.layout, defaults.layout);
}

#[test]
fn test_empty_config_is_default() {
    let config = parse_gameplay_config("inline", "()").expect("empty struct should parse");
    assert_eq!(config.level, 0);
    assert_eq!(config.bgm.tracks.len(), 4);
}

#[test]
fn test_malformed_config_reports_file() {
    let err = parse_gameplay_config("broken.ron", "(level: \"two\")")
        .expect_err("string level should fail");
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_gameplay_config(Path::new("does/not/exist.ron"))
        .expect_err("missing file should fail");
    assert!(err.message.starts_with("IO error"));
}
