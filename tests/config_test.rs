//! Tests for TOML configuration loading.

use std::io::Write;
use strictly_grid::{DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, GameConfig, validate_size};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_full_config_loads() {
    let file = write_config("board_size = 5\nplayer_one = \"Alice\"\nplayer_two = \"Bob\"\n");
    let config = GameConfig::from_file(file.path()).unwrap();

    assert_eq!(*config.board_size(), Some(5));
    assert_eq!(config.player_one(), "Alice");
    assert_eq!(config.player_two(), "Bob");
}

#[test]
fn test_empty_config_uses_defaults() {
    let file = write_config("");
    let config = GameConfig::from_file(file.path()).unwrap();

    assert_eq!(config, GameConfig::default());
    assert_eq!(*config.board_size(), None);
    assert_eq!(config.player_one(), DEFAULT_PLAYER_ONE);
    assert_eq!(config.player_two(), DEFAULT_PLAYER_TWO);
}

#[test]
fn test_small_board_in_file_rejected() {
    let file = write_config("board_size = 2\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("at least 3"));
}

#[test]
fn test_malformed_file_rejected() {
    let file = write_config("board_size = \"big\"\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_overrides_replace_file_values() {
    let file = write_config("board_size = 5\nplayer_one = \"Alice\"\n");
    let config = GameConfig::from_file(file.path())
        .unwrap()
        .with_overrides(Some(4), None, Some("Carol".to_string()))
        .unwrap();

    assert_eq!(*config.board_size(), Some(4));
    assert_eq!(config.player_one(), "Alice");
    assert_eq!(config.player_two(), "Carol");
}

#[test]
fn test_override_size_validated() {
    assert!(GameConfig::default().with_overrides(Some(1), None, None).is_err());
    assert!(validate_size(2).is_err());
    assert_eq!(validate_size(3).unwrap(), 3);
}
