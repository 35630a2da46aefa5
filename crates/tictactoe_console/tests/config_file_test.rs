//! Loading configuration from disk.

use std::io::Write;
use tictactoe_console::Config;

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "computer_name = \"Deep Random\"").unwrap();
    writeln!(file, "seed = 2024").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.computer_name(), "Deep Random");
    assert_eq!(*config.seed(), Some(2024));
    assert_eq!(config.log_level(), "warn");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = \"soon\"").unwrap();
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}
