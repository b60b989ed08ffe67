//! Logging setup. Kept in its own test binary because the subscriber is global.

use noughts::{GameConfig, tui};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_config_load_is_logged_after_init() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("noughts.log");
    tui::init_logging(&log_path).unwrap();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "player_one_name = \"Ada\"").unwrap();
    GameConfig::load_or_default(file.path()).unwrap();

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("Config loaded successfully"), "log was: {log}");
    assert!(log.contains("Ada"));
}
