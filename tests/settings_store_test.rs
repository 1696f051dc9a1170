//! Settings persistence through the on-disk store

use std::fs;

use tui_pairs::store::{load_settings, save_settings, FileStore, KeyValueStore};
use tui_pairs::types::{GridSize, Settings, Theme, SETTINGS_KEY};

fn custom() -> Settings {
    Settings {
        theme: Theme::Numbers,
        grid: GridSize::new(6, 6),
        player_count: 3,
    }
}

#[test]
fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    save_settings(&store, custom()).unwrap();
    assert_eq!(load_settings(&store), custom());

    // The entry lands in one JSON file named after the key.
    assert!(dir.path().join("GameSettings.json").is_file());
}

#[test]
fn test_wire_format_on_disk_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    save_settings(&store, custom()).unwrap();

    let raw = store.read(SETTINGS_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["theme"], "numbers");
    assert_eq!(value["gridSize"][0], 6);
    assert_eq!(value["gridSize"][1], 6);
    assert_eq!(value["playerCount"], 3);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    assert_eq!(load_settings(&store), Settings::default());
}

#[test]
fn test_mangled_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    fs::write(dir.path().join("GameSettings.json"), b"\x00\xffgarbage").unwrap();
    assert_eq!(load_settings(&store), Settings::default());
}

#[test]
fn test_legacy_capitalized_theme_file_still_loads() {
    // Files written by older builds stored "Numbers" / "Icons".
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    fs::write(
        dir.path().join("GameSettings.json"),
        r#"{"theme":"Icons","gridSize":[6,6],"playerCount":2}"#,
    )
    .unwrap();

    let loaded = load_settings(&store);
    assert_eq!(loaded.theme, Theme::Icons);
    assert_eq!(loaded.grid, GridSize::new(6, 6));
    assert_eq!(loaded.player_count, 2);
}

#[test]
fn test_saving_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("config").join("tui-pairs");
    let store = FileStore::new(&nested);

    save_settings(&store, custom()).unwrap();
    assert_eq!(load_settings(&store), custom());
    assert!(nested.join("GameSettings.json").is_file());
}
