use extreme_platformer::save::*;

fn store_with(contents: &str) -> MemoryStore {
    MemoryStore {
        contents: Some(contents.to_string()),
    }
}

#[test]
fn empty_store_gives_defaults_without_writing() {
    let saves = SaveManager::new(MemoryStore::default());
    assert_eq!(saves.data(), &SaveData::default());
    assert!(saves.store().contents.is_none());
}

#[test]
fn valid_record_is_loaded() {
    let saves = SaveManager::new(store_with(
        r#"{"level":12,"bestScore":4500,"coins":33,"soundEnabled":false}"#,
    ));
    assert_eq!(
        saves.data(),
        &SaveData {
            level: 12,
            best_score: 4500,
            coins: 33,
            sound_enabled: false,
        }
    );
}

#[test]
fn legacy_sound_key_is_accepted() {
    let saves = SaveManager::new(store_with(
        r#"{"level":3,"bestScore":10,"coins":1,"sound":false}"#,
    ));
    assert!(!saves.data().sound_enabled);
}

#[test]
fn partial_record_keeps_present_fields() {
    let saves = SaveManager::new(store_with(r#"{"level":7,"bestScore":900,"coins":12}"#));
    assert_eq!(
        saves.data(),
        &SaveData {
            level: 7,
            best_score: 900,
            coins: 12,
            sound_enabled: true,
        }
    );
    // A parseable record is never rewritten on load.
    assert_eq!(
        saves.store().contents.as_deref(),
        Some(r#"{"level":7,"bestScore":900,"coins":12}"#)
    );
}

#[test]
fn corrupt_record_resets_and_overwrites() {
    let saves = SaveManager::new(store_with("{not json"));
    assert_eq!(saves.data(), &SaveData::default());

    let written = saves.store().contents.clone().unwrap();
    let reparsed: SaveData = serde_json::from_str(&written).unwrap();
    assert_eq!(reparsed, SaveData::default());
}

#[test]
fn level_and_best_score_only_rise() {
    let mut saves = SaveManager::new(MemoryStore::default());
    saves.set_level(5);
    saves.set_level(3);
    assert_eq!(saves.data().level, 5);

    saves.set_best_score(900);
    saves.set_best_score(100);
    assert_eq!(saves.data().best_score, 900);

    let reloaded = SaveManager::new(saves.store().clone());
    assert_eq!(reloaded.data().level, 5);
    assert_eq!(reloaded.data().best_score, 900);
}

#[test]
fn coins_accumulate() {
    let mut saves = SaveManager::new(MemoryStore::default());
    saves.add_coins(4);
    saves.add_coins(6);
    assert_eq!(saves.data().coins, 10);
}

#[test]
fn toggle_sound_flips_and_persists() {
    let mut saves = SaveManager::new(MemoryStore::default());
    assert!(!saves.toggle_sound());
    assert!(saves.store().contents.as_deref().unwrap().contains("false"));
    assert!(saves.toggle_sound());
}

#[test]
fn reset_all_restores_defaults() {
    let mut saves = SaveManager::new(MemoryStore::default());
    saves.set_level(40);
    saves.add_coins(7);
    saves.reset_all();
    assert_eq!(saves.data(), &SaveData::default());

    let reloaded = SaveManager::new(saves.store().clone());
    assert_eq!(reloaded.data(), &SaveData::default());
}

#[test]
fn file_store_round_trip() {
    let path = std::env::temp_dir().join(format!(
        "extreme_platformer_save_test_{}.json",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    let mut saves = SaveManager::new(FileStore::new(path.clone()));
    assert_eq!(saves.data(), &SaveData::default());
    saves.set_level(8);

    let reloaded = SaveManager::new(FileStore::new(path.clone()));
    assert_eq!(reloaded.data().level, 8);

    saves.reset_all();
    let _ = std::fs::remove_file(&path);
}
