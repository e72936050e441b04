use std::path::Path;
use tempfile::tempdir;
use work_panel::config_store::{ConfigDocument, ConfigStore, CONFIG_FILE};
use work_panel::slots::{empty_slots, SlotState, SLOT_COUNT};

fn touch(dir: &Path, name: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, "data").unwrap();
    path.to_string_lossy().into_owned()
}

fn store_with(dir: &Path, content: &str) -> ConfigStore {
    let store = ConfigStore::new(dir.join(CONFIG_FILE));
    std::fs::write(store.path(), content).unwrap();
    store
}

fn all_unbound(states: &[SlotState; SLOT_COUNT]) -> bool {
    states.iter().all(|s| *s == SlotState::Unbound)
}

#[test]
fn save_then_load_round_trips_existing_targets() {
    let dir = tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join(CONFIG_FILE));
    let mut slots = empty_slots();
    let a = touch(dir.path(), "a.txt");
    let c = touch(dir.path(), "c.txt");
    slots[0].state = SlotState::Bound(a.clone());
    slots[2].state = SlotState::Bound(c.clone());
    store.save(&slots).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.states[0], SlotState::Bound(a));
    assert_eq!(loaded.states[1], SlotState::Unbound);
    assert_eq!(loaded.states[2], SlotState::Bound(c));
    assert!(loaded.states[3..].iter().all(|s| *s == SlotState::Unbound));
    assert!(loaded.modified[0] > 0.0);
    assert_eq!(loaded.modified[1], 0.0);
}

#[test]
fn target_removed_after_save_loads_unbound() {
    let dir = tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join(CONFIG_FILE));
    let mut slots = empty_slots();
    let keep = touch(dir.path(), "keep.txt");
    let gone = touch(dir.path(), "gone.txt");
    slots[0].state = SlotState::Bound(keep.clone());
    slots[1].state = SlotState::Bound(gone.clone());
    store.save(&slots).unwrap();
    std::fs::remove_file(&gone).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.states[0], SlotState::Bound(keep));
    assert_eq!(loaded.states[1], SlotState::Unbound);
    assert_eq!(loaded.stored_paths[1], gone);
}

#[test]
fn saved_document_has_six_paths_and_times() {
    let dir = tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join(CONFIG_FILE));
    let mut slots = empty_slots();
    let name = touch(dir.path(), "報告.txt");
    slots[5].state = SlotState::Bound(name.clone());
    store.save(&slots).unwrap();

    let raw = std::fs::read_to_string(store.path()).unwrap();
    assert!(raw.contains("報告.txt"), "non-ASCII names are written verbatim");
    assert!(raw.contains("\n  \"selected_files\""));
    let doc: ConfigDocument = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc.selected_files.len(), SLOT_COUNT);
    assert_eq!(doc.last_modified_times.len(), SLOT_COUNT);
    assert_eq!(doc.selected_files[5], name);
    assert!(doc.last_modified_times[5] > 0.0);
    assert!(doc.last_modified_times[..5].iter().all(|t| *t == 0.0));
}

#[test]
fn legacy_single_file_maps_to_first_slot() {
    let dir = tempdir().unwrap();
    let path = touch(dir.path(), "b.txt");
    let store = store_with(
        dir.path(),
        &serde_json::json!({ "selected_file": &path }).to_string(),
    );

    let loaded = store.load();
    assert_eq!(loaded.states[0], SlotState::Bound(path));
    assert!(loaded.states[1..].iter().all(|s| *s == SlotState::Unbound));
}

#[test]
fn legacy_file_that_no_longer_exists_is_unbound() {
    let dir = tempdir().unwrap();
    let store = store_with(dir.path(), r#"{"selected_file": "/a/b.txt"}"#);
    assert!(all_unbound(&store.load().states));
}

#[test]
fn missing_document_loads_all_unbound() {
    let dir = tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join(CONFIG_FILE));
    assert!(all_unbound(&store.load().states));
}

#[test]
fn malformed_documents_load_all_unbound() {
    let dir = tempdir().unwrap();
    for content in ["", "{", "not json", "42", r#"{"selected_files": 7}"#] {
        let store = store_with(dir.path(), content);
        assert!(all_unbound(&store.load().states), "content {content:?}");
    }
}

#[test]
fn short_array_is_padded_and_validated_per_entry() {
    let dir = tempdir().unwrap();
    let good = touch(dir.path(), "good.txt");
    let store = store_with(
        dir.path(),
        &serde_json::json!({
            "selected_files": ["/missing/one.txt", &good],
            "last_modified_times": [5.0, 7.5]
        })
        .to_string(),
    );

    let loaded = store.load();
    assert_eq!(loaded.states[0], SlotState::Unbound);
    assert_eq!(loaded.states[1], SlotState::Bound(good));
    assert!(loaded.states[2..].iter().all(|s| *s == SlotState::Unbound));
    assert_eq!(loaded.modified[1], 7.5);
    assert_eq!(loaded.modified[0], 0.0);
    assert_eq!(loaded.stored_paths.len(), SLOT_COUNT);
}

#[test]
fn damaged_timestamps_do_not_drop_bindings() {
    let dir = tempdir().unwrap();
    let path = touch(dir.path(), "kept.txt");
    for times in [
        serde_json::Value::Null,
        serde_json::json!(5),
        serde_json::json!(["x"]),
        serde_json::json!([null, 0]),
    ] {
        let store = store_with(
            dir.path(),
            &serde_json::json!({ "selected_files": [&path], "last_modified_times": times })
                .to_string(),
        );
        let loaded = store.load();
        assert_eq!(loaded.states[0], SlotState::Bound(path.clone()), "times {times}");
        assert_eq!(loaded.modified[0], 0.0);
    }
}

#[test]
fn extra_entries_are_ignored() {
    let dir = tempdir().unwrap();
    let paths: Vec<String> = (0..8).map(|i| touch(dir.path(), &format!("{i}.txt"))).collect();
    let store = store_with(
        dir.path(),
        &serde_json::json!({ "selected_files": &paths }).to_string(),
    );
    let loaded = store.load();
    for i in 0..SLOT_COUNT {
        assert_eq!(loaded.states[i], SlotState::Bound(paths[i].clone()));
    }
}

#[test]
fn companion_app_key_and_bare_array_are_accepted() {
    let dir = tempdir().unwrap();
    let path = touch(dir.path(), "shared.txt");

    let store = store_with(
        dir.path(),
        &serde_json::json!({
            "lastOpenedFiles": ["", &path],
            "preferences": { "theme": "default" }
        })
        .to_string(),
    );
    assert_eq!(store.load().states[1], SlotState::Bound(path.clone()));

    let store = store_with(dir.path(), &serde_json::json!([&path]).to_string());
    assert_eq!(store.load().states[0], SlotState::Bound(path));
}

#[test]
fn save_overwrites_existing_document() {
    let dir = tempdir().unwrap();
    let store = store_with(dir.path(), r#"{"selected_file": "/old"}"#);
    store.save(&empty_slots()).unwrap();
    let raw = std::fs::read_to_string(store.path()).unwrap();
    assert!(!raw.contains("/old"));
    assert!(all_unbound(&store.load().states));
}
