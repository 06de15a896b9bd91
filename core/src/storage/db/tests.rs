use super::*;
use tempfile::TempDir;

fn create_test_store() -> (RedbStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = RedbStore::open(&temp_dir.path().join("totem.redb")).unwrap();
    (store, temp_dir)
}

#[test]
fn test_get_absent_key_is_none() {
    let (store, _temp) = create_test_store();
    assert!(store.get("videos").unwrap().is_none());
}

#[test]
fn test_set_then_get_round_trips() {
    let (mut store, _temp) = create_test_store();
    store.set("videos", r#"[{"locator":"clip:1","timestamp":1}]"#).unwrap();

    let value = store.get("videos").unwrap().unwrap();
    assert_eq!(value, r#"[{"locator":"clip:1","timestamp":1}]"#);
}

#[test]
fn test_set_overwrites_previous_value() {
    let (mut store, _temp) = create_test_store();
    store.set("videos", "old").unwrap();
    store.set("videos", "new").unwrap();

    assert_eq!(store.get("videos").unwrap().as_deref(), Some("new"));
}

#[test]
fn test_remove_then_get_is_none() {
    let (mut store, _temp) = create_test_store();
    store.set("videos", "[]").unwrap();
    store.remove("videos").unwrap();

    assert!(store.get("videos").unwrap().is_none());
}

#[test]
fn test_values_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("totem.redb");

    {
        let mut store = RedbStore::open(&path).unwrap();
        store.set("videos", "[42]").unwrap();
    }

    let store = RedbStore::open(&path).unwrap();
    assert_eq!(store.get("videos").unwrap().as_deref(), Some("[42]"));
}
