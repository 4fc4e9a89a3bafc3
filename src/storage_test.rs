use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.get("theme").unwrap(), None);
}

#[test]
fn set_then_get_returns_value() {
    let mut store = MemoryStore::new();
    store.set("about", "true").unwrap();
    assert_eq!(store.get("about").unwrap().as_deref(), Some("true"));
    assert_eq!(store.len(), 1);
}

#[test]
fn set_overwrites_previous_value() {
    let mut store = MemoryStore::new();
    store.set("about", "true").unwrap();
    store.set("about", "false").unwrap();
    assert_eq!(store.get("about").unwrap().as_deref(), Some("false"));
    assert_eq!(store.len(), 1);
}

#[test]
fn keys_are_independent() {
    let store: MemoryStore = [("about", "true"), ("projects", "false")].into_iter().collect();
    assert_eq!(store.get("about").unwrap().as_deref(), Some("true"));
    assert_eq!(store.get("projects").unwrap().as_deref(), Some("false"));
    assert_eq!(store.get("contact").unwrap(), None);
}

#[test]
fn clear_drops_everything() {
    let mut store: MemoryStore = [("about", "true")].into_iter().collect();
    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.get("about").unwrap(), None);
}
