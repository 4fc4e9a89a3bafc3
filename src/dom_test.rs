use super::*;

fn sample() -> MemoryDocument {
    let mut doc = MemoryDocument::new();
    doc.insert_menu("aboutdrop-down-b", &["drop-down-button"], "about-panel", &["hidden-feature"]);
    doc.insert("footer", &["hidden-feature-mob"]);
    doc
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn element_finds_inserted_ids() {
    let doc = sample();
    let node = doc.element("footer").unwrap();
    assert_eq!(doc.node_id(&node), "footer");
}

#[test]
fn element_reports_unknown_id() {
    let doc = sample();
    assert!(matches!(doc.element("nope"), Err(NavError::ElementNotFound(id)) if id == "nope"));
}

#[test]
fn insert_existing_id_replaces_classes() {
    let mut doc = sample();
    let before = doc.element("footer").unwrap();
    let after = doc.insert("footer", &["a", "b"]);
    assert_eq!(before, after);
    assert_eq!(doc.classes("footer").unwrap(), vec!["a", "b"]);
}

#[test]
fn elements_with_class_keeps_document_order() {
    let mut doc = MemoryDocument::new();
    doc.insert("first", &["x"]);
    doc.insert("middle", &["y"]);
    doc.insert("last", &["x", "y"]);
    let ids: Vec<String> = doc.elements_with_class("x").iter().map(|n| doc.node_id(n)).collect();
    assert_eq!(ids, vec!["first", "last"]);
}

#[test]
fn has_reports_false_for_unknown_ids() {
    let doc = sample();
    assert!(!doc.has("nope", "hidden-feature"));
    assert!(doc.classes("nope").is_none());
}

// =============================================================
// Panels
// =============================================================

#[test]
fn panel_of_follows_link() {
    let doc = sample();
    let button = doc.element("aboutdrop-down-b").unwrap();
    let panel = doc.panel_of(&button).unwrap();
    assert_eq!(doc.node_id(&panel), "about-panel");
}

#[test]
fn panel_of_unlinked_element_fails() {
    let doc = sample();
    let footer = doc.element("footer").unwrap();
    assert!(matches!(doc.panel_of(&footer), Err(NavError::MissingPanel(id)) if id == "footer"));
}

#[test]
fn link_panel_rejects_unknown_ids() {
    let mut doc = sample();
    assert!(doc.link_panel("aboutdrop-down-b", "nope").is_err());
    assert!(doc.link_panel("nope", "footer").is_err());
}

#[test]
fn link_panel_replaces_previous_link() {
    let mut doc = sample();
    doc.link_panel("aboutdrop-down-b", "footer").unwrap();
    let button = doc.element("aboutdrop-down-b").unwrap();
    assert_eq!(doc.node_id(&doc.panel_of(&button).unwrap()), "footer");
}

// =============================================================
// Class mutation
// =============================================================

#[test]
fn toggle_class_reports_new_presence() {
    let mut doc = sample();
    let footer = doc.element("footer").unwrap();
    assert!(doc.toggle_class(&footer, "hidden-feature").unwrap());
    assert!(doc.has("footer", "hidden-feature"));
    assert!(!doc.toggle_class(&footer, "hidden-feature").unwrap());
    assert!(!doc.has("footer", "hidden-feature"));
}

#[test]
fn add_and_remove_are_idempotent() {
    let mut doc = sample();
    let footer = doc.element("footer").unwrap();
    doc.add_class(&footer, "hidden-feature-mob").unwrap();
    assert_eq!(doc.classes("footer").unwrap(), vec!["hidden-feature-mob"]);
    doc.remove_class(&footer, "selected-drop-down").unwrap();
    assert_eq!(doc.classes("footer").unwrap(), vec!["hidden-feature-mob"]);
}

#[test]
fn invalid_class_tokens_are_rejected() {
    let mut doc = sample();
    let footer = doc.element("footer").unwrap();
    assert!(matches!(doc.add_class(&footer, ""), Err(NavError::Dom(_))));
    assert!(matches!(doc.remove_class(&footer, "two words"), Err(NavError::Dom(_))));
}

// =============================================================
// Theme root
// =============================================================

#[test]
fn theme_name_starts_empty_and_is_replaced() {
    let mut doc = MemoryDocument::new();
    assert_eq!(doc.theme_name().unwrap(), "");
    doc.set_theme_name("light-theme").unwrap();
    assert_eq!(doc.theme_name().unwrap(), "light-theme");
}
