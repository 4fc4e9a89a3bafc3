//! Class-list view of the page the menus live in.
//!
//! Menu and theme logic only ever look elements up, read or flip classes,
//! find a button's panel and read or write the theme on the document root.
//! [`Document`] captures exactly that. The browser implementation lives in
//! `browser.rs`; [`MemoryDocument`] is a flat element table with an explicit
//! button-to-panel association used by tests and non-browser hosts.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use std::collections::{BTreeSet, HashMap};

use crate::error::NavError;

/// Element lookup and class mutation over a page.
pub trait Document {
    /// Handle to one element.
    type Node;

    /// Look up an element by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::ElementNotFound`] if no element has `id`.
    fn element(&self, id: &str) -> Result<Self::Node, NavError>;

    /// All elements carrying `class`, in document order.
    fn elements_with_class(&self, class: &str) -> Vec<Self::Node>;

    /// Identifier of `node`, empty if it has none.
    fn node_id(&self, node: &Self::Node) -> String;

    /// The panel a dropdown button opens.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::MissingPanel`] if the button has no panel.
    fn panel_of(&self, button: &Self::Node) -> Result<Self::Node, NavError>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Add `class` to `node`. Adding a present class is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Dom`] if the host rejects the class name.
    fn add_class(&mut self, node: &Self::Node, class: &str) -> Result<(), NavError>;

    /// Remove `class` from `node`. Removing an absent class is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Dom`] if the host rejects the class name.
    fn remove_class(&mut self, node: &Self::Node, class: &str) -> Result<(), NavError>;

    /// Flip `class` on `node` and return whether it is now present.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Document::add_class`] or
    /// [`Document::remove_class`].
    fn toggle_class(&mut self, node: &Self::Node, class: &str) -> Result<bool, NavError> {
        if self.has_class(node, class) {
            self.remove_class(node, class)?;
            Ok(false)
        } else {
            self.add_class(node, class)?;
            Ok(true)
        }
    }

    /// Theme name currently applied to the document root.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::ElementNotFound`] if the root is missing.
    fn theme_name(&self) -> Result<String, NavError>;

    /// Replace the theme name on the document root.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::ElementNotFound`] if the root is missing.
    fn set_theme_name(&mut self, name: &str) -> Result<(), NavError>;
}

/// Index of an element inside a [`MemoryDocument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
struct Element {
    id: String,
    classes: BTreeSet<String>,
}

/// Element table with explicit panel links, kept in insertion order.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    elements: Vec<Element>,
    panels: HashMap<NodeId, NodeId>,
    theme: String,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element, or replace the classes of an existing one with the
    /// same identifier.
    pub fn insert(&mut self, id: &str, classes: &[&str]) -> NodeId {
        let classes: BTreeSet<String> = classes.iter().map(|c| (*c).to_owned()).collect();
        if let Some(index) = self.position(id) {
            self.elements[index].classes = classes;
            return NodeId(index);
        }
        self.elements.push(Element { id: id.to_owned(), classes });
        NodeId(self.elements.len() - 1)
    }

    /// Record `panel` as the panel opened by `button`.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::ElementNotFound`] if either identifier is unknown.
    pub fn link_panel(&mut self, button: &str, panel: &str) -> Result<(), NavError> {
        let button = self.element(button)?;
        let panel = self.element(panel)?;
        self.panels.insert(button, panel);
        Ok(())
    }

    /// Insert a button and its panel and link them in one step.
    pub fn insert_menu(&mut self, button_id: &str, button_classes: &[&str], panel_id: &str, panel_classes: &[&str]) -> NodeId {
        let button = self.insert(button_id, button_classes);
        let panel = self.insert(panel_id, panel_classes);
        self.panels.insert(button, panel);
        button
    }

    /// Whether the element named `id` carries `class`. Unknown ids report `false`.
    #[must_use]
    pub fn has(&self, id: &str, class: &str) -> bool {
        self.position(id).is_some_and(|index| self.elements[index].classes.contains(class))
    }

    /// Classes of the element named `id`, sorted.
    #[must_use]
    pub fn classes(&self, id: &str) -> Option<Vec<&str>> {
        let index = self.position(id)?;
        Some(self.elements[index].classes.iter().map(String::as_str).collect())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|el| el.id == id)
    }

    fn get_mut(&mut self, node: NodeId) -> Result<&mut Element, NavError> {
        self.elements.get_mut(node.0).ok_or_else(|| NavError::ElementNotFound(format!("#{}", node.0)))
    }
}

impl Document for MemoryDocument {
    type Node = NodeId;

    fn element(&self, id: &str) -> Result<NodeId, NavError> {
        self.position(id).map(NodeId).ok_or_else(|| NavError::ElementNotFound(id.to_owned()))
    }

    fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, el)| el.classes.contains(class))
            .map(|(index, _)| NodeId(index))
            .collect()
    }

    fn node_id(&self, node: &NodeId) -> String {
        self.elements.get(node.0).map(|el| el.id.clone()).unwrap_or_default()
    }

    fn panel_of(&self, button: &NodeId) -> Result<NodeId, NavError> {
        self.panels.get(button).copied().ok_or_else(|| NavError::MissingPanel(self.node_id(button)))
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.elements.get(node.0).is_some_and(|el| el.classes.contains(class))
    }

    fn add_class(&mut self, node: &NodeId, class: &str) -> Result<(), NavError> {
        check_class_token(class)?;
        self.get_mut(*node)?.classes.insert(class.to_owned());
        Ok(())
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) -> Result<(), NavError> {
        check_class_token(class)?;
        self.get_mut(*node)?.classes.remove(class);
        Ok(())
    }

    fn theme_name(&self) -> Result<String, NavError> {
        Ok(self.theme.clone())
    }

    fn set_theme_name(&mut self, name: &str) -> Result<(), NavError> {
        name.clone_into(&mut self.theme);
        Ok(())
    }
}

/// `classList` rejects empty tokens and tokens containing whitespace.
fn check_class_token(class: &str) -> Result<(), NavError> {
    if class.is_empty() || class.chars().any(char::is_whitespace) {
        return Err(NavError::Dom(format!("invalid class token {class:?}")));
    }
    Ok(())
}
