//! `web-sys` implementations of [`Document`] and [`KeyValueStore`].
//!
//! Requires a browser environment. Panels are found by DOM position (the
//! button's next element sibling) and the theme is the `<body>` class name.

use wasm_bindgen::JsValue;
use web_sys::{Element, Storage};

use crate::dom::Document;
use crate::error::NavError;
use crate::storage::KeyValueStore;

fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn window() -> Result<web_sys::Window, NavError> {
    web_sys::window().ok_or_else(|| NavError::ElementNotFound("window".to_owned()))
}

/// The page's live DOM.
pub struct BrowserDocument {
    inner: web_sys::Document,
}

impl BrowserDocument {
    /// The document of the current window.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::ElementNotFound`] outside a window context.
    pub fn current() -> Result<Self, NavError> {
        let inner = window()?.document().ok_or_else(|| NavError::ElementNotFound("document".to_owned()))?;
        Ok(Self { inner })
    }

    fn body(&self) -> Result<web_sys::HtmlElement, NavError> {
        self.inner.body().ok_or_else(|| NavError::ElementNotFound("body".to_owned()))
    }
}

impl Document for BrowserDocument {
    type Node = Element;

    fn element(&self, id: &str) -> Result<Element, NavError> {
        self.inner.get_element_by_id(id).ok_or_else(|| NavError::ElementNotFound(id.to_owned()))
    }

    fn elements_with_class(&self, class: &str) -> Vec<Element> {
        // Live collection; snapshot it before any class changes.
        let collection = self.inner.get_elements_by_class_name(class);
        (0..collection.length()).filter_map(|i| collection.item(i)).collect()
    }

    fn node_id(&self, node: &Element) -> String {
        node.id()
    }

    fn panel_of(&self, button: &Element) -> Result<Element, NavError> {
        button.next_element_sibling().ok_or_else(|| NavError::MissingPanel(button.id()))
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&mut self, node: &Element, class: &str) -> Result<(), NavError> {
        node.class_list().add_1(class).map_err(|e| NavError::Dom(js_message(&e)))
    }

    fn remove_class(&mut self, node: &Element, class: &str) -> Result<(), NavError> {
        node.class_list().remove_1(class).map_err(|e| NavError::Dom(js_message(&e)))
    }

    fn theme_name(&self) -> Result<String, NavError> {
        Ok(self.body()?.class_name())
    }

    fn set_theme_name(&mut self, name: &str) -> Result<(), NavError> {
        self.body()?.set_class_name(name);
        Ok(())
    }
}

/// `sessionStorage` or `localStorage` of the current window.
pub struct BrowserStore {
    inner: Storage,
}

impl BrowserStore {
    /// The window's `sessionStorage`.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Storage`] when storage is unavailable or blocked.
    pub fn session() -> Result<Self, NavError> {
        let storage = window()?.session_storage().map_err(|e| NavError::Storage(js_message(&e)))?;
        Self::wrap(storage, "sessionStorage")
    }

    /// The window's `localStorage`.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Storage`] when storage is unavailable or blocked.
    pub fn local() -> Result<Self, NavError> {
        let storage = window()?.local_storage().map_err(|e| NavError::Storage(js_message(&e)))?;
        Self::wrap(storage, "localStorage")
    }

    fn wrap(storage: Option<Storage>, name: &str) -> Result<Self, NavError> {
        let inner = storage.ok_or_else(|| NavError::Storage(format!("{name} unavailable")))?;
        Ok(Self { inner })
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, NavError> {
        self.inner.get_item(key).map_err(|e| NavError::Storage(js_message(&e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), NavError> {
        self.inner.set_item(key, value).map_err(|e| NavError::Storage(js_message(&e)))
    }
}
