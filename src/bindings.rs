//! JavaScript entry points for the site's inline handlers.
//!
//! Markup calls these directly, e.g.
//! `onclick="sitenav.toggleMenuButton(this, 'about-panel')"`. Every export
//! builds its document and store handles on the spot; the only state kept
//! between calls is the active [`NavConfig`].

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::browser::{BrowserDocument, BrowserStore};
use crate::config::NavConfig;
use crate::consts::LOG_LEVEL;
use crate::error::NavError;
use crate::menu::{self, HideVariant};
use crate::theme;

thread_local! {
    static CONFIG: RefCell<NavConfig> = RefCell::new(NavConfig::default());
}

fn config() -> NavConfig {
    CONFIG.with(|c| c.borrow().clone())
}

/// Install the panic hook and console logger when the module loads.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(LOG_LEVEL).is_err() {
        log::debug!("sitenav: logger already installed");
    }
}

/// Replace the active configuration with a JSON object of overrides.
#[wasm_bindgen]
pub fn configure(json: &str) -> Result<(), JsError> {
    let parsed = NavConfig::from_json(json)?;
    CONFIG.with(|c| *c.borrow_mut() = parsed);
    Ok(())
}

/// Click handler for a dropdown button. Returns whether the menu is now open.
#[wasm_bindgen(js_name = toggleMenuButton)]
pub fn toggle_menu_button(button: Element, panel_id: &str) -> Result<bool, JsError> {
    let mut doc = BrowserDocument::current()?;
    let mut session = BrowserStore::session()?;
    Ok(menu::toggle_menu_button(&config(), &mut doc, &mut session, &button, panel_id)?)
}

/// Flip a hide class on one element; `mobile` picks the class as in
/// [`HideVariant::from_flag`].
#[wasm_bindgen(js_name = toggleVisibility)]
pub fn toggle_visibility(panel_id: &str, mobile: Option<bool>) -> Result<bool, JsError> {
    let mut doc = BrowserDocument::current()?;
    Ok(menu::toggle_visibility(&config(), &mut doc, panel_id, HideVariant::from_flag(mobile))?)
}

/// [`toggle_visibility`] over an array of element ids.
#[wasm_bindgen(js_name = toggleVisibilityBatch)]
pub fn toggle_visibility_batch(panel_ids: js_sys::Array, mobile: Option<bool>) -> Result<(), JsError> {
    let ids = panel_ids
        .iter()
        .map(|value| value.as_string().ok_or_else(|| NavError::InvalidArgument(format!("element id {value:?} is not a string"))))
        .collect::<Result<Vec<_>, _>>()?;
    let mut doc = BrowserDocument::current()?;
    menu::toggle_visibility_batch(&config(), &mut doc, &ids, HideVariant::from_flag(mobile))?;
    Ok(())
}

/// Replay session-stored menu state onto every dropdown button.
#[wasm_bindgen(js_name = restoreSelectionFromStorage)]
pub fn restore_selection_from_storage() -> Result<usize, JsError> {
    let mut doc = BrowserDocument::current()?;
    let session = BrowserStore::session()?;
    Ok(menu::restore_selection_from_storage(&config(), &mut doc, &session)?)
}

/// Replay session-stored menu state onto a single button.
#[wasm_bindgen(js_name = restoreButtonFromStorage)]
pub fn restore_button_from_storage(button: Element) -> Result<bool, JsError> {
    let mut doc = BrowserDocument::current()?;
    let session = BrowserStore::session()?;
    Ok(menu::restore_button(&config(), &mut doc, &session, &button)?)
}

/// Flip between the light and dark theme. Returns the new theme name.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Result<String, JsError> {
    let mut doc = BrowserDocument::current()?;
    let mut local = BrowserStore::local()?;
    Ok(theme::toggle_theme(&config(), &mut doc, &mut local)?.as_str().to_owned())
}

/// Apply the persisted theme. Returns the applied theme name.
#[wasm_bindgen(js_name = initTheme)]
pub fn init_theme() -> Result<String, JsError> {
    let mut doc = BrowserDocument::current()?;
    let local = BrowserStore::local()?;
    Ok(theme::init_theme(&config(), &mut doc, &local)?)
}

/// Load handler: apply the theme, then restore open menus.
#[wasm_bindgen(js_name = onPageLoad)]
pub fn on_page_load() -> Result<(), JsError> {
    let config = config();
    let mut doc = BrowserDocument::current()?;
    let local = BrowserStore::local()?;
    let session = BrowserStore::session()?;
    theme::init_theme(&config, &mut doc, &local)?;
    menu::restore_selection_from_storage(&config, &mut doc, &session)?;
    Ok(())
}
