//! Dropdown menu open/close state and its session persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each dropdown is a button (class `drop-down-button`, id ending in the
//! configured suffix) paired with a panel. A button is "open" when it carries
//! the selection marker and its panel lacks the generic hide class. Clicking a
//! button flips that pair and writes `"true"`/`"false"` to the session store
//! under the button id minus its suffix; a page load replays those values.
//!
//! Panels can also be hidden per layout (mobile or desktop) through
//! [`toggle_visibility`], which only touches the chosen hide class.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::config::NavConfig;
use crate::consts::{CLOSED, OPEN};
use crate::dom::Document;
use crate::error::NavError;
use crate::storage::KeyValueStore;

/// Which of the three hide classes a visibility toggle acts on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HideVariant {
    #[default]
    Generic,
    Mobile,
    Desktop,
}

impl HideVariant {
    /// Map the page's optional `mobile` flag: absent is generic, `true` is
    /// mobile, `false` is desktop.
    #[must_use]
    pub fn from_flag(mobile: Option<bool>) -> Self {
        match mobile {
            None => Self::Generic,
            Some(true) => Self::Mobile,
            Some(false) => Self::Desktop,
        }
    }

    #[must_use]
    pub fn class(self, config: &NavConfig) -> &str {
        match self {
            Self::Generic => &config.hidden_class,
            Self::Mobile => &config.hidden_mobile_class,
            Self::Desktop => &config.hidden_desktop_class,
        }
    }
}

/// Session storage key for a dropdown button: its id without the suffix.
///
/// # Errors
///
/// Returns [`NavError::MalformedButtonId`] if `button_id` does not end with
/// the configured suffix.
pub fn selection_key<'a>(config: &NavConfig, button_id: &'a str) -> Result<&'a str, NavError> {
    button_id.strip_suffix(config.button_suffix.as_str()).ok_or_else(|| NavError::MalformedButtonId {
        id: button_id.to_owned(),
        suffix: config.button_suffix.clone(),
    })
}

/// Flip one hide class on the element named `panel_id`.
///
/// Returns whether the class is present afterwards.
///
/// # Errors
///
/// Returns [`NavError::ElementNotFound`] if `panel_id` is unknown.
pub fn toggle_visibility<D: Document>(
    config: &NavConfig,
    doc: &mut D,
    panel_id: &str,
    variant: HideVariant,
) -> Result<bool, NavError> {
    let panel = doc.element(panel_id)?;
    let hidden = doc.toggle_class(&panel, variant.class(config))?;
    log::debug!("menu: {panel_id} {variant:?} hidden={hidden}");
    Ok(hidden)
}

/// [`toggle_visibility`] over several panels, in order.
///
/// Stops at the first failure; panels toggled before it stay toggled.
///
/// # Errors
///
/// Returns the first error from [`toggle_visibility`].
pub fn toggle_visibility_batch<D, I>(config: &NavConfig, doc: &mut D, panel_ids: I, variant: HideVariant) -> Result<(), NavError>
where
    D: Document,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for id in panel_ids {
        toggle_visibility(config, doc, id.as_ref(), variant)?;
    }
    Ok(())
}

/// Open or close a dropdown in response to a click on `button`.
///
/// A selected button closes: its panel gains the generic hide class, the
/// marker is removed and `"false"` is stored. An unselected button opens:
/// the hide class is removed, the marker added and `"true"` stored. Returns
/// whether the menu is open afterwards.
///
/// # Errors
///
/// Fails before touching anything if the button id is malformed or the
/// panel is missing. Store write failures surface after the classes changed.
pub fn toggle_menu_button<D, S>(
    config: &NavConfig,
    doc: &mut D,
    session: &mut S,
    button: &D::Node,
    panel_id: &str,
) -> Result<bool, NavError>
where
    D: Document,
    S: KeyValueStore,
{
    let button_id = doc.node_id(button);
    let key = selection_key(config, &button_id)?;
    let panel = doc.element(panel_id)?;

    let open = !doc.has_class(button, &config.selected_class);
    if open {
        doc.remove_class(&panel, &config.hidden_class)?;
        doc.add_class(button, &config.selected_class)?;
    } else {
        doc.add_class(&panel, &config.hidden_class)?;
        doc.remove_class(button, &config.selected_class)?;
    }
    session.set(key, if open { OPEN } else { CLOSED })?;

    log::debug!("menu: {key} open={open}");
    Ok(open)
}

/// Project the stored selection for one button onto it and its panel.
///
/// Only an exact `"true"` opens the menu; any other value, or none, closes it.
/// Returns whether the menu is open afterwards.
///
/// # Errors
///
/// Returns [`NavError::MalformedButtonId`] or [`NavError::MissingPanel`] for
/// broken markup, and store read failures.
pub fn restore_button<D, S>(config: &NavConfig, doc: &mut D, session: &S, button: &D::Node) -> Result<bool, NavError>
where
    D: Document,
    S: KeyValueStore,
{
    let button_id = doc.node_id(button);
    let key = selection_key(config, &button_id)?;
    let panel = doc.panel_of(button)?;

    let open = session.get(key)?.as_deref() == Some(OPEN);
    if open {
        doc.add_class(button, &config.selected_class)?;
        doc.remove_class(&panel, &config.hidden_class)?;
    } else {
        doc.remove_class(button, &config.selected_class)?;
        doc.add_class(&panel, &config.hidden_class)?;
    }
    Ok(open)
}

/// Replay stored selections onto every dropdown button in the page.
///
/// Returns how many menus ended up open.
///
/// # Errors
///
/// Stops at the first button [`restore_button`] fails on.
pub fn restore_selection_from_storage<D, S>(config: &NavConfig, doc: &mut D, session: &S) -> Result<usize, NavError>
where
    D: Document,
    S: KeyValueStore,
{
    let buttons = doc.elements_with_class(&config.button_class);
    let mut opened = 0;
    for button in &buttons {
        if restore_button(config, doc, session, button)? {
            opened += 1;
        }
    }
    log::debug!("menu: restored {} buttons, {opened} open", buttons.len());
    Ok(opened)
}
