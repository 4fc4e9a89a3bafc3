//! Markup and storage naming, overridable per site.
//!
//! Every field defaults to the names in [`crate::consts`], so an empty JSON
//! object (or no configuration at all) describes the stock site layout.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::NavError;
use crate::theme::Theme;

/// Class names, identifier suffix and theme storage settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    pub button_class: String,
    pub button_suffix: String,
    pub selected_class: String,
    pub hidden_class: String,
    pub hidden_mobile_class: String,
    pub hidden_desktop_class: String,
    pub theme_key: String,
    pub default_theme: Theme,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            button_class: consts::DROP_DOWN_BUTTON_CLASS.to_owned(),
            button_suffix: consts::DROP_DOWN_SUFFIX.to_owned(),
            selected_class: consts::SELECTED_CLASS.to_owned(),
            hidden_class: consts::HIDDEN_CLASS.to_owned(),
            hidden_mobile_class: consts::HIDDEN_MOBILE_CLASS.to_owned(),
            hidden_desktop_class: consts::HIDDEN_DESKTOP_CLASS.to_owned(),
            theme_key: consts::THEME_KEY.to_owned(),
            default_theme: Theme::Dark,
        }
    }
}

impl NavConfig {
    /// Parse and validate a JSON configuration object.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::ConfigParse`] for malformed JSON or unknown fields
    /// and [`NavError::Config`] when [`NavConfig::validate`] rejects it.
    pub fn from_json(raw: &str) -> Result<Self, NavError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that no name is blank and the three hide classes are distinct.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<(), NavError> {
        let names = [
            ("button_class", &self.button_class),
            ("button_suffix", &self.button_suffix),
            ("selected_class", &self.selected_class),
            ("hidden_class", &self.hidden_class),
            ("hidden_mobile_class", &self.hidden_mobile_class),
            ("hidden_desktop_class", &self.hidden_desktop_class),
            ("theme_key", &self.theme_key),
        ];
        for (field, value) in names {
            if value.trim().is_empty() {
                return Err(NavError::Config(format!("{field} must not be empty")));
            }
            if value.chars().any(char::is_whitespace) {
                return Err(NavError::Config(format!("{field} must not contain whitespace")));
            }
        }

        let hidden = [&self.hidden_class, &self.hidden_mobile_class, &self.hidden_desktop_class];
        if hidden[0] == hidden[1] || hidden[0] == hidden[2] || hidden[1] == hidden[2] {
            return Err(NavError::Config("hide classes must be distinct".to_owned()));
        }
        if hidden.contains(&&self.selected_class) {
            return Err(NavError::Config("selected_class collides with a hide class".to_owned()));
        }
        Ok(())
    }
}
