//! Light/dark theme toggle persisted in local storage.
//!
//! The theme is the document root's theme name (the body class in the
//! browser). Only two names exist; anything else found on the page is treated
//! as "not dark" when toggling.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::NavConfig;
use crate::dom::Document;
use crate::error::NavError;
use crate::storage::KeyValueStore;

/// The two site themes, named as the stylesheet expects them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    #[serde(rename = "dark-theme")]
    Dark,
    #[serde(rename = "light-theme")]
    Light,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark-theme",
            Self::Light => "light-theme",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark-theme" => Ok(Self::Dark),
            "light-theme" => Ok(Self::Light),
            other => Err(NavError::InvalidArgument(format!("unknown theme {other:?}"))),
        }
    }
}

/// Flip the applied theme and persist the result.
///
/// Dark becomes light; every other root value, including none at all,
/// becomes dark.
///
/// # Errors
///
/// Propagates root lookup failures from `doc` and write failures from `local`.
pub fn toggle_theme<D, S>(config: &NavConfig, doc: &mut D, local: &mut S) -> Result<Theme, NavError>
where
    D: Document,
    S: KeyValueStore,
{
    let current = doc.theme_name()?;
    let next = current.parse::<Theme>().map_or(Theme::Dark, Theme::toggled);
    doc.set_theme_name(next.as_str())?;
    local.set(&config.theme_key, next.as_str())?;
    log::debug!("theme: {current:?} -> {next}");
    Ok(next)
}

/// Apply the persisted theme name, falling back to the configured default
/// when nothing (or an empty string) is stored.
///
/// Any other stored value is applied as is, even outside the two known
/// themes, and returned so callers see exactly what the root now carries.
///
/// # Errors
///
/// Propagates read failures from `local` and root lookup failures from `doc`.
pub fn init_theme<D, S>(config: &NavConfig, doc: &mut D, local: &S) -> Result<String, NavError>
where
    D: Document,
    S: KeyValueStore,
{
    let name = match local.get(&config.theme_key)? {
        Some(raw) if !raw.is_empty() => {
            if raw.parse::<Theme>().is_err() {
                log::warn!("theme: applying unrecognized stored value {raw:?}");
            }
            raw
        }
        _ => config.default_theme.as_str().to_owned(),
    };
    doc.set_theme_name(&name)?;
    log::debug!("theme: initialized to {name}");
    Ok(name)
}
