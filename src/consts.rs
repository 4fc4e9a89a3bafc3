//! Class names and storage keys shared with the site's markup and CSS.

#[cfg(test)]
#[path = "consts_test.rs"]
mod consts_test;

// ── Menu markup ─────────────────────────────────────────────────

/// Class carried by every dropdown button in the navigation bar.
pub const DROP_DOWN_BUTTON_CLASS: &str = "drop-down-button";

/// Token every dropdown button identifier ends with. Stripping it yields the
/// session storage key for that menu.
pub const DROP_DOWN_SUFFIX: &str = "drop-down-b";

/// Marker class present on a button while its panel is open.
pub const SELECTED_CLASS: &str = "selected-drop-down";

// ── Hide classes ────────────────────────────────────────────────

/// Hides an element at every viewport width.
pub const HIDDEN_CLASS: &str = "hidden-feature";

/// Hides an element on mobile layouts only.
pub const HIDDEN_MOBILE_CLASS: &str = "hidden-feature-mob";

/// Hides an element on desktop layouts only.
pub const HIDDEN_DESKTOP_CLASS: &str = "hidden-feature-big";

// ── Storage values ──────────────────────────────────────────────

/// Local storage key holding the theme name.
pub const THEME_KEY: &str = "theme";

pub const OPEN: &str = "true";
pub const CLOSED: &str = "false";

// ── Logging ─────────────────────────────────────────────────────

/// Browser console level. Menu and theme transitions log at `debug`.
pub const LOG_LEVEL: log::Level = log::Level::Debug;
