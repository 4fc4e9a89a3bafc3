//! # sitenav
//!
//! Navigation helpers for a static site, compiled to WebAssembly: dropdown
//! menus whose open state survives page loads within a browser session, and a
//! light/dark theme remembered across sessions.
//!
//! The logic is written against two small traits, [`dom::Document`] and
//! [`storage::KeyValueStore`], so it runs on the host against
//! [`dom::MemoryDocument`] and [`storage::MemoryStore`]. With the `hydrate`
//! feature the `web-sys` implementations and the JavaScript exports are
//! compiled in.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`menu`] | Dropdown toggling, hide-class variants, session replay |
//! | [`theme`] | Theme toggle and load-time initialization |
//! | [`dom`] | Document abstraction and the in-memory document |
//! | [`storage`] | Key-value store abstraction and the in-memory store |
//! | [`config`] | Class names and keys, overridable from JSON |
//! | [`consts`] | Default class names and storage keys |
//! | [`error`] | [`error::NavError`] |
//! | `browser` | `web-sys` document and storage (`hydrate` only) |
//! | `bindings` | `#[wasm_bindgen]` exports (`hydrate` only) |

pub mod config;
pub mod consts;
pub mod dom;
pub mod error;
pub mod menu;
pub mod storage;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod bindings;
#[cfg(feature = "hydrate")]
pub mod browser;

pub use config::NavConfig;
pub use error::NavError;
pub use menu::HideVariant;
pub use theme::Theme;
