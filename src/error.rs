//! Error type for navigation and theme operations.
//!
//! None of these are recovered from. In the browser they are rethrown as
//! JavaScript exceptions and abort the click or load handler that triggered
//! them, leaving whatever class changes already happened in place.

/// Failure while driving the navigation DOM or its backing stores.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    #[error("element not found: {0}")]
    ElementNotFound(String),
    #[error("dropdown button has no panel: {0}")]
    MissingPanel(String),
    #[error("button id {id:?} does not end with {suffix:?}")]
    MalformedButtonId { id: String, suffix: String },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("dom error: {0}")]
    Dom(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
