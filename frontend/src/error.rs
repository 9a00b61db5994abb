use thiserror::Error;

/// Failures raised by the document and storage surfaces.
///
/// Controllers treat every variant as non-fatal: the page must keep working
/// when a control is missing or storage is unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("localStorage is unavailable")]
    NoStorage,
    #[error("element `#{0}` not found")]
    MissingElement(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("dom error: {0}")]
    Dom(String),
}

impl UiError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom(message.into())
    }

    pub fn is_missing_element(&self) -> bool {
        matches!(self, Self::MissingElement(_))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid runtime config: {0}")]
    Invalid(#[from] serde_json::Error),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}
