use web_sys::{Document, Storage, Window};

use crate::error::UiError;

pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> Result<Document, UiError> {
    window()?.document().ok_or(UiError::NoDocument)
}

pub fn local_storage() -> Result<Storage, UiError> {
    window()?
        .local_storage()
        .map_err(|_| UiError::NoStorage)?
        .ok_or(UiError::NoStorage)
}
