//! Page-wide state the controllers read and mutate.
//!
//! The document root attribute, overlay classes and body scroll style live
//! behind [`UiSurface`]; the persisted preference lives behind
//! [`PreferenceStore`]. Both are passed into the controllers explicitly so
//! they can run against the real DOM or an in-memory stand-in.

use crate::error::UiError;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub trait UiSurface {
    /// Current value of an attribute on the document root element.
    fn root_attribute(&self, name: &str) -> Option<String>;

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), UiError>;

    fn has_element(&self, id: &str) -> bool;

    /// `false` when the element is absent.
    fn has_class(&self, id: &str, class: &str) -> bool;

    fn add_class(&self, id: &str, class: &str) -> Result<(), UiError>;

    fn remove_class(&self, id: &str, class: &str) -> Result<(), UiError>;

    /// Inline `overflow` style of the page body; empty when unset.
    fn body_overflow(&self) -> String;

    fn set_body_overflow(&self, value: &str) -> Result<(), UiError>;

    /// Whether the environment reports `prefers-color-scheme: dark`.
    fn prefers_dark(&self) -> bool {
        false
    }
}

pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, UiError>;

    fn save(&self, key: &str, value: &str) -> Result<(), UiError>;
}

impl<T: UiSurface + ?Sized> UiSurface for &T {
    fn root_attribute(&self, name: &str) -> Option<String> {
        (**self).root_attribute(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), UiError> {
        (**self).set_root_attribute(name, value)
    }

    fn has_element(&self, id: &str) -> bool {
        (**self).has_element(id)
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        (**self).has_class(id, class)
    }

    fn add_class(&self, id: &str, class: &str) -> Result<(), UiError> {
        (**self).add_class(id, class)
    }

    fn remove_class(&self, id: &str, class: &str) -> Result<(), UiError> {
        (**self).remove_class(id, class)
    }

    fn body_overflow(&self) -> String {
        (**self).body_overflow()
    }

    fn set_body_overflow(&self, value: &str) -> Result<(), UiError> {
        (**self).set_body_overflow(value)
    }

    fn prefers_dark(&self) -> bool {
        (**self).prefers_dark()
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn load(&self, key: &str) -> Result<Option<String>, UiError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), UiError> {
        (**self).save(key, value)
    }
}
