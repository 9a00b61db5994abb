use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use crate::error::UiError;
use crate::surface::{PreferenceStore, UiSurface};

/// Document stand-in: root attributes, a set of element ids with their
/// classes, and the body's inline overflow.
#[derive(Default)]
pub struct MemorySurface {
    root: RefCell<HashMap<String, String>>,
    elements: RefCell<HashMap<String, HashSet<String>>>,
    overflow: RefCell<String>,
    prefers_dark: Cell<bool>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface carrying every element the default config binds to.
    pub fn with_page_markup() -> Self {
        Self::new().with_elements(&[
            "theme-toggle",
            "contact-btn",
            "contact-overlay",
            "contact-close",
        ])
    }

    pub fn with_elements(self, ids: &[&str]) -> Self {
        {
            let mut elements = self.elements.borrow_mut();
            for id in ids {
                elements.entry(id.to_string()).or_default();
            }
        }
        self
    }

    pub fn with_prefers_dark(self, dark: bool) -> Self {
        self.prefers_dark.set(dark);
        self
    }

    pub fn remove_element(&self, id: &str) {
        self.elements.borrow_mut().remove(id);
    }
}

impl UiSurface for MemorySurface {
    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root.borrow().get(name).cloned()
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), UiError> {
        self.root
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.borrow().contains_key(id)
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements
            .borrow()
            .get(id)
            .map(|classes| classes.contains(class))
            .unwrap_or(false)
    }

    fn add_class(&self, id: &str, class: &str) -> Result<(), UiError> {
        self.elements
            .borrow_mut()
            .get_mut(id)
            .ok_or_else(|| UiError::MissingElement(id.to_string()))?
            .insert(class.to_string());
        Ok(())
    }

    fn remove_class(&self, id: &str, class: &str) -> Result<(), UiError> {
        self.elements
            .borrow_mut()
            .get_mut(id)
            .ok_or_else(|| UiError::MissingElement(id.to_string()))?
            .remove(class);
        Ok(())
    }

    fn body_overflow(&self) -> String {
        self.overflow.borrow().clone()
    }

    fn set_body_overflow(&self, value: &str) -> Result<(), UiError> {
        *self.overflow.borrow_mut() = value.to_string();
        Ok(())
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }
}

/// localStorage stand-in that can be told to fail.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, UiError> {
        if self.fail_reads.get() {
            return Err(UiError::NoStorage);
        }
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), UiError> {
        if self.fail_writes.get() {
            return Err(UiError::storage("QuotaExceededError"));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
