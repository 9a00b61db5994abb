use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement};

use super::{PreferenceStore, UiSurface};
use crate::error::UiError;
use crate::utils::storage as storage_utils;

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// [`UiSurface`] backed by the live `document`.
#[derive(Clone)]
pub struct WebSurface {
    document: Document,
}

impl WebSurface {
    pub fn new() -> Result<Self, UiError> {
        Ok(Self {
            document: storage_utils::document()?,
        })
    }

    pub fn from_document(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn require(&self, id: &str) -> Result<Element, UiError> {
        self.element(id)
            .ok_or_else(|| UiError::MissingElement(id.to_string()))
    }

    fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }
}

impl UiSurface for WebSurface {
    fn root_attribute(&self, name: &str) -> Option<String> {
        self.document
            .document_element()
            .and_then(|root| root.get_attribute(name))
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), UiError> {
        let root = self
            .document
            .document_element()
            .ok_or(UiError::NoDocument)?;
        root.set_attribute(name, value)
            .map_err(|e| UiError::dom(js_error(e)))
    }

    fn has_element(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.element(id)
            .map(|el| el.class_list().contains(class))
            .unwrap_or(false)
    }

    fn add_class(&self, id: &str, class: &str) -> Result<(), UiError> {
        self.require(id)?
            .class_list()
            .add_1(class)
            .map_err(|e| UiError::dom(js_error(e)))
    }

    fn remove_class(&self, id: &str, class: &str) -> Result<(), UiError> {
        self.require(id)?
            .class_list()
            .remove_1(class)
            .map_err(|e| UiError::dom(js_error(e)))
    }

    fn body_overflow(&self) -> String {
        self.body()
            .and_then(|body| body.style().get_property_value("overflow").ok())
            .unwrap_or_default()
    }

    fn set_body_overflow(&self, value: &str) -> Result<(), UiError> {
        let body = self
            .body()
            .ok_or_else(|| UiError::MissingElement("body".into()))?;
        let style = body.style();
        let result = if value.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", value)
        };
        result.map_err(|e| UiError::dom(js_error(e)))
    }

    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
            .flatten()
            .map(|m| m.matches())
            .unwrap_or(false)
    }
}

/// [`PreferenceStore`] over `window.localStorage`.
///
/// The storage handle is looked up on every call so a page that blocks
/// storage (private mode, sandboxed iframe) still gets a themed document.
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, UiError> {
        storage_utils::local_storage()?
            .get_item(key)
            .map_err(|e| UiError::storage(js_error(e)))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), UiError> {
        storage_utils::local_storage()?
            .set_item(key, value)
            .map_err(|e| UiError::storage(js_error(e)))
    }
}
