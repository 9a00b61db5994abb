use std::cell::RefCell;

use crate::config::ModalConfig;
use crate::surface::UiSurface;

pub const DISMISS_KEY: &str = "Escape";
const SCROLL_LOCK: &str = "hidden";

/// Opens and closes the contact overlay.
///
/// The overlay's `active` class is the only record of whether the modal is
/// open. The body's pre-open `overflow` is kept here so closing puts back
/// whatever the page had.
#[derive(Debug)]
pub struct ModalController {
    config: ModalConfig,
    saved_overflow: RefCell<Option<String>>,
}

impl ModalController {
    pub fn new(config: ModalConfig) -> Self {
        Self {
            config,
            saved_overflow: RefCell::new(None),
        }
    }

    pub fn config(&self) -> &ModalConfig {
        &self.config
    }

    pub fn is_open(&self, surface: &impl UiSurface) -> bool {
        surface.has_class(&self.config.overlay_id, &self.config.active_class)
    }

    /// Returns `true` when the overlay went from closed to open.
    pub fn open(&self, surface: &impl UiSurface) -> bool {
        let overlay = &self.config.overlay_id;
        if !surface.has_element(overlay) {
            log::debug!("modal overlay #{} not present", overlay);
            return false;
        }
        if self.is_open(surface) {
            return false;
        }
        if let Err(err) = surface.add_class(overlay, &self.config.active_class) {
            log::warn!("failed to open modal: {}", err);
            return false;
        }
        *self.saved_overflow.borrow_mut() = Some(surface.body_overflow());
        if let Err(err) = surface.set_body_overflow(SCROLL_LOCK) {
            log::warn!("failed to lock page scroll: {}", err);
        }
        true
    }

    /// Returns `true` when the overlay went from open to closed.
    pub fn close(&self, surface: &impl UiSurface) -> bool {
        let overlay = &self.config.overlay_id;
        if !surface.has_element(overlay) || !self.is_open(surface) {
            return false;
        }
        if let Err(err) = surface.remove_class(overlay, &self.config.active_class) {
            log::warn!("failed to close modal: {}", err);
            return false;
        }
        let restored = self.saved_overflow.borrow_mut().take().unwrap_or_default();
        if let Err(err) = surface.set_body_overflow(&restored) {
            log::warn!("failed to restore page scroll: {}", err);
        }
        true
    }

    /// Click on the overlay: only a click on the backdrop itself dismisses.
    pub fn handle_overlay_click(&self, surface: &impl UiSurface, on_self: bool) -> bool {
        on_self && self.close(surface)
    }

    pub fn handle_key(&self, surface: &impl UiSurface, key: &str) -> bool {
        key == DISMISS_KEY && self.close(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory::MemorySurface;

    fn modal() -> ModalController {
        ModalController::new(ModalConfig::default())
    }

    #[test]
    fn open_marks_overlay_and_locks_scroll() {
        let surface = MemorySurface::with_page_markup();
        let modal = modal();
        assert!(modal.open(&surface));
        assert!(surface.has_class("contact-overlay", "active"));
        assert_eq!(surface.body_overflow(), "hidden");
        assert!(modal.is_open(&surface));
    }

    #[test]
    fn open_then_close_restores_previous_overflow() {
        let surface = MemorySurface::with_page_markup();
        surface.set_body_overflow("auto").unwrap();
        let modal = modal();

        modal.open(&surface);
        assert!(modal.close(&surface));
        assert!(!surface.has_class("contact-overlay", "active"));
        assert_eq!(surface.body_overflow(), "auto");
    }

    #[test]
    fn reopening_keeps_the_first_saved_overflow() {
        let surface = MemorySurface::with_page_markup();
        let modal = modal();
        modal.open(&surface);
        assert!(!modal.open(&surface));
        modal.close(&surface);
        assert_eq!(surface.body_overflow(), "");
    }

    #[test]
    fn close_when_closed_changes_nothing() {
        let surface = MemorySurface::with_page_markup();
        surface.set_body_overflow("scroll").unwrap();
        let modal = modal();
        assert!(!modal.close(&surface));
        assert!(!modal.close(&surface));
        assert_eq!(surface.body_overflow(), "scroll");
    }

    #[test]
    fn missing_overlay_makes_open_and_close_no_ops() {
        let surface = MemorySurface::new().with_elements(&["contact-btn"]);
        let modal = modal();
        assert!(!modal.open(&surface));
        assert!(!modal.close(&surface));
        assert_eq!(surface.body_overflow(), "");
    }

    #[test]
    fn overlay_click_only_dismisses_on_the_backdrop() {
        let surface = MemorySurface::with_page_markup();
        let modal = modal();
        modal.open(&surface);

        assert!(!modal.handle_overlay_click(&surface, false));
        assert!(modal.is_open(&surface));

        assert!(modal.handle_overlay_click(&surface, true));
        assert!(!modal.is_open(&surface));
    }

    #[test]
    fn escape_closes_and_other_keys_do_not() {
        let surface = MemorySurface::with_page_markup();
        let modal = modal();
        modal.open(&surface);

        assert!(!modal.handle_key(&surface, "Enter"));
        assert!(!modal.handle_key(&surface, "escape"));
        assert!(modal.is_open(&surface));

        assert!(modal.handle_key(&surface, "Escape"));
        assert!(!modal.is_open(&surface));
        assert!(!modal.handle_key(&surface, "Escape"));
    }

    #[test]
    fn custom_active_class_is_used() {
        let surface = MemorySurface::new().with_elements(&["dialog"]);
        let modal = ModalController::new(ModalConfig {
            overlay_id: "dialog".into(),
            active_class: "is-open".into(),
            ..ModalConfig::default()
        });
        modal.open(&surface);
        assert!(surface.has_class("dialog", "is-open"));
        assert!(!surface.has_class("dialog", "active"));
    }
}
