//! Routes page events to the theme and modal controllers.

use crate::config::RuntimeConfig;
use crate::state::modal::ModalController;
use crate::state::theme::{Theme, ThemeController};
use crate::surface::{PreferenceStore, UiSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleTheme,
    OpenModal,
    CloseModal,
    /// Click on the overlay; closes only when the backdrop itself was hit.
    DismissOutside,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub element_id: String,
    pub action: Action,
}

/// What the listener should do with the browser event after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Continue,
    PreventDefault,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickContext {
    /// The event target is the element the listener is attached to.
    pub on_self: bool,
}

pub struct Page<S, P> {
    surface: S,
    store: P,
    config: RuntimeConfig,
    theme: ThemeController,
    modal: Option<ModalController>,
}

impl<S: UiSurface, P: PreferenceStore> Page<S, P> {
    /// Builds the page and applies the persisted theme right away.
    pub fn new(surface: S, store: P, config: RuntimeConfig) -> Self {
        let theme = ThemeController::from_config(&config);
        let modal = config.modal.clone().map(ModalController::new);
        let page = Self {
            surface,
            store,
            config,
            theme,
            modal,
        };
        page.theme.initialize(&page.surface, &page.store);
        page
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn theme(&self) -> Theme {
        self.theme.current(&self.surface)
    }

    pub fn toggle_theme(&self) -> Theme {
        self.theme.toggle(&self.surface, &self.store)
    }

    pub fn modal_open(&self) -> bool {
        self.modal
            .as_ref()
            .map(|m| m.is_open(&self.surface))
            .unwrap_or(false)
    }

    fn wanted_bindings(&self) -> Vec<Binding> {
        let mut wanted = vec![Binding {
            element_id: self.config.toggle_id.clone(),
            action: Action::ToggleTheme,
        }];
        if let Some(modal) = &self.modal {
            let ids = modal.config();
            wanted.extend([
                Binding {
                    element_id: ids.trigger_id.clone(),
                    action: Action::OpenModal,
                },
                Binding {
                    element_id: ids.close_id.clone(),
                    action: Action::CloseModal,
                },
                Binding {
                    element_id: ids.overlay_id.clone(),
                    action: Action::DismissOutside,
                },
            ]);
        }
        wanted
    }

    /// Click bindings for the controls present in the document.
    pub fn bindings(&self) -> Vec<Binding> {
        self.wanted_bindings()
            .into_iter()
            .filter(|binding| {
                let present = self.surface.has_element(&binding.element_id);
                if !present {
                    log::debug!(
                        "#{} not in document, skipping {:?}",
                        binding.element_id,
                        binding.action
                    );
                }
                present
            })
            .collect()
    }

    pub fn dispatch(&self, action: Action, click: ClickContext) -> EventOutcome {
        match action {
            Action::ToggleTheme => {
                self.toggle_theme();
                EventOutcome::Continue
            }
            Action::OpenModal => {
                if let Some(modal) = &self.modal {
                    modal.open(&self.surface);
                }
                EventOutcome::PreventDefault
            }
            Action::CloseModal => {
                if let Some(modal) = &self.modal {
                    modal.close(&self.surface);
                }
                EventOutcome::Continue
            }
            Action::DismissOutside => {
                if let Some(modal) = &self.modal {
                    modal.handle_overlay_click(&self.surface, click.on_self);
                }
                EventOutcome::Continue
            }
        }
    }

    /// Document-wide `keydown`, whatever has focus.
    pub fn handle_key(&self, key: &str) -> EventOutcome {
        if let Some(modal) = &self.modal {
            modal.handle_key(&self.surface, key);
        }
        EventOutcome::Continue
    }
}
