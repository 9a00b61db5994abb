//! Light/dark theme toggle and contact modal for the folio site.
//!
//! The theme stored under `localStorage["theme"]` is written to the root
//! element's `data-theme` attribute as soon as the module starts; click and
//! key listeners are attached once the document is parsed.

pub mod config;
pub mod controller;
pub mod error;
mod events;
pub mod state;
pub mod surface;
mod test_support;
pub mod utils;

pub use config::{ModalConfig, RuntimeConfig};
pub use controller::{Action, Binding, ClickContext, EventOutcome, Page};
pub use error::{ConfigError, UiError};
pub use state::modal::ModalController;
pub use state::theme::{Theme, ThemeController, ThemeParseError};
pub use surface::{PreferenceStore, UiSurface};

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use anyhow::Context;
    use wasm_bindgen::prelude::*;

    use crate::events::{self, WebPage};
    use crate::surface::web::{LocalStorage, WebSurface};
    use crate::{config, Page};

    thread_local! {
        static PAGE: RefCell<Option<Rc<WebPage>>> = RefCell::new(None);
    }

    fn install() -> anyhow::Result<()> {
        let _ = console_log::init_with_level(log::Level::Info);
        let config = config::load();
        if let Ok(level) = config.log_level() {
            log::set_max_level(level.to_level_filter());
        }
        log::debug!("folio config: {:?}", config);

        let surface = WebSurface::new().context("document unavailable")?;
        let page = Rc::new(Page::new(surface, LocalStorage, config));
        PAGE.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&page)));
        events::bind_when_ready(page).context("failed to wire page listeners")?;
        Ok(())
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        if let Err(err) = install() {
            web_sys::console::warn_1(&format!("folio: {:#}", err).into());
        }
    }

    /// Flips the theme from host-page script; returns the theme now applied.
    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme() -> Option<String> {
        PAGE.with(|slot| {
            slot.borrow()
                .as_ref()
                .map(|page| page.toggle_theme().as_str().to_string())
        })
    }
}
