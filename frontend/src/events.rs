#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{Event, KeyboardEvent, MouseEvent};

    use crate::controller::{Binding, ClickContext, EventOutcome, Page};
    use crate::error::UiError;
    use crate::surface::web::{LocalStorage, WebSurface};

    pub type WebPage = Page<WebSurface, LocalStorage>;

    fn finish(event: &Event, outcome: EventOutcome) {
        if outcome == EventOutcome::PreventDefault {
            event.prevent_default();
        }
    }

    fn bind_click(page: &Rc<WebPage>, binding: Binding) -> Result<(), UiError> {
        let element = page
            .surface()
            .element(&binding.element_id)
            .ok_or_else(|| UiError::MissingElement(binding.element_id.clone()))?;
        let page = Rc::clone(page);
        let action = binding.action;
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            let click = ClickContext {
                on_self: event.target() == event.current_target(),
            };
            finish(&event, page.dispatch(action, click));
        }) as Box<dyn FnMut(_)>);
        element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|_| UiError::dom(format!("click listener on #{}", binding.element_id)))?;
        closure.forget();
        Ok(())
    }

    fn bind_keys(page: &Rc<WebPage>) -> Result<(), UiError> {
        let page = Rc::clone(page);
        let document = page.surface().document().clone();
        let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            finish(&event, page.handle_key(&event.key()));
        }) as Box<dyn FnMut(_)>);
        document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .map_err(|_| UiError::dom("keydown listener on document"))?;
        closure.forget();
        Ok(())
    }

    /// Attaches every listener the page asks for.
    pub fn bind(page: &Rc<WebPage>) {
        for binding in page.bindings() {
            if let Err(err) = bind_click(page, binding) {
                log::warn!("{}", err);
            }
        }
        if page.config().modal.is_some() {
            if let Err(err) = bind_keys(page) {
                log::warn!("{}", err);
            }
        }
    }

    /// Binds now if the document is parsed, otherwise on `DOMContentLoaded`.
    pub fn bind_when_ready(page: Rc<WebPage>) -> Result<(), UiError> {
        let document = page.surface().document().clone();
        if document.ready_state() != "loading" {
            bind(&page);
            return Ok(());
        }
        let closure: Closure<dyn FnMut(Event)> = Closure::once(move |_: Event| {
            bind(&page);
        });
        document
            .add_event_listener_with_callback(
                "DOMContentLoaded",
                closure.as_ref().unchecked_ref(),
            )
            .map_err(|_| UiError::dom("DOMContentLoaded listener"))?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{bind, bind_when_ready, WebPage};
