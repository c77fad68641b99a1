//! Browser bindings
//!
//! Turns the platform-free state in `ui` into DOM updates and wires DOM
//! events back into the `App` controller.

pub mod app;
pub mod avatar;
pub mod bindings;
pub mod dashboard;
pub mod profile;
pub mod telegram;
pub mod text_fit;
pub mod toast;
pub mod view;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub use app::App;

use crate::bridge::init_host;
use crate::config::AppConfig;
use crate::error::{UiError, report};
use crate::model::MockStore;

/// Boot the mini app: logging, host bridge, store, controller, bindings
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    log::info!("EM.Intranet mini app starting...");

    let config = AppConfig::load();
    let bridge = telegram::connect();
    init_host(bridge.as_ref(), &config.header_color);

    let store = MockStore::seeded().into_shared();
    let app = App::new(config, store, bridge);

    if let Err(e) = bindings::install(&app) {
        report("install entry points", e);
    }
    if let Err(e) = bindings::when_dom_ready(app) {
        report("wait for DOM", e);
    }
}

pub fn window() -> Result<web_sys::Window, UiError> {
    web_sys::window().ok_or(UiError::NoDocument)
}

pub fn document() -> Result<Document, UiError> {
    window()?.document().ok_or(UiError::NoDocument)
}

pub fn body() -> Result<HtmlElement, UiError> {
    document()?.body().ok_or(UiError::NoDocument)
}

fn short_type_name<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

/// Downcast an element, naming it in the error
pub fn cast<T: JsCast>(element: Element, target: &str) -> Result<T, UiError> {
    element.dyn_into::<T>().map_err(|_| UiError::WrongElementType {
        target: target.to_string(),
        expected: short_type_name::<T>(),
    })
}

/// Required element by id
pub fn by_id<T: JsCast>(id: &str) -> Result<T, UiError> {
    let element = document()?
        .get_element_by_id(id)
        .ok_or_else(|| UiError::MissingElement(id.to_string()))?;
    cast(element, &format!("#{}", id))
}

/// Optional element by selector
pub fn query<T: JsCast>(selector: &str) -> Result<Option<T>, UiError> {
    match document()?.query_selector(selector)? {
        Some(element) => cast(element, selector).map(Some),
        None => Ok(None),
    }
}

/// All elements matching a selector that have the requested type
pub fn query_all<T: JsCast>(selector: &str) -> Result<Vec<T>, UiError> {
    let list = document()?.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

pub fn set_text(id: &str, text: &str) -> Result<(), UiError> {
    by_id::<Element>(id)?.set_text_content(Some(text));
    Ok(())
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), UiError> {
    element.style().set_property(property, value)?;
    Ok(())
}

/// Blocking notice
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
