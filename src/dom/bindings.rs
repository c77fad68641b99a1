//! DOM event wiring and the page-level entry points
//!
//! Markup calls into the app through a fixed set of functions on `window`
//! (e.g. `onclick="openProfile()"`). They are all registered here, once.

use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use web_sys::{Element, EventTarget, HtmlElement, Window};

use super::avatar::FILE_INPUT_ID;
use super::{App, by_id, document, query_all, window};
use crate::error::{Step, UiError, report, run_all};
use crate::ui::{ModalKind, is_backdrop_hit};

/// Entry points exposed to the markup
pub const ENTRY_POINTS: [&str; 9] = [
    "openNav",
    "openProfile",
    "closeProfile",
    "joinSystem",
    "createInitiative",
    "changeAvatar",
    "closeAvatarUpload",
    "saveAvatar",
    "toggleMobileDrawer",
];

fn export(window: &Window, name: &str, f: impl FnMut() + 'static) -> Result<(), UiError> {
    let closure = Closure::<dyn FnMut()>::new(f);
    Reflect::set(window, &JsValue::from_str(name), closure.as_ref())?;
    closure.forget();
    Ok(())
}

fn export_with_arg(
    window: &Window,
    name: &str,
    mut f: impl FnMut(String) + 'static,
) -> Result<(), UiError> {
    let closure = Closure::<dyn FnMut(JsValue)>::new(move |arg: JsValue| {
        f(arg.as_string().unwrap_or_default())
    });
    Reflect::set(window, &JsValue::from_str(name), closure.as_ref())?;
    closure.forget();
    Ok(())
}

/// Register every entry point on `window`
pub fn install(app: &Rc<App>) -> Result<(), UiError> {
    let window = window()?;

    let a = app.clone();
    export_with_arg(&window, "openNav", move |route| a.open_nav(&route))?;
    let a = app.clone();
    export(&window, "openProfile", move || a.open_profile())?;
    let a = app.clone();
    export(&window, "closeProfile", move || a.close_profile())?;
    let a = app.clone();
    export_with_arg(&window, "joinSystem", move |id| a.join_system(&id))?;
    let a = app.clone();
    export(&window, "createInitiative", move || a.create_initiative())?;
    let a = app.clone();
    export(&window, "changeAvatar", move || a.change_avatar())?;
    let a = app.clone();
    export(&window, "closeAvatarUpload", move || a.close_avatar_upload())?;
    let a = app.clone();
    export(&window, "saveAvatar", move || a.save_avatar())?;
    let a = app.clone();
    export(&window, "toggleMobileDrawer", move || a.toggle_mobile_drawer())?;

    log::info!("Registered entry points: {}", ENTRY_POINTS.join(", "));
    Ok(())
}

fn listen(
    target: &EventTarget,
    event: &str,
    f: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), UiError> {
    let closure = Closure::<dyn FnMut(_)>::new(f);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `App::on_dom_ready` now or once the document has been parsed
pub fn when_dom_ready(app: Rc<App>) -> Result<(), UiError> {
    let document = document()?;
    if document.ready_state() != "loading" {
        wire_page(&app);
        return Ok(());
    }
    let mut pending = Some(app);
    listen(&document, "DOMContentLoaded", move |_event| {
        if let Some(app) = pending.take() {
            wire_page(&app);
        }
    })
}

fn wire_page(app: &Rc<App>) {
    wire_listeners(app);
    app.on_dom_ready();
}

/// Each group is wired on its own so one missing element only costs its
/// own listeners
fn wire_listeners(app: &Rc<App>) {
    let groups: [Step<Rc<App>>; 5] = [
        ("wire navigation", wire_navigation),
        ("wire avatar picker", wire_avatar_picker),
        ("wire profile backdrop", |app| wire_backdrop(app, ModalKind::Profile)),
        ("wire avatar backdrop", |app| wire_backdrop(app, ModalKind::AvatarUpload)),
        ("wire resize", wire_resize),
    ];
    for (context, e) in run_all(app, &groups) {
        report(context, e);
    }
    log::info!("Event listeners installed");
}

fn wire_navigation(app: &Rc<App>) -> Result<(), UiError> {
    for item in query_all::<Element>(".nav-item")? {
        let app = app.clone();
        let route = item.get_attribute("data-route").unwrap_or_default();
        listen(&item, "click", move |event| {
            event.prevent_default();
            app.open_nav(&route);
        })?;
    }
    Ok(())
}

fn wire_avatar_picker(app: &Rc<App>) -> Result<(), UiError> {
    let input: HtmlElement = by_id(FILE_INPUT_ID)?;
    let app = app.clone();
    listen(&input, "change", move |_event| app.on_avatar_file_chosen())
}

/// Dismiss on clicks that land on the backdrop itself
fn wire_backdrop(app: &Rc<App>, kind: ModalKind) -> Result<(), UiError> {
    let backdrop: EventTarget = by_id::<HtmlElement>(kind.element_id())?.into();
    let app = app.clone();
    let target = backdrop.clone();
    listen(&backdrop, "click", move |event| {
        if is_backdrop_hit(event.target().as_ref(), &target) {
            match kind {
                ModalKind::Profile => app.close_profile(),
                ModalKind::AvatarUpload => app.close_avatar_upload(),
            }
        }
    })
}

/// Re-fit the profile name on resize
fn wire_resize(app: &Rc<App>) -> Result<(), UiError> {
    let app = app.clone();
    listen(&window()?, "resize", move |_event| app.fit_profile_name())
}
