//! Main screen: user header, systems and initiatives
//!
//! Lists render into optional `data-*-placeholder` containers; pages that
//! ship static markup instead simply lack them.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use super::{App, document, query, query_all, set_style};
use crate::error::UiError;
use crate::model::{Initiative, System, User};

const SYSTEMS_PLACEHOLDER: &str = "[data-systems-placeholder]";
const INITIATIVES_PLACEHOLDER: &str = "[data-initiatives-placeholder]";

fn child(document: &Document, tag: &str, class: &str, text: &str) -> Result<Element, UiError> {
    let element = document.create_element(tag)?;
    element.set_class_name(class);
    element.set_text_content(Some(text));
    Ok(element)
}

/// XP and level in the header
pub fn render_user(user: &User) -> Result<(), UiError> {
    if let Some(xp) = query::<Element>("#user-xp")? {
        xp.set_text_content(Some(&format!("{} XP", user.xp)));
    }
    if let Some(level) = query::<Element>("#user-level")? {
        level.set_text_content(Some(&user.level().to_string()));
    }
    log::info!("XP updated: {} / {} (level {})", user.xp, user.max_xp, user.level());
    Ok(())
}

/// System cards with join buttons
pub fn render_systems(app: &Rc<App>, systems: &[System]) -> Result<(), UiError> {
    let Some(container) = query::<Element>(SYSTEMS_PLACEHOLDER)? else {
        log::debug!("No systems placeholder, keeping static markup");
        return Ok(());
    };
    let document = document()?;
    container.set_inner_html("");

    for system in systems {
        let card: HtmlElement = super::cast(document.create_element("div")?, ".system-card")?;
        card.set_class_name("system-card");
        card.set_attribute("data-system-id", &system.id)?;

        let button = child(&document, "button", "system-join-btn", "Вступить")?;
        let join = {
            let app = app.clone();
            let id = system.id.clone();
            Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| app.join_system(&id))
        };
        button.add_event_listener_with_callback("click", join.as_ref().unchecked_ref())?;
        join.forget();

        card.append_with_node_1(&child(&document, "div", "system-icon", &system.icon)?)?;
        card.append_with_node_1(&child(&document, "div", "system-name", &system.name)?)?;
        card.append_with_node_1(&child(&document, "div", "system-description", &system.description)?)?;
        card.append_with_node_1(&child(&document, "div", "system-participants", &system.participants_label())?)?;
        card.append_with_node_1(&child(&document, "div", "system-leaders", &system.leaders_label())?)?;
        card.append_with_node_1(&button)?;
        container.append_child(&card)?;
        lift_on_hover(&card)?;
    }

    log::info!("Systems updated: {}", systems.len());
    Ok(())
}

/// Initiative cards with progress bars
pub fn render_initiatives(initiatives: &[Initiative], animation_delay_ms: u32) -> Result<(), UiError> {
    let Some(container) = query::<Element>(INITIATIVES_PLACEHOLDER)? else {
        log::debug!("No initiatives placeholder, keeping static markup");
        return Ok(());
    };
    let document = document()?;
    container.set_inner_html("");

    for initiative in initiatives {
        let card = document.create_element("div")?;
        card.set_class_name("initiative-card");
        card.set_attribute("data-status", initiative.status.as_str())?;

        let bar = child(&document, "div", "progress-bar", "")?;
        let fill: HtmlElement = super::cast(child(&document, "div", "progress-fill", "")?, ".progress-fill")?;
        set_style(&fill, "width", &initiative.progress_width())?;
        bar.append_with_node_1(&fill)?;

        card.append_with_node_1(&child(&document, "div", "initiative-title", &initiative.title)?)?;
        card.append_with_node_1(&child(&document, "div", "initiative-creator", &initiative.creator)?)?;
        card.append_with_node_1(&child(&document, "div", "initiative-description", &initiative.description)?)?;
        card.append_with_node_1(&bar)?;
        card.append_with_node_1(&child(
            &document,
            "div",
            "initiative-reward",
            &format!("+{} XP", initiative.xp_reward),
        )?)?;
        card.append_with_node_1(&child(&document, "div", "initiative-status", initiative.status.label())?)?;
        container.append_child(&card)?;
        grow_from_zero(fill, animation_delay_ms)?;
    }

    log::info!("Initiatives updated: {}", initiatives.len());
    Ok(())
}

/// Animate every progress bar in the static markup
pub fn animate_progress_bars(delay_ms: u32) -> Result<(), UiError> {
    for bar in query_all::<HtmlElement>(".progress-fill")? {
        grow_from_zero(bar, delay_ms)?;
    }
    Ok(())
}

/// Collapse a bar, then let it grow back to its width
fn grow_from_zero(bar: HtmlElement, delay_ms: u32) -> Result<(), UiError> {
    let width = bar.style().get_property_value("width")?;
    set_style(&bar, "width", "0%")?;
    Timeout::new(delay_ms, move || {
        let _ = bar.style().set_property("width", &width);
    })
    .forget();
    Ok(())
}

/// Lift every system card in the static markup on hover
pub fn wire_card_hover() -> Result<(), UiError> {
    for card in query_all::<HtmlElement>(".system-card")? {
        lift_on_hover(&card)?;
    }
    Ok(())
}

fn lift_on_hover(card: &HtmlElement) -> Result<(), UiError> {
    for (event, offset) in [("mouseenter", "translateY(-4px)"), ("mouseleave", "translateY(-2px)")] {
        let target = card.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let _ = target.style().set_property("transform", offset);
        });
        card.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}
