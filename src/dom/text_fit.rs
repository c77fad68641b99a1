//! Profile name fitting against the live layout

use web_sys::{CssStyleDeclaration, Element, HtmlElement};

use super::{body, cast, document, query, set_style, window};
use crate::error::UiError;
use crate::ui::text_fit::{FitBounds, fit_font_size, parse_px};

const NAME_SELECTOR: &str = ".profile-name";

/// Hidden measuring span, detached on drop
struct Probe(HtmlElement);

impl Drop for Probe {
    fn drop(&mut self) {
        self.0.remove();
    }
}

fn px(size: u32) -> String {
    format!("{}px", size)
}

fn computed_style(element: &Element) -> Result<CssStyleDeclaration, UiError> {
    window()?
        .get_computed_style(element)?
        .ok_or_else(|| UiError::Js("getComputedStyle returned null".into()))
}

/// Fit `.profile-name` into its container. Returns the applied size, or
/// None when the page has no profile name.
pub fn fit_profile_name(bounds: &FitBounds) -> Result<Option<u32>, UiError> {
    let Some(name) = query::<HtmlElement>(NAME_SELECTOR)? else {
        return Ok(None);
    };
    let parent: HtmlElement = cast(
        name.parent_element()
            .ok_or_else(|| UiError::MissingSelector(format!("{} parent", NAME_SELECTOR)))?,
        "profile name container",
    )?;

    let parent_style = computed_style(&parent)?;
    let inner_width = parent.offset_width() as f64
        - parse_px(&parent_style.get_property_value("padding-left")?)
        - parse_px(&parent_style.get_property_value("padding-right")?);

    set_style(&name, "font-size", &px(bounds.max_px))?;

    let name_style = computed_style(&name)?;
    let probe: HtmlElement = cast(document()?.create_element("span")?, "probe span")?;
    set_style(&probe, "visibility", "hidden")?;
    set_style(&probe, "position", "absolute")?;
    set_style(&probe, "white-space", "nowrap")?;
    set_style(&probe, "font-weight", &name_style.get_property_value("font-weight")?)?;
    set_style(&probe, "font-family", &name_style.get_property_value("font-family")?)?;
    probe.set_text_content(name.text_content().as_deref());
    body()?.append_child(&probe)?;
    let probe = Probe(probe);

    let size = fit_font_size(bounds, inner_width, |size| {
        let _ = probe.0.style().set_property("font-size", &px(size));
        probe.0.offset_width() as f64
    });
    drop(probe);

    set_style(&name, "font-size", &px(size))?;
    log::debug!("Profile name font size {}px for width {}px", size, inner_width);
    Ok(Some(size))
}
