//! Toast notifications

use gloo_timers::callback::Timeout;

use super::{body, document};
use crate::error::UiError;
use crate::ui::toast::{Severity, ToastPhase, ToastTimings, toast_style};

/// Show a self-dismissing toast. Each call gets its own node and timers.
pub fn show(message: &str, severity: Severity, timings: ToastTimings) -> Result<(), UiError> {
    let toast = document()?.create_element("div")?;
    toast.set_attribute("style", &toast_style(severity, ToastPhase::Entering))?;
    toast.set_text_content(Some(message));
    body()?.append_child(&toast)?;

    for (at_ms, phase) in timings.schedule() {
        let toast = toast.clone();
        Timeout::new(at_ms, move || match phase {
            ToastPhase::Removed => toast.remove(),
            _ => {
                let _ = toast.set_attribute("style", &toast_style(severity, phase));
            }
        })
        .forget();
    }

    Ok(())
}
