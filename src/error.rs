//! Error types for the mini app UI layer

use thiserror::Error;

/// Internal UI failures (markup out of sync with the code, JS calls failing)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// Browser globals are unavailable (not running in a page)
    #[error("Browser window or document is unavailable")]
    NoDocument,

    /// No element carries the given id
    #[error("Element #{0} not found")]
    MissingElement(String),

    /// No element matches the given selector
    #[error("No element matches selector `{0}`")]
    MissingSelector(String),

    /// Element exists but has the wrong type
    #[error("Element `{target}` is not a {expected}")]
    WrongElementType {
        target: String,
        expected: &'static str,
    },

    /// A DOM or host call threw
    #[error("JS call failed: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        UiError::Js(format!("{:?}", value))
    }
}

/// Report a UI failure.
///
/// Debug builds stop at the first missing element so broken markup is caught
/// during development; release builds log and carry on.
pub fn report(context: &str, err: UiError) {
    if cfg!(debug_assertions) {
        panic!("{}: {}", context, err);
    }
    log::warn!("{}: {}", context, err);
}

/// A named, independent set-up step
pub type Step<C> = (&'static str, fn(&C) -> Result<(), UiError>);

/// Run every step even when earlier ones fail, then hand back the failures
pub fn run_all<C>(ctx: &C, steps: &[Step<C>]) -> Vec<(&'static str, UiError)> {
    steps
        .iter()
        .filter_map(|(name, step)| step(ctx).err().map(|e| (*name, e)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_target() {
        assert_eq!(
            UiError::MissingElement("profileModal".into()).to_string(),
            "Element #profileModal not found"
        );
        let err = UiError::WrongElementType {
            target: "#avatarPreview".into(),
            expected: "HtmlImageElement",
        };
        assert_eq!(err.to_string(), "Element `#avatarPreview` is not a HtmlImageElement");
    }

    #[test]
    fn test_run_all_continues_past_failures() {
        use std::cell::RefCell;

        let ran = RefCell::new(Vec::new());
        let steps: [Step<RefCell<Vec<&str>>>; 3] = [
            ("nav", |ran| {
                ran.borrow_mut().push("nav");
                Ok(())
            }),
            ("picker", |_| Err(UiError::MissingElement("avatarFileInput".into()))),
            ("resize", |ran| {
                ran.borrow_mut().push("resize");
                Ok(())
            }),
        ];

        let failures = run_all(&ran, &steps);
        assert_eq!(*ran.borrow(), ["nav", "resize"]);
        assert_eq!(
            failures,
            [("picker", UiError::MissingElement("avatarFileInput".into()))]
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "open profile: Element #profileModal not found")]
    fn test_report_fails_fast_in_debug() {
        report("open profile", UiError::MissingElement("profileModal".into()));
    }
}
