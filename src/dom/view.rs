//! `ProfileView` on the real page

use web_sys::HtmlElement;

use super::{alert, avatar, body, by_id, profile, set_style, toast};
use crate::error::{UiError, report};
use crate::model::Profile;
use crate::ui::controller::{AvatarTarget, ProfileView};
use crate::ui::{ModalKind, Severity, ToastTimings, body_overflow};

pub struct DomView {
    pub toast: ToastTimings,
}

impl ProfileView for DomView {
    fn render_profile(&self, profile: &Profile) -> Result<(), UiError> {
        profile::render_profile(profile)
    }

    fn set_modal_visible(&self, kind: ModalKind, visible: bool) -> Result<(), UiError> {
        let display = if visible { "flex" } else { "none" };
        set_style(&by_id::<HtmlElement>(kind.element_id())?, "display", display)
    }

    fn set_scroll_locked(&self, locked: bool) -> Result<(), UiError> {
        set_style(&body()?, "overflow", body_overflow(locked))
    }

    fn reset_avatar_form(&self) -> Result<(), UiError> {
        avatar::reset_form()
    }

    fn show_avatar_preview(&self, data_url: &str) -> Result<(), UiError> {
        avatar::show_preview(data_url)
    }

    fn set_saving(&self, saving: bool) -> Result<(), UiError> {
        avatar::set_saving(saving)
    }

    fn set_avatar(&self, target: AvatarTarget, url: &str) -> Result<(), UiError> {
        profile::set_avatar(target, url)
    }

    fn alert(&self, message: &str) {
        alert(message);
    }

    fn toast(&self, message: &str, severity: Severity) {
        if let Err(e) = toast::show(message, severity, self.toast) {
            report("show toast", e);
        }
    }
}
