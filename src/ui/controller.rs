//! Profile and avatar modal controller
//!
//! Drives `ModalSet` and `AvatarUpload` and pushes every visible change
//! through a `ProfileView`. The browser implements the view on the DOM;
//! tests record the calls.

use std::cell::RefCell;

use serde_json::json;

use super::avatar::{AvatarPhase, AvatarUpload, Ticket};
use super::modal::{ModalKind, ModalSet};
use super::toast::Severity;
use crate::bridge::Tracker;
use crate::consts::{ACTION_PROFILE_PHOTO_CHANGED, CURRENT_USER_ID};
use crate::error::{UiError, report};
use crate::model::{Profile, SharedStore};

pub const AVATAR_SAVED_MESSAGE: &str = "Фото профиля успешно обновлено!";

/// Places the current avatar is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarTarget {
    /// Image in the profile modal
    ProfileDetail,
    /// Badge in the page header
    HeaderBadge,
    /// Badge in the sidebar
    SidebarBadge,
}

impl AvatarTarget {
    pub const ALL: [AvatarTarget; 3] = [
        AvatarTarget::ProfileDetail,
        AvatarTarget::HeaderBadge,
        AvatarTarget::SidebarBadge,
    ];
}

/// Rendering side of the controller
pub trait ProfileView {
    fn render_profile(&self, profile: &Profile) -> Result<(), UiError>;
    fn set_modal_visible(&self, kind: ModalKind, visible: bool) -> Result<(), UiError>;
    fn set_scroll_locked(&self, locked: bool) -> Result<(), UiError>;
    /// Empty picker, placeholder shown, save disabled
    fn reset_avatar_form(&self) -> Result<(), UiError>;
    /// Preview shown, save enabled
    fn show_avatar_preview(&self, data_url: &str) -> Result<(), UiError>;
    fn set_saving(&self, saving: bool) -> Result<(), UiError>;
    fn set_avatar(&self, target: AvatarTarget, url: &str) -> Result<(), UiError>;
    /// Blocking notice
    fn alert(&self, message: &str);
    fn toast(&self, message: &str, severity: Severity);
}

pub struct ProfileController<V> {
    store: SharedStore,
    tracker: Tracker,
    view: V,
    modals: RefCell<ModalSet>,
    avatar: RefCell<AvatarUpload>,
}

impl<V: ProfileView> ProfileController<V> {
    pub fn new(store: SharedStore, tracker: Tracker, view: V, max_avatar_bytes: u64) -> Self {
        Self {
            store,
            tracker,
            view,
            modals: RefCell::new(ModalSet::new()),
            avatar: RefCell::new(AvatarUpload::new(max_avatar_bytes)),
        }
    }

    #[cfg(test)]
    fn view(&self) -> &V {
        &self.view
    }

    pub fn avatar_phase(&self) -> AvatarPhase {
        self.avatar.borrow().phase()
    }

    fn show_modal(&self, kind: ModalKind) -> Result<(), UiError> {
        self.view.set_modal_visible(kind, true)?;
        let opened = self.modals.borrow_mut().open(kind);
        self.apply_scroll_lock()?;
        if opened {
            log::info!("Modal {:?} opened", kind);
            if let Some(action) = kind.open_action() {
                self.tracker.track(action, json!({ "userId": CURRENT_USER_ID }));
            }
        }
        Ok(())
    }

    fn hide_modal(&self, kind: ModalKind) -> Result<(), UiError> {
        self.view.set_modal_visible(kind, false)?;
        if self.modals.borrow_mut().close(kind) {
            log::info!("Modal {:?} closed", kind);
        }
        self.apply_scroll_lock()
    }

    fn apply_scroll_lock(&self) -> Result<(), UiError> {
        let locked = self.modals.borrow().scroll_locked();
        self.view.set_scroll_locked(locked)
    }

    pub fn open_profile(&self) {
        let rendered = {
            let store = self.store.borrow();
            self.view.render_profile(&store.profile)
        };
        if let Err(e) = rendered.and_then(|_| self.show_modal(ModalKind::Profile)) {
            report("open profile", e);
        }
    }

    pub fn close_profile(&self) {
        if let Err(e) = self.hide_modal(ModalKind::Profile) {
            report("close profile", e);
        }
    }

    /// Cancel any decode or save and restore the save button if needed
    fn cancel_avatar_work(&self) -> Result<(), UiError> {
        let was_saving = self.avatar_phase() == AvatarPhase::Saving;
        self.avatar.borrow_mut().reset();
        if was_saving {
            self.view.set_saving(false)?;
        }
        Ok(())
    }

    pub fn change_avatar(&self) {
        let result = self
            .cancel_avatar_work()
            .and_then(|_| self.view.reset_avatar_form())
            .and_then(|_| self.show_modal(ModalKind::AvatarUpload));
        if let Err(e) = result {
            report("open avatar upload", e);
        }
    }

    /// Close the upload modal. A save still in flight is cancelled.
    pub fn close_avatar_upload(&self) {
        let result = self
            .cancel_avatar_work()
            .and_then(|_| self.hide_modal(ModalKind::AvatarUpload));
        if let Err(e) = result {
            report("close avatar upload", e);
        }
    }

    /// Validate a picked file. `None` means it was refused and the user told.
    pub fn choose_file(&self, mime: &str, size: u64) -> Option<Ticket> {
        let accepted = self.avatar.borrow_mut().choose_file(mime, size);
        match accepted {
            Ok(ticket) => Some(ticket),
            Err(e) => {
                log::warn!("Avatar file rejected: {:?}", e);
                self.view.alert(&e.to_string());
                None
            }
        }
    }

    pub fn finish_decode(&self, ticket: Ticket, data_url: String) {
        let fresh = self.avatar.borrow_mut().finish_decode(ticket, data_url.clone());
        if fresh {
            if let Err(e) = self.view.show_avatar_preview(&data_url) {
                report("show avatar preview", e);
            }
        }
    }

    pub fn fail_decode(&self, ticket: Ticket, message: &str) {
        log::error!("Avatar decode failed: {}", message);
        self.avatar.borrow_mut().fail_decode(ticket);
        self.view.alert(message);
    }

    /// Start saving the previewed image. Returns what to upload.
    pub fn begin_save(&self) -> Option<(Ticket, String)> {
        let started = self.avatar.borrow_mut().begin_save();
        match started {
            Ok(started) => {
                if let Err(e) = self.view.set_saving(true) {
                    report("disable avatar save", e);
                }
                Some(started)
            }
            Err(e) => {
                self.view.alert(&e.to_string());
                None
            }
        }
    }

    /// Upload finished. Ignored when the save was cancelled meanwhile.
    pub fn finish_save(&self, ticket: Ticket, avatar_url: String) {
        if self.avatar.borrow_mut().finish_save(ticket).is_none() {
            return;
        }

        self.store.borrow_mut().set_avatar_url(avatar_url.clone());
        for target in AvatarTarget::ALL {
            if let Err(e) = self.view.set_avatar(target, &avatar_url) {
                report("apply avatar", e);
            }
        }
        self.tracker
            .track(ACTION_PROFILE_PHOTO_CHANGED, json!({ "userId": CURRENT_USER_ID }));

        self.close_avatar_upload();
        self.view.toast(AVATAR_SAVED_MESSAGE, Severity::Success);

        if let Err(e) = self.view.set_saving(false) {
            report("re-enable avatar save", e);
        }
    }
}
