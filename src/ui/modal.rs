//! Modal dialog state
//!
//! Two independent modals. Background scroll stays locked while any of them
//! is open.

/// The mini app's modal dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    Profile,
    AvatarUpload,
}

impl ModalKind {
    /// Backdrop element id in the markup
    pub fn element_id(&self) -> &'static str {
        match self {
            ModalKind::Profile => "profileModal",
            ModalKind::AvatarUpload => "avatarUploadModal",
        }
    }

    /// Tracking action emitted when the modal opens
    pub fn open_action(&self) -> Option<&'static str> {
        match self {
            ModalKind::Profile => Some(crate::consts::ACTION_PROFILE_VIEWED),
            ModalKind::AvatarUpload => None,
        }
    }
}

/// Open/closed state of both modals
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ModalSet {
    profile_open: bool,
    avatar_open: bool,
}

impl ModalSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, kind: ModalKind) -> bool {
        match kind {
            ModalKind::Profile => self.profile_open,
            ModalKind::AvatarUpload => self.avatar_open,
        }
    }

    fn slot(&mut self, kind: ModalKind) -> &mut bool {
        match kind {
            ModalKind::Profile => &mut self.profile_open,
            ModalKind::AvatarUpload => &mut self.avatar_open,
        }
    }

    /// Closed → Open. Returns false if it was already open.
    pub fn open(&mut self, kind: ModalKind) -> bool {
        let slot = self.slot(kind);
        let changed = !*slot;
        *slot = true;
        if changed {
            log::debug!("Modal {:?} opened", kind);
        }
        changed
    }

    /// Open → Closed. Returns false if it was already closed.
    pub fn close(&mut self, kind: ModalKind) -> bool {
        let slot = self.slot(kind);
        let changed = *slot;
        *slot = false;
        if changed {
            log::debug!("Modal {:?} closed", kind);
        }
        changed
    }

    /// Body scroll is locked while any modal is open
    pub fn scroll_locked(&self) -> bool {
        self.profile_open || self.avatar_open
    }
}

/// Value for `body.style.overflow`
pub fn body_overflow(scroll_locked: bool) -> &'static str {
    if scroll_locked { "hidden" } else { "auto" }
}

/// Whether a click on a modal should dismiss it.
///
/// Only a click whose target is the backdrop itself counts; clicks bubbling
/// up from the dialog content do not.
pub fn is_backdrop_hit<T: PartialEq + ?Sized>(target: Option<&T>, backdrop: &T) -> bool {
    target.is_some_and(|t| t == backdrop)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_transitions() {
        let mut modals = ModalSet::new();
        assert!(!modals.is_open(ModalKind::Profile));

        assert!(modals.open(ModalKind::Profile));
        assert!(!modals.open(ModalKind::Profile));
        assert!(modals.is_open(ModalKind::Profile));
        assert!(!modals.is_open(ModalKind::AvatarUpload));

        assert!(modals.close(ModalKind::Profile));
        assert!(!modals.close(ModalKind::Profile));
    }

    #[test]
    fn test_scroll_lock_held_while_any_open() {
        let mut modals = ModalSet::new();
        assert_eq!(body_overflow(modals.scroll_locked()), "auto");

        modals.open(ModalKind::Profile);
        modals.open(ModalKind::AvatarUpload);
        assert_eq!(body_overflow(modals.scroll_locked()), "hidden");

        // Closing the nested avatar modal keeps the profile's lock
        modals.close(ModalKind::AvatarUpload);
        assert!(modals.scroll_locked());

        modals.close(ModalKind::Profile);
        assert_eq!(body_overflow(modals.scroll_locked()), "auto");
    }

    #[test]
    fn test_backdrop_hit_test() {
        #[derive(PartialEq)]
        struct Node(u32);

        let backdrop = Node(1);
        let content = Node(2);
        assert!(is_backdrop_hit(Some(&backdrop), &backdrop));
        assert!(!is_backdrop_hit(Some(&content), &backdrop));
        assert!(!is_backdrop_hit(None, &backdrop));
    }

    #[test]
    fn test_only_profile_tracks_open() {
        assert_eq!(ModalKind::Profile.open_action(), Some("ProfileViewed"));
        assert_eq!(ModalKind::AvatarUpload.open_action(), None);
    }
}
