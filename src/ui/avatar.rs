//! Avatar upload flow
//!
//! `Idle → FileChosen → Saving → Idle`. Asynchronous steps (file decode,
//! upload) hand out a `Ticket`; completions carrying a stale ticket are
//! ignored, which is how closing the modal cancels work in flight.

use base64::Engine;
use thiserror::Error;

/// Why an avatar action was refused. `Display` is the user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AvatarError {
    #[error("Выберите изображение (JPG или PNG)")]
    NotAnImage { mime: String },

    #[error("Размер файла не должен превышать {}MB", .limit / (1024 * 1024))]
    TooLarge { size: u64, limit: u64 },

    #[error("Выберите файл для загрузки")]
    NoFileChosen,

    #[error("Сохранение уже выполняется")]
    SaveInProgress,

    #[error("Не удалось прочитать файл")]
    Unreadable(String),
}

/// Handle for an asynchronous step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Observable state of the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarPhase {
    Idle,
    FileChosen,
    Saving,
}

/// Avatar upload form state
#[derive(Debug, Clone)]
pub struct AvatarUpload {
    max_bytes: u64,
    /// Decoded preview of the chosen file
    preview: Option<String>,
    decoding: Option<Ticket>,
    saving: Option<Ticket>,
    next_ticket: u64,
}

impl AvatarUpload {
    pub fn new(max_bytes: u64) -> Self {
        Self {
            max_bytes,
            preview: None,
            decoding: None,
            saving: None,
            next_ticket: 0,
        }
    }

    pub fn phase(&self) -> AvatarPhase {
        if self.saving.is_some() {
            AvatarPhase::Saving
        } else if self.preview.is_some() {
            AvatarPhase::FileChosen
        } else {
            AvatarPhase::Idle
        }
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    fn issue(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }

    /// Check type and size of a candidate file
    pub fn validate(&self, mime: &str, size: u64) -> Result<(), AvatarError> {
        if !mime.starts_with("image/") {
            return Err(AvatarError::NotAnImage {
                mime: mime.to_string(),
            });
        }
        if size > self.max_bytes {
            return Err(AvatarError::TooLarge {
                size,
                limit: self.max_bytes,
            });
        }
        Ok(())
    }

    /// Accept a file for decoding. Rejections leave the state untouched.
    pub fn choose_file(&mut self, mime: &str, size: u64) -> Result<Ticket, AvatarError> {
        if self.saving.is_some() {
            return Err(AvatarError::SaveInProgress);
        }
        self.validate(mime, size)?;
        let ticket = self.issue();
        self.decoding = Some(ticket);
        log::debug!("Avatar file accepted ({}, {} bytes)", mime, size);
        Ok(ticket)
    }

    /// Decode finished. Returns false when the result is stale.
    pub fn finish_decode(&mut self, ticket: Ticket, data_url: String) -> bool {
        if self.decoding != Some(ticket) || self.saving.is_some() {
            log::debug!("Dropping stale avatar decode {:?}", ticket);
            return false;
        }
        self.decoding = None;
        self.preview = Some(data_url);
        true
    }

    /// Decode failed; forget the pending ticket
    pub fn fail_decode(&mut self, ticket: Ticket) {
        if self.decoding == Some(ticket) {
            self.decoding = None;
        }
    }

    /// FileChosen → Saving. Returns the ticket and the image to upload.
    pub fn begin_save(&mut self) -> Result<(Ticket, String), AvatarError> {
        if self.saving.is_some() {
            return Err(AvatarError::SaveInProgress);
        }
        let Some(preview) = self.preview.clone() else {
            return Err(AvatarError::NoFileChosen);
        };
        let ticket = self.issue();
        self.saving = Some(ticket);
        Ok((ticket, preview))
    }

    /// Saving → Idle. Returns the saved image, or None if the save was
    /// cancelled meanwhile.
    pub fn finish_save(&mut self, ticket: Ticket) -> Option<String> {
        if self.saving != Some(ticket) {
            log::info!("Avatar save {:?} finished after cancel, ignoring", ticket);
            return None;
        }
        self.saving = None;
        self.decoding = None;
        self.preview.take()
    }

    /// Back to Idle, cancelling any decode or save in flight
    pub fn reset(&mut self) {
        if self.saving.is_some() {
            log::info!("Avatar save cancelled");
        }
        self.preview = None;
        self.decoding = None;
        self.saving = None;
    }
}

/// Encode file bytes as a `data:` URI
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime, encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_AVATAR_BYTES;

    fn upload() -> AvatarUpload {
        AvatarUpload::new(MAX_AVATAR_BYTES)
    }

    fn chosen(flow: &mut AvatarUpload, url: &str) {
        let ticket = flow.choose_file("image/png", 1024).unwrap();
        assert!(flow.finish_decode(ticket, url.to_string()));
    }

    #[test]
    fn test_rejects_non_image() {
        let mut flow = upload();
        let err = flow.choose_file("application/pdf", 10).unwrap_err();
        assert_eq!(err.to_string(), "Выберите изображение (JPG или PNG)");
        assert_eq!(flow.phase(), AvatarPhase::Idle);
    }

    #[test]
    fn test_rejects_oversized() {
        let mut flow = upload();
        chosen(&mut flow, "data:image/png;base64,AA==");

        let err = flow.choose_file("image/jpeg", MAX_AVATAR_BYTES + 1).unwrap_err();
        assert_eq!(err.to_string(), "Размер файла не должен превышать 5MB");
        // Earlier choice survives the rejection
        assert_eq!(flow.phase(), AvatarPhase::FileChosen);
        assert_eq!(flow.preview(), Some("data:image/png;base64,AA=="));
    }

    #[test]
    fn test_limit_is_inclusive() {
        assert!(upload().validate("image/png", MAX_AVATAR_BYTES).is_ok());
    }

    #[test]
    fn test_valid_image_reaches_file_chosen() {
        let mut flow = upload();
        let ticket = flow.choose_file("image/webp", 2048).unwrap();
        assert_eq!(flow.phase(), AvatarPhase::Idle);
        assert!(flow.finish_decode(ticket, "data:image/webp;base64,AA==".into()));
        assert_eq!(flow.phase(), AvatarPhase::FileChosen);
    }

    #[test]
    fn test_stale_decode_dropped() {
        let mut flow = upload();
        let first = flow.choose_file("image/png", 1).unwrap();
        let second = flow.choose_file("image/png", 2).unwrap();
        assert!(!flow.finish_decode(first, "first".into()));
        assert!(flow.finish_decode(second, "second".into()));
        assert_eq!(flow.preview(), Some("second"));
    }

    #[test]
    fn test_save_requires_file() {
        let mut flow = upload();
        assert_eq!(flow.begin_save().unwrap_err(), AvatarError::NoFileChosen);
    }

    #[test]
    fn test_save_round_trip() {
        let mut flow = upload();
        chosen(&mut flow, "data:image/png;base64,AQID");

        let (ticket, image) = flow.begin_save().unwrap();
        assert_eq!(image, "data:image/png;base64,AQID");
        assert_eq!(flow.phase(), AvatarPhase::Saving);
        assert_eq!(flow.begin_save().unwrap_err(), AvatarError::SaveInProgress);
        assert_eq!(
            flow.choose_file("image/png", 1).unwrap_err(),
            AvatarError::SaveInProgress
        );

        assert_eq!(flow.finish_save(ticket).as_deref(), Some("data:image/png;base64,AQID"));
        assert_eq!(flow.phase(), AvatarPhase::Idle);
    }

    #[test]
    fn test_reset_cancels_save() {
        let mut flow = upload();
        chosen(&mut flow, "data:image/png;base64,AQID");
        let (ticket, _) = flow.begin_save().unwrap();

        flow.reset();
        assert_eq!(flow.finish_save(ticket), None);
        assert_eq!(flow.phase(), AvatarPhase::Idle);
    }

    #[test]
    fn test_encode_data_url() {
        assert_eq!(encode_data_url("image/png", &[1, 2, 3]), "data:image/png;base64,AQID");
    }
}
