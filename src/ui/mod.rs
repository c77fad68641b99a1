//! Platform-free UI state
//!
//! Everything the browser layer decides lives here so it can be tested
//! natively:
//! - No DOM types
//! - No timers (callers pass elapsed time or tickets)

pub mod avatar;
pub mod controller;
pub mod modal;
pub mod notices;
pub mod text_fit;
pub mod toast;

pub use avatar::{AvatarError, AvatarPhase, AvatarUpload, Ticket, encode_data_url};
pub use controller::{AvatarTarget, ProfileController, ProfileView};
pub use modal::{ModalKind, ModalSet, body_overflow, is_backdrop_hit};
pub use text_fit::{FitBounds, fit_font_size, parse_px};
pub use toast::{Severity, ToastPhase, ToastTimings};
