//! EM.Intranet mini app - profile, systems and initiatives inside Telegram
//!
//! Core modules:
//! - `model`: Records and the in-memory mock repository
//! - `api`: Asynchronous mock API facade with artificial latency
//! - `ui`: Platform-free UI state (modals, avatar flow, text fit, toasts)
//! - `bridge`: Host bridge contract and tracking events
//! - `dom`: Browser bindings (wasm32 only)

pub mod api;
pub mod bridge;
pub mod config;
pub mod error;
pub mod model;
pub mod ui;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use config::AppConfig;
pub use error::UiError;
pub use model::{MockStore, SharedStore};

/// Fixed identifiers and product constants
pub mod consts {
    /// Placeholder avatar served with the static assets
    pub const AVATAR_PLACEHOLDER_URL: &str = "static/avatar_placeholder.svg";
    /// User id attached to tracking events (no auth in the mini app)
    pub const CURRENT_USER_ID: &str = "current_user";

    /// Tracking actions
    pub const ACTION_PROFILE_VIEWED: &str = "ProfileViewed";
    pub const ACTION_PROFILE_PHOTO_CHANGED: &str = "ProfilePhotoChanged";

    /// 5 MiB avatar upload limit
    pub const MAX_AVATAR_BYTES: u64 = 5 * 1024 * 1024;
}
