//! Mini app records and the in-memory mock repository
//!
//! The repository is constructed once at start-up and shared with the API
//! facade and the controllers. It is the single source of truth for the
//! session; nothing here is persisted.

pub mod store;
pub mod types;

pub use store::{MockStore, SharedStore};
pub use types::{Initiative, InitiativeStatus, Profile, PsychoCard, System, User, personality_label};
