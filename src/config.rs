//! Runtime configuration
//!
//! Timings and limits for the mini app. Developer overrides live in
//! LocalStorage so latency can be tuned without a rebuild.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_AVATAR_BYTES;
use crate::ui::text_fit::FitBounds;
use crate::ui::toast::ToastTimings;

/// Artificial latency of the mock API (milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiDelays {
    /// User, systems and initiatives reads
    pub read_ms: u32,
    /// Join request
    pub join_ms: u32,
    /// Avatar upload
    pub avatar_upload_ms: u32,
}

impl Default for ApiDelays {
    fn default() -> Self {
        Self {
            read_ms: 500,
            join_ms: 1000,
            avatar_upload_ms: 1500,
        }
    }
}

/// Mini app configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiDelays,
    pub toast: ToastTimings,
    pub name_fit: FitBounds,

    /// Largest accepted avatar file
    pub max_avatar_bytes: u64,
    /// Header colour requested from the host
    pub header_color: String,

    // === Start-up ===
    /// Delay before the first profile name fit (lets fonts settle)
    pub name_fit_delay_ms: u32,
    /// Delay before progress bars animate to their width
    pub progress_animation_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiDelays::default(),
            toast: ToastTimings::default(),
            name_fit: FitBounds::default(),

            max_avatar_bytes: MAX_AVATAR_BYTES,
            header_color: "#F9F8FF".to_string(),

            name_fit_delay_ms: 100,
            progress_animation_delay_ms: 500,
        }
    }
}

impl AppConfig {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "em_intranet_config";

    /// Parse overrides; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config overrides from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring malformed config overrides: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Native builds have no LocalStorage
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_product_timings() {
        let config = AppConfig::default();
        assert_eq!(config.api.read_ms, 500);
        assert_eq!(config.api.join_ms, 1000);
        assert_eq!(config.api.avatar_upload_ms, 1500);
        assert_eq!(config.max_avatar_bytes, 5 * 1024 * 1024);
        assert_eq!(config.name_fit.min_px, 12);
        assert_eq!(config.name_fit.max_px, 18);
    }

    #[test]
    fn test_partial_overrides_keep_defaults() {
        let config = AppConfig::from_json(r##"{"api": {"read_ms": 0}, "header_color": "#000000"}"##)
            .unwrap();
        assert_eq!(config.api.read_ms, 0);
        assert_eq!(config.api.join_ms, 1000);
        assert_eq!(config.header_color, "#000000");
        assert_eq!(config.toast, ToastTimings::default());
    }

    #[test]
    fn test_malformed_overrides_rejected() {
        assert!(AppConfig::from_json("{not json").is_err());
    }
}
