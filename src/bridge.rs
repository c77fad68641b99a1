//! Host bridge contract and user-action tracking
//!
//! The host (Telegram WebApp) is optional. Without it every call degrades to
//! a log line.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Lifecycle and messaging hooks offered by the embedding chat client
pub trait HostBridge {
    /// Short name for logs
    fn name(&self) -> &'static str;
    fn expand(&self);
    fn set_header_color(&self, color: &str);
    fn ready(&self);
    /// Send a payload over the host data channel
    fn send_data(&self, payload: &str);
}

/// Fallback when the page runs in a plain browser
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopBridge;

impl HostBridge for NoopBridge {
    fn name(&self) -> &'static str {
        "browser"
    }

    fn expand(&self) {}

    fn set_header_color(&self, _color: &str) {}

    fn ready(&self) {}

    fn send_data(&self, payload: &str) {
        log::debug!("No host bridge, dropping payload: {}", payload);
    }
}

/// Prepare the host: full height, header colour, ready signal
pub fn init_host(bridge: &dyn HostBridge, header_color: &str) {
    bridge.expand();
    bridge.set_header_color(header_color);
    bridge.ready();
    log::info!("Host bridge initialized ({})", bridge.name());
}

/// A tracked user action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingEvent {
    pub action: String,
    pub data: serde_json::Value,
    /// Unix timestamp (ms)
    pub timestamp: u64,
}

impl TrackingEvent {
    pub fn new(action: &str, data: serde_json::Value, timestamp: u64) -> Self {
        Self {
            action: action.to_string(),
            data,
            timestamp,
        }
    }

    pub fn to_json(&self) -> String {
        // Value and primitives only, serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Sends tracking events through the host bridge
#[derive(Clone)]
pub struct Tracker {
    bridge: Rc<dyn HostBridge>,
}

impl Tracker {
    pub fn new(bridge: Rc<dyn HostBridge>) -> Self {
        Self { bridge }
    }

    /// Track an action now
    pub fn track(&self, action: &str, data: serde_json::Value) -> TrackingEvent {
        self.track_at(action, data, now_ms())
    }

    /// Track an action with an explicit timestamp
    pub fn track_at(&self, action: &str, data: serde_json::Value, timestamp: u64) -> TrackingEvent {
        let event = TrackingEvent::new(action, data, timestamp);
        log::info!("User action: {} {}", event.action, event.data);
        self.bridge.send_data(&event.to_json());
        event
    }
}

/// Current Unix time in milliseconds
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingBridge {
        calls: RefCell<Vec<String>>,
    }

    impl HostBridge for RecordingBridge {
        fn name(&self) -> &'static str {
            "recording"
        }
        fn expand(&self) {
            self.calls.borrow_mut().push("expand".into());
        }
        fn set_header_color(&self, color: &str) {
            self.calls.borrow_mut().push(format!("setHeaderColor {}", color));
        }
        fn ready(&self) {
            self.calls.borrow_mut().push("ready".into());
        }
        fn send_data(&self, payload: &str) {
            self.calls.borrow_mut().push(payload.to_string());
        }
    }

    #[test]
    fn test_init_host_order() {
        let bridge = RecordingBridge::default();
        init_host(&bridge, "#F9F8FF");
        assert_eq!(
            *bridge.calls.borrow(),
            ["expand", "setHeaderColor #F9F8FF", "ready"]
        );
    }

    #[test]
    fn test_tracking_event_format() {
        let bridge = Rc::new(RecordingBridge::default());
        let tracker = Tracker::new(bridge.clone());
        tracker.track_at("ProfileViewed", json!({"userId": "current_user"}), 1_700_000_000_000);

        let sent = bridge.calls.borrow();
        assert_eq!(sent.len(), 1);
        let value: serde_json::Value = serde_json::from_str(&sent[0]).unwrap();
        assert_eq!(
            value,
            json!({
                "action": "ProfileViewed",
                "data": {"userId": "current_user"},
                "timestamp": 1_700_000_000_000u64
            })
        );
    }

    #[test]
    fn test_noop_bridge_never_fails() {
        let tracker = Tracker::new(Rc::new(NoopBridge));
        let event = tracker.track("ProfilePhotoChanged", json!({}));
        assert_eq!(event.action, "ProfilePhotoChanged");
        init_host(&NoopBridge, "#FFFFFF");
    }
}
