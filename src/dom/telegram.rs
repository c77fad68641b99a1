//! Telegram WebApp host bridge
//!
//! `window.Telegram.WebApp` is injected by the Telegram client. Methods are
//! looked up dynamically so a partial or missing object never throws.

use std::rc::Rc;

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::bridge::{HostBridge, NoopBridge};

pub struct TelegramBridge {
    webapp: JsValue,
}

impl TelegramBridge {
    /// Find `window.Telegram.WebApp`
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let telegram = Reflect::get(&window, &JsValue::from_str("Telegram")).ok()?;
        if telegram.is_undefined() || telegram.is_null() {
            return None;
        }
        let webapp = Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?;
        if webapp.is_undefined() || webapp.is_null() {
            return None;
        }
        Some(Self { webapp })
    }

    fn call(&self, method: &str, args: &[JsValue]) {
        let result = Reflect::get(&self.webapp, &JsValue::from_str(method))
            .and_then(|f| f.dyn_into::<Function>())
            .and_then(|f| Reflect::apply(&f, &self.webapp, &args.iter().collect::<Array>()));
        if let Err(e) = result {
            log::warn!("Telegram.WebApp.{} failed: {:?}", method, e);
        }
    }
}

impl HostBridge for TelegramBridge {
    fn name(&self) -> &'static str {
        "telegram"
    }

    fn expand(&self) {
        self.call("expand", &[]);
    }

    fn set_header_color(&self, color: &str) {
        self.call("setHeaderColor", &[JsValue::from_str(color)]);
    }

    fn ready(&self) {
        self.call("ready", &[]);
    }

    fn send_data(&self, payload: &str) {
        self.call("sendData", &[JsValue::from_str(payload)]);
    }
}

/// Telegram bridge when present, otherwise the no-op fallback
pub fn connect() -> Rc<dyn HostBridge> {
    match TelegramBridge::detect() {
        Some(bridge) => Rc::new(bridge),
        None => {
            log::info!("Telegram WebApp not found, running in a plain browser");
            Rc::new(NoopBridge)
        }
    }
}
