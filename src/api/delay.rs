//! Artificial latency sources
//!
//! The mock API awaits one of these before answering. Browser builds use
//! real timers; the native preview blocks the thread.

use async_trait::async_trait;

/// Something that can wait for a number of milliseconds
#[async_trait(?Send)]
pub trait Delay {
    async fn sleep(&self, ms: u32);
}

/// Browser timer (`setTimeout`)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerDelay;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl Delay for TimerDelay {
    async fn sleep(&self, ms: u32) {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}

/// Blocking sleep for the native preview
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDelay;

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl Delay for ThreadDelay {
    async fn sleep(&self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}

/// Virtual clock: sleeping advances time instantly
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct VirtualClock {
    now_ms: std::cell::Cell<u64>,
}

#[cfg(test)]
impl VirtualClock {
    pub(crate) fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }
}

#[cfg(test)]
#[async_trait(?Send)]
impl Delay for VirtualClock {
    async fn sleep(&self, ms: u32) {
        self.now_ms.set(self.now_ms.get() + u64::from(ms));
    }
}

#[async_trait(?Send)]
impl<D: Delay> Delay for std::rc::Rc<D> {
    async fn sleep(&self, ms: u32) {
        (**self).sleep(ms).await;
    }
}
