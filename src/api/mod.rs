//! Mini app API
//!
//! `MiniAppApi` is the contract the UI talks to. `MockApi` answers it from
//! the in-memory store after an artificial delay; a networked client can
//! implement the same trait without touching the callers.

pub mod delay;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::ApiDelays;
use crate::model::{Initiative, SharedStore, System, User};

pub use delay::Delay;
#[cfg(not(target_arch = "wasm32"))]
pub use delay::ThreadDelay;
#[cfg(target_arch = "wasm32")]
pub use delay::TimerDelay;

/// Answer to a join request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinReceipt {
    pub success: bool,
    pub message: String,
}

/// Answer to an avatar upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarReceipt {
    /// URL the avatar is now served from
    pub avatar_url: String,
}

/// Operations the mini app needs from its backend
#[async_trait(?Send)]
pub trait MiniAppApi {
    async fn fetch_user(&self) -> User;
    async fn fetch_systems(&self) -> Vec<System>;
    async fn fetch_initiatives(&self) -> Vec<Initiative>;
    /// Request to join a system; does not change participant counts
    async fn join_system(&self, system_id: &str) -> JoinReceipt;
    /// Store a new avatar image; the caller commits the returned URL
    async fn upload_avatar(&self, data_url: &str) -> AvatarReceipt;
}

/// Mock backend over the shared store
pub struct MockApi<D: Delay> {
    store: SharedStore,
    delays: ApiDelays,
    delay: D,
}

impl<D: Delay> MockApi<D> {
    pub fn new(store: SharedStore, delays: ApiDelays, delay: D) -> Self {
        Self { store, delays, delay }
    }
}

#[async_trait(?Send)]
impl<D: Delay> MiniAppApi for MockApi<D> {
    async fn fetch_user(&self) -> User {
        log::info!("MockApi: fetching user");
        self.delay.sleep(self.delays.read_ms).await;
        self.store.borrow().user.clone()
    }

    async fn fetch_systems(&self) -> Vec<System> {
        log::info!("MockApi: fetching systems");
        self.delay.sleep(self.delays.read_ms).await;
        self.store.borrow().systems.clone()
    }

    async fn fetch_initiatives(&self) -> Vec<Initiative> {
        log::info!("MockApi: fetching initiatives");
        self.delay.sleep(self.delays.read_ms).await;
        self.store.borrow().initiatives.clone()
    }

    async fn join_system(&self, system_id: &str) -> JoinReceipt {
        log::info!("MockApi: joining system {}", system_id);
        self.delay.sleep(self.delays.join_ms).await;
        if self.store.borrow().system(system_id).is_some() {
            JoinReceipt {
                success: true,
                message: "Заявка отправлена".into(),
            }
        } else {
            log::warn!("MockApi: unknown system {}", system_id);
            JoinReceipt {
                success: false,
                message: "Система не найдена".into(),
            }
        }
    }

    async fn upload_avatar(&self, data_url: &str) -> AvatarReceipt {
        log::info!("MockApi: uploading avatar ({} bytes)", data_url.len());
        self.delay.sleep(self.delays.avatar_upload_ms).await;
        AvatarReceipt {
            avatar_url: data_url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::delay::VirtualClock;
    use super::*;
    use crate::model::MockStore;
    use futures::executor::block_on;
    use std::rc::Rc;

    fn api() -> (MockApi<Rc<VirtualClock>>, Rc<VirtualClock>, SharedStore) {
        let clock = Rc::new(VirtualClock::default());
        let store = MockStore::seeded().into_shared();
        let api = MockApi::new(store.clone(), ApiDelays::default(), clock.clone());
        (api, clock, store)
    }

    #[test]
    fn test_fetch_user_after_read_delay() {
        let (api, clock, store) = api();
        let user = block_on(api.fetch_user());
        assert_eq!(clock.now_ms(), 500);
        assert_eq!(user, store.borrow().user);
    }

    #[test]
    fn test_fetch_systems_scenario() {
        let (api, clock, _) = api();
        let systems = block_on(api.fetch_systems());
        assert_eq!(clock.now_ms(), 500);

        let ids: Vec<_> = systems.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["giphy", "mycelium", "dna-codes", "ravens"]);
        let counts: Vec<_> = systems.iter().map(|s| s.participants).collect();
        assert_eq!(counts, [8, 5, 6, 7]);
    }

    #[test]
    fn test_fetch_initiatives() {
        let (api, clock, store) = api();
        let initiatives = block_on(api.fetch_initiatives());
        assert_eq!(clock.now_ms(), 500);
        assert_eq!(initiatives, store.borrow().initiatives);
    }

    #[test]
    fn test_join_system_takes_longer_and_changes_nothing() {
        let (api, clock, store) = api();
        let before = store.borrow().clone();

        let receipt = block_on(api.join_system("ravens"));
        assert_eq!(clock.now_ms(), 1000);
        assert!(receipt.success);
        assert_eq!(receipt.message, "Заявка отправлена");
        assert_eq!(*store.borrow(), before);
    }

    #[test]
    fn test_join_unknown_system() {
        let (api, _, _) = api();
        let receipt = block_on(api.join_system("owls"));
        assert!(!receipt.success);
    }

    #[test]
    fn test_upload_avatar_does_not_commit() {
        let (api, clock, store) = api();
        let receipt = block_on(api.upload_avatar("data:image/png;base64,AAAA"));
        assert_eq!(clock.now_ms(), 1500);
        assert_eq!(receipt.avatar_url, "data:image/png;base64,AAAA");
        assert!(!store.borrow().profile.has_custom_avatar());
    }

    #[test]
    fn test_sequential_calls_accumulate_delay() {
        let (api, clock, _) = api();
        block_on(async {
            api.fetch_user().await;
            api.fetch_systems().await;
            api.join_system("giphy").await;
        });
        assert_eq!(clock.now_ms(), 2000);
    }
}
