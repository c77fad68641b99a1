//! EM.Intranet mini app entry point
//!
//! In the browser the app boots from `wasm_main`. The native build prints a
//! headless preview of the mock data through the same API facade.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    mini_app::dom::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("EM.Intranet mini app (native preview) starting...");
    log::info!("The UI runs in the browser - build for wasm32 with `trunk serve`");

    futures::executor::block_on(preview::run(mini_app::AppConfig::load()));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod preview {
    use mini_app::api::{MiniAppApi, MockApi, ThreadDelay};
    use mini_app::{AppConfig, MockStore};

    pub async fn run(config: AppConfig) {
        let store = MockStore::seeded().into_shared();
        let api = MockApi::new(store.clone(), config.api, ThreadDelay);

        let user = api.fetch_user().await;
        println!(
            "\n{} · {} · {} / {} XP (уровень {})",
            user.name,
            user.guild,
            user.xp,
            user.max_xp,
            user.level()
        );
        println!("  {}", user.profile);

        let profile = store.borrow().profile.clone();
        println!("\n{}, {} · {}", profile.full_name, profile.role, profile.personality_badge());
        for card in &profile.cards {
            println!("  [{}] {}: {}", card.id, card.title, card.insight);
        }

        println!("\nСистемы:");
        for system in api.fetch_systems().await {
            println!(
                "  {} {} ({}, {})",
                system.icon,
                system.name,
                system.participants_label(),
                system.leaders_label()
            );
        }

        println!("\nИнициативы:");
        for initiative in api.fetch_initiatives().await {
            println!(
                "  #{} {} · {}% · +{} XP · {}",
                initiative.id,
                initiative.title,
                initiative.progress.min(100),
                initiative.xp_reward,
                initiative.status.label()
            );
        }
    }
}
