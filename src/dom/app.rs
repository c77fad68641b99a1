//! Mini app controller
//!
//! One instance per page, shared by every event handler. Runs the async
//! steps against the API facade and hands results to the profile controller.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use super::view::DomView;
use super::{alert, avatar, by_id, dashboard, text_fit};
use crate::api::{MiniAppApi, MockApi, TimerDelay};
use crate::bridge::{HostBridge, Tracker};
use crate::config::AppConfig;
use crate::error::{UiError, report};
use crate::model::SharedStore;
use crate::ui::ProfileController;
use crate::ui::notices::{create_initiative_notice, join_notice, route_notice};

pub struct App {
    config: AppConfig,
    store: SharedStore,
    api: MockApi<TimerDelay>,
    profile: ProfileController<DomView>,
}

impl App {
    pub fn new(config: AppConfig, store: SharedStore, bridge: Rc<dyn HostBridge>) -> Rc<Self> {
        let api = MockApi::new(store.clone(), config.api, TimerDelay);
        let profile = ProfileController::new(
            store.clone(),
            Tracker::new(bridge),
            DomView { toast: config.toast },
            config.max_avatar_bytes,
        );
        Rc::new(Self {
            config,
            store,
            api,
            profile,
        })
    }

    /// Page set up: listeners are wired, run the first render
    pub fn on_dom_ready(self: &Rc<Self>) {
        log::info!("EM.Intranet mini app loaded");

        if let Err(e) = dashboard::wire_card_hover() {
            report("wire system cards", e);
        }
        if let Err(e) = dashboard::animate_progress_bars(self.config.progress_animation_delay_ms) {
            report("animate progress bars", e);
        }

        let app = self.clone();
        Timeout::new(self.config.name_fit_delay_ms, move || app.fit_profile_name()).forget();

        self.load_dashboard();
    }

    /// Fetch user, systems and initiatives in order and render each
    pub fn load_dashboard(self: &Rc<Self>) {
        let app = self.clone();
        spawn_local(async move {
            let user = app.api.fetch_user().await;
            if let Err(e) = dashboard::render_user(&user) {
                report("render user", e);
            }

            let systems = app.api.fetch_systems().await;
            if let Err(e) = dashboard::render_systems(&app, &systems) {
                report("render systems", e);
            }

            let initiatives = app.api.fetch_initiatives().await;
            if let Err(e) =
                dashboard::render_initiatives(&initiatives, app.config.progress_animation_delay_ms)
            {
                report("render initiatives", e);
            }
        });
    }

    // === Navigation & stubs ===

    pub fn open_nav(&self, route: &str) {
        log::info!("Navigation to {:?} is not implemented yet", route);
        alert(&route_notice(route));
    }

    pub fn join_system(self: &Rc<Self>, system_id: &str) {
        log::info!("Join system {:?} requested", system_id);
        let notice = {
            let store = self.store.borrow();
            join_notice(store.system_name(system_id))
        };
        alert(&notice);

        let app = self.clone();
        let id = system_id.to_string();
        spawn_local(async move {
            let receipt = app.api.join_system(&id).await;
            log::info!("Join {}: {} ({})", id, receipt.success, receipt.message);
        });
    }

    pub fn create_initiative(&self) {
        log::info!("Initiative creation is not implemented yet");
        alert(create_initiative_notice());
    }

    pub fn toggle_mobile_drawer(&self) {
        let result = by_id::<Element>("mobileDrawer")
            .and_then(|drawer| drawer.class_list().toggle("open").map_err(UiError::from));
        if let Err(e) = result {
            report("toggle mobile drawer", e);
        }
    }

    // === Profile & avatar ===

    pub fn open_profile(&self) {
        log::info!("Opening profile");
        self.profile.open_profile();
    }

    pub fn close_profile(&self) {
        self.profile.close_profile();
    }

    pub fn change_avatar(&self) {
        self.profile.change_avatar();
    }

    /// Close the upload modal. A save still in flight is cancelled.
    pub fn close_avatar_upload(&self) {
        self.profile.close_avatar_upload();
    }

    /// File input changed: validate, then decode into a preview
    pub fn on_avatar_file_chosen(self: &Rc<Self>) {
        let file = match avatar::selected_file() {
            Ok(Some(file)) => file,
            Ok(None) => return,
            Err(e) => return report("read avatar input", e),
        };
        let Some(ticket) = self.profile.choose_file(&file.type_(), file.size() as u64) else {
            return;
        };

        let app = self.clone();
        spawn_local(async move {
            match avatar::read_data_url(file).await {
                Ok(data_url) => app.profile.finish_decode(ticket, data_url),
                Err(e) => app.profile.fail_decode(ticket, &e.to_string()),
            }
        });
    }

    pub fn save_avatar(self: &Rc<Self>) {
        let Some((ticket, image)) = self.profile.begin_save() else {
            return;
        };

        let app = self.clone();
        spawn_local(async move {
            let receipt = app.api.upload_avatar(&image).await;
            app.profile.finish_save(ticket, receipt.avatar_url);
        });
    }

    // === Misc ===

    pub fn fit_profile_name(&self) {
        match text_fit::fit_profile_name(&self.config.name_fit) {
            Ok(Some(size)) => log::debug!("Profile name fitted at {}px", size),
            Ok(None) => {}
            Err(e) => report("fit profile name", e),
        }
    }
}
