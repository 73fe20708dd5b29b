//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::mock_data;
use crate::models::{Application, Opportunity, Profile, Round};

/// Which page the main column shows
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AppView {
    #[default]
    Opportunities,
    Applications,
    /// Detail page of one application
    Detail(u32),
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Loaded from local storage on mount, `None` while onboarding
    pub profile: Option<Profile>,
    pub opportunities: Vec<Opportunity>,
    /// Tracked applications, rounds included; lost on reload
    pub applications: Vec<Application>,
    pub view: AppView,
}

impl AppState {
    pub fn new(profile: Option<Profile>) -> Self {
        Self {
            profile,
            opportunities: mock_data::opportunities(),
            applications: mock_data::applications(),
            view: AppView::Opportunities,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// State Transitions
// ========================

/// Application for `opportunity_id`, creating it if it is not tracked yet.
/// Returns the application id.
pub fn track_opportunity(applications: &mut Vec<Application>, opportunity_id: u32, today: &str) -> u32 {
    if let Some(existing) = applications.iter().find(|a| a.opportunity_id == opportunity_id) {
        return existing.id;
    }
    let id = applications.iter().map(|a| a.id).max().unwrap_or(0) + 1;
    applications.push(Application::new(id, opportunity_id, today.to_string()));
    log::info!("[STORE] tracking opportunity {} as application {}", opportunity_id, id);
    id
}

/// Replace the rounds of one application wholesale
pub fn replace_rounds(applications: &mut [Application], application_id: u32, rounds: Vec<Round>) {
    if let Some(app) = applications.iter_mut().find(|a| a.id == application_id) {
        app.rounds = rounds;
    }
}

/// Move an application to its next pipeline stage; `Decision` stays put
pub fn advance_stage(applications: &mut [Application], application_id: u32) {
    if let Some(app) = applications.iter_mut().find(|a| a.id == application_id) {
        if let Some(next) = app.stage.next() {
            app.stage = next;
        }
    }
}

/// Check or uncheck a preparation item
pub fn toggle_prep(applications: &mut [Application], application_id: u32, item: &str) {
    if let Some(app) = applications.iter_mut().find(|a| a.id == application_id) {
        if let Some(pos) = app.prep_done.iter().position(|p| p == item) {
            app.prep_done.remove(pos);
        } else {
            app.prep_done.push(item.to_string());
        }
    }
}

// ========================
// Store Helper Functions
// ========================

pub fn store_track_opportunity(store: &AppStore, opportunity_id: u32, today: &str) -> u32 {
    track_opportunity(&mut store.applications().write(), opportunity_id, today)
}

pub fn store_replace_rounds(store: &AppStore, application_id: u32, rounds: Vec<Round>) {
    replace_rounds(&mut store.applications().write(), application_id, rounds);
}

pub fn store_advance_stage(store: &AppStore, application_id: u32) {
    advance_stage(&mut store.applications().write(), application_id);
}

pub fn store_toggle_prep(store: &AppStore, application_id: u32, item: &str) {
    toggle_prep(&mut store.applications().write(), application_id, item);
}
