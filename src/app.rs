//! Apply-Track App
//!
//! Root component: loads the stored profile, provides context and picks the
//! page to show.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    ApplicationDetail, ApplicationList, OnboardingView, OpportunityList, TitleBar,
};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::i18n::I18n;
use crate::storage::{LocalStorageStore, ProfileStore};
use crate::store::{AppState, AppStateStoreFields, AppView};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();

    // Load the profile once on mount
    let profile = ProfileStore::new(LocalStorageStore, config.profile_key.clone()).load_or_reset();
    let language = profile
        .as_ref()
        .map(|p| p.language.clone())
        .unwrap_or_else(|| "en".to_string());
    log::info!("[APP] starting, profile loaded: {}", profile.is_some());

    let store = Store::new(AppState::new(profile));
    let i18n = I18n::new(&language);

    // Provide context to all children
    provide_context(store);
    provide_context(i18n);
    provide_context(AppContext::new(store, config, i18n));

    let page = move || {
        if store.profile().with(|p| p.is_none()) {
            return view! { <OnboardingView /> }.into_any();
        }
        match store.view().get() {
            AppView::Opportunities => view! { <OpportunityList /> }.into_any(),
            AppView::Applications => view! { <ApplicationList /> }.into_any(),
            AppView::Detail(id) => view! { <ApplicationDetail application_id=id /> }.into_any(),
        }
    };

    view! {
        <div class="app-layout">
            <TitleBar />
            <main class="main-content">{page}</main>
        </div>
    }
}
