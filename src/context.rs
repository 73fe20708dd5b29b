//! Application Context
//!
//! Session-level operations provided via Leptos Context API: profile
//! lifecycle, language and navigation.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::i18n::I18n;
use crate::models::Profile;
use crate::storage::{LocalStorageStore, ProfileStore};
use crate::store::{AppStateStoreFields, AppStore, AppView};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
    config: StoredValue<AppConfig>,
    pub i18n: I18n,
}

impl AppContext {
    pub fn new(store: AppStore, config: AppConfig, i18n: I18n) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
            i18n,
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    fn profile_store(&self) -> ProfileStore<LocalStorageStore> {
        let key = self.config.with_value(|c| c.profile_key.clone());
        ProfileStore::new(LocalStorageStore, key)
    }

    /// Persist the onboarding result and enter the app
    pub fn sign_in(&self, profile: Profile) {
        if let Err(e) = self.profile_store().save(&profile) {
            log::error!("[CONTEXT] could not persist profile: {}", e);
        }
        self.i18n.language.set(profile.language.clone());
        self.store.profile().set(Some(profile));
        self.store.view().set(AppView::Opportunities);
    }

    /// Forget the stored profile and return to onboarding
    pub fn sign_out(&self) {
        if let Err(e) = self.profile_store().clear() {
            log::error!("[CONTEXT] could not clear profile: {}", e);
        }
        self.store.profile().set(None);
        self.store.view().set(AppView::Opportunities);
        log::info!("[CONTEXT] signed out");
    }

    /// Switch UI language, remembering it in the profile when there is one
    pub fn set_language(&self, code: &str) {
        self.i18n.language.set(code.to_string());
        let updated = self.store.profile().with_untracked(|p| {
            p.clone().map(|mut profile| {
                profile.language = code.to_string();
                profile
            })
        });
        if let Some(profile) = updated {
            if let Err(e) = self.profile_store().save(&profile) {
                log::warn!("[CONTEXT] could not persist language: {}", e);
            }
            self.store.profile().set(Some(profile));
        }
    }

    pub fn navigate(&self, view: AppView) {
        self.store.view().set(view);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
