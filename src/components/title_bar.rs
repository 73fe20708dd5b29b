//! Title Bar Component
//!
//! App title, navigation, language switch and sign out.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::i18n::LANGUAGES;
use crate::store::{use_app_store, AppStateStoreFields, AppView};

/// Top bar shown on every page
#[component]
pub fn TitleBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let i18n = ctx.i18n;

    let signed_in = move || store.profile().with(|p| p.is_some());
    let profile_name = move || store.profile().with(|p| p.as_ref().map(|p| p.name.clone()).unwrap_or_default());

    let nav_class = move |target: AppView| {
        let active = match (store.view().get(), target) {
            (AppView::Detail(_), AppView::Applications) => true,
            (current, target) => current == target,
        };
        if active { "nav-btn active" } else { "nav-btn" }
    };

    view! {
        <header class="titlebar">
            <span class="titlebar-title">{move || i18n.t("app.title")}</span>

            <Show when=signed_in>
                <nav class="titlebar-nav">
                    <button
                        class=move || nav_class(AppView::Opportunities)
                        on:click=move |_| ctx.navigate(AppView::Opportunities)
                    >
                        {move || i18n.t("nav.opportunities")}
                    </button>
                    <button
                        class=move || nav_class(AppView::Applications)
                        on:click=move |_| ctx.navigate(AppView::Applications)
                    >
                        {move || i18n.t("nav.applications")}
                    </button>
                </nav>
            </Show>

            <div class="titlebar-controls">
                <select
                    class="language-select"
                    on:change=move |ev| ctx.set_language(&event_target_value(&ev))
                >
                    {LANGUAGES.iter().map(|(code, label)| {
                        let code = *code;
                        view! {
                            <option value=code selected=move || i18n.language.get() == code>
                                {*label}
                            </option>
                        }
                    }).collect_view()}
                </select>
                <Show when=signed_in>
                    <span class="titlebar-user">{profile_name}</span>
                    <button class="titlebar-btn sign-out" on:click=move |_| ctx.sign_out()>
                        {move || i18n.t("title.sign_out")}
                    </button>
                </Show>
            </div>
        </header>
    }
}
