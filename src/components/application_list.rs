//! Application List Component
//!
//! Tracked applications with their stage and current round.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::rounds;
use crate::store::{use_app_store, AppStateStoreFields, AppView};

#[component]
pub fn ApplicationList() -> impl IntoView {
    let ctx = use_app_context();
    let i18n = ctx.i18n;
    let store = use_app_store();

    let rows = Memo::new(move |_| {
        let opportunities = store.opportunities().get();
        store.applications().with(|apps| {
            apps.iter()
                .map(|app| {
                    let title = opportunities
                        .iter()
                        .find(|o| o.id == app.opportunity_id)
                        .map(|o| format!("{} · {}", o.title, o.company))
                        .unwrap_or_default();
                    let (completed, total) = rounds::progress(&app.rounds);
                    let next_date = rounds::current_round(&app.rounds).and_then(|r| r.date.clone());
                    (app.id, title, app.stage, completed, total, next_date)
                })
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="application-list">
            <h2>{move || i18n.t("apps.title")}</h2>
            <Show
                when=move || rows.with(|r| !r.is_empty())
                fallback=move || view! { <p class="empty-hint">{move || i18n.t("apps.empty")}</p> }
            >
                <For
                    each=move || rows.get()
                    key=|row| row.clone()
                    children=move |(id, title, stage, completed, total, next_date)| {
                        let stage_key = format!("stage.{}", stage.as_str());
                        view! {
                            <div class="application-row" on:click=move |_| ctx.navigate(AppView::Detail(id))>
                                <span class="application-title">{title}</span>
                                <span class=format!("stage-badge {}", stage.as_str())>{move || i18n.t(&stage_key)}</span>
                                <span class="application-rounds">
                                    {move || format!("{} / {} {}", completed, total, i18n.t("rounds.completed"))}
                                </span>
                                {next_date.map(|date| view! { <span class="application-next">{date}</span> })}
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}
