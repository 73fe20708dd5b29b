//! Application Detail Page
//!
//! Owns the rounds of one application (through the store) and hosts the
//! round tracker, the stage timeline and the preparation panel.

use leptos::prelude::*;

use crate::components::{PrepPanel, StageProgressionTracker, StageTimeline};
use crate::context::use_app_context;
use crate::models::{PipelineStage, Round};
use crate::scoring::score_fit;
use crate::store::{
    store_advance_stage, store_replace_rounds, store_toggle_prep, use_app_store,
    AppStateStoreFields, AppView,
};

#[component]
pub fn ApplicationDetail(application_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let i18n = ctx.i18n;
    let store = use_app_store();

    let application = Memo::new(move |_| {
        store
            .applications()
            .with(|apps| apps.iter().find(|a| a.id == application_id).cloned())
    });
    let opportunity = Memo::new(move |_| {
        let opportunity_id = application.get()?.opportunity_id;
        store
            .opportunities()
            .with(|opps| opps.iter().find(|o| o.id == opportunity_id).cloned())
    });
    let report = Signal::derive(move || {
        let opp = opportunity.get()?;
        store.profile().with(|p| p.as_ref().map(|p| score_fit(p, &opp)))
    });

    // separate memos so stage and prep edits leave the round cards alone
    let rounds = Memo::new(move |_| {
        application.with(|a| a.as_ref().map(|a| a.rounds.clone()).unwrap_or_default())
    });
    let stage = Memo::new(move |_| application.with(|a| a.as_ref().map(|a| a.stage).unwrap_or_default()));
    let applied_on = move || application.with(|a| a.as_ref().map(|a| a.applied_on.clone()).unwrap_or_default());
    let prep_done = Memo::new(move |_| {
        application.with(|a| a.as_ref().map(|a| a.prep_done.clone()).unwrap_or_default())
    });

    let on_rounds_change = Callback::new(move |next: Vec<Round>| {
        store_replace_rounds(&store, application_id, next);
    });
    let on_prep_toggle = Callback::new(move |item: String| {
        store_toggle_prep(&store, application_id, &item);
    });

    view! {
        <div class="application-detail">
            <button class="back-btn" on:click=move |_| ctx.navigate(AppView::Applications)>
                {move || format!("← {}", i18n.t("detail.back"))}
            </button>

            // keyed on the opportunity only, so round edits do not rebuild the page
            {move || match opportunity.get() {
                Some(opp) => view! {
                    <div class="detail-body">
                        <header class="detail-header">
                            <h2>{opp.title.clone()}</h2>
                            <span class="detail-company">{opp.company.clone()} " · " {opp.location.clone()}</span>
                            <span class="detail-applied">
                                {move || i18n.t("detail.applied_on")} " " {applied_on}
                            </span>
                        </header>

                        <div class="detail-stage-row">
                            <StageTimeline current=stage />
                            <button
                                class="advance-btn"
                                disabled=move || stage.get() == PipelineStage::Decision
                                on:click=move |_| store_advance_stage(&store, application_id)
                            >
                                {move || i18n.t("detail.advance")}
                            </button>
                        </div>

                        <div class="detail-columns">
                            <StageProgressionTracker rounds=rounds on_rounds_change=on_rounds_change />
                            <PrepPanel
                                seniority=opp.seniority
                                report=report
                                done=prep_done
                                on_toggle=on_prep_toggle
                            />
                        </div>
                    </div>
                }.into_any(),
                None => view! { <div class="detail-missing"></div> }.into_any(),
            }}
        </div>
    }
}
