//! Opportunity List Component
//!
//! Mock openings ranked by fit against the current profile.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::scoring::{rank_opportunities, FitBand};
use crate::store::{store_track_opportunity, use_app_store, AppStateStoreFields, AppView};

/// Local date as YYYY-MM-DD
fn today() -> String {
    let iso = String::from(js_sys::Date::new_0().to_iso_string());
    iso.chars().take(10).collect()
}

#[component]
pub fn OpportunityList() -> impl IntoView {
    let ctx = use_app_context();
    let i18n = ctx.i18n;
    let store = use_app_store();
    let (band_filter, set_band_filter) = signal::<Option<FitBand>>(None);

    let ranked = Memo::new(move |_| {
        let Some(profile) = store.profile().get() else {
            return Vec::new();
        };
        store
            .opportunities()
            .with(|opps| rank_opportunities(&profile, opps, band_filter.get()))
    });

    let tracked = move |opportunity_id: u32| {
        store
            .applications()
            .with(|apps| apps.iter().any(|a| a.opportunity_id == opportunity_id))
    };

    let track = move |opportunity_id: u32| {
        let id = store_track_opportunity(&store, opportunity_id, &today());
        ctx.navigate(AppView::Detail(id));
    };

    let filter_btn = move |band: Option<FitBand>| {
        let key = band.map_or("opps.filter.all".to_string(), |b| format!("band.{}", b.as_str()));
        view! {
            <button
                class=move || if band_filter.get() == band { "filter-btn active" } else { "filter-btn" }
                on:click=move |_| set_band_filter.set(band)
            >
                {move || i18n.t(&key)}
            </button>
        }
    };

    view! {
        <div class="opportunity-list">
            <h2>{move || i18n.t("opps.title")}</h2>
            <div class="filter-row">
                {filter_btn(None)}
                {FitBand::ALL.iter().map(|b| filter_btn(Some(*b))).collect_view()}
            </div>

            <For
                each=move || ranked.get()
                key=|(opp, report)| (opp.id, report.score)
                children=move |(opp, report)| {
                    let id = opp.id;
                    let band_key = format!("band.{}", report.band.as_str());
                    let distance = report.distance_km.map(|km| format!("{:.0}", km));
                    view! {
                        <div class=format!("opportunity-card {}", report.band.as_str())>
                            <div class="opportunity-main">
                                <h3>{opp.title.clone()}</h3>
                                <span class="opportunity-company">{opp.company.clone()}</span>
                                <span class="opportunity-location">
                                    {opp.location.clone()}
                                    {opp.remote.then(|| view! {
                                        <span class="remote-tag">{move || i18n.t("opps.remote")}</span>
                                    })}
                                    {distance.map(|km| view! {
                                        <span class="distance">{move || format!("{} {}", km, i18n.t("opps.km_away"))}</span>
                                    })}
                                </span>
                                <p class="opportunity-summary">{opp.summary.clone()}</p>
                            </div>
                            <div class="opportunity-fit">
                                <span class="fit-score">{move || format!("{} {}", i18n.t("opps.fit"), report.score)}</span>
                                <span class="fit-band">{move || i18n.t(&band_key)}</span>
                                <button class="track-btn" on:click=move |_| track(id)>
                                    {move || if tracked(id) { i18n.t("opps.open") } else { i18n.t("opps.track") }}
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
