//! Preparation Panel Component
//!
//! Seniority insight, skill talking points and a preparation checklist.

use leptos::prelude::*;

use crate::i18n::use_i18n;
use crate::models::Seniority;
use crate::scoring::FitReport;

/// Checklist entry ids, each with a `prep.item.<id>` translation
pub const PREP_ITEMS: &[&str] = &["research", "stories", "skills", "questions", "salary"];

fn insight_key(seniority: Seniority) -> String {
    format!("prep.insight.{}", seniority.as_str())
}

/// Share of checklist entries done, 0 – 100
fn prep_percent(done: &[String]) -> usize {
    let checked = PREP_ITEMS
        .iter()
        .filter(|item| done.iter().any(|d| d.as_str() == **item))
        .count();
    checked * 100 / PREP_ITEMS.len()
}

#[component]
pub fn PrepPanel(
    seniority: Seniority,
    #[prop(into)] report: Signal<Option<FitReport>>,
    #[prop(into)] done: Signal<Vec<String>>,
    #[prop(into)] on_toggle: Callback<String>,
) -> impl IntoView {
    let i18n = use_i18n();
    let insight = insight_key(seniority);

    let skill_list = move |matched: bool| {
        report.with(|r| {
            r.as_ref()
                .map(|r| if matched { r.matched_skills.join(", ") } else { r.missing_skills.join(", ") })
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "—".to_string())
        })
    };

    view! {
        <aside class="prep-panel">
            <div class="prep-header">
                <h3>{move || i18n.t("prep.title")}</h3>
                <span class="prep-percent">{move || format!("{}%", done.with(|d| prep_percent(d)))}</span>
            </div>
            <p class="prep-insight">{move || i18n.t(&insight)}</p>

            <div class="prep-skills">
                <div class="prep-skill-row">
                    <span class="editor-label">{move || i18n.t("prep.talking_points")}</span>
                    <span class="skill-list matched">{move || skill_list(true)}</span>
                </div>
                <div class="prep-skill-row">
                    <span class="editor-label">{move || i18n.t("prep.gaps")}</span>
                    <span class="skill-list missing">{move || skill_list(false)}</span>
                </div>
            </div>

            <ul class="prep-checklist">
                {PREP_ITEMS.iter().map(|item| {
                    let item = *item;
                    let key = format!("prep.item.{}", item);
                    let checked = move || done.with(|d| d.iter().any(|x| x == item));
                    view! {
                        <li class=move || if checked() { "prep-item done" } else { "prep-item" }>
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=checked
                                    on:change=move |_| on_toggle.run(item.to_string())
                                />
                                {move || i18n.t(&key)}
                            </label>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </aside>
    }
}
