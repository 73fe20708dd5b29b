//! Stage Timeline Component
//!
//! Read-only view of the pipeline stages of an application.

use leptos::prelude::*;

use crate::i18n::use_i18n;
use crate::models::PipelineStage;

/// CSS state of `stage` relative to the application's `current` stage
fn stage_state(current: PipelineStage, stage: PipelineStage) -> &'static str {
    if stage < current {
        "done"
    } else if stage == current {
        "active"
    } else {
        "pending"
    }
}

#[component]
pub fn StageTimeline(#[prop(into)] current: Signal<PipelineStage>) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <ol class="stage-timeline">
            {PipelineStage::ALL.iter().map(|stage| {
                let stage = *stage;
                let key = format!("stage.{}", stage.as_str());
                view! {
                    <li class=move || format!("stage-step {}", stage_state(current.get(), stage))>
                        {move || i18n.t(&key)}
                    </li>
                }
            }).collect_view()}
        </ol>
    }
}
