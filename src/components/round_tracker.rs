//! Stage Progression Tracker
//!
//! Renders the ordered interview rounds of one application. The rounds are
//! owned by the parent view; every change is reported back as a full
//! replacement through `on_rounds_change`.

use leptos::prelude::*;

use crate::components::round_card::{RoundCard, RoundDraft};
use crate::i18n::use_i18n;
use crate::models::Round;
use crate::rounds::{self, RoundEdit, MAX_ROUNDS};

#[component]
pub fn StageProgressionTracker(
    #[prop(into)] rounds: Signal<Vec<Round>>,
    #[prop(into)] on_rounds_change: Callback<Vec<Round>>,
) -> impl IntoView {
    let i18n = use_i18n();
    // UI only: the single round whose panel is open
    let (expanded, set_expanded) = signal::<Option<u32>>(None);

    let apply = move |edit: RoundEdit| rounds::dispatch_edit(edit, |next| on_rounds_change.run(next));
    let total = Signal::derive(move || rounds.with(|r| r.len()));

    let header = move || {
        let (completed, total) = rounds.with(|r| rounds::progress(r));
        format!("{} / {} {}", completed, total, i18n.t("rounds.completed"))
    };

    view! {
        <section class="round-tracker">
            <div class="round-tracker-header">
                <h3>{move || i18n.t("rounds.title")}</h3>
                <span class="round-progress">{header}</span>
                <button
                    class="add-round-btn"
                    disabled=move || rounds.with(|r| r.len() >= MAX_ROUNDS)
                    on:click=move |_| apply(rounds.with(|r| rounds::add_round(r)))
                >
                    {move || format!("+ {}", i18n.t("rounds.add"))}
                </button>
            </div>

            <div class="round-list">
                <For
                    each=move || rounds.get()
                    key=|round| round.id
                    children=move |round| {
                        let id = round.id;
                        let current = Signal::derive(move || {
                            rounds
                                .with(|r| r.iter().find(|x| x.id == id).cloned())
                                .unwrap_or_else(|| round.clone())
                        });
                        let position = Signal::derive(move || {
                            rounds.with(|r| r.iter().position(|x| x.id == id).unwrap_or(0))
                        });
                        view! {
                            <RoundCard
                                round=current
                                position=position
                                total=total
                                expanded=Signal::derive(move || expanded.get() == Some(id))
                                on_toggle=move |_| set_expanded.update(|e| *e = rounds::toggle_expanded(*e, id))
                                on_complete=move |_| apply(rounds.with(|r| rounds::complete_round(r, id)))
                                on_remove=move |_| apply(rounds.with(|r| rounds::remove_round(r, id)))
                                on_move=move |to: usize| apply(rounds.with(|r| rounds::move_round(r, id, to)))
                                on_save=move |draft: RoundDraft| apply(rounds.with(|r| {
                                    rounds::update_notes(r, id, &draft.notes, &draft.interviewer, &draft.date)
                                }))
                            />
                        }
                    }
                />
            </div>
        </section>
    }
}
