//! Round Card Component
//!
//! One interview round: header with status badge, and an expandable panel
//! for interviewer, date and Markdown notes.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::markdown::render_notes;
use crate::models::{Round, RoundStatus};

/// Edited fields handed back on save
#[derive(Clone, Debug, PartialEq)]
pub struct RoundDraft {
    pub notes: String,
    pub interviewer: String,
    pub date: String,
}

/// Single round row with detail panel
#[component]
pub fn RoundCard(
    /// Live round looked up by id, so the card survives edits and moves
    #[prop(into)] round: Signal<Round>,
    /// Zero-based array position
    #[prop(into)] position: Signal<usize>,
    #[prop(into)] total: Signal<usize>,
    #[prop(into)] expanded: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(into)] on_complete: Callback<()>,
    #[prop(into)] on_remove: Callback<()>,
    #[prop(into)] on_move: Callback<usize>,
    #[prop(into)] on_save: Callback<RoundDraft>,
) -> impl IntoView {
    let ctx = use_app_context();
    let i18n = ctx.i18n;
    let flash_ms = ctx.config().saved_flash_ms;

    let initial = round.get_untracked();
    let (notes, set_notes) = signal(initial.notes);
    let (interviewer, set_interviewer) = signal(initial.interviewer.unwrap_or_default());
    let (date, set_date) = signal(initial.date.unwrap_or_default());
    let (preview, set_preview) = signal(false);
    let (saved, set_saved) = signal(false);

    let status = move || round.with(|r| r.status);
    let summary = move || {
        round.with(|r| {
            [r.interviewer.clone(), r.date.clone()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" · ")
        })
    };

    let save = move |_| {
        on_save.run(RoundDraft {
            notes: notes.get(),
            interviewer: interviewer.get(),
            date: date.get(),
        });
        set_saved.set(true);
        spawn_local(async move {
            TimeoutFuture::new(flash_ms).await;
            set_saved.set(false);
        });
    };

    view! {
        <div class=move || format!("round-card {}", status().as_str())>
            <div class="round-header" on:click=move |_| on_toggle.run(())>
                <span class="round-number">
                    {move || format!("{} {}", i18n.t("rounds.round"), position.get() + 1)}
                </span>
                <span class=move || format!("status-badge {}", status().as_str())>
                    {move || i18n.t(&format!("status.{}", status().as_str()))}
                </span>
                <span class="round-summary">{summary}</span>
                <span class="round-chevron">{move || if expanded.get() { "▾" } else { "▸" }}</span>
            </div>

            <Show when=move || expanded.get()>
                <div class="round-panel">
                    <div class="round-fields">
                        <label class="editor-label">{move || i18n.t("round.interviewer")}</label>
                        <input
                            type="text"
                            class="round-input"
                            prop:value=move || interviewer.get()
                            on:input=move |ev| set_interviewer.set(event_target_value(&ev))
                        />
                        <label class="editor-label">{move || i18n.t("round.date")}</label>
                        <input
                            type="date"
                            class="round-input"
                            prop:value=move || date.get()
                            on:input=move |ev| set_date.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="round-notes">
                        <div class="pane-header">
                            <span>{move || i18n.t("round.notes")}</span>
                            <label class="preview-toggle">
                                <input
                                    type="checkbox"
                                    prop:checked=move || preview.get()
                                    on:change=move |_| set_preview.update(|p| *p = !*p)
                                />
                                {move || i18n.t("round.preview")}
                            </label>
                        </div>
                        {move || if preview.get() {
                            view! {
                                <div class="notes-preview" inner_html=move || render_notes(&notes.get())></div>
                            }.into_any()
                        } else {
                            view! {
                                <textarea
                                    class="notes-textarea"
                                    prop:value=move || notes.get()
                                    on:input=move |ev| set_notes.set(event_target_value(&ev))
                                ></textarea>
                            }.into_any()
                        }}
                    </div>

                    <div class="round-actions">
                        <button class="save-btn" on:click=save>{move || i18n.t("round.save")}</button>
                        <Show when=move || saved.get()>
                            <span class="saved-flash">{move || i18n.t("round.saved")}</span>
                        </Show>
                        <Show when=move || status() != RoundStatus::Completed>
                            <button class="complete-btn" on:click=move |_| on_complete.run(())>
                                {move || i18n.t("round.complete")}
                            </button>
                        </Show>
                        <button
                            class="move-btn"
                            title=move || i18n.t("round.move_up")
                            disabled=move || position.get() == 0
                            on:click=move |_| on_move.run(position.get_untracked().saturating_sub(1))
                        >
                            "↑"
                        </button>
                        <button
                            class="move-btn"
                            title=move || i18n.t("round.move_down")
                            disabled=move || (position.get() + 1 >= total.get())
                            on:click=move |_| on_move.run(position.get_untracked() + 1)
                        >
                            "↓"
                        </button>
                        <Show when=move || (total.get() > 1)>
                            <DeleteConfirmButton button_class="round-delete-btn" on_confirm=on_remove />
                        </Show>
                    </div>
                </div>
            </Show>
        </div>
    }
}
