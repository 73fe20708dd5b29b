//! Onboarding View
//!
//! Walks a new user through the branching questionnaire, geocodes their
//! location and signs them in.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::error::AppError;
use crate::geocode::geocode;
use crate::models::ProfileType;
use crate::onboarding::{QuestionKind, Questionnaire};

#[component]
pub fn OnboardingView() -> impl IntoView {
    let ctx = use_app_context();
    let i18n = ctx.i18n;

    let questionnaire = RwSignal::new(Questionnaire::new());
    let (input, set_input) = signal(String::new());
    let (error_key, set_error_key) = signal::<Option<String>>(None);
    let (locating, set_locating) = signal(false);

    // Prefill the input with a previous answer when stepping back
    let sync_input = move || {
        let value = questionnaire.with(|q| {
            q.current()
                .and_then(|question| q.previous_answer(question.id))
                .map(|a| a.to_input())
                .unwrap_or_default()
        });
        set_input.set(value);
    };

    let finish = move || {
        let Some(mut profile) = questionnaire.with(|q| q.to_profile(&i18n.language.get_untracked())) else {
            return;
        };
        let Some(location) = profile.location.clone() else {
            ctx.sign_in(profile);
            return;
        };
        set_locating.set(true);
        let config = ctx.config();
        spawn_local(async move {
            match geocode(&config, &location).await {
                Ok(coordinates) => profile.coordinates = coordinates,
                Err(e) => log::warn!("[ONBOARDING] geocoding {:?} failed: {}", location, e),
            }
            set_locating.set(false);
            ctx.sign_in(profile);
        });
    };

    let submit = move |raw: String| {
        let result = questionnaire.try_update(|q| q.answer(&raw));
        match result {
            Some(Err(AppError::InvalidAnswer(key))) => set_error_key.set(Some(key)),
            Some(Err(e)) => log::error!("[ONBOARDING] {}", e),
            Some(Ok(completed)) => {
                set_error_key.set(None);
                sync_input();
                if completed && !locating.get_untracked() {
                    finish();
                }
            }
            None => {}
        }
    };

    let go_back = move |_| {
        questionnaire.update(|q| q.back());
        set_error_key.set(None);
        sync_input();
    };

    let question_body = move || {
        let Some(question) = questionnaire.with(|q| q.current()) else {
            return view! { <p class="onboarding-locating">{move || i18n.t("onboarding.locating")}</p> }.into_any();
        };
        match question.kind {
            QuestionKind::Choice(_) => view! {
                <div class="choice-row">
                    {ProfileType::ALL.iter().map(|t| {
                        let value = t.as_str();
                        view! {
                            <button class="choice-btn" on:click=move |_| submit(value.to_string())>
                                {move || i18n.t(&format!("type.{}", value))}
                            </button>
                        }
                    }).collect_view()}
                </div>
            }.into_any(),
            QuestionKind::YesNo => view! {
                <div class="choice-row">
                    <button class="choice-btn" on:click=move |_| submit("yes".to_string())>
                        {move || i18n.t("answer.yes")}
                    </button>
                    <button class="choice-btn" on:click=move |_| submit("no".to_string())>
                        {move || i18n.t("answer.no")}
                    </button>
                </div>
            }.into_any(),
            QuestionKind::Number | QuestionKind::Text { .. } | QuestionKind::List => {
                let input_type = if question.kind == QuestionKind::Number { "number" } else { "text" };
                view! {
                    <form
                        class="answer-form"
                        on:submit=move |ev: web_sys::SubmitEvent| {
                            ev.prevent_default();
                            submit(input.get());
                        }
                    >
                        <input
                            type=input_type
                            class="answer-input"
                            prop:value=move || input.get()
                            on:input=move |ev| set_input.set(event_target_value(&ev))
                        />
                        <button type="submit">{move || i18n.t("onboarding.next")}</button>
                    </form>
                }.into_any()
            }
        }
    };

    view! {
        <div class="onboarding">
            <h2>{move || i18n.t("onboarding.title")}</h2>
            <Show when=move || !locating.get() fallback=move || view! {
                <p class="onboarding-locating">{move || i18n.t("onboarding.locating")}</p>
            }>
                <div class="onboarding-step">
                    {move || {
                        let (step, total) = questionnaire.with(|q| q.step());
                        format!("{} {} / {}", i18n.t("onboarding.step"), step, total)
                    }}
                </div>
                <p class="onboarding-question">
                    {move || questionnaire.with(|q| q.current().map(|c| i18n.t(c.prompt)).unwrap_or_default())}
                </p>
                {question_body}
                {move || error_key.get().map(|key| view! { <p class="form-error">{i18n.t(&key)}</p> })}
                <button
                    class="back-btn"
                    disabled=move || questionnaire.with(|q| q.step().0 <= 1)
                    on:click=go_back
                >
                    {move || i18n.t("onboarding.back")}
                </button>
            </Show>
        </div>
    }
}
