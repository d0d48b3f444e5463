use dioxus::document::eval;
use dioxus::prelude::*;

use cricket_core::{QuizSession, QuizSummary};

use super::scripts::cue_script;
use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    QuizIntent, QuizOptionVm, QuizQuestionVm, QuizScreenVm, QuizSummaryVm, map_quiz_screen,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();

    let session = use_signal(|| QuizSession::Loading);
    let summary = use_signal(|| None::<QuizSummary>);
    let error = use_signal(|| None::<ViewError>);
    let busy = use_signal(|| false);

    let quiz_loop_for_resource = quiz_loop.clone();
    let resource = use_resource(move || {
        let quiz_loop = quiz_loop_for_resource.clone();
        let mut session = session;
        let mut summary = summary;
        let mut error = error;

        async move {
            let started = quiz_loop
                .start()
                .await
                .map_err(|err| ViewError::from(&err))?;
            summary.set(None);
            session.set(started);
            error.set(None);
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut session = session;
        let mut summary = summary;
        let mut error = error;
        let mut busy = busy;
        if *busy.peek() {
            return;
        }
        let restart = matches!(intent, QuizIntent::Reset);

        match intent {
            QuizIntent::Select(choice) => {
                let selected = session.peek().select_answer(choice);
                if let Ok(next) = selected {
                    session.set(next);
                }
            }
            QuizIntent::Submit => {
                let answered = quiz_loop.answer(&session.peek());
                match answered {
                    Ok(result) => {
                        if let Some(js) = cue_script(&result.outcome.cues) {
                            let _ = eval(&js);
                        }
                        summary.set(result.summary);
                        session.set(result.session);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(ViewError::from(&err))),
                }
            }
            QuizIntent::Reset | QuizIntent::Retry => {
                let current = session.peek().clone();
                let allowed = if restart {
                    current.can_reset()
                } else {
                    current.can_start()
                };
                if !allowed {
                    return;
                }
                let quiz_loop = quiz_loop.clone();
                busy.set(true);
                summary.set(None);
                session.set(QuizSession::Loading);
                spawn(async move {
                    let result = if restart {
                        quiz_loop.reset(&current).await
                    } else {
                        quiz_loop.start_from(&current).await
                    };
                    busy.set(false);
                    match result {
                        Ok(next) => {
                            session.set(next);
                            error.set(None);
                        }
                        // The session stays in Loading so Retry can fetch again.
                        Err(err) => error.set(Some(ViewError::from(&err))),
                    }
                });
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, session);
            }
        }
    }

    let retry_start = use_callback(move |()| {
        let mut resource = resource;
        resource.restart();
    });

    let screen = map_quiz_screen(&session.read(), summary.read().as_ref());
    let is_busy = busy();

    rsx! {
        div { class: "page quiz", id: "quiz-root",
            header { class: "page-header",
                h2 { "Cricket Quiz" }
                p { class: "muted", "Five questions. +20 for a right answer, -10 for a wrong one, nothing for a skip." }
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "muted", "Loading questions..." }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "error",
                        p { "{err.message()}" }
                        if err.is_retryable() {
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| retry_start.call(()),
                                "Retry"
                            }
                        }
                    }
                },
                ViewState::Ready(()) => rsx! {
                    if let Some(err) = error() {
                        div { class: "error",
                            p { "{err.message()}" }
                            if err.is_retryable() && matches!(screen, QuizScreenVm::Loading) {
                                button {
                                    class: "btn btn-secondary",
                                    r#type: "button",
                                    disabled: is_busy,
                                    onclick: move |_| dispatch_intent.call(QuizIntent::Retry),
                                    "Retry"
                                }
                            }
                        }
                    }
                    QuizScreen { screen: screen.clone(), busy: is_busy, on_intent: dispatch_intent }
                },
            }
        }
    }
}

#[component]
fn QuizScreen(screen: QuizScreenVm, busy: bool, on_intent: EventHandler<QuizIntent>) -> Element {
    match screen {
        QuizScreenVm::Loading => rsx! {
            p { class: "muted", "Loading questions..." }
        },
        QuizScreenVm::NoQuestions => rsx! {
            div { class: "empty",
                p { "No quiz questions are available right now." }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: busy,
                    onclick: move |_| on_intent.call(QuizIntent::Retry),
                    "Try again"
                }
            }
        },
        QuizScreenVm::Question(vm) => rsx! {
            QuestionCard { vm, busy, on_intent }
        },
        QuizScreenVm::Finished(vm) => rsx! {
            SummaryCard { vm, busy, on_intent }
        },
    }
}

#[component]
fn QuestionCard(vm: QuizQuestionVm, busy: bool, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        section { class: "quiz-card",
            div { class: "quiz-card__status",
                span { class: "quiz-progress", "{vm.progress_label}" }
                span { class: "quiz-score", "{vm.score_label}" }
            }
            div { class: "progress-bar",
                div { class: "progress-bar__fill", style: "width: {vm.progress_percent}%" }
            }
            h3 { class: "quiz-question", "{vm.prompt}" }
            ul { class: "quiz-options",
                for (idx, option) in vm.options.into_iter().enumerate() {
                    li { key: "{idx}",
                        OptionButton { index: idx, option, busy, on_intent }
                    }
                }
            }
            div { class: "quiz-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    id: "quiz-submit",
                    disabled: busy,
                    onclick: move |_| on_intent.call(QuizIntent::Submit),
                    "{vm.submit_label}"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    id: "quiz-reset",
                    disabled: busy,
                    onclick: move |_| on_intent.call(QuizIntent::Reset),
                    "Start over"
                }
            }
        }
    }
}

#[component]
fn OptionButton(
    index: usize,
    option: QuizOptionVm,
    busy: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let class = if option.selected {
        "quiz-option quiz-option--selected"
    } else {
        "quiz-option"
    };
    let label = option.label.clone();

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            id: "quiz-option-{index}",
            disabled: busy,
            onclick: move |_| on_intent.call(QuizIntent::Select(label.clone())),
            "{option.label}"
        }
    }
}

#[component]
fn SummaryCard(vm: QuizSummaryVm, busy: bool, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        section { class: "quiz-summary",
            if vm.celebrate {
                div { class: "quiz-banner", "Brilliant innings! You scored {vm.score_label}." }
            }
            h3 { "Final score: {vm.score_label}" }
            p { class: "muted", "{vm.breakdown_label}" }
            table { class: "quiz-results",
                thead {
                    tr {
                        th { "#" }
                        th { "Question" }
                        th { "Your answer" }
                        th { "Correct answer" }
                        th { "Points" }
                    }
                }
                tbody {
                    for row in vm.rows {
                        tr { key: "{row.number}", class: "quiz-row quiz-row--{row.outcome}",
                            td { "{row.number}" }
                            td { "{row.question}" }
                            td { "{row.your_answer}" }
                            td { "{row.correct_answer}" }
                            td { "{row.points_label}" }
                        }
                    }
                }
            }
            p { class: "muted", "Finished {vm.finished_at_str}" }
            button {
                class: "btn btn-primary",
                r#type: "button",
                id: "quiz-reset",
                disabled: busy,
                onclick: move |_| on_intent.call(QuizIntent::Reset),
                "Play again"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    session: Rc<RefCell<Option<Signal<QuizSession>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, session: Signal<QuizSession>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<QuizSession> {
        (*self.session.borrow()).expect("quiz session registered")
    }
}
