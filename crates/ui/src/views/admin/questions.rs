use dioxus::prelude::*;

use cricket_core::model::QuizQuestion;

use super::editor::{
    AdminToolbar, EditorError, EditorIntent, FormActions, RecordEditor, RowActions,
    use_record_editor,
};
use super::use_signed_in;
use crate::context::AppContext;
use crate::views::pager::{DEFAULT_PAGE_SIZE, ListError, PageMove, Pager, use_paged_list};
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::{QuestionForm, QuestionRowVm, map_question_rows};

#[component]
pub fn AdminQuestionsView() -> Element {
    let ctx = use_context::<AppContext>();
    let signed_in = use_signed_in(&ctx);
    let list = use_paged_list(ctx.questions(), DEFAULT_PAGE_SIZE);
    let editor = use_record_editor::<QuestionForm>(ctx.questions(), list, ctx.clock().today());
    let state = view_state_from_resource(&list.rows);
    let busy = editor.is_saving() || list.pager.read().in_flight();
    let open = editor.editing.read().clone();

    rsx! {
        div { class: "page admin",
            AdminToolbar {
                title: "Quiz questions",
                signed_in,
                busy,
                on_new: move |()| editor.dispatch.call(EditorIntent::New),
            }
            EditorError { error: editor.error.read().clone() }
            if let Some(open) = open {
                QuestionFormPanel { editor, form: open.form, creating: open.id.is_none() }
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "muted", "Loading questions..." }
                },
                ViewState::Error(err) => rsx! {
                    ListError { error: err, on_retry: move |()| list.dispatch.call(PageMove::Refresh) }
                },
                ViewState::Ready(items) => {
                    let rows = map_question_rows(&items);
                    rsx! {
                        if rows.is_empty() {
                            p { class: "empty", "No questions yet." }
                        } else {
                            table { class: "admin-table",
                                thead {
                                    tr {
                                        th { "Question" }
                                        th { "Options" }
                                        th { "Answer" }
                                        th {}
                                    }
                                }
                                tbody {
                                    for (record, row) in items.into_iter().zip(rows) {
                                        QuestionRow { key: "{row.id}", record, row, busy, on_intent: editor.dispatch }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            Pager { pager: *list.pager.read(), locked: editor.is_saving(), on_move: list.dispatch }
        }
    }
}

#[component]
fn QuestionRow(
    record: QuizQuestion,
    row: QuestionRowVm,
    busy: bool,
    on_intent: EventHandler<EditorIntent<QuestionForm>>,
) -> Element {
    let id = record.id().clone();

    rsx! {
        tr {
            td { "{row.question}" }
            td { "{row.options_label}" }
            td { "{row.correct_answer}" }
            td {
                RowActions {
                    busy,
                    on_edit: move |()| on_intent.call(EditorIntent::Edit(record.clone())),
                    on_delete: move |()| on_intent.call(EditorIntent::Delete(id.clone())),
                }
            }
        }
    }
}

#[component]
fn QuestionFormPanel(
    editor: RecordEditor<QuestionForm>,
    form: QuestionForm,
    creating: bool,
) -> Element {
    let heading = if creating { "New question" } else { "Edit question" };

    rsx! {
        form { class: "admin-form", onsubmit: move |evt| evt.prevent_default(),
            h3 { "{heading}" }
            label {
                "Question"
                input {
                    id: "question-text",
                    value: "{form.question}",
                    oninput: move |evt| editor.update(|form| form.question = evt.value()),
                }
            }
            label {
                "Options (one per line)"
                textarea {
                    id: "question-options",
                    rows: "4",
                    value: "{form.options}",
                    oninput: move |evt| editor.update(|form| form.options = evt.value()),
                }
            }
            label {
                "Correct answer"
                input {
                    id: "question-answer",
                    value: "{form.correct_answer}",
                    oninput: move |evt| editor.update(|form| form.correct_answer = evt.value()),
                }
            }
            FormActions {
                saving: editor.is_saving(),
                on_save: move |()| editor.dispatch.call(EditorIntent::Save),
                on_cancel: move |()| editor.dispatch.call(EditorIntent::Cancel),
            }
        }
    }
}
