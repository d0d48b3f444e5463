use dioxus::prelude::*;

use cricket_core::model::{Fixture, MatchStatus};

use super::editor::{
    AdminToolbar, EditorError, EditorIntent, FormActions, RecordEditor, RowActions,
    use_record_editor,
};
use super::use_signed_in;
use crate::context::AppContext;
use crate::views::pager::{DEFAULT_PAGE_SIZE, ListError, PageMove, Pager, use_paged_list};
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::{FixtureForm, FixtureRowVm, map_fixture_rows};

#[component]
pub fn AdminMatchesView() -> Element {
    let ctx = use_context::<AppContext>();
    let signed_in = use_signed_in(&ctx);
    let list = use_paged_list(ctx.matches(), DEFAULT_PAGE_SIZE);
    let editor = use_record_editor::<FixtureForm>(ctx.matches(), list, ctx.clock().today());
    let state = view_state_from_resource(&list.rows);
    let busy = editor.is_saving() || list.pager.read().in_flight();
    let open = editor.editing.read().clone();

    rsx! {
        div { class: "page admin",
            AdminToolbar {
                title: "Matches",
                signed_in,
                busy,
                on_new: move |()| editor.dispatch.call(EditorIntent::New),
            }
            EditorError { error: editor.error.read().clone() }
            if let Some(open) = open {
                MatchFormPanel { editor, form: open.form, creating: open.id.is_none() }
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "muted", "Loading matches..." }
                },
                ViewState::Error(err) => rsx! {
                    ListError { error: err, on_retry: move |()| list.dispatch.call(PageMove::Refresh) }
                },
                ViewState::Ready(items) => {
                    let rows = map_fixture_rows(&items);
                    rsx! {
                        if rows.is_empty() {
                            p { class: "empty", "No matches yet." }
                        } else {
                            table { class: "admin-table",
                                thead {
                                    tr {
                                        th { "Match" }
                                        th { "Series" }
                                        th { "Venue" }
                                        th { "Date" }
                                        th { "Status" }
                                        th { "Result" }
                                        th {}
                                    }
                                }
                                tbody {
                                    for (record, row) in items.into_iter().zip(rows) {
                                        MatchRow { key: "{row.id}", record, row, busy, on_intent: editor.dispatch }
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
fn MatchRow(
    record: Fixture,
    row: FixtureRowVm,
    busy: bool,
    on_intent: EventHandler<EditorIntent<FixtureForm>>,
) -> Element {
    let id = record.id;

    rsx! {
        tr {
            td { "{row.title}" }
            td { "{row.series_label}" }
            td { "{row.venue}" }
            td { "{row.date_label}" }
            td { "{row.status_label}" }
            td { "{row.result}" }
            td {
                RowActions {
                    busy,
                    on_edit: move |()| on_intent.call(EditorIntent::Edit(record.clone())),
                    on_delete: move |()| on_intent.call(EditorIntent::Delete(id)),
                }
            }
        }
    }
}

#[component]
fn MatchFormPanel(editor: RecordEditor<FixtureForm>, form: FixtureForm, creating: bool) -> Element {
    let heading = if creating { "New match" } else { "Edit match" };

    rsx! {
        form { class: "admin-form", onsubmit: move |evt| evt.prevent_default(),
            h3 { "{heading}" }
            label {
                "Series id"
                input {
                    r#type: "number",
                    min: "1",
                    id: "match-series",
                    value: "{form.series_id}",
                    oninput: move |evt| editor.update(|form| form.series_id = evt.value()),
                }
            }
            label {
                "Team A"
                input {
                    id: "match-team-a",
                    value: "{form.team_a}",
                    oninput: move |evt| editor.update(|form| form.team_a = evt.value()),
                }
            }
            label {
                "Team B"
                input {
                    id: "match-team-b",
                    value: "{form.team_b}",
                    oninput: move |evt| editor.update(|form| form.team_b = evt.value()),
                }
            }
            label {
                "Venue"
                input {
                    id: "match-venue",
                    value: "{form.venue}",
                    oninput: move |evt| editor.update(|form| form.venue = evt.value()),
                }
            }
            label {
                "Date"
                input {
                    r#type: "date",
                    id: "match-date",
                    value: "{form.match_date}",
                    oninput: move |evt| editor.update(|form| form.match_date = evt.value()),
                }
            }
            label {
                "Status"
                select {
                    id: "match-status",
                    onchange: move |evt| {
                        if let Some(status) = MatchStatus::from_label(&evt.value()) {
                            editor.update(|form| form.status = status);
                        }
                    },
                    for status in MatchStatus::ALL {
                        option {
                            key: "{status.label()}",
                            value: "{status.label()}",
                            selected: status == form.status,
                            "{status.label()}"
                        }
                    }
                }
            }
            label {
                "Result"
                input {
                    id: "match-result",
                    placeholder: "e.g. India won by 6 wickets",
                    value: "{form.result}",
                    oninput: move |evt| editor.update(|form| form.result = evt.value()),
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
