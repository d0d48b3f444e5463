use dioxus::prelude::*;

use cricket_core::model::Series;

use super::editor::{
    AdminToolbar, EditorError, EditorIntent, FormActions, RecordEditor, RowActions,
    use_record_editor,
};
use super::use_signed_in;
use crate::context::AppContext;
use crate::views::pager::{DEFAULT_PAGE_SIZE, ListError, PageMove, Pager, use_paged_list};
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::{SeriesCardVm, SeriesForm, map_series_cards};

#[component]
pub fn AdminSeriesView() -> Element {
    let ctx = use_context::<AppContext>();
    let signed_in = use_signed_in(&ctx);
    let today = ctx.clock().today();
    let list = use_paged_list(ctx.series(), DEFAULT_PAGE_SIZE);
    let editor = use_record_editor::<SeriesForm>(ctx.series(), list, today);
    let state = view_state_from_resource(&list.rows);
    let busy = editor.is_saving() || list.pager.read().in_flight();
    let open = editor.editing.read().clone();

    rsx! {
        div { class: "page admin",
            AdminToolbar {
                title: "Series",
                signed_in,
                busy,
                on_new: move |()| editor.dispatch.call(EditorIntent::New),
            }
            EditorError { error: editor.error.read().clone() }
            if let Some(open) = open {
                SeriesFormPanel { editor, form: open.form, creating: open.id.is_none() }
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "muted", "Loading series..." }
                },
                ViewState::Error(err) => rsx! {
                    ListError { error: err, on_retry: move |()| list.dispatch.call(PageMove::Refresh) }
                },
                ViewState::Ready(items) => {
                    let rows = map_series_cards(&items, today);
                    rsx! {
                        if rows.is_empty() {
                            p { class: "empty", "No series yet." }
                        } else {
                            table { class: "admin-table",
                                thead {
                                    tr {
                                        th { "Name" }
                                        th { "Dates" }
                                        th { "Status" }
                                        th {}
                                    }
                                }
                                tbody {
                                    for (record, row) in items.into_iter().zip(rows) {
                                        SeriesRow { key: "{row.id}", record, row, busy, on_intent: editor.dispatch }
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
fn SeriesRow(
    record: Series,
    row: SeriesCardVm,
    busy: bool,
    on_intent: EventHandler<EditorIntent<SeriesForm>>,
) -> Element {
    let id = record.id;

    rsx! {
        tr {
            td { "{row.name}" }
            td { "{row.dates_label}" }
            td { "{row.phase_label}" }
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
fn SeriesFormPanel(editor: RecordEditor<SeriesForm>, form: SeriesForm, creating: bool) -> Element {
    let heading = if creating { "New series" } else { "Edit series" };

    rsx! {
        form { class: "admin-form", onsubmit: move |evt| evt.prevent_default(),
            h3 { "{heading}" }
            label {
                "Name"
                input {
                    id: "series-name",
                    value: "{form.name}",
                    oninput: move |evt| editor.update(|form| form.name = evt.value()),
                }
            }
            label {
                "Description (markdown)"
                textarea {
                    id: "series-description",
                    rows: "4",
                    value: "{form.description}",
                    oninput: move |evt| editor.update(|form| form.description = evt.value()),
                }
            }
            label {
                "Start date"
                input {
                    r#type: "date",
                    id: "series-start",
                    value: "{form.start_date}",
                    oninput: move |evt| editor.update(|form| form.start_date = evt.value()),
                }
            }
            label {
                "End date"
                input {
                    r#type: "date",
                    id: "series-end",
                    value: "{form.end_date}",
                    oninput: move |evt| editor.update(|form| form.end_date = evt.value()),
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
