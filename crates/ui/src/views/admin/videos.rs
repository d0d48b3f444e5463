use dioxus::prelude::*;

use cricket_core::model::Video;

use super::editor::{
    AdminToolbar, EditorError, EditorIntent, FormActions, RecordEditor, RowActions,
    use_record_editor,
};
use super::use_signed_in;
use crate::context::AppContext;
use crate::views::pager::{DEFAULT_PAGE_SIZE, ListError, PageMove, Pager, use_paged_list};
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::{VideoCardVm, VideoForm, map_video_cards};

#[component]
pub fn AdminVideosView() -> Element {
    let ctx = use_context::<AppContext>();
    let signed_in = use_signed_in(&ctx);
    let list = use_paged_list(ctx.videos(), DEFAULT_PAGE_SIZE);
    let editor = use_record_editor::<VideoForm>(ctx.videos(), list, ctx.clock().today());
    let state = view_state_from_resource(&list.rows);
    let busy = editor.is_saving() || list.pager.read().in_flight();
    let open = editor.editing.read().clone();

    rsx! {
        div { class: "page admin",
            AdminToolbar {
                title: "Videos",
                signed_in,
                busy,
                on_new: move |()| editor.dispatch.call(EditorIntent::New),
            }
            EditorError { error: editor.error.read().clone() }
            if let Some(open) = open {
                VideoFormPanel { editor, form: open.form, creating: open.id.is_none() }
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "muted", "Loading videos..." }
                },
                ViewState::Error(err) => rsx! {
                    ListError { error: err, on_retry: move |()| list.dispatch.call(PageMove::Refresh) }
                },
                ViewState::Ready(items) => {
                    let rows = map_video_cards(&items);
                    rsx! {
                        if rows.is_empty() {
                            p { class: "empty", "No videos yet." }
                        } else {
                            table { class: "admin-table",
                                thead {
                                    tr {
                                        th { "Title" }
                                        th { "Link" }
                                        th { "Series" }
                                        th {}
                                    }
                                }
                                tbody {
                                    for (record, row) in items.into_iter().zip(rows) {
                                        VideoRow { key: "{row.id}", record, row, busy, on_intent: editor.dispatch }
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
fn VideoRow(
    record: Video,
    row: VideoCardVm,
    busy: bool,
    on_intent: EventHandler<EditorIntent<VideoForm>>,
) -> Element {
    let id = record.id;
    let series = row.series_label.clone().unwrap_or_else(|| "-".to_string());

    rsx! {
        tr {
            td { "{row.title}" }
            td { class: "admin-table__url", "{row.url}" }
            td { "{series}" }
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
fn VideoFormPanel(editor: RecordEditor<VideoForm>, form: VideoForm, creating: bool) -> Element {
    let heading = if creating { "New video" } else { "Edit video" };

    rsx! {
        form { class: "admin-form", onsubmit: move |evt| evt.prevent_default(),
            h3 { "{heading}" }
            label {
                "Title"
                input {
                    id: "video-title",
                    value: "{form.title}",
                    oninput: move |evt| editor.update(|form| form.title = evt.value()),
                }
            }
            label {
                "URL"
                input {
                    r#type: "url",
                    id: "video-url",
                    placeholder: "https://",
                    value: "{form.url}",
                    oninput: move |evt| editor.update(|form| form.url = evt.value()),
                }
            }
            label {
                "Description (markdown)"
                textarea {
                    id: "video-description",
                    rows: "3",
                    value: "{form.description}",
                    oninput: move |evt| editor.update(|form| form.description = evt.value()),
                }
            }
            label {
                "Series id (optional)"
                input {
                    r#type: "number",
                    min: "1",
                    id: "video-series",
                    value: "{form.series_id}",
                    oninput: move |evt| editor.update(|form| form.series_id = evt.value()),
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
