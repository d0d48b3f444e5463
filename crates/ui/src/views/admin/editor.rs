use std::sync::Arc;

use chrono::NaiveDate;
use dioxus::prelude::*;

use api::AdminResource;
use services::ResourceService;

use crate::views::ViewError;
use crate::views::pager::{PageMove, PagedList};
use crate::vm::{IdOf, RecordForm, RecordOf};

/// The record open in the form. `id` is `None` while creating.
#[derive(Clone, PartialEq)]
pub struct Editing<F: RecordForm> {
    pub id: Option<IdOf<F>>,
    pub form: F,
}

pub enum EditorIntent<F: RecordForm> {
    New,
    Edit(RecordOf<F>),
    Cancel,
    Save,
    Delete(IdOf<F>),
}

pub struct RecordEditor<F: RecordForm> {
    pub editing: Signal<Option<Editing<F>>>,
    pub saving: Signal<bool>,
    pub error: Signal<Option<ViewError>>,
    pub dispatch: Callback<EditorIntent<F>>,
}

impl<F: RecordForm> Clone for RecordEditor<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: RecordForm> Copy for RecordEditor<F> {}

impl<F: RecordForm> PartialEq for RecordEditor<F> {
    fn eq(&self, other: &Self) -> bool {
        self.editing == other.editing
            && self.saving == other.saving
            && self.error == other.error
            && self.dispatch == other.dispatch
    }
}

impl<F: RecordForm> RecordEditor<F> {
    /// Apply `edit` to the open form, if any.
    pub fn update(&self, edit: impl FnOnce(&mut F)) {
        let mut editing = self.editing;
        if let Some(current) = editing.write().as_mut() {
            edit(&mut current.form);
        }
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        *self.saving.read()
    }
}

/// Create, update and delete records of one resource, refetching `list`
/// after every successful mutation.
pub fn use_record_editor<F: RecordForm>(
    service: Arc<ResourceService<F::Resource>>,
    list: PagedList<RecordOf<F>>,
    today: NaiveDate,
) -> RecordEditor<F> {
    let editing = use_signal(|| None::<Editing<F>>);
    let saving = use_signal(|| false);
    let error = use_signal(|| None::<ViewError>);

    let dispatch = use_callback(move |intent: EditorIntent<F>| {
        let mut editing = editing;
        let mut saving = saving;
        let mut error = error;

        match intent {
            EditorIntent::New => {
                error.set(None);
                editing.set(Some(Editing {
                    id: None,
                    form: F::blank(today),
                }));
            }
            EditorIntent::Edit(record) => {
                error.set(None);
                editing.set(Some(Editing {
                    id: Some(<F::Resource as AdminResource>::id_of(&record)),
                    form: F::from_record(&record),
                }));
            }
            EditorIntent::Cancel => {
                error.set(None);
                editing.set(None);
            }
            EditorIntent::Save => {
                if *saving.peek() {
                    return;
                }
                let Some(current) = editing.peek().clone() else {
                    return;
                };
                let draft = match current.form.to_draft() {
                    Ok(draft) => draft,
                    Err(err) => {
                        error.set(Some(err));
                        return;
                    }
                };
                let service = Arc::clone(&service);
                saving.set(true);
                spawn(async move {
                    let result = match current.id.as_ref() {
                        Some(id) => service.update(id, &draft).await,
                        None => service.create(&draft).await,
                    };
                    saving.set(false);
                    match result {
                        Ok(()) => {
                            error.set(None);
                            editing.set(None);
                            list.dispatch.call(PageMove::Refresh);
                        }
                        Err(err) => error.set(Some(ViewError::from(&err))),
                    }
                });
            }
            EditorIntent::Delete(id) => {
                if *saving.peek() {
                    return;
                }
                let service = Arc::clone(&service);
                saving.set(true);
                spawn(async move {
                    let result = service.delete(&id).await;
                    saving.set(false);
                    match result {
                        Ok(()) => {
                            error.set(None);
                            list.dispatch.call(PageMove::Refresh);
                        }
                        Err(err) => {
                            let err = ViewError::from(&err);
                            // Someone else already removed it; show the list as it is now.
                            if err == ViewError::NotFound {
                                list.dispatch.call(PageMove::Refresh);
                            }
                            error.set(Some(err));
                        }
                    }
                });
            }
        }
    });

    RecordEditor {
        editing,
        saving,
        error,
        dispatch,
    }
}

#[component]
pub fn AdminToolbar(
    title: &'static str,
    signed_in: bool,
    busy: bool,
    on_new: EventHandler<()>,
) -> Element {
    rsx! {
        header { class: "page-header admin-toolbar",
            h2 { "{title}" }
            button {
                class: "btn btn-primary",
                r#type: "button",
                id: "admin-new",
                disabled: busy,
                onclick: move |_| on_new.call(()),
                "New"
            }
        }
        if !signed_in {
            p { class: "notice", "Sign in to create, edit or delete." }
        }
    }
}

#[component]
pub fn FormActions(saving: bool, on_save: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    rsx! {
        div { class: "row-actions",
            button {
                class: "btn btn-primary",
                r#type: "button",
                id: "admin-save",
                disabled: saving,
                onclick: move |_| on_save.call(()),
                if saving { "Saving..." } else { "Save" }
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                disabled: saving,
                onclick: move |_| on_cancel.call(()),
                "Cancel"
            }
        }
    }
}

#[component]
pub fn RowActions(busy: bool, on_edit: EventHandler<()>, on_delete: EventHandler<()>) -> Element {
    rsx! {
        div { class: "row-actions",
            button {
                class: "btn btn-secondary",
                r#type: "button",
                disabled: busy,
                onclick: move |_| on_edit.call(()),
                "Edit"
            }
            button {
                class: "btn btn-danger",
                r#type: "button",
                disabled: busy,
                onclick: move |_| on_delete.call(()),
                "Delete"
            }
        }
    }
}

#[component]
pub fn EditorError(error: Option<ViewError>) -> Element {
    rsx! {
        if let Some(err) = error {
            p { class: "error", id: "admin-error", "{err.message()}" }
        }
    }
}
