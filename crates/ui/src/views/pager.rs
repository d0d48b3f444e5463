use std::sync::Arc;

use dioxus::prelude::*;

use api::AdminResource;
use cricket_core::PaginationController;
use services::ResourceService;

use crate::views::ViewError;

pub const PAGE_SIZES: [u32; 3] = [5, 20, 50];
pub const DEFAULT_PAGE_SIZE: u32 = PAGE_SIZES[0];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageMove {
    Refresh,
    Next,
    Previous,
    Resize(u32),
}

/// A list screen's cursor plus the rows of the page it points at.
pub struct PagedList<T: 'static> {
    pub pager: Signal<PaginationController>,
    pub rows: Resource<Result<Vec<T>, ViewError>>,
    pub dispatch: Callback<PageMove>,
}

impl<T> Clone for PagedList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PagedList<T> {}

/// Fetch pages of `R` through `service`, starting at page 0.
///
/// The resource only reruns on `restart`, so a page is fetched exactly when
/// the cursor accepted a move. A `Refresh` that arrives while a fetch is in
/// flight is held and run as soon as that fetch returns, so the rows never
/// predate a mutation that asked for them.
pub fn use_paged_list<R: AdminResource>(
    service: Arc<ResourceService<R>>,
    page_size: u32,
) -> PagedList<R::Record> {
    let mut pager = use_signal(|| {
        let mut pager = PaginationController::new(page_size);
        pager.begin_refresh();
        pager
    });
    let mut refresh_pending = use_signal(|| false);

    let rows = use_resource(move || {
        let service = Arc::clone(&service);
        let mut pager = pager;
        let mut refresh_pending = refresh_pending;
        async move {
            let mut cursor = *pager.peek();
            let mut result = service.load_page(&mut cursor).await;
            while *refresh_pending.peek() {
                refresh_pending.set(false);
                if !cursor.begin_refresh() {
                    break;
                }
                pager.set(cursor);
                result = service.load_page(&mut cursor).await;
            }
            pager.set(cursor);
            result.map_err(|err| ViewError::from(&err))
        }
    });

    let dispatch = use_callback(move |step: PageMove| {
        let mut cursor = *pager.peek();
        let fetch = match step {
            PageMove::Refresh if cursor.in_flight() => {
                refresh_pending.set(true);
                false
            }
            PageMove::Refresh => cursor.begin_refresh(),
            PageMove::Next => cursor.next(),
            PageMove::Previous => cursor.previous(),
            PageMove::Resize(size) => {
                if cursor.in_flight() || size == cursor.page_size() {
                    false
                } else {
                    cursor = PaginationController::new(size);
                    cursor.begin_refresh()
                }
            }
        };
        if fetch {
            pager.set(cursor);
            let mut rows = rows;
            rows.restart();
        }
    });

    PagedList {
        pager,
        rows,
        dispatch,
    }
}

/// `locked` disables paging while something else on the screen is busy.
#[component]
pub fn Pager(
    pager: PaginationController,
    #[props(default)] locked: bool,
    on_move: EventHandler<PageMove>,
) -> Element {
    let busy = locked || pager.in_flight();
    let size = pager.page_size();

    rsx! {
        div { class: "pager",
            button {
                class: "btn btn-secondary",
                r#type: "button",
                id: "pager-previous",
                disabled: busy || !pager.has_previous(),
                onclick: move |_| on_move.call(PageMove::Previous),
                "Previous"
            }
            span { class: "pager__label", "{pager.label()}" }
            span { class: "pager__total", "{pager.total_items()} items" }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                id: "pager-next",
                disabled: busy || !pager.has_next(),
                onclick: move |_| on_move.call(PageMove::Next),
                "Next"
            }
            label { class: "pager__size",
                "Per page "
                select {
                    disabled: busy,
                    onchange: move |evt| {
                        if let Ok(size) = evt.value().parse::<u32>() {
                            on_move.call(PageMove::Resize(size));
                        }
                    },
                    for choice in PAGE_SIZES {
                        option { key: "{choice}", value: "{choice}", selected: choice == size, "{choice}" }
                    }
                }
            }
        }
    }
}

/// Error line with a retry button for list screens.
#[component]
pub fn ListError(error: ViewError, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { class: "error",
            p { "{error.message()}" }
            if error.is_retryable() {
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        }
    }
}
