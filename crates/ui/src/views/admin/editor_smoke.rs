use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use api::{Api, ApiError, PageResponse, ResourceRepository, SeriesResource};
use cricket_core::PageRequest;
use cricket_core::model::{Series, SeriesDraft, SeriesId};
use cricket_core::time::fixed_now;
use services::{AppServices, Clock};

use super::editor::{EditorIntent, RecordEditor, use_record_editor};
use crate::views::ViewError;
use crate::views::pager::{PageMove, PagedList, use_paged_list};
use crate::views::test_harness::drive_dom;
use crate::vm::SeriesForm;

#[derive(Clone, Default)]
struct HarnessHandles {
    editor: Rc<RefCell<Option<RecordEditor<SeriesForm>>>>,
    list: Rc<RefCell<Option<PagedList<Series>>>>,
}

impl HarnessHandles {
    fn editor(&self) -> RecordEditor<SeriesForm> {
        (*self.editor.borrow()).expect("editor registered")
    }

    fn list(&self) -> PagedList<Series> {
        (*self.list.borrow()).expect("list registered")
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    services: AppServices,
    handles: HarnessHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn EditorHarness(props: HarnessProps) -> Element {
    let list = use_paged_list(props.services.series(), 2);
    let editor =
        use_record_editor::<SeriesForm>(props.services.series(), list, props.services.clock().today());
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.handles.editor.borrow_mut() = Some(editor);
        *props.handles.list.borrow_mut() = Some(list);
    }
    rsx! { div {} }
}

#[component]
fn EditorRouterHarness(props: HarnessProps) -> Element {
    use_context_provider(|| props);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let props = use_context::<HarnessProps>();
    rsx! {
        EditorHarness { services: props.services.clone(), handles: props.handles.clone() }
    }
}

async fn settle(dom: &mut VirtualDom) {
    for _ in 0..3 {
        let _ = tokio::time::timeout(std::time::Duration::from_millis(50), dom.wait_for_work()).await;
        drive_dom(dom);
    }
}

fn mount(services: &AppServices) -> (VirtualDom, HarnessHandles) {
    let handles = HarnessHandles::default();
    let mut dom = VirtualDom::new_with_props(
        EditorRouterHarness,
        HarnessProps {
            services: services.clone(),
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();
    (dom, handles)
}

/// Series repository that counts list requests before delegating.
struct CountingSeries {
    inner: Arc<dyn ResourceRepository<SeriesResource>>,
    lists: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl ResourceRepository<SeriesResource> for CountingSeries {
    async fn list(&self, page: PageRequest) -> Result<PageResponse<Series>, ApiError> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        self.inner.list(page).await
    }

    async fn create(&self, draft: &SeriesDraft) -> Result<(), ApiError> {
        self.inner.create(draft).await
    }

    async fn update(&self, id: &SeriesId, draft: &SeriesDraft) -> Result<(), ApiError> {
        self.inner.update(id, draft).await
    }

    async fn delete(&self, id: &SeriesId) -> Result<(), ApiError> {
        self.inner.delete(id).await
    }
}

fn fill(editor: RecordEditor<SeriesForm>, name: &str, start: &str, end: &str) {
    editor.update(|form| {
        form.name = name.to_string();
        form.start_date = start.to_string();
        form.end_date = end.to_string();
    });
}

#[tokio::test(flavor = "current_thread")]
async fn editor_intents_smoke_create_reject_delete() {
    let services = AppServices::from_api(Api::in_memory_seeded(), Clock::fixed(fixed_now()), true);
    let (mut dom, handles) = mount(&services);
    settle(&mut dom).await;

    let editor = handles.editor();
    let list = handles.list();
    assert_eq!(dom.in_runtime(|| list.pager.peek().total_items()), 3);

    // Signed out: the backend refuses and the form stays open.
    dom.in_runtime(|| editor.dispatch.call(EditorIntent::New));
    dom.in_runtime(|| fill(editor, "Border-Gavaskar Trophy", "2026-11-20", "2027-01-08"));
    dom.in_runtime(|| editor.dispatch.call(EditorIntent::Save));
    settle(&mut dom).await;
    assert_eq!(
        dom.in_runtime(|| editor.error.peek().clone()),
        Some(ViewError::Unauthorized)
    );
    assert!(dom.in_runtime(|| editor.editing.peek().is_some()));

    services.sign_in("editor-token");
    dom.in_runtime(|| editor.dispatch.call(EditorIntent::Save));
    settle(&mut dom).await;
    assert_eq!(dom.in_runtime(|| editor.error.peek().clone()), None);
    assert!(dom.in_runtime(|| editor.editing.peek().is_none()));
    assert_eq!(dom.in_runtime(|| list.pager.peek().total_items()), 4);
    assert_eq!(dom.in_runtime(|| list.pager.peek().total_pages()), 2);

    // A date the form cannot parse never leaves the screen.
    dom.in_runtime(|| editor.dispatch.call(EditorIntent::New));
    dom.in_runtime(|| fill(editor, "Asia Cup", "next week", "2026-09-20"));
    dom.in_runtime(|| editor.dispatch.call(EditorIntent::Save));
    drive_dom(&mut dom);
    let err = dom.in_runtime(|| editor.error.peek().clone()).expect("invalid form");
    assert!(matches!(err, ViewError::Invalid(_)), "unexpected {err:?}");
    dom.in_runtime(|| editor.dispatch.call(EditorIntent::Cancel));

    dom.in_runtime(|| editor.dispatch.call(EditorIntent::Delete(SeriesId::new(1))));
    settle(&mut dom).await;
    assert_eq!(dom.in_runtime(|| list.pager.peek().total_items()), 3);

    // Deleting it again reports the row as gone and refreshes.
    dom.in_runtime(|| editor.dispatch.call(EditorIntent::Delete(SeriesId::new(1))));
    settle(&mut dom).await;
    assert_eq!(
        dom.in_runtime(|| editor.error.peek().clone()),
        Some(ViewError::NotFound)
    );
}

#[tokio::test(flavor = "current_thread")]
async fn refresh_requested_mid_fetch_runs_after_it() {
    let lists = Arc::new(AtomicUsize::new(0));
    let mut api = Api::in_memory_seeded();
    api.series = Arc::new(CountingSeries {
        inner: api.series.clone(),
        lists: lists.clone(),
    });
    let services = AppServices::from_api(api, Clock::fixed(fixed_now()), true);
    let (mut dom, handles) = mount(&services);
    settle(&mut dom).await;
    assert_eq!(lists.load(Ordering::SeqCst), 1);

    // A save finishing while the next page is loading asks for a refresh.
    let list = handles.list();
    dom.in_runtime(|| list.dispatch.call(PageMove::Next));
    assert!(dom.in_runtime(|| list.pager.peek().in_flight()));
    dom.in_runtime(|| list.dispatch.call(PageMove::Refresh));
    settle(&mut dom).await;

    assert_eq!(lists.load(Ordering::SeqCst), 3);
    assert!(!dom.in_runtime(|| list.pager.peek().in_flight()));
    assert_eq!(dom.in_runtime(|| list.pager.peek().page_index()), 1);
}
