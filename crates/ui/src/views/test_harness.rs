use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use api::{AdminResource, Api, ApiError, PageResponse, QuestionSource, ResourceRepository};
use cricket_core::PageRequest;
use cricket_core::model::QuizQuestion;
use cricket_core::time::fixed_now;
use services::{AppServices, Clock};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizTestHandles;
use crate::views::{
    AboutView, AdminDashboardView, AdminMatchesView, AdminQuestionsView, AdminSeriesView,
    AdminVideosView, HomeView, QuizView, SeriesView, SignInView, VideosView,
};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn app_name(&self) -> String {
        "Cricket Corner".to_string()
    }

    fn services(&self) -> AppServices {
        self.services.clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Series,
    Videos,
    Quiz,
    About,
    SignIn,
    Admin,
    AdminSeries,
    AdminMatches,
    AdminVideos,
    AdminQuestions,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    quiz_handles: Option<QuizTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    if let Some(handles) = props.quiz_handles.clone() {
        use_context_provider(|| handles);
    }
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
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Series => rsx! { SeriesView {} },
        ViewKind::Videos => rsx! { VideosView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::About => rsx! { AboutView {} },
        ViewKind::SignIn => rsx! { SignInView {} },
        ViewKind::Admin => rsx! { AdminDashboardView {} },
        ViewKind::AdminSeries => rsx! { AdminSeriesView {} },
        ViewKind::AdminMatches => rsx! { AdminMatchesView {} },
        ViewKind::AdminVideos => rsx! { AdminVideosView {} },
        ViewKind::AdminQuestions => rsx! { AdminQuestionsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
    pub quiz_handles: Option<QuizTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then let the first round of fetches settle.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Harness over the seeded offline backend.
pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_api(view, Api::in_memory_seeded())
}

pub fn setup_view_harness_with_api(view: ViewKind, api: Api) -> ViewHarness {
    let services = AppServices::from_api(api, Clock::fixed(fixed_now()), true);
    let quiz_handles = match view {
        ViewKind::Quiz => Some(QuizTestHandles::default()),
        _ => None,
    };
    let app = Arc::new(TestApp {
        services: services.clone(),
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            quiz_handles: quiz_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        services,
        quiz_handles,
    }
}

/// Backend whose every call fails with the same error.
pub struct FailingBackend {
    error: fn() -> ApiError,
}

fn refused() -> ApiError {
    ApiError::Connection("connection refused".to_string())
}

fn forbidden() -> ApiError {
    ApiError::Unauthorized
}

#[async_trait::async_trait]
impl QuestionSource for FailingBackend {
    async fn fetch_random_questions(&self) -> Result<Vec<QuizQuestion>, ApiError> {
        Err((self.error)())
    }
}

#[async_trait::async_trait]
impl<R: AdminResource> ResourceRepository<R> for FailingBackend {
    async fn list(&self, _page: PageRequest) -> Result<PageResponse<R::Record>, ApiError> {
        Err((self.error)())
    }

    async fn create(&self, _draft: &R::Draft) -> Result<(), ApiError> {
        Err((self.error)())
    }

    async fn update(&self, _id: &R::Id, _draft: &R::Draft) -> Result<(), ApiError> {
        Err((self.error)())
    }

    async fn delete(&self, _id: &R::Id) -> Result<(), ApiError> {
        Err((self.error)())
    }
}

fn api_failing_with(error: fn() -> ApiError) -> Api {
    let backend = Arc::new(FailingBackend { error });
    Api {
        question_source: backend.clone(),
        series: backend.clone(),
        matches: backend.clone(),
        videos: backend.clone(),
        questions: backend,
        tokens: Arc::default(),
    }
}

/// Every call fails as if the server were down.
pub fn failing_api() -> Api {
    api_failing_with(refused)
}

/// Every call is refused for lack of credentials.
pub fn forbidden_api() -> Api {
    api_failing_with(forbidden)
}
