use std::sync::Arc;

use api::{
    Api, ApiConfig, MatchResource, MemoryTokenStore, QuestionResource, SeriesResource,
    VideoResource,
};

use crate::Clock;
use crate::error::AppServicesError;
use crate::quiz_loop::QuizLoopService;
use crate::resource_service::ResourceService;

/// Assembles app-facing services over one backend.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    offline: bool,
    tokens: Arc<MemoryTokenStore>,
    quiz_loop: Arc<QuizLoopService>,
    series: Arc<ResourceService<SeriesResource>>,
    matches: Arc<ResourceService<MatchResource>>,
    videos: Arc<ResourceService<VideoResource>>,
    questions: Arc<ResourceService<QuestionResource>>,
}

impl AppServices {
    /// Build services talking to the REST API.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the configured base URL is unusable.
    pub fn http(config: &ApiConfig, clock: Clock) -> Result<Self, AppServicesError> {
        log::info!("using REST backend at {}", config.base_url);
        Ok(Self::from_api(Api::http(config)?, clock, false))
    }

    /// Build services over an in-memory backend filled with sample content.
    #[must_use]
    pub fn offline(clock: Clock) -> Self {
        log::info!("using seeded in-memory backend");
        Self::from_api(Api::in_memory_seeded(), clock, true)
    }

    #[must_use]
    pub fn from_api(api: Api, clock: Clock, offline: bool) -> Self {
        Self {
            clock,
            offline,
            quiz_loop: Arc::new(QuizLoopService::new(clock, Arc::clone(&api.question_source))),
            series: Arc::new(ResourceService::new(Arc::clone(&api.series))),
            matches: Arc::new(ResourceService::new(Arc::clone(&api.matches))),
            videos: Arc::new(ResourceService::new(Arc::clone(&api.videos))),
            questions: Arc::new(ResourceService::new(Arc::clone(&api.questions))),
            tokens: api.tokens,
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn is_offline(&self) -> bool {
        self.offline
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.tokens.is_signed_in()
    }

    /// Store the bearer token used for admin mutations. Blank input signs out.
    pub fn sign_in(&self, token: &str) {
        self.tokens.set(token);
    }

    pub fn sign_out(&self) {
        self.tokens.clear();
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    #[must_use]
    pub fn series(&self) -> Arc<ResourceService<SeriesResource>> {
        Arc::clone(&self.series)
    }

    #[must_use]
    pub fn matches(&self) -> Arc<ResourceService<MatchResource>> {
        Arc::clone(&self.matches)
    }

    #[must_use]
    pub fn videos(&self) -> Arc<ResourceService<VideoResource>> {
        Arc::clone(&self.videos)
    }

    #[must_use]
    pub fn questions(&self) -> Arc<ResourceService<QuestionResource>> {
        Arc::clone(&self.questions)
    }
}
