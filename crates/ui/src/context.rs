use std::sync::Arc;

use api::{MatchResource, QuestionResource, SeriesResource, VideoResource};
use services::{AppServices, Clock, QuizLoopService, ResourceService};

pub trait UiApp: Send + Sync {
    fn app_name(&self) -> String;
    fn services(&self) -> AppServices;
}

#[derive(Clone)]
pub struct AppContext {
    app_name: String,
    services: AppServices,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app_name: app.app_name(),
            services: app.services(),
        }
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.services.clock()
    }

    #[must_use]
    pub fn is_offline(&self) -> bool {
        self.services.is_offline()
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.services.is_signed_in()
    }

    pub fn sign_in(&self, token: &str) {
        self.services.sign_in(token);
    }

    pub fn sign_out(&self) {
        self.services.sign_out();
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        self.services.quiz_loop()
    }

    #[must_use]
    pub fn series(&self) -> Arc<ResourceService<SeriesResource>> {
        self.services.series()
    }

    #[must_use]
    pub fn matches(&self) -> Arc<ResourceService<MatchResource>> {
        self.services.matches()
    }

    #[must_use]
    pub fn videos(&self) -> Arc<ResourceService<VideoResource>> {
        self.services.videos()
    }

    #[must_use]
    pub fn questions(&self) -> Arc<ResourceService<QuestionResource>> {
        self.services.questions()
    }
}

// Provided by the composition root (`crates/app`) or the view test harness.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
