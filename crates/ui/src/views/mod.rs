mod admin;
mod home;
mod pager;
mod pages;
mod quiz;
mod series;
mod sign_in;
mod state;
mod videos;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use admin::{
    AdminDashboardView, AdminMatchesView, AdminQuestionsView, AdminSeriesView, AdminVideosView,
};
pub use home::HomeView;
pub use pages::{AboutView, ContactView};
pub use quiz::QuizView;
pub use series::SeriesView;
pub use sign_in::SignInView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use videos::VideosView;

#[cfg(test)]
pub(crate) use quiz::QuizTestHandles;
