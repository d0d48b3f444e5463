mod dashboard;
mod editor;
#[cfg(test)]
mod editor_smoke;
mod matches;
mod questions;
mod series;
mod videos;

use dioxus::prelude::*;

use crate::context::AppContext;
use crate::routes::AuthState;

pub use dashboard::AdminDashboardView;
pub use matches::AdminMatchesView;
pub use questions::AdminQuestionsView;
pub use series::AdminSeriesView;
pub use videos::AdminVideosView;

/// Sign-in state, following the shared flag when a layout provides one.
fn use_signed_in(ctx: &AppContext) -> bool {
    match try_use_context::<AuthState>() {
        Some(AuthState(flag)) => flag(),
        None => ctx.is_signed_in(),
    }
}
