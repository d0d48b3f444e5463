use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

use super::use_signed_in;

#[component]
pub fn AdminDashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let signed_in = use_signed_in(&ctx);

    rsx! {
        div { class: "page admin",
            header { class: "page-header",
                h2 { "Admin" }
                if signed_in {
                    p { class: "muted", "Signed in. Pick a collection to manage." }
                } else {
                    p { class: "muted",
                        "Lists are public. "
                        Link { to: Route::SignIn {}, "Sign in" }
                        " to make changes."
                    }
                }
            }
            div { class: "card-grid",
                AdminTile { to: Route::AdminSeries {}, title: "Series" }
                AdminTile { to: Route::AdminMatches {}, title: "Matches" }
                AdminTile { to: Route::AdminVideos {}, title: "Videos" }
                AdminTile { to: Route::AdminQuestions {}, title: "Quiz questions" }
            }
        }
    }
}

#[component]
fn AdminTile(to: Route, title: &'static str) -> Element {
    rsx! {
        article { class: "card",
            h3 { "{title}" }
            Link { class: "btn btn-secondary", to, "Manage" }
        }
    }
}
