use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::format_date;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let today = format_date(ctx.clock().today());

    rsx! {
        div { class: "page home",
            header { class: "page-header",
                h2 { "Welcome to {ctx.app_name()}" }
                p { class: "muted", "{today}" }
            }
            if ctx.is_offline() {
                p { class: "notice",
                    "You are browsing the offline demo. Changes last until the app closes."
                }
            }
            div { class: "card-grid",
                HomeTile {
                    to: Route::Series {},
                    title: "Series",
                    blurb: "Tours and tournaments with dates and previews.",
                }
                HomeTile {
                    to: Route::Videos {},
                    title: "Videos",
                    blurb: "Highlights and features to watch.",
                }
                HomeTile {
                    to: Route::Quiz {},
                    title: "Quiz",
                    blurb: "Five random questions. Score 80% to earn a celebration.",
                }
            }
        }
    }
}

#[component]
fn HomeTile(to: Route, title: &'static str, blurb: &'static str) -> Element {
    rsx! {
        article { class: "card home-tile",
            h3 { "{title}" }
            p { class: "muted", "{blurb}" }
            Link { class: "btn btn-primary", to, "Open {title}" }
        }
    }
}
