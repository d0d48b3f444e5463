use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    let app_name = try_consume_context::<AppContext>()
        .map(|ctx| ctx.app_name().to_string())
        .unwrap_or_else(|| "Cricket Corner".to_string());

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{app_name}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: move |errors: ErrorContext| rsx! {
                    FatalPanel { report: format!("{errors:?}") }
                },
                Router::<Route> {}
            }
        }
    }
}

/// Shown when a view panics or bubbles an error past its own handling.
#[component]
fn FatalPanel(report: String) -> Element {
    rsx! {
        div { class: "fatal",
            h1 { "The scoreboard went dark" }
            p { "Something failed while drawing this screen. Reload the window to try again." }
            details {
                summary { "Technical details" }
                pre { "{report}" }
            }
        }
    }
}
