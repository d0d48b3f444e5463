use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{
    AboutView, AdminDashboardView, AdminMatchesView, AdminQuestionsView, AdminSeriesView,
    AdminVideosView, ContactView, HomeView, QuizView, SeriesView, SignInView, VideosView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/series", SeriesView)] Series {},
        #[route("/videos", VideosView)] Videos {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/about", AboutView)] About {},
        #[route("/contact", ContactView)] Contact {},
        #[route("/sign-in", SignInView)] SignIn {},
        #[nest("/admin")]
            #[route("/", AdminDashboardView)] Admin {},
            #[route("/series", AdminSeriesView)] AdminSeries {},
            #[route("/matches", AdminMatchesView)] AdminMatches {},
            #[route("/videos", AdminVideosView)] AdminVideos {},
            #[route("/questions", AdminQuestionsView)] AdminQuestions {},
}

/// Whether a bearer token is held, shared so the sidebar follows sign-in.
#[derive(Clone, Copy)]
pub struct AuthState(pub Signal<bool>);

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let signed_in = ctx.is_signed_in();
    let auth = use_context_provider(|| AuthState(Signal::new(signed_in)));

    rsx! {
        div { class: "app",
            Sidebar { signed_in: (auth.0)(), offline: ctx.is_offline(), app_name: ctx.app_name().to_string() }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar(signed_in: bool, offline: bool, app_name: String) -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "{app_name}" }
            if offline {
                p { class: "badge badge--offline", "Offline demo" }
            }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Series {}, "Series" } }
                li { Link { to: Route::Videos {}, "Videos" } }
                li { Link { to: Route::Quiz {}, "Quiz" } }
                li { Link { to: Route::About {}, "About" } }
                li { Link { to: Route::Contact {}, "Contact" } }
            }
            h2 { class: "sidebar__section", "Admin" }
            ul {
                li { Link { to: Route::Admin {}, "Dashboard" } }
                li {
                    Link { to: Route::SignIn {},
                        if signed_in { "Signed in" } else { "Sign in" }
                    }
                }
            }
        }
    }
}
