use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::{AuthState, Route};

#[component]
pub fn SignInView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let auth = try_use_context::<AuthState>();
    let mut token = use_signal(String::new);
    let mut signed_in = use_signal(|| ctx.is_signed_in());
    let mut missing = use_signal(|| false);

    let ctx_for_sign_in = ctx.clone();
    let on_sign_in = move |evt: FormEvent| {
        evt.prevent_default();
        let value = token.peek().trim().to_string();
        if value.is_empty() {
            missing.set(true);
            return;
        }
        ctx_for_sign_in.sign_in(&value);
        token.set(String::new());
        missing.set(false);
        signed_in.set(true);
        if let Some(AuthState(mut flag)) = auth {
            flag.set(true);
        }
        let _ = navigator.push(Route::Admin {});
    };

    let on_sign_out = move |_| {
        ctx.sign_out();
        signed_in.set(false);
        if let Some(AuthState(mut flag)) = auth {
            flag.set(false);
        }
    };

    rsx! {
        div { class: "page sign-in",
            header { class: "page-header",
                h2 { "Editor sign in" }
                p { class: "muted", "Paste the access token issued to you. It is kept in memory only." }
            }
            if signed_in() {
                div { class: "notice",
                    p { "You are signed in and can edit content." }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        id: "sign-out",
                        onclick: on_sign_out,
                        "Sign out"
                    }
                }
            } else {
                form {
                    class: "admin-form",
                    onsubmit: on_sign_in,
                    label {
                        "Access token"
                        input {
                            r#type: "password",
                            id: "sign-in-token",
                            autocomplete: "off",
                            value: "{token}",
                            oninput: move |evt| token.set(evt.value()),
                        }
                    }
                    if missing() {
                        p { class: "error", "Please enter a token." }
                    }
                    button { class: "btn btn-primary", r#type: "submit", id: "sign-in-submit", "Sign in" }
                }
            }
        }
    }
}
