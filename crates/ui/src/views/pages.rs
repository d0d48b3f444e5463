use dioxus::prelude::*;

use crate::vm::{markdown_to_html, sanitize_html};

const ABOUT_MD: &str = include_str!("../../content/about.md");
const CONTACT_MD: &str = include_str!("../../content/contact.md");

#[component]
fn MarkdownPage(source: &'static str) -> Element {
    let html = sanitize_html(&markdown_to_html(source));

    rsx! {
        article { class: "page markdown", dangerous_inner_html: "{html}" }
    }
}

#[component]
pub fn AboutView() -> Element {
    rsx! {
        MarkdownPage { source: ABOUT_MD }
    }
}

#[component]
pub fn ContactView() -> Element {
    rsx! {
        MarkdownPage { source: CONTACT_MD }
    }
}
