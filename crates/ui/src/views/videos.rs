use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::pager::{DEFAULT_PAGE_SIZE, ListError, PageMove, Pager, use_paged_list};
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::{VideoCardVm, map_video_cards, sanitize_html};

#[component]
pub fn VideosView() -> Element {
    let ctx = use_context::<AppContext>();
    let list = use_paged_list(ctx.videos(), DEFAULT_PAGE_SIZE);
    let state = view_state_from_resource(&list.rows);
    let dispatch = list.dispatch;

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "Videos" }
                p { class: "muted", "Highlights and features from around the game." }
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "muted", "Loading videos..." }
                },
                ViewState::Error(err) => rsx! {
                    ListError { error: err, on_retry: move |()| dispatch.call(PageMove::Refresh) }
                },
                ViewState::Ready(items) => {
                    let cards = map_video_cards(&items);
                    rsx! {
                        if cards.is_empty() {
                            p { class: "empty", "No videos yet." }
                        } else {
                            div { class: "card-grid",
                                for card in cards {
                                    VideoCard { key: "{card.id}", card }
                                }
                            }
                        }
                    }
                }
            }
            Pager { pager: *list.pager.read(), on_move: dispatch }
        }
    }
}

#[component]
fn VideoCard(card: VideoCardVm) -> Element {
    let description = sanitize_html(&card.description_html);

    rsx! {
        article { class: "card video-card",
            header { class: "card__header",
                h3 { "{card.title}" }
                if let Some(series) = card.series_label.as_ref() {
                    span { class: "badge", "{series}" }
                }
            }
            div { class: "card__body", dangerous_inner_html: "{description}" }
            a {
                class: "btn btn-primary",
                href: "{card.url}",
                target: "_blank",
                rel: "noopener noreferrer",
                "Watch"
            }
        }
    }
}
