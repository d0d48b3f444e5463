use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::pager::{DEFAULT_PAGE_SIZE, ListError, PageMove, Pager, use_paged_list};
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::{SeriesCardVm, map_series_cards, sanitize_html};

#[component]
pub fn SeriesView() -> Element {
    let ctx = use_context::<AppContext>();
    let today = ctx.clock().today();
    let list = use_paged_list(ctx.series(), DEFAULT_PAGE_SIZE);
    let state = view_state_from_resource(&list.rows);
    let dispatch = list.dispatch;

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "Series" }
                p { class: "muted", "Tournaments and bilateral tours, newest first." }
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "muted", "Loading series..." }
                },
                ViewState::Error(err) => rsx! {
                    ListError { error: err, on_retry: move |()| dispatch.call(PageMove::Refresh) }
                },
                ViewState::Ready(items) => {
                    let cards = map_series_cards(&items, today);
                    rsx! {
                        if cards.is_empty() {
                            p { class: "empty", "No series yet." }
                        } else {
                            div { class: "card-grid",
                                for card in cards {
                                    SeriesCard { key: "{card.id}", card }
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
fn SeriesCard(card: SeriesCardVm) -> Element {
    let description = sanitize_html(&card.description_html);
    let phase_class = format!("badge badge--{}", card.phase_label.to_lowercase());

    rsx! {
        article { class: "card series-card",
            header { class: "card__header",
                h3 { "{card.name}" }
                span { class: "{phase_class}", "{card.phase_label}" }
            }
            p { class: "card__meta", "{card.dates_label}" }
            div { class: "card__body", dangerous_inner_html: "{description}" }
        }
    }
}
