//! Windowed page-number control

use dioxus::prelude::*;
use jobs_client::{has_next, has_previous, page_window, shows_controls, PageItem};

#[derive(Props, Clone, PartialEq)]
pub struct PaginationProps {
    pub current: u32,
    pub total_pages: u32,
    pub on_change: EventHandler<u32>,
}

#[component]
pub fn Pagination(props: PaginationProps) -> Element {
    let current = props.current;
    let total_pages = props.total_pages;

    if !shows_controls(total_pages) {
        return rsx! {};
    }

    let on_change = props.on_change;
    let items = page_window(current, total_pages);

    rsx! {
        nav {
            class: "flex items-center justify-center gap-1 mt-8",
            button {
                class: "px-3 py-2 rounded-lg text-sm border border-gray-200 disabled:opacity-40",
                disabled: !has_previous(current),
                onclick: move |_| on_change.call(current - 1),
                "Previous"
            }
            for (i, item) in items.into_iter().enumerate() {
                {match item {
                    PageItem::Page(page) => rsx! {
                        button {
                            key: "page-{page}",
                            class: if page == current {
                                "px-3 py-2 rounded-lg text-sm bg-blue-600 text-white"
                            } else {
                                "px-3 py-2 rounded-lg text-sm border border-gray-200 hover:bg-gray-50"
                            },
                            onclick: move |_| on_change.call(page),
                            "{page}"
                        }
                    },
                    PageItem::Ellipsis => rsx! {
                        span { key: "gap-{i}", class: "px-2 text-gray-400", "..." }
                    },
                }}
            }
            button {
                class: "px-3 py-2 rounded-lg text-sm border border-gray-200 disabled:opacity-40",
                disabled: !has_next(current, total_pages),
                onclick: move |_| on_change.call(current + 1),
                "Next"
            }
        }
    }
}
