//! Loading components

use dioxus::prelude::*;

/// Shown while a page of jobs is being fetched
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center py-16",
            div {
                class: "flex space-x-2",
                div { class: "w-3 h-3 bg-blue-500 rounded-full animate-bounce" }
                div { class: "w-3 h-3 bg-blue-500 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
                div { class: "w-3 h-3 bg-blue-500 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
            }
            p { class: "mt-4 text-sm text-gray-500", "Loading jobs..." }
        }
    }
}
