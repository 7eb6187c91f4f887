//! Root application component

use dioxus::prelude::*;

use crate::routes::Route;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Job Aggregator" }
        document::Script { src: TAILWIND_CDN }

        Router::<Route> {}
    }
}
