//! Home page: searchable, paginated job board

use dioxus::prelude::*;
use jobs_client::JobPosting;

use crate::api::fetch_jobs;
use crate::components::{JobCard, LoadingSpinner, Pagination};

#[component]
pub fn Home() -> Element {
    let mut page = use_signal(|| 1u32);
    let mut search_input = use_signal(String::new);
    // Committed on submit; the input above is only the draft.
    let mut search = use_signal(String::new);
    // Bumped on submit so re-searching the same term on page 1 still refetches.
    let mut refresh = use_signal(|| 0u32);

    let mut jobs = use_signal(Vec::<JobPosting>::new);
    let mut total = use_signal(|| 0u64);
    let mut total_pages = use_signal(|| 0u32);
    let mut loading = use_signal(|| true);

    use_effect(move || {
        let page = page();
        let search = search();
        let _ = refresh();

        spawn(async move {
            loading.set(true);
            match fetch_jobs(page, search).await {
                Ok(result) => {
                    jobs.set(result.jobs);
                    total.set(result.total);
                    total_pages.set(result.total_pages);
                }
                // Previous results stay on screen.
                Err(e) => tracing::error!(error = %e, page, "Failed to fetch jobs"),
            }
            loading.set(false);
        });
    });

    let handle_search = move |evt: FormEvent| {
        evt.prevent_default();
        search.set(search_input().trim().to_string());
        page.set(1);
        refresh += 1;
    };

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-blue-50 to-white",

            header {
                class: "bg-white border-b border-gray-100",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 sm:py-12 text-center",
                    h1 {
                        class: "text-4xl sm:text-5xl font-bold text-gray-900 mb-4",
                        "Job Aggregator"
                    }
                    p {
                        class: "text-lg text-gray-600 mb-8",
                        "Fresh postings from across the web, in one place."
                    }

                    form {
                        class: "flex gap-3 max-w-xl mx-auto",
                        onsubmit: handle_search,
                        input {
                            r#type: "text",
                            value: "{search_input}",
                            oninput: move |e| search_input.set(e.value()),
                            placeholder: "Search by title or company...",
                            class: "flex-1 px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                        }
                        button {
                            r#type: "submit",
                            class: "px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors font-medium",
                            "Search"
                        }
                    }
                }
            }

            main {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",

                p {
                    class: "text-sm text-gray-500 mb-6",
                    "{total} jobs found"
                }

                if loading() {
                    LoadingSpinner {}
                } else if jobs().is_empty() {
                    div {
                        class: "text-center py-12",
                        p { class: "text-gray-500", "No jobs match your search." }
                    }
                } else {
                    div {
                        class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                        for job in jobs() {
                            JobCard { key: "{job.id}", job: job.clone() }
                        }
                    }
                }

                Pagination {
                    current: page(),
                    total_pages: total_pages(),
                    on_change: move |p| page.set(p),
                }
            }
        }
    }
}
