//! Job Aggregator - Dioxus Fullstack Web Application
//!
//! Server-rendered job board. Pages are fetched from the Jobs API through a
//! server function, so the browser never talks to the API directly.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! JOBS_API_URL=http://localhost:5000/api dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod pages;
mod routes;

fn main() {
    #[cfg(feature = "server")]
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,web_dioxus=debug".into()),
        )
        .init();

    dioxus::launch(app::App);
}
