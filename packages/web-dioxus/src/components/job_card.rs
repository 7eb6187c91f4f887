//! Job card component

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use jobs_client::JobPosting;

/// Tags rendered before collapsing the rest into "+N more".
const MAX_VISIBLE_TAGS: usize = 4;

#[derive(Props, Clone, PartialEq)]
pub struct JobCardProps {
    pub job: JobPosting,
}

#[component]
pub fn JobCard(props: JobCardProps) -> Element {
    let job = &props.job;

    let location = if job.remote {
        "Remote".to_string()
    } else {
        job.location.clone()
    };
    let posted = format_posted(job.posted_at, Utc::now());
    let (tags, hidden_tags) = visible_tags(&job.tags);

    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white p-5 hover:shadow-lg transition-all duration-200 flex flex-col h-full",

            // Header: source + posted time
            div {
                class: "flex items-center justify-between mb-3",
                span {
                    class: "px-2.5 py-1 rounded-full text-xs font-medium bg-blue-100 text-blue-700",
                    "{job.source}"
                }
                span { class: "text-xs text-gray-400", "{posted}" }
            }

            h3 {
                class: "text-lg font-semibold text-gray-900 mb-1 line-clamp-2",
                "{job.title}"
            }
            p {
                class: "text-sm font-medium text-gray-600 mb-2",
                "{job.company}"
            }
            p {
                class: "text-sm text-gray-500 mb-3",
                "{location}"
            }

            if let Some(salary) = &job.salary {
                p { class: "text-sm text-emerald-700 mb-3", "{salary}" }
            }

            div {
                class: "flex flex-wrap gap-2 mb-4 flex-grow content-start",
                for tag in tags {
                    span {
                        key: "{tag}",
                        class: "bg-gray-100 px-2 py-0.5 rounded text-xs text-gray-700",
                        "{tag}"
                    }
                }
                if hidden_tags > 0 {
                    span {
                        class: "px-2 py-0.5 text-xs text-gray-500",
                        "+{hidden_tags} more"
                    }
                }
            }

            div {
                class: "mt-auto pt-3 border-t border-gray-200/60",
                a {
                    href: "{job.url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: "inline-flex items-center px-3 py-1.5 bg-blue-600 text-white text-sm rounded-lg hover:bg-blue-700 transition-colors",
                    "Apply Now"
                }
            }
        }
    }
}

/// Relative age of a posting, "Recently" when the timestamp is unknown or in
/// the future.
pub fn format_posted(posted_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(posted_at) = posted_at else {
        return "Recently".to_string();
    };

    let diff = now.signed_duration_since(posted_at);
    if diff.num_seconds() < 0 {
        return "Recently".to_string();
    }

    let days = diff.num_days();
    match days {
        0 => match diff.num_hours() {
            0 => "Just now".to_string(),
            1 => "1 hour ago".to_string(),
            h => format!("{} hours ago", h),
        },
        1 => "Yesterday".to_string(),
        d if d < 7 => format!("{} days ago", d),
        d if d < 30 => format!("{} weeks ago", d / 7),
        d => format!("{} months ago", d / 30),
    }
}

fn visible_tags(tags: &[String]) -> (&[String], usize) {
    let shown = tags.len().min(MAX_VISIBLE_TAGS);
    (&tags[..shown], tags.len() - shown)
}
