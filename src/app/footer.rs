use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use crate::data::{EMAIL, FOOTER_LINKS, GITHUB_URL, NAME};

/// Copyright year, taken from when the site was built.
fn build_year(build_time: &str) -> i32 {
    DateTime::parse_from_rfc3339(build_time)
        .map(|dt| dt.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = build_year(env!("BUILD_TIME"));

    view! {
        <footer class="py-10 px-4 border-t border-light-secondary/10">
            <div class="max-w-6xl mx-auto flex flex-col md:flex-row justify-between items-center gap-6">
                <nav class="flex flex-wrap gap-4 text-sm">
                    {FOOTER_LINKS
                        .iter()
                        .map(|&(label, href)| {
                            view! {
                                <a href=href class="text-light-secondary hover:text-neon-green transition-colors">
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="flex gap-4 text-sm">
                    <a href=format!("mailto:{EMAIL}") class="hover:text-neon-green">"Email"</a>
                    <a href=GITHUB_URL target="_blank" rel="noopener noreferrer" class="hover:text-neon-green">
                        "GitHub"
                    </a>
                </div>
                <p class="text-sm text-light-secondary">
                    {format!("© {year} {NAME}. All rights reserved.")}
                </p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_year() {
        assert_eq!(build_year("2025-03-02T10:00:00+00:00"), 2025);
        assert_eq!(build_year("garbage"), Utc::now().year());
        assert!(build_year(env!("BUILD_TIME")) >= 2025);
    }
}
