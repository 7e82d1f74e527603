use leptos::prelude::*;

use crate::data::{EMAIL, GITHUB_HANDLE, GITHUB_URL, INITIALS, LOCATION, NAME, SUMMARY, TAGLINE};

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section id="hero-section" class="py-20 px-4">
            <div class="max-w-6xl mx-auto flex flex-col lg:flex-row items-center gap-12">
                <div class="flex-shrink-0 w-48 h-48 rounded-full border-4 border-neon-green flex items-center justify-center bg-dark-secondary">
                    <span class="text-5xl font-bold font-mono text-neon-green">{INITIALS}</span>
                </div>
                <div class="text-center lg:text-left">
                    <h1 class="text-4xl md:text-5xl font-bold mb-2">{NAME}</h1>
                    <p class="text-xl text-neon-green font-mono mb-6">{TAGLINE}</p>
                    <p class="text-light-secondary leading-relaxed mb-6 max-w-2xl">{SUMMARY}</p>
                    <div class="flex flex-wrap gap-4 justify-center lg:justify-start text-sm">
                        <span class="text-light-secondary">"📍 " {LOCATION}</span>
                        <a href=format!("mailto:{EMAIL}") class="hover:text-neon-green transition-colors">
                            "✉ " {EMAIL}
                        </a>
                        <a
                            href=GITHUB_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hover:text-neon-green transition-colors"
                        >
                            {GITHUB_HANDLE}
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
