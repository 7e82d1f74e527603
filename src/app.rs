mod blog;
mod contact;
mod education;
mod experience;
mod footer;
mod hero;
mod landing;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use blog::{BlogPostPage, BlogSection};
use contact::ContactSection;
use education::EducationSection;
use experience::ExperienceSection;
use footer::Footer;
use hero::HeroSection;
use landing::Landing;
use projects::ProjectsSection;
use skills::SkillsSection;

pub use blog::{get_post_server, get_posts_server};
pub use contact::submit_contact_server;

use crate::{api::ApiError, data::NAME};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-dark-primary text-light-primary font-sans">
                <App />
            </body>
        </html>
    }
}

/// Skill picked in the word cloud, shared with the projects section.
#[derive(Debug, Clone, Copy)]
pub struct SelectedSkill(pub RwSignal<Option<String>>);

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{NAME} - {title}") />

        <Router>
            <main class="flex flex-col min-h-screen w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=Portfolio />
                    <Route path=path!("/blog/:id") view=BlogPostPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn Portfolio() -> impl IntoView {
    provide_context(SelectedSkill(RwSignal::new(None)));

    view! {
        <Title text="AI/ML Product Engineer" />
        <Landing />
        <HeroSection />
        <ExperienceSection />
        <SkillsSection />
        <ProjectsSection />
        <BlogSection />
        <EducationSection />
        <ContactSection />
        <Footer />
    }
}

/// A server function that never got an answer is a network failure from the
/// page's point of view.
fn flatten<T>(res: Result<Result<T, ApiError>, ServerFnError>) -> Result<T, ApiError> {
    res.unwrap_or_else(|e| Err(ApiError::network(e.to_string())))
}

#[component]
fn SectionHeading(title: &'static str, #[prop(optional)] subtitle: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <h2 class="text-3xl md:text-4xl font-bold mb-4">
                <span class="text-neon-green">"<"</span>
                {title}
                <span class="text-neon-green">" />"</span>
            </h2>
            {subtitle
                .map(|s| {
                    view! { <p class="text-light-secondary max-w-2xl mx-auto">{s}</p> }
                })}
        </div>
    }
}
