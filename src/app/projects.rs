use leptos::prelude::*;

use super::{SectionHeading, SelectedSkill};
use crate::data::{Project, PROJECTS};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let selected = expect_context::<SelectedSkill>().0;

    view! {
        <section id="projects" class="py-20 px-4 bg-dark-secondary">
            <div class="max-w-6xl mx-auto">
                <SectionHeading title="Projects" />
                {move || {
                    selected
                        .get()
                        .map(|skill| {
                            let count = PROJECTS.iter().filter(|p| p.uses(&skill)).count();
                            view! {
                                <p class="text-center text-sm text-light-secondary mb-8">
                                    {format!("{count} project(s) using {skill}")}
                                </p>
                            }
                        })
                }}
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project selected /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, selected: RwSignal<Option<String>>) -> impl IntoView {
    let matches = move || selected.with(|s| s.as_deref().is_some_and(|skill| project.uses(skill)));

    view! {
        <article class=move || {
            if matches() {
                "p-6 rounded-lg bg-dark-primary border-2 border-neon-green transition-all"
            } else {
                "p-6 rounded-lg bg-dark-primary border border-light-secondary/10 transition-all"
            }
        }>
            <div class="flex justify-between items-start mb-3">
                <h3 class="text-xl font-semibold">{project.title}</h3>
                <span class=format!("text-sm {}", project.status.class())>
                    {project.status.label()}
                </span>
            </div>
            <p class="text-light-secondary mb-4">{project.description}</p>
            <div class="flex flex-wrap gap-2 mb-4">
                {project
                    .technologies
                    .iter()
                    .map(|&tech| {
                        let highlighted = move || {
                            selected.with(|s| s.as_deref().is_some_and(|skill| skill.eq_ignore_ascii_case(tech)))
                        };
                        view! {
                            <span class=move || {
                                if highlighted() {
                                    "px-2 py-1 text-xs rounded bg-neon-green text-dark-primary"
                                } else {
                                    "px-2 py-1 text-xs rounded bg-dark-secondary"
                                }
                            }>{tech}</span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex gap-4 text-sm">
                <a href=project.github_url target="_blank" rel="noopener noreferrer" class="hover:text-neon-green">
                    "Code"
                </a>
                {project
                    .live_url
                    .map(|url| {
                        view! {
                            <a href=url target="_blank" rel="noopener noreferrer" class="hover:text-neon-green">
                                "Live Demo"
                            </a>
                        }
                    })}
            </div>
        </article>
    }
}
