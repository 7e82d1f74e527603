use leptos::prelude::*;

use super::SectionHeading;
use crate::data::EXPERIENCE;

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience" class="py-20 px-4 bg-dark-secondary">
            <div class="max-w-4xl mx-auto">
                <SectionHeading title="Experience" />
                <ol class="relative border-l-2 border-neon-green/40 ml-4 space-y-10">
                    {EXPERIENCE
                        .iter()
                        .map(|job| {
                            view! {
                                <li class="ml-6">
                                    <span class="absolute -left-[9px] w-4 h-4 rounded-full bg-neon-green"></span>
                                    <h3 class="text-xl font-semibold">{job.position}</h3>
                                    <p class="text-neon-green">{job.company}</p>
                                    <p class="text-sm text-light-secondary mb-2">
                                        {job.duration} " · " {job.location}
                                    </p>
                                    <p class="leading-relaxed">{job.description}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
