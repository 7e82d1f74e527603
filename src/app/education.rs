use leptos::prelude::*;

use super::SectionHeading;
use crate::data::EDUCATION;

#[component]
pub fn EducationSection() -> impl IntoView {
    view! {
        <section id="education" class="py-20 px-4">
            <div class="max-w-4xl mx-auto">
                <SectionHeading title="Education" />
                <div class="grid gap-6">
                    {EDUCATION
                        .iter()
                        .map(|entry| {
                            view! {
                                <div class="p-6 rounded-lg bg-dark-secondary border border-light-secondary/10">
                                    <div class="flex flex-col md:flex-row md:justify-between md:items-baseline mb-2">
                                        <h3 class="text-lg font-semibold">
                                            {entry.degree} " - " {entry.field}
                                        </h3>
                                        <span class="text-sm text-light-secondary">{entry.duration}</span>
                                    </div>
                                    <p class="text-neon-green mb-2">{entry.institution}</p>
                                    <p class="text-light-secondary">{entry.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
