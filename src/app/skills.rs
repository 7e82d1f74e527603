use leptos::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use super::{SectionHeading, SelectedSkill};
use crate::{
    data::{SKILL_GROUPS, SKILL_WEIGHTS},
    wordcloud::{layout, Canvas, PlacedLabel, WeightedLabel},
};

const CLOUD: Canvas = Canvas::new(800.0, 450.0);

const PALETTE: &[&str] = &["#39ff14", "#00d4ff", "#ff6b6b", "#ffd93d", "#c77dff", "#4ecdc4"];

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeading title="Skills" subtitle="Click a skill to see where it is used" />
                <WordCloud />
                <div class="grid md:grid-cols-2 gap-8 mt-12">
                    {SKILL_GROUPS
                        .iter()
                        .map(|&(group, skills)| {
                            view! {
                                <div>
                                    <h3 class="text-lg font-semibold text-neon-green mb-4">{group}</h3>
                                    <div class="flex flex-wrap gap-2">
                                        {skills
                                            .iter()
                                            .map(|&skill| {
                                                view! {
                                                    <span class="px-3 py-1 rounded-full bg-dark-secondary text-sm border border-light-secondary/20">
                                                        {skill}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn WordCloud() -> impl IntoView {
    let selected = expect_context::<SelectedSkill>().0;
    let placed = RwSignal::new(Vec::<PlacedLabel>::new());
    let hovered = RwSignal::new(None::<(String, f64)>);

    // random layout, so it only runs after hydration
    Effect::new(move |_| {
        let labels = SKILL_WEIGHTS
            .iter()
            .map(|&(text, weight)| WeightedLabel::new(text, weight))
            .collect::<Vec<_>>();
        let mut rng = StdRng::from_entropy();
        placed.set(layout(&labels, CLOUD, &mut rng));
    });

    let word = move |(index, label): (usize, PlacedLabel)| {
        let text = label.text.clone();
        let hover_text = label.text.clone();
        let color = PALETTE[index % PALETTE.len()];
        let is_selected = {
            let text = label.text.clone();
            move || selected.with(|s| s.as_deref() == Some(text.as_str()))
        };
        view! {
            <text
                x=format!("{:.1}", label.x)
                y=format!("{:.1}", label.y)
                font-size=format!("{:.1}", label.font_size)
                fill=color
                text-anchor="middle"
                dominant-baseline="middle"
                transform=format!("rotate({:.1} {:.1} {:.1})", label.rotation_degrees, label.x, label.y)
                class=move || {
                    if is_selected() {
                        "cursor-pointer font-bold underline transition-opacity"
                    } else {
                        "cursor-pointer font-bold hover:opacity-70 transition-opacity"
                    }
                }
                on:mouseenter=move |_| hovered.set(Some((hover_text.clone(), label.weight)))
                on:mouseleave=move |_| hovered.set(None)
                on:click=move |_| {
                    selected
                        .update(|s| {
                            *s = if s.as_deref() == Some(text.as_str()) {
                                None
                            } else {
                                Some(text.clone())
                            };
                        })
                }
            >
                {label.text.clone()}
            </text>
        }
    };

    view! {
        <div class="relative w-full max-w-4xl mx-auto rounded-lg bg-dark-secondary">
            <svg
                viewBox=format!("0 0 {} {}", CLOUD.width, CLOUD.height)
                class="w-full h-auto"
                role="img"
                aria-label="Skill word cloud"
            >
                {move || placed.get().into_iter().enumerate().map(word).collect_view()}
            </svg>
            {move || {
                hovered
                    .get()
                    .map(|(text, weight)| {
                        view! {
                            <div class="absolute top-2 left-2 px-3 py-1 rounded bg-dark-primary text-sm border border-neon-green/40 pointer-events-none">
                                {format!("Skill: {text} – Weight: {weight}")}
                            </div>
                        }
                    })
            }}
            {move || {
                selected
                    .get()
                    .map(|skill| {
                        view! {
                            <button
                                class="absolute top-2 right-2 px-3 py-1 rounded text-sm text-neon-green border border-neon-green/40"
                                on:click=move |_| selected.set(None)
                            >
                                {format!("{skill} ✕")}
                            </button>
                        }
                    })
            }}
        </div>
    }
}
