use leptos::{
    leptos_dom::helpers::{set_interval_with_handle, IntervalHandle},
    prelude::*,
};

use crate::typewriter::{Typewriter, CURSOR_BLINK_INTERVAL, TYPING_INTERVAL};

#[component]
pub fn Landing() -> impl IntoView {
    let typed = RwSignal::new(Typewriter::default());
    let cursor_on = RwSignal::new(true);
    let typing = StoredValue::new(None::<IntervalHandle>);

    // timers only exist in the browser
    Effect::new(move |_| {
        if let Ok(handle) = set_interval_with_handle(
            move || {
                let mut more = false;
                typed.update(|t| more = t.tick());
                if !more {
                    if let Some(handle) = typing.get_value() {
                        handle.clear();
                    }
                }
            },
            TYPING_INTERVAL,
        ) {
            typing.set_value(Some(handle));
            on_cleanup(move || handle.clear());
        }

        if let Ok(handle) =
            set_interval_with_handle(move || cursor_on.update(|on| *on = !*on), CURSOR_BLINK_INTERVAL)
        {
            on_cleanup(move || handle.clear());
        }
    });

    view! {
        <section class="relative flex flex-col justify-center items-center min-h-screen px-4 text-center">
            <h1 class="text-4xl md:text-6xl font-bold font-mono text-light-primary">
                {move || typed.with(|t| t.visible().to_string())}
                <span class=move || {
                    if cursor_on.get() { "text-neon-green" } else { "text-neon-green opacity-0" }
                }>"|"</span>
            </h1>
            <Show when=move || typed.with(Typewriter::is_complete)>
                <a
                    href="#hero-section"
                    class="mt-12 px-6 py-3 rounded-md border border-neon-green text-neon-green hover:bg-neon-green/10 transition-all duration-300 animate-fade-in"
                >
                    "Discover My Journey"
                </a>
            </Show>
        </section>
    }
}
