use leptos::{ev::SubmitEvent, prelude::*};

use super::{flatten, SectionHeading};
use crate::{
    api::ApiError,
    contact::{Ack, ContactForm, ContactRequest, Field, FormStatus, MAX_MESSAGE_LEN, MAX_NAME_LEN},
    data::{EMAIL, GITHUB_HANDLE, GITHUB_URL, LOCATION},
};

#[server]
pub async fn submit_contact_server(
    request: ContactRequest,
) -> Result<Result<Ack, ApiError>, ServerFnError> {
    use crate::api::client::ApiClient;

    let client = expect_context::<ApiClient>();
    Ok(client
        .submit_contact(&request.name, &request.email, &request.message)
        .await)
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let send = Action::new(|request: &ContactRequest| {
        let request = request.clone();
        async move { flatten(submit_contact_server(request).await) }
    });

    Effect::new(move |_| {
        if let Some(result) = send.value().get() {
            form.update(|f| f.finish(result));
        }
    });

    let submit = move || {
        let mut request = None;
        form.update(|f| request = f.begin_submit());
        if let Some(request) = request {
            send.dispatch(request);
        }
    };

    let status = move || form.with(|f| f.status().clone());
    let submitting = move || form.with(ContactForm::is_submitting);

    view! {
        <section id="contact" class="py-20 px-4 bg-dark-secondary">
            <div class="max-w-5xl mx-auto">
                <SectionHeading title="Contact" subtitle="Have a project or a role in mind? Let's talk." />
                <div class="grid md:grid-cols-2 gap-12">
                    <div class="space-y-4">
                        <p>"📍 " {LOCATION}</p>
                        <p>
                            <a href=format!("mailto:{EMAIL}") class="hover:text-neon-green">"✉ " {EMAIL}</a>
                        </p>
                        <p>
                            <a href=GITHUB_URL target="_blank" rel="noopener noreferrer" class="hover:text-neon-green">
                                {GITHUB_HANDLE}
                            </a>
                        </p>
                    </div>
                    <form
                        class="space-y-4"
                        novalidate
                        on:submit=move |ev: SubmitEvent| {
                            ev.prevent_default();
                            submit();
                        }
                    >
                        <input
                            type="text"
                            placeholder="Your name"
                            maxlength=MAX_NAME_LEN.to_string()
                            class="w-full px-4 py-2 rounded-md bg-dark-primary border border-light-secondary/20 focus:outline-none focus:border-neon-green"
                            prop:value=move || form.with(|f| f.value(Field::Name).to_string())
                            prop:disabled=submitting
                            on:input=move |ev| form.update(|f| f.edit(Field::Name, event_target_value(&ev)))
                        />
                        <input
                            type="email"
                            placeholder="Your email"
                            class="w-full px-4 py-2 rounded-md bg-dark-primary border border-light-secondary/20 focus:outline-none focus:border-neon-green"
                            prop:value=move || form.with(|f| f.value(Field::Email).to_string())
                            prop:disabled=submitting
                            on:input=move |ev| form.update(|f| f.edit(Field::Email, event_target_value(&ev)))
                        />
                        <textarea
                            rows="5"
                            placeholder="Your message"
                            maxlength=MAX_MESSAGE_LEN.to_string()
                            class="w-full px-4 py-2 rounded-md bg-dark-primary border border-light-secondary/20 focus:outline-none focus:border-neon-green"
                            prop:value=move || form.with(|f| f.value(Field::Message).to_string())
                            prop:disabled=submitting
                            on:input=move |ev| form.update(|f| f.edit(Field::Message, event_target_value(&ev)))
                        ></textarea>
                        <button
                            type="submit"
                            class="w-full px-4 py-2 rounded-md bg-neon-green text-dark-primary font-semibold disabled:opacity-50"
                            prop:disabled=submitting
                        >
                            {move || if submitting() { "Sending..." } else { "Send Message" }}
                        </button>
                        {move || match status() {
                            FormStatus::Success(message) => {
                                view! { <p class="text-neon-green text-sm">{message}</p> }.into_any()
                            }
                            FormStatus::Error(e) => {
                                let retryable = e.is_retryable();
                                view! {
                                    <div class="text-sm text-red-400">
                                        <p>{e.to_string()}</p>
                                        {retryable
                                            .then(|| {
                                                view! {
                                                    <button
                                                        type="button"
                                                        class="mt-2 underline text-neon-green"
                                                        on:click=move |_| {
                                                            form.update(ContactForm::retry);
                                                            submit();
                                                        }
                                                    >
                                                        "Try again"
                                                    </button>
                                                }
                                            })}
                                    </div>
                                }
                                    .into_any()
                            }
                            FormStatus::Idle | FormStatus::Submitting => ().into_any(),
                        }}
                    </form>
                </div>
            </div>
        </section>
    }
}
