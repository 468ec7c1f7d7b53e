//! Contact section with a form that acknowledges locally.

use leptos::prelude::*;

use crate::content::CONTACT_EMAIL;
use crate::net::contact::{self, ContactMessage};
use crate::state::sections::SectionId;

#[component]
pub fn Contact() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        match contact::submit(&draft) {
            Ok(ack) => {
                status.set(Some(ack.message));
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
            }
            Err(e) => status.set(Some(e.to_string())),
        }
    };

    view! {
        <section id=SectionId::Contact.dom_id() class="section contact">
            <h2 class="section__title">"Get in touch"</h2>
            <p class="contact__intro reveal" data-reveal="">
                "Have a project in mind or just want to say hi? Drop me a line at "
                <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                " or use the form below."
            </p>
            <form class="contact-form reveal" data-reveal="" on:submit=on_submit>
                <label class="contact-form__field">
                    <span>"Name"</span>
                    <input
                        type="text"
                        name="name"
                        autocomplete="name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="contact-form__field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        name="email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="contact-form__field">
                    <span>"Message"</span>
                    <textarea
                        name="message"
                        rows="5"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button class="btn btn--primary contact-form__submit" type="submit">
                    "Send message"
                </button>
            </form>
            <Show when=move || status.get().is_some()>
                <p class="contact-form__status" role="status">{move || status.get().unwrap_or_default()}</p>
            </Show>
        </section>
    }
}
