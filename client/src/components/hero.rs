//! Landing section.

use leptos::prelude::*;

use crate::content::{OWNER_NAME, OWNER_ROLE, TAGLINE};
use crate::state::sections::SectionId;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=SectionId::Hero.dom_id() class="section hero">
            <p class="hero__eyebrow">"Hi, I'm"</p>
            <h1 class="hero__name">{OWNER_NAME}</h1>
            <p class="hero__role">{OWNER_ROLE}</p>
            <p class="hero__tagline">{TAGLINE}</p>
            <div class="hero__actions">
                <a href=SectionId::Projects.href() class="btn btn--primary">"See my work"</a>
                <a href=SectionId::Contact.href() class="btn">"Get in touch"</a>
            </div>
        </section>
    }
}
