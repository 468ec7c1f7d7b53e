use leptos::prelude::*;

use crate::content::ABOUT_PARAGRAPHS;
use crate::state::sections::SectionId;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=SectionId::About.dom_id() class="section about">
            <h2 class="section__title">"About me"</h2>
            {ABOUT_PARAGRAPHS
                .iter()
                .map(|text| view! { <p class="about__text reveal" data-reveal="">{*text}</p> })
                .collect_view()}
        </section>
    }
}
