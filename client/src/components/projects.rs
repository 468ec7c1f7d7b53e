//! Selected projects.

use leptos::prelude::*;

use crate::content::PROJECTS;
use crate::state::sections::SectionId;

#[component]
pub fn Projects() -> impl IntoView {
    let cards = PROJECTS
        .iter()
        .map(|project| {
            view! {
                <article class="card project reveal" data-reveal="">
                    <h3 class="card__title">{project.name}</h3>
                    <p class="project__summary">{project.summary}</p>
                    <ul class="project__tags">
                        {project.tags.iter().map(|tag| view! { <li class="tag">{*tag}</li> }).collect_view()}
                    </ul>
                    <a href=project.url class="project__link" target="_blank" rel="noopener noreferrer">
                        "View source →"
                    </a>
                </article>
            }
        })
        .collect_view();

    view! {
        <section id=SectionId::Projects.dom_id() class="section projects">
            <h2 class="section__title">"Projects"</h2>
            <div class="projects__grid">{cards}</div>
        </section>
    }
}
