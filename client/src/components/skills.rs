//! Skill groups rendered as reveal-on-scroll cards.

use leptos::prelude::*;

use crate::content::SKILL_GROUPS;
use crate::state::sections::SectionId;

#[component]
pub fn Skills() -> impl IntoView {
    let cards = SKILL_GROUPS
        .iter()
        .map(|group| {
            view! {
                <div class="card skills__group reveal" data-reveal="">
                    <h3 class="card__title">{group.title}</h3>
                    <ul class="skills__list">
                        {group.items.iter().map(|item| view! { <li class="skills__item">{*item}</li> }).collect_view()}
                    </ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=SectionId::Skills.dom_id() class="section skills">
            <h2 class="section__title">"Skills"</h2>
            <div class="skills__grid">{cards}</div>
        </section>
    }
}
