//! Sticky page header with scroll-spy navigation and the theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `ScrollSpy` from context; the viewport observer mounted by the home
//! page writes it. Links only highlight while that observer is tracking.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::content::OWNER_NAME;
use crate::state::sections::{ScrollSpy, SectionId};

#[component]
pub fn Header() -> impl IntoView {
    let scroll_spy = expect_context::<RwSignal<ScrollSpy>>();

    let links = SectionId::ALL
        .into_iter()
        .map(|section| {
            let highlighted = move || scroll_spy.get().is_highlighted(section);
            view! {
                <a
                    href=section.href()
                    class=move || if highlighted() { "header__link header__link--active" } else { "header__link" }
                    aria-current=move || highlighted().then_some("location")
                >
                    {section.label()}
                </a>
            }
        })
        .collect_view();

    view! {
        <header class="header">
            <a href=SectionId::Hero.href() class="header__brand">{OWNER_NAME}</a>
            <nav class="header__nav">{links}</nav>
            <span class="header__spacer"></span>
            <ThemeToggle/>
        </header>
    }
}
