//! Home page: the whole single-page portfolio.
//!
//! ARCHITECTURE
//! ============
//! This page owns the section markup, so it also owns the viewport observer
//! lifecycle: the observer is attached once after hydration and released
//! when the page unmounts.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::projects::Projects;
use crate::components::skills::Skills;
use crate::state::sections::ScrollSpy;

#[component]
pub fn HomePage() -> impl IntoView {
    let scroll_spy = expect_context::<RwSignal<ScrollSpy>>();

    #[cfg(feature = "hydrate")]
    crate::util::dom_visibility::use_viewport_observer(scroll_spy);
    #[cfg(not(feature = "hydrate"))]
    let _ = scroll_spy;

    view! {
        <Header/>
        <main class="page">
            <Hero/>
            <About/>
            <Skills/>
            <Projects/>
            <Contact/>
        </main>
        <Footer/>
    }
}
