//! Root application component with context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::{OWNER_NAME, OWNER_ROLE, TAGLINE};
use crate::pages::home::HomePage;
use crate::state::sections::ScrollSpy;
use crate::state::theme::ThemeMode;
use crate::util::theme_preference::{PlatformThemeHost, ThemePreference};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme and scroll-spy contexts. The theme starts as light on
/// both server and client so hydration matches; the stored/system preference
/// is resolved and applied once hydrated.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeMode::default());
    let scroll_spy = RwSignal::new(ScrollSpy::default());
    provide_context(theme);
    provide_context(scroll_spy);

    Effect::new(move || {
        let preference = ThemePreference::load(PlatformThemeHost::default());
        theme.set(preference.current());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=format!("{OWNER_NAME} · {OWNER_ROLE}")/>
        <Meta name="description" content=TAGLINE/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
