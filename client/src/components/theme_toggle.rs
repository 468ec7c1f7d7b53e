//! Light/dark toggle button.

use leptos::prelude::*;

use crate::state::theme::ThemeMode;
use crate::util::theme_preference::{PlatformThemeHost, ThemePreference};

/// Flips the page theme and persists the choice.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeMode>>();

    view! {
        <button
            class="btn header__theme-toggle"
            type="button"
            on:click=move |_| {
                let mut preference = ThemePreference::with_mode(PlatformThemeHost::default(), theme.get_untracked());
                theme.set(preference.toggle());
            }
            title="Toggle dark mode"
            aria-label=move || format!("Switch to {} mode", theme.get().toggled())
        >
            {move || theme.get().toggle_glyph()}
        </button>
    }
}
