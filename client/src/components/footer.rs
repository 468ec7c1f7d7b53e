use leptos::prelude::*;

use crate::content::{OWNER_NAME, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span class="footer__copy">"© " {OWNER_NAME}</span>
            <span class="footer__spacer"></span>
            {SOCIAL_LINKS
                .iter()
                .map(|(label, url)| {
                    view! {
                        <a href=*url class="footer__link" target="_blank" rel="noopener noreferrer">
                            {*label}
                        </a>
                    }
                })
                .collect_view()}
        </footer>
    }
}
