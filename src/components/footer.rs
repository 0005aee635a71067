use leptos::prelude::*;

use crate::config::SITE;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <p>
                    {format!(
                        "© {} {}. Todos os direitos reservados.",
                        SITE.copyright_year,
                        SITE.owner,
                    )}
                </p>
                <p class="muted">{SITE.tagline}</p>
            </div>
        </footer>
    }
}
