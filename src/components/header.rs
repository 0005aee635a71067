use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

use crate::config::{base_path, SITE};
use crate::routes::Page;

#[component]
pub fn Header() -> impl IntoView {
    let pathname = use_location().pathname;
    let current = Memo::new(move |_| Page::from_location(&pathname.get(), base_path()));

    view! {
        <header class="site-header">
            <div class="container">
                <nav class="nav">
                    <A href=Page::Home.href() exact=true attr:class="brand">
                        {SITE.owner}
                    </A>
                    <ul class="nav-links">
                        {Page::ALL
                            .into_iter()
                            .map(|page| {
                                view! {
                                    <li class:active=move || current.get() == Some(page)>
                                        // `exact` so "/" is not marked current on every page
                                        <A href=page.href() exact=true attr:class="nav-link">
                                            {page.nav_label()}
                                        </A>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
            </div>
        </header>
    }
}
