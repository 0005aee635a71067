use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{components::A, hooks::use_location};

use crate::config::page_title;
use crate::routes::Page;

/// Rendered by the router for any path outside the route table.
#[component]
pub fn NotFound() -> impl IntoView {
    let pathname = use_location().pathname;
    log::debug!("no route for {}", pathname.get_untracked());

    view! {
        <Title text=page_title("Página não encontrada") />
        <div class="container page page-not-found">
            <h1>"Página não encontrada"</h1>
            <p class="muted">
                "O endereço " <code>{move || pathname.get()}</code> " não existe."
            </p>
            <A href=Page::Home.href() attr:class="btn btn-primary">"Voltar ao início"</A>
        </div>
    }
}
