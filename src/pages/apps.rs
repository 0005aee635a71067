use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::catalog::{AppListing, APPS};
use crate::components::StarRating;
use crate::config::page_title;
use crate::routes::Page;

#[component]
fn AppCard(app: &'static AppListing) -> impl IntoView {
    view! {
        <article class="app-card" id=format!("app-{}", app.id)>
            <div class="app-cover">
                <div class="app-cover-icon" aria-hidden="true">"📱"</div>
                <div class="app-cover-name">{app.name}</div>
            </div>
            <div class="app-body">
                <div class="app-heading">
                    <div>
                        <h2>{app.name}</h2>
                        <span class="tag tag-category">{app.category}</span>
                    </div>
                    <div class="app-score">
                        <div class="app-rating">
                            <StarRating rating=app.rating />
                            <span class="rating-value">{app.rating}</span>
                        </div>
                        <div class="app-downloads">
                            <span aria-hidden="true">"⬇ "</span>
                            {format!("{} downloads", app.downloads)}
                        </div>
                    </div>
                </div>

                <p class="app-description">{app.description}</p>

                <div class="app-features">
                    <h3>"Principais Funcionalidades:"</h3>
                    <div class="tags">
                        {app
                            .features
                            .iter()
                            .map(|feature| view! { <span class="tag">{*feature}</span> })
                            .collect_view()}
                    </div>
                </div>

                // Store links are not wired up yet; the buttons are placeholders.
                <div class="store-buttons">
                    <button type="button" class="btn btn-play">"↗ Google Play"</button>
                    <button type="button" class="btn btn-appstore">"↗ App Store"</button>
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn AppsPage() -> impl IntoView {
    view! {
        <Title text=page_title(Page::Apps.title()) />
        <div class="container page page-apps">
            <div class="page-intro">
                <h1>"Meus Aplicativos"</h1>
                <p class="lead">
                    "Conheça os aplicativos que desenvolvi para tornar a vida das pessoas mais fácil e produtiva."
                </p>
            </div>

            <div class="app-list">
                {APPS.iter().map(|app| view! { <AppCard app=app /> }).collect_view()}
            </div>

            <section class="cta">
                <h2>"Tem uma ideia para um app?"</h2>
                <p>"Vamos trabalhar juntos para transformar sua ideia em realidade!"</p>
                <A href=Page::Contact.href() attr:class="btn btn-primary">"Entre em Contato"</A>
            </section>
        </div>
    }
}
