use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, StaticSegment};

// Modules
pub mod catalog;
pub mod components;
pub mod config;
pub mod contact_form;
pub mod pages;
pub mod routes;

// Top-Level pages
use crate::components::Layout;
use crate::config::page_title;
use crate::pages::{AppsPage, ContactPage, HomePage, NotFound, PrivacyPage};
use crate::routes::Page;

/// An app router which renders the four pages inside the layout and handles 404's
#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Html attr:lang="pt-BR" attr:dir="ltr" />

        // default title, overridden by each page
        <Title text=page_title("") />

        // injects metadata in the <head> of the page
        <Meta charset="UTF-8" />
        <Meta name="viewport" content="width=device-width, initial-scale=1.0" />
        <Meta name="description" content=config::SITE.tagline />

        <Router base=config::base_path()>
            <Layout>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=StaticSegment(Page::Home.segment()) view=HomePage />
                    <Route path=StaticSegment(Page::Apps.segment()) view=AppsPage />
                    <Route path=StaticSegment(Page::Contact.segment()) view=ContactPage />
                    <Route path=StaticSegment(Page::Privacy.segment()) view=PrivacyPage />
                </Routes>
            </Layout>
        </Router>
    }
}
