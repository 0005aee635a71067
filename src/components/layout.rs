use leptos::prelude::*;

use super::{Footer, Header};

/// Header above the page content above the footer, on every route.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="site">
            <Header />
            <main class="site-main">{children()}</main>
            <Footer />
        </div>
    }
}
