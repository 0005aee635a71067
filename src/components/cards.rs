//! Small presentational cards used by the home and contact pages.

use leptos::prelude::*;

/// Headline number on the "about" block.
#[component]
pub fn StatCard(
    value: &'static str,
    label: &'static str,
    #[prop(default = "blue")] accent: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card accent-{accent}")>
            <h3 class="stat-value">{value}</h3>
            <p class="stat-label">{label}</p>
        </div>
    }
}

#[component]
pub fn TechCard(name: &'static str) -> impl IntoView {
    view! {
        <div class="tech-card">
            <p>{name}</p>
        </div>
    }
}

/// One line of contact details with a decorative icon.
#[component]
pub fn ContactDetail(
    icon: &'static str,
    title: &'static str,
    value: &'static str,
    #[prop(default = "blue")] accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="contact-detail">
            <div class=format!("contact-icon accent-{accent}") aria-hidden="true">
                {icon}
            </div>
            <div>
                <h3>{title}</h3>
                <p class="muted">{value}</p>
            </div>
        </div>
    }
}
