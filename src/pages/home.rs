use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::{StatCard, TechCard};
use crate::config::{page_title, SITE};
use crate::routes::Page;

/// Technologies shown in the grid at the bottom of the page.
pub const TECHNOLOGIES: [&str; 8] = [
    "React Native",
    "Flutter",
    "Android Studio",
    "Xcode",
    "Firebase",
    "Node.js",
    "MongoDB",
    "Git",
];

/// Landing page: introduction, an "about" block with headline numbers and the
/// technologies used day to day.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=page_title(Page::Home.title()) />
        <div class="container page page-home">
            <section class="hero">
                <div class="avatar">
                    <span>{SITE.initials}</span>
                </div>
                <h1>"Olá, eu sou " <span class="highlight">{SITE.owner}</span></h1>
                <p class="lead">
                    "Desenvolvedor de aplicativos móveis apaixonado por criar experiências "
                    "digitais incríveis que fazem a diferença na vida das pessoas."
                </p>
                <div class="hero-actions">
                    // in-page anchor, not a route
                    <a href="#sobre" class="btn btn-primary">"Saiba Mais"</a>
                    <A href=Page::Apps.href() attr:class="btn btn-outline">"Ver Apps"</A>
                </div>
            </section>

            <section id="sobre" class="about">
                <h2>"Sobre Mim"</h2>
                <div class="about-grid">
                    <div>
                        <p>
                            "Sou um desenvolvedor de aplicativos móveis com mais de 5 anos de experiência "
                            "criando soluções inovadoras para Android e iOS. Minha paixão é transformar "
                            "ideias em aplicativos funcionais e intuitivos que resolvem problemas reais."
                        </p>
                        <p>
                            "Especializo-me em desenvolvimento nativo e híbrido, sempre focando na "
                            "experiência do usuário e na performance dos aplicativos. Cada projeto "
                            "é uma oportunidade de aprender algo novo e criar algo extraordinário."
                        </p>
                    </div>
                    <div class="stats">
                        <StatCard value="15+" label="Apps Publicados" />
                        <StatCard value="100k+" label="Downloads" accent="green" />
                        <StatCard value="5+" label="Anos de Experiência" accent="purple" />
                        <StatCard value="4.7" label="Avaliação Média" accent="orange" />
                    </div>
                </div>
            </section>

            <section class="technologies">
                <h2>"Tecnologias que Utilizo"</h2>
                <div class="tech-grid">
                    {TECHNOLOGIES.into_iter().map(|name| view! { <TechCard name=name /> }).collect_view()}
                </div>
            </section>
        </div>
    }
}
