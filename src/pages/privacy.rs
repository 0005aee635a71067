use chrono::{Local, NaiveDate};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::{page_title, SITE};
use crate::routes::Page;

/// Format a date the way pt-BR displays it (`dd/mm/yyyy`).
pub fn format_pt_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// The "last updated" stamp: today, read from the local clock.
pub fn last_updated() -> String {
    format_pt_br(Local::now().date_naive())
}

#[component]
fn PolicySection(
    title: &'static str,
    intro: &'static str,
    items: &'static [&'static str],
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <section class="policy-section">
            <h2>{title}</h2>
            <p>{intro}</p>
            <ul>{items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}</ul>
            {children.map(|children| children())}
        </section>
    }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <Title text=page_title(Page::Privacy.title()) />
        <div class="container page page-privacy">
            <h1>"Política de Privacidade"</h1>

            <div class="prose">
                <p class="updated">
                    <strong>"Última atualização:"</strong>
                    " "
                    <span class="updated-date">{last_updated()}</span>
                </p>

                <PolicySection
                    title="1. Informações que Coletamos"
                    intro="Nossos aplicativos podem coletar as seguintes informações:"
                    items=&[
                        "Informações de dispositivo (modelo, sistema operacional, identificadores únicos)",
                        "Dados de uso do aplicativo (recursos utilizados, tempo de uso)",
                        "Informações de localização (quando permitido pelo usuário)",
                        "Dados de crash e performance para melhorar a experiência",
                    ]
                />

                <PolicySection
                    title="2. Como Usamos suas Informações"
                    intro="Utilizamos as informações coletadas para:"
                    items=&[
                        "Fornecer e melhorar nossos serviços",
                        "Personalizar a experiência do usuário",
                        "Analisar o uso dos aplicativos",
                        "Corrigir bugs e problemas técnicos",
                        "Exibir anúncios relevantes através do Google AdMob",
                    ]
                />

                <PolicySection
                    title="3. Google AdMob e Publicidade"
                    intro="Nossos aplicativos utilizam o Google AdMob para exibir anúncios. O AdMob pode \
                           coletar e usar informações sobre você para fornecer anúncios personalizados. \
                           Isso inclui:"
                    items=&[
                        "Identificadores de publicidade",
                        "Informações de localização",
                        "Dados de uso do aplicativo",
                    ]
                >
                    <p>
                        "Você pode optar por não receber anúncios personalizados nas configurações do seu dispositivo."
                    </p>
                </PolicySection>

                <PolicySection
                    title="4. Compartilhamento de Informações"
                    intro="Não vendemos, alugamos ou compartilhamos suas informações pessoais com terceiros, exceto:"
                    items=&[
                        "Com provedores de serviços (como Google AdMob) para funcionalidade do app",
                        "Quando exigido por lei",
                        "Para proteger nossos direitos e segurança",
                    ]
                />

                <section class="policy-section">
                    <h2>"5. Contato"</h2>
                    <p>
                        "Se você tiver dúvidas sobre esta Política de Privacidade, entre em contato conosco:"
                    </p>
                    <p>
                        {format!("Email: {}", SITE.email)}
                        <br />
                        {format!("Website: {}", SITE.website)}
                    </p>
                </section>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_use_day_month_year_with_padding() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(format_pt_br(date), "07/03/2026");
    }

    #[test]
    fn last_updated_is_today() {
        let before = format_pt_br(Local::now().date_naive());
        let stamp = last_updated();
        let after = format_pt_br(Local::now().date_naive());
        // tolerate the test straddling midnight
        assert!(stamp == before || stamp == after);
        assert_eq!(stamp.len(), "dd/mm/yyyy".len());
    }
}
