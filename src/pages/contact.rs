use leptos::{ev, prelude::*};
use leptos_meta::Title;

use crate::components::ContactDetail;
use crate::config::{page_title, SITE};
use crate::contact_form::{ContactForm, Field};
use crate::routes::Page;

const SENT_MESSAGE: &str = "Mensagem enviada com sucesso!";

/// Tell the visitor the message went through. Nothing is actually sent.
fn acknowledge() {
    let Some(window) = web_sys::window() else {
        log::warn!("no window to show the confirmation in");
        return;
    };
    if let Err(err) = window.alert_with_message(SENT_MESSAGE) {
        log::warn!("confirmation alert failed: {err:?}");
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    // Every input shares this handler; the element's `name` picks the field.
    let on_input = move |ev: &web_sys::Event| {
        let Some(name) = event_target::<web_sys::Element>(ev).get_attribute("name") else {
            return;
        };
        let value = event_target_value(ev);
        form.update(|form| {
            if let Err(err) = form.apply(&name, value) {
                log::warn!("{err}");
            }
        });
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match form.try_update(ContactForm::submit) {
            Some(Ok(sent)) => {
                log::info!("Formulário enviado: {sent:?}");
                acknowledge();
            }
            Some(Err(err)) => log::warn!("envio recusado: {err}"),
            None => {}
        }
    };

    let value_of = move |field: Field| move || form.with(|form| form.get(field).to_string());

    view! {
        <Title text=page_title(Page::Contact.title()) />
        <div class="container page page-contact">
            <h1>"Entre em Contato"</h1>

            <div class="contact-grid">
                <div class="contact-info">
                    <h2>"Vamos Conversar!"</h2>
                    <p class="muted">
                        "Tem alguma ideia para um aplicativo? Quer discutir um projeto? "
                        "Ou apenas quer dizer olá? Ficarei feliz em ouvir de você!"
                    </p>
                    <div class="contact-details">
                        <ContactDetail icon="✉" title="Email" value=SITE.email />
                        <ContactDetail icon="☎" title="Telefone" value=SITE.phone accent="green" />
                        <ContactDetail icon="⌖" title="Localização" value=SITE.location accent="purple" />
                    </div>
                </div>

                <form class="contact-form" on:submit=on_submit>
                    <div class="form-field">
                        <label for="name">"Nome"</label>
                        <input
                            type="text"
                            id="name"
                            name=Field::Name.as_str()
                            required
                            placeholder="Seu nome completo"
                            prop:value=value_of(Field::Name)
                            on:input=move |ev| on_input(&ev)
                        />
                    </div>

                    <div class="form-field">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            name=Field::Email.as_str()
                            required
                            placeholder="seu@email.com"
                            prop:value=value_of(Field::Email)
                            on:input=move |ev| on_input(&ev)
                        />
                    </div>

                    <div class="form-field">
                        <label for="message">"Mensagem"</label>
                        <textarea
                            id="message"
                            name=Field::Message.as_str()
                            required
                            rows="5"
                            placeholder="Conte-me sobre seu projeto ou dúvida..."
                            prop:value=value_of(Field::Message)
                            on:input=move |ev| on_input(&ev)
                        ></textarea>
                    </div>

                    <button type="submit" class="btn btn-primary btn-block">
                        "Enviar Mensagem"
                    </button>
                </form>
            </div>
        </div>
    }
}
