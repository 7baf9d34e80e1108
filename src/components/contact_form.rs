use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::diagnostics::DiagnosticsPanel;
use crate::components::toast::Toast;
use crate::config::AppConfig;
use crate::contact::api::HttpContactApi;
use crate::contact::controller::{BrowserDelay, SubmissionController, SubmitOutcome};
use crate::contact::form::{FormAction, FormState, SubmissionStatus};
use crate::content::SECTION_CONTACT;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub config: Rc<AppConfig>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form = use_reducer(FormState::default);
    let controller = use_memo(
        |config: &Rc<AppConfig>| {
            SubmissionController::new(
                (**config).clone(),
                Rc::new(HttpContactApi::new(config)),
                Rc::new(BrowserDelay),
            )
        },
        props.config.clone(),
    );

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::SetName(input.value()));
        })
    };

    let on_whatsapp = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::SetWhatsapp(input.value()));
        })
    };

    let on_consent = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::SetAcceptCommunication(input.checked()));
        })
    };

    let on_dismiss = {
        let form = form.clone();
        Callback::from(move |_: ()| form.dispatch(FormAction::DismissNotice))
    };

    let onsubmit = {
        let form = form.clone();
        let controller = controller.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let snapshot = (*form).clone();
            let handle = form.clone();
            let controller = controller.clone();
            spawn_local(async move {
                let outcome = controller
                    .submit(&snapshot, move |action| handle.dispatch(action))
                    .await;
                match outcome {
                    SubmitOutcome::Submitted { contact_id, simulated: true } => {
                        warn!("Lead {} only exists in the simulated backend", contact_id)
                    }
                    SubmitOutcome::Invalid(err) => debug!("Form rejected locally: {:?}", err),
                    SubmitOutcome::Failed(failure) => debug!("Submission failed: {:?}", failure),
                    _ => {}
                }
            });
        })
    };

    let locked = form.fields_locked();
    let button_label = match &form.status {
        SubmissionStatus::Submitting => html! {
            <span class="button-content">
                <span class="loading-spinner"></span>
                <span>{"Enviando para nossa comunidade..."}</span>
            </span>
        },
        SubmissionStatus::Submitted { .. } => html! {
            <span class="button-content">
                <span class="pulse">{"💜"}</span>
                <span>{"Cadastro realizado com sucesso! 💜"}</span>
            </span>
        },
        SubmissionStatus::Idle => html! {
            <span class="button-content">
                <span>{"Quero fazer parte desta comunidade"}</span>
                <span>{"🤍"}</span>
            </span>
        },
    };

    let confirmation = match form.contact_id() {
        Some(contact_id) => {
            let short_id: String = contact_id.chars().take(8).collect();
            html! {
                <div class="confirmation">
                    <p class="confirmation-title">{format!("✅ Cadastro #{} realizado!", short_id)}</p>
                    <p class="confirmation-text">{"Em breve você receberá uma mensagem nossa no WhatsApp."}</p>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <section id={SECTION_CONTACT} class="contact-section">
            <style>
                {r#"
                    .contact-section {
                        padding: 5rem 1rem;
                        background: linear-gradient(135deg, #f3e8ff 0%, #fdf2f8 50%, #f3e8ff 100%);
                    }
                    .contact-card {
                        max-width: 56rem;
                        margin: 0 auto;
                        background: rgba(255, 255, 255, 0.8);
                        backdrop-filter: blur(12px);
                        border: 1px solid #e9d5ff;
                        border-radius: 24px;
                        padding: 3rem;
                        box-shadow: 0 25px 50px rgba(76, 29, 149, 0.15);
                    }
                    .contact-card h2 {
                        font-size: 2.2rem;
                        font-weight: 600;
                        color: #4c1d95;
                        text-align: center;
                        margin-bottom: 1rem;
                    }
                    .contact-lead {
                        text-align: center;
                        color: rgba(109, 40, 217, 0.7);
                        font-size: 1.1rem;
                    }
                    .diagnostics {
                        margin-top: 1rem;
                        padding: 0.75rem;
                        background: #faf5ff;
                        border-radius: 10px;
                        font-size: 0.85rem;
                        color: #6d28d9;
                    }
                    .diagnostics-row {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                    }
                    .diagnostics code {
                        background: #f3e8ff;
                        padding: 2px 6px;
                        border-radius: 6px;
                    }
                    .diagnostics-button {
                        background: none;
                        border: none;
                        color: #7c3aed;
                        cursor: pointer;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        margin-top: 2rem;
                    }
                    .contact-form label {
                        display: block;
                        font-size: 0.9rem;
                        font-weight: 500;
                        color: #4c1d95;
                        margin-bottom: 0.5rem;
                    }
                    .contact-form input[type="text"],
                    .contact-form input[type="tel"] {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border: 1px solid #e9d5ff;
                        border-radius: 12px;
                        font-size: 1rem;
                    }
                    .field-hint {
                        margin-top: 0.25rem;
                        font-size: 0.75rem;
                        color: #7c3aed;
                    }
                    .consent {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        padding: 0.75rem;
                        background: #faf5ff;
                        border-radius: 10px;
                    }
                    .consent small {
                        display: block;
                        color: #a855f7;
                        margin-top: 0.25rem;
                    }
                    .submit-button {
                        width: 100%;
                        padding: 1.25rem;
                        background: #7c3aed;
                        color: #fff;
                        border: none;
                        border-radius: 12px;
                        font-size: 1.1rem;
                        font-weight: 500;
                        cursor: pointer;
                        transition: transform 0.3s ease, background 0.3s ease;
                    }
                    .submit-button:hover:not(:disabled) {
                        background: #6d28d9;
                        transform: scale(1.02);
                    }
                    .submit-button:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                    .button-content {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .loading-spinner {
                        display: inline-block;
                        width: 18px;
                        height: 18px;
                        border: 3px solid rgba(255,255,255,.3);
                        border-radius: 50%;
                        border-top-color: #fff;
                        animation: spin 1s ease-in-out infinite;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    .confirmation {
                        padding: 1rem;
                        background: #f0fdf4;
                        border: 1px solid #bbf7d0;
                        border-radius: 12px;
                        text-align: center;
                    }
                    .confirmation-title { color: #166534; font-weight: 500; }
                    .confirmation-text { color: #16a34a; font-size: 0.9rem; margin-top: 0.25rem; }
                    .trust-badge {
                        border-top: 1px solid #f3e8ff;
                        padding-top: 1rem;
                        text-align: center;
                        font-size: 0.85rem;
                        color: rgba(109, 40, 217, 0.7);
                    }
                    @media (max-width: 768px) {
                        .contact-card { padding: 2rem 1.25rem; }
                        .contact-card h2 { font-size: 1.75rem; }
                    }
                "#}
            </style>
            <Toast notice={form.notice.clone()} on_dismiss={on_dismiss} />
            <div class="contact-card">
                <h2>{"A revolução na saúde feminina começa com uma conversa."}</h2>
                <p class="contact-lead">
                    {"Participe do nosso piloto e seja uma das primeiras a experimentar o cuidado que realmente escuta."}
                </p>
                if props.config.mode.is_development() {
                    <DiagnosticsPanel config={props.config.clone()} />
                }

                <form class="contact-form" {onsubmit}>
                    <div>
                        <label for="name">{"Como gostaria de ser chamada? *"}</label>
                        <input
                            id="name"
                            type="text"
                            placeholder="Seu nome ou como gostaria de ser chamada"
                            value={form.name.clone()}
                            oninput={on_name}
                            disabled={locked}
                        />
                    </div>

                    <div>
                        <label for="whatsapp">{"Seu WhatsApp para contato *"}</label>
                        <input
                            id="whatsapp"
                            type="tel"
                            placeholder="(11) 98765-4321"
                            value={form.whatsapp.clone()}
                            oninput={on_whatsapp}
                            disabled={locked}
                        />
                        <p class="field-hint">{"Formato: (DDD) 9XXXX-XXXX"}</p>
                    </div>

                    <div class="consent">
                        <input
                            id="communication"
                            type="checkbox"
                            checked={form.accept_communication}
                            onchange={on_consent}
                            disabled={locked}
                        />
                        <label for="communication">
                            {"Quero receber informações sobre saúde feminina e novidades do Portal Pausa."}
                            <small>{"(Opcional) Podemos enviar conteúdos exclusivos sobre bem-estar na menopausa."}</small>
                        </label>
                    </div>

                    <button type="submit" class="submit-button" disabled={!form.can_submit()}>
                        {button_label}
                    </button>

                    {confirmation}

                    <div class="trust-badge">
                        <p>{"🔒 Seus dados estão seguros conosco"}</p>
                        <p>
                            {"Utilizamos seu contato apenas para comunicação sobre o projeto Portal Pausa. Não compartilhamos seus dados com terceiros."}
                        </p>
                    </div>
                </form>
            </div>
        </section>
    }
}
