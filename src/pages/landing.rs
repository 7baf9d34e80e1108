use std::rc::Rc;

use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::config::AppConfig;
use crate::content::{
    CONTACT_WHATSAPP_DISPLAY, CONTACT_WHATSAPP_LINK, FEATURES, HERO, JOURNEY, SECTION_ABOUT,
    SECTION_CONTACT, SECTION_JOURNEY,
};

pub fn scroll_to_section(id: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));
    if let Some(element) = element {
        element.scroll_into_view();
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: Rc<AppConfig>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        background: #f8fafc;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .landing-main { padding-top: 64px; }
                    .section-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .section-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-header h2 {
                        font-size: 2.2rem;
                        font-weight: 600;
                        color: #4c1d95;
                        margin-bottom: 1rem;
                    }
                    .section-header p {
                        font-size: 1.1rem;
                        color: rgba(109, 40, 217, 0.7);
                    }
                    @keyframes float {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-12px); }
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; transform: translateY(12px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                        background: linear-gradient(135deg, #faf5ff 0%, #fdf2f8 50%, #faf5ff 100%);
                    }
                    .hero-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                        padding: 5rem 0;
                    }
                    .hero-copy { animation: fadeIn 0.8s ease-out; }
                    .hero-copy h1 {
                        font-size: 3.5rem;
                        font-weight: 600;
                        line-height: 1.15;
                        color: #4c1d95;
                    }
                    .hero-copy p {
                        margin: 2rem 0;
                        font-size: 1.25rem;
                        line-height: 1.6;
                        color: rgba(91, 33, 182, 0.8);
                    }
                    .hero-cta {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 1rem 2rem;
                        background: #7c3aed;
                        color: #fff;
                        border: none;
                        border-radius: 12px;
                        font-size: 1rem;
                        font-weight: 500;
                        cursor: pointer;
                        box-shadow: 0 10px 20px rgba(124, 58, 237, 0.3);
                        transition: transform 0.3s ease, background 0.3s ease;
                    }
                    .hero-cta:hover { background: #6d28d9; transform: scale(1.05); }
                    .hero-badge {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-top: 2rem;
                        font-size: 0.9rem;
                        color: rgba(109, 40, 217, 0.7);
                    }
                    .hero-badge-dot {
                        width: 8px;
                        height: 8px;
                        border-radius: 50%;
                        background: #22c55e;
                    }
                    .hero-image-wrapper { position: relative; }
                    .hero-image-wrapper img {
                        width: 100%;
                        border-radius: 24px;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.2);
                    }
                    .hero-floating-card {
                        position: absolute;
                        bottom: -24px;
                        left: -24px;
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        background: #fff;
                        border-radius: 16px;
                        padding: 1rem;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                        animation: float 6s ease-in-out infinite;
                    }
                    .hero-floating-card strong { display: block; color: #4c1d95; font-size: 0.9rem; }
                    .hero-floating-card span { color: #7c3aed; font-size: 0.75rem; }
                    .features { padding: 5rem 0; background: #fff; }
                    .feature-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .feature-card {
                        padding: 2rem;
                        border: 1px solid #f3e8ff;
                        border-radius: 16px;
                        transition: box-shadow 0.3s ease, border-color 0.3s ease;
                        animation: fadeIn 0.8s ease-out both;
                    }
                    .feature-card:hover {
                        border-color: #d8b4fe;
                        box-shadow: 0 20px 25px rgba(76, 29, 149, 0.1);
                    }
                    .feature-icon {
                        width: 64px;
                        height: 64px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #f3e8ff;
                        border-radius: 16px;
                        font-size: 2rem;
                        margin-bottom: 1.5rem;
                    }
                    .feature-card h3 { font-size: 1.25rem; color: #4c1d95; margin-bottom: 0.75rem; }
                    .feature-card p { color: rgba(109, 40, 217, 0.7); line-height: 1.6; }
                    .journey {
                        padding: 5rem 0;
                        background: linear-gradient(to bottom, #f8fafc, #fff);
                    }
                    .journey-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                    }
                    .journey-step {
                        position: relative;
                        padding: 1.5rem;
                        background: #fff;
                        border: 1px solid #f3e8ff;
                        border-radius: 16px;
                        text-align: center;
                        animation: fadeIn 0.8s ease-out both;
                    }
                    .journey-number {
                        position: absolute;
                        top: -16px;
                        left: -16px;
                        width: 40px;
                        height: 40px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 50%;
                        background: #7c3aed;
                        color: #fff;
                        font-weight: 600;
                    }
                    .journey-icon { font-size: 2rem; margin-bottom: 1rem; }
                    .journey-step p { color: #4c1d95; font-weight: 500; }
                    .journey-closing {
                        margin-top: 4rem;
                        text-align: center;
                        font-size: 1.1rem;
                        font-weight: 500;
                        color: #5b21b6;
                    }
                    .footer { background: #4c1d95; color: #fff; padding: 3rem 0; }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .footer h3 { font-size: 1.1rem; margin-bottom: 1rem; }
                    .footer p, .footer a { color: #e9d5ff; font-size: 0.9rem; }
                    .footer-brand { font-size: 1.25rem; font-weight: 600; color: #fff; }
                    .footer-links a { display: block; margin-bottom: 0.5rem; text-decoration: none; }
                    .footer-links a:hover { color: #fff; }
                    .footer-whatsapp {
                        display: inline-block;
                        margin-top: 0.5rem;
                        padding: 0.5rem 1rem;
                        background: #22c55e;
                        color: #fff !important;
                        border-radius: 8px;
                        text-decoration: none;
                        font-weight: 500;
                    }
                    .footer-bottom {
                        margin-top: 2rem;
                        padding-top: 2rem;
                        border-top: 1px solid #5b21b6;
                        text-align: center;
                        font-size: 0.85rem;
                        color: #d8b4fe;
                    }
                    @media (max-width: 1024px) {
                        .hero-grid { grid-template-columns: 1fr; }
                        .journey-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 768px) {
                        .hero-copy h1 { font-size: 2.25rem; }
                        .feature-grid, .journey-grid, .footer-grid { grid-template-columns: 1fr; }
                        .journey-grid { gap: 2.5rem; }
                    }
                "#}
            </style>
            <main class="landing-main">
                <Hero />
                <Features />
                <Journey />
                <ContactForm config={props.config.clone()} />
            </main>
            <Footer />
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let to_contact = Callback::from(|_: MouseEvent| scroll_to_section(SECTION_CONTACT));

    html! {
        <header class="hero">
            <div class="section-inner hero-grid">
                <div class="hero-copy">
                    <h1>{HERO.headline}</h1>
                    <p>{HERO.subheadline}</p>
                    <button class="hero-cta" onclick={to_contact}>
                        <span>{HERO.cta_text}</span>
                        <span>{"💜"}</span>
                    </button>
                    <div class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        <span>{"Cuidado digital baseado em evidências científicas"}</span>
                    </div>
                </div>
                <div class="hero-image-wrapper">
                    <img src={HERO.image_url} loading="lazy" alt="Mulheres conversando e se apoiando" />
                    <div class="hero-floating-card">
                        <span>{"💜"}</span>
                        <div>
                            <strong>{"Apoio contínuo"}</strong>
                            <span>{"24/7 via WhatsApp"}</span>
                        </div>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[function_component(Features)]
fn features() -> Html {
    html! {
        <section id={SECTION_ABOUT} class="features">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"O que é o GIS?"}</h2>
                    <p>{"Um sistema de cuidado que entende, acolhe e transforma"}</p>
                </div>
                <div class="feature-grid">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <div class="feature-card" style={format!("animation-delay: {}ms;", index * 100)}>
                            <div class="feature-icon">{feature.icon}</div>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Journey)]
fn journey() -> Html {
    html! {
        <section id={SECTION_JOURNEY} class="journey">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Como funciona?"}</h2>
                    <p>{"Uma jornada simples de cuidado e transformação"}</p>
                </div>
                <div class="journey-grid">
                    { for JOURNEY.iter().enumerate().map(|(index, step)| html! {
                        <div class="journey-step" style={format!("animation-delay: {}ms;", index * 150)}>
                            <div class="journey-number">{step.number.to_string()}</div>
                            <div class="journey-icon">{step.icon}</div>
                            <p>{step.title}</p>
                        </div>
                    }) }
                </div>
                <p class="journey-closing">{"A revolução na saúde feminina começa com uma conversa."}</p>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="section-inner">
                <div class="footer-grid">
                    <div>
                        <p class="footer-brand">{"💜 Portal Pausa"}</p>
                        <p>{"Cuidado inteligente e empático para mulheres na peri/menopausa. Tecnologia com coração."}</p>
                    </div>
                    <div class="footer-links">
                        <h3>{"Legal"}</h3>
                        <a href="#privacidade">{"Política de Privacidade"}</a>
                        <a href="#termos">{"Termos de Uso"}</a>
                    </div>
                    <div>
                        <h3>{"Contato"}</h3>
                        <p>{"Fale conosco via WhatsApp:"}</p>
                        <a class="footer-whatsapp" href={CONTACT_WHATSAPP_LINK} target="_blank" rel="noopener noreferrer">
                            {CONTACT_WHATSAPP_DISPLAY}
                        </a>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{"© 2025 Portal Pausa. Feito com 💜 para mulheres incríveis."}</p>
                </div>
            </div>
        </footer>
    }
}
