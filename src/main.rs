use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod contact;
mod components {
    pub mod contact_form;
    pub mod diagnostics;
    pub mod toast;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use config::AppConfig;
use content::{SECTION_ABOUT, SECTION_CONTACT, SECTION_JOURNEY};
use pages::{
    landing::{scroll_to_section, Landing},
    not_found::NotFound,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route, config: Rc<AppConfig>) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing config={config} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = web_sys::window()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or(0.0);
                is_scrolled.set(scroll_top > 16.0);
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = |section: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(section);
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: rgba(255, 255, 255, 0.8);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid #f3e8ff;
                        transition: box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled { box-shadow: 0 4px 12px rgba(76, 29, 149, 0.08); }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 64px;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        font-size: 1.25rem;
                        font-weight: 600;
                        color: #4c1d95;
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        color: #4c1d95;
                        font-size: 0.9rem;
                        font-weight: 500;
                        cursor: pointer;
                    }
                    .nav-link:hover { color: #7c3aed; }
                    .nav-cta {
                        padding: 0.5rem 1rem;
                        background: #7c3aed;
                        color: #fff;
                        border: none;
                        border-radius: 8px;
                        font-size: 0.9rem;
                        font-weight: 500;
                        cursor: pointer;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: #4c1d95;
                    }
                    @media (max-width: 1024px) {
                        .burger-menu { display: flex; }
                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 64px;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            align-items: stretch;
                            gap: 0.75rem;
                            padding: 1rem 1.5rem;
                            background: #fff;
                            border-top: 1px solid #f3e8ff;
                        }
                        .nav-right.mobile-menu-open { display: flex; }
                        .nav-link { text-align: left; padding: 0.5rem 0; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"💜 Portal Pausa"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <button class="nav-link" onclick={go_to(SECTION_ABOUT)}>
                        {"Sobre o GIS"}
                    </button>
                    <button class="nav-link" onclick={go_to(SECTION_JOURNEY)}>
                        {"Como Funciona"}
                    </button>
                    <button class="nav-cta" onclick={go_to(SECTION_CONTACT)}>
                        {"Participar"}
                    </button>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    let config = use_memo(|_| AppConfig::from_build_env(), ());

    let render = {
        let config = config.clone();
        Callback::from(move |route: Route| switch(route, config.clone()))
    };

    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={render} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    let config = AppConfig::from_build_env();
    info!(
        "Starting Portal Pausa ({:?}) against {}",
        config.mode, config.api_base_url
    );
    yew::Renderer::<App>::new().render();
}
