use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1.5rem; background: #faf5ff; color: #4c1d95;">
            <h1 style="font-size: 2rem; font-weight: 600;">{"Página não encontrada"}</h1>
            <Link<Route> to={Route::Home} classes="hero-cta">
                {"Voltar para o início"}
            </Link<Route>>
        </div>
    }
}
