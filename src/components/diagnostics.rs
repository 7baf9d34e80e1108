use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::AppConfig;
use crate::contact::api::HttpContactApi;
use crate::contact::health::{probe_health, HealthReport};

#[derive(Properties, PartialEq)]
pub struct DiagnosticsProps {
    pub config: Rc<AppConfig>,
}

/// Development-only strip under the form header: which API the build talks
/// to, and a button to ping its health endpoint.
#[function_component(DiagnosticsPanel)]
pub fn diagnostics_panel(props: &DiagnosticsProps) -> Html {
    let report = use_state(|| None::<HealthReport>);
    let checking = use_state(|| false);

    let on_check = {
        let report = report.clone();
        let checking = checking.clone();
        let config = props.config.clone();
        Callback::from(move |_: MouseEvent| {
            if *checking {
                return;
            }
            checking.set(true);
            let report = report.clone();
            let checking = checking.clone();
            let config = config.clone();
            spawn_local(async move {
                let api = HttpContactApi::new(&config);
                let result = probe_health(&api, &config.api_base_url).await;
                report.set(Some(result));
                checking.set(false);
            });
        })
    };

    let result_line = match (*report).as_ref() {
        None => html! {},
        Some(r) if r.connected => {
            let reported = r
                .body
                .get("status")
                .and_then(|status| status.as_str())
                .map(|status| format!(" · {}", status))
                .unwrap_or_default();
            html! {
                <p class="diagnostics-ok">
                    {format!("✅ Conectado (HTTP {}) em {} ms{}",
                        r.status.unwrap_or_default(),
                        r.response_time_ms.unwrap_or_default(),
                        reported)}
                </p>
            }
        }
        Some(r) => html! {
            <p class="diagnostics-fail">
                {
                    match (&r.error, r.status) {
                        (Some(error), _) => format!("❌ Sem conexão: {}", error),
                        (None, Some(status)) => format!("❌ Servidor respondeu HTTP {}", status),
                        (None, None) => "❌ Sem conexão".to_string(),
                    }
                }
            </p>
        },
    };

    html! {
        <div class="diagnostics">
            <div class="diagnostics-row">
                <span>{"API: "}<code>{&props.config.api_base_url}</code></span>
                <button type="button" class="diagnostics-button" onclick={on_check} disabled={*checking}>
                    { if *checking { "Testando..." } else { "Testar conexão ↗" } }
                </button>
            </div>
            {result_line}
        </div>
    }
}
