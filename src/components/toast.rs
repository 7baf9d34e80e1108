use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::contact::form::{Notice, NoticeTone};

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<()>,
}

/// Shows the current notice and dismisses it once its duration runs out.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |notice: &Option<Notice>| {
                let timeout = notice.as_ref().map(|notice| {
                    let millis = u32::try_from(notice.duration.as_millis()).unwrap_or(u32::MAX);
                    Timeout::new(millis, move || on_dismiss.emit(()))
                });
                // Dropping the timeout cancels it when a newer notice replaces this one.
                move || drop(timeout)
            },
            props.notice.clone(),
        );
    }

    let Some(notice) = props.notice.as_ref() else {
        return html! {};
    };

    let (tone_class, icon) = match notice.tone {
        NoticeTone::Success => ("toast-success", "🎉"),
        NoticeTone::Error => ("toast-error", "⚠️"),
    };

    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="toast-container">
            <style>
                {r#"
                    .toast-container {
                        position: fixed;
                        top: 80px;
                        right: 20px;
                        z-index: 100;
                        max-width: 380px;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(-20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast {
                        display: flex;
                        align-items: flex-start;
                        gap: 12px;
                        padding: 14px 16px;
                        border-radius: 14px;
                        box-shadow: 0 12px 28px rgba(76, 29, 149, 0.18);
                        background: #fff;
                        animation: toastIn 0.3s ease-out forwards;
                        font-size: 0.95rem;
                    }
                    .toast-success { border-left: 4px solid #22c55e; color: #14532d; }
                    .toast-error { border-left: 4px solid #e11d48; color: #881337; }
                    .toast-close {
                        margin-left: auto;
                        background: none;
                        border: none;
                        font-size: 1.1rem;
                        cursor: pointer;
                        color: inherit;
                    }
                "#}
            </style>
            <div class={classes!("toast", tone_class)} role="status">
                <span>{icon}</span>
                <span>{&notice.text}</span>
                <button class="toast-close" onclick={dismiss} aria-label="Fechar">{"×"}</button>
            </div>
        </div>
    }
}
