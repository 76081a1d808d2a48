//! Toast stack rendered above every page.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Push a toast and schedule its removal. Fire-and-forget.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let Some(id) = toasts.try_update(|t| t.push(kind, message)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let ttl = std::time::Duration::from_millis(u64::from(crate::state::toast::TOAST_TTL_MS));
        gloo_timers::future::sleep(ttl).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Renders queued toasts; clicking one dismisses it early.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class=format!("toast {}", toast.kind.css_modifier())
                                role="status"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
