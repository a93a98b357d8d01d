//! Dismissible page-level banner for request failures and success notices.

use leptos::prelude::*;

use crate::state::alert::{Alert, Severity};

/// Seconds a banner stays up before clearing itself.
#[cfg(feature = "csr")]
const DISMISS_AFTER_SECS: u64 = 5;

/// CSS class for the banner by severity.
fn banner_class(severity: Option<Severity>) -> &'static str {
    match severity {
        Some(Severity::Success) => "alert alert--success",
        _ => "alert alert--error",
    }
}

/// Banner rendered at the top of a page while `alert` holds a notice.
/// Clears itself after a few seconds or on the close button.
#[component]
pub fn AlertBanner(alert: RwSignal<Option<Alert>>) -> impl IntoView {
    Effect::new(move || {
        if alert.get().is_none() {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(DISMISS_AFTER_SECS)).await;
            alert.set(None);
        });
    });

    view! {
        <Show when=move || alert.get().is_some()>
            <div class=move || banner_class(alert.get().map(|a| a.severity))>
                <span class="alert__message">
                    {move || alert.get().map(|a| a.message).unwrap_or_default()}
                </span>
                <button
                    class="alert__close"
                    aria-label="Close"
                    on:click=move |_| alert.set(None)
                >
                    "✕"
                </button>
            </div>
        </Show>
    }
}
