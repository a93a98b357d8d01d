//! Login page with credential and Google sign-in flows.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::alert::AlertBanner;
use crate::components::google_signin::GoogleSignIn;
use crate::state::alert::Alert;
use crate::state::auth::AuthState;
use crate::util::validate::{CredentialErrors, check_credentials};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(CredentialErrors::default());
    let alert = RwSignal::new(None::<Alert>);
    let busy = RwSignal::new(false);

    // Anyone already signed in belongs on the home route.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        if auth.get().authenticated {
            navigate_home("/", NavigateOptions::default());
        }
    });

    // Surface a notice passed along by registration.
    Effect::new(move || {
        if let Some(message) = query.get().get("message") {
            alert.set(Some(Alert::success(message)));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let checked = check_credentials(&email.get(), &password.get());
        if !checked.is_empty() {
            errors.set(checked);
            return;
        }
        errors.set(CredentialErrors::default());
        busy.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(email.get_untracked().trim(), &password.get_untracked()).await
            {
                Ok(()) => crate::state::auth::refresh(auth),
                Err(err) => {
                    log::warn!("login failed: {err}");
                    alert.set(Some(Alert::error("Unable to login, check your email and password.")));
                }
            }
            busy.set(false);
        });
    };

    let on_google_error = Callback::new(move |()| {
        alert.set(Some(Alert::error("Unable to login via google account, try again later.")));
    });

    view! {
        <AlertBanner alert=alert/>
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Sign in to your account"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <label class="field">
                        "Email address"
                        <input
                            class="field__input"
                            type="text"
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <Show when=move || errors.get().email.is_some()>
                            <p class="field__error">{move || errors.get().email.unwrap_or_default()}</p>
                        </Show>
                    </label>
                    <label class="field">
                        "Password"
                        <input
                            class="field__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <Show when=move || errors.get().password.is_some()>
                            <p class="field__error">{move || errors.get().password.unwrap_or_default()}</p>
                        </Show>
                    </label>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? " <A href="/register">"Register here"</A>
                </p>
                <div class="auth-card__divider"></div>
                <GoogleSignIn on_error=on_google_error/>
            </div>
        </div>
    }
}
