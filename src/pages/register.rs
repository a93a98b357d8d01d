//! Self-service registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::alert::AlertBanner;
use crate::state::alert::Alert;
#[cfg(feature = "csr")]
use crate::util::files::{self, FileKind};
use crate::util::validate::{check_credentials, check_password_repeat};

/// Per-field errors for the registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RegistrationErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub repeat: Option<&'static str>,
}

impl RegistrationErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.repeat.is_none()
    }
}

/// Validate the registration fields; the photo and name stay optional.
pub(crate) fn validate_registration(email: &str, password: &str, repeat: &str) -> RegistrationErrors {
    let credentials = check_credentials(email, password);
    RegistrationErrors {
        email: credentials.email,
        password: credentials.password,
        repeat: check_password_repeat(password, repeat),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let repeat = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let photo = RwSignal::new(None::<String>);
    let preview = RwSignal::new(None::<String>);
    let errors = RwSignal::new(RegistrationErrors::default());
    let alert = RwSignal::new(None::<Alert>);
    let busy = RwSignal::new(false);

    let on_photo_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;
            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = files::files_from_input(&input).into_iter().next() else {
                return;
            };
            let name = file.name();
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let size = file.size() as u64;
            if let Err(rule) = files::check_file(&name, size, FileKind::Photo) {
                alert.set(Some(Alert::error(rule.to_string())));
                return;
            }
            leptos::task::spawn_local(async move {
                match files::read_base64(&file).await {
                    Ok(encoded) => {
                        preview.set(Some(files::preview_data_url(files::mime_for(&name), &encoded)));
                        photo.set(Some(encoded));
                    }
                    Err(rule) => alert.set(Some(Alert::error(rule.to_string()))),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let navigate_done = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let checked = validate_registration(&email.get(), &password.get(), &repeat.get());
        if !checked.is_empty() {
            errors.set(checked);
            return;
        }
        errors.set(RegistrationErrors::default());
        busy.set(true);
        let navigate_done = navigate_done.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::register(
                &email.get_untracked(),
                &password.get_untracked(),
                &full_name.get_untracked(),
                photo.get_untracked().as_deref(),
            )
            .await;
            match result {
                Ok(()) => {
                    navigate_done(
                        "/login?message=Please check your email to verify your account.",
                        NavigateOptions::default(),
                    );
                }
                Err(err) => {
                    log::warn!("registration failed: {err}");
                    alert.set(Some(Alert::error("An error occurred during registration. Try again")));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = navigate_done;
        }
    };

    view! {
        <AlertBanner alert=alert/>
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Create a new account"</h2>
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
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <Show when=move || errors.get().password.is_some()>
                            <p class="field__error">{move || errors.get().password.unwrap_or_default()}</p>
                        </Show>
                    </label>
                    <label class="field">
                        "Repeat Password"
                        <input
                            class="field__input"
                            type="password"
                            prop:value=move || repeat.get()
                            on:input=move |ev| repeat.set(event_target_value(&ev))
                        />
                        <Show when=move || errors.get().repeat.is_some()>
                            <p class="field__error">{move || errors.get().repeat.unwrap_or_default()}</p>
                        </Show>
                    </label>
                    <label class="field">
                        "Full Name (optional)"
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        "Profile Image (optional)"
                        <input
                            class="field__input"
                            type="file"
                            accept="image/*"
                            on:change=on_photo_change
                        />
                    </label>
                    <Show when=move || preview.get().is_some()>
                        <img
                            class="auth-card__preview"
                            alt="Profile preview"
                            src=move || preview.get().unwrap_or_default()
                        />
                    </Show>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        "Sign up"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? " <A href="/login">"Sign in here"</A>
                </p>
            </div>
        </div>
    }
}
