//! Admin dialog for creating a user account directly.

use leptos::prelude::*;

use crate::components::alert::AlertBanner;
use crate::state::alert::Alert;
#[cfg(feature = "csr")]
use crate::util::files::{self, FileKind};
use crate::util::validate::{CredentialErrors, check_credentials};

/// Modal with the minimal account fields. On success the parent refetches
/// its listing; failures stay inside the dialog.
#[component]
pub fn AddUserDialog(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let photo = RwSignal::new(None::<String>);
    let errors = RwSignal::new(CredentialErrors::default());
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
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let size = file.size() as u64;
            if let Err(rule) = files::check_file(&file.name(), size, FileKind::Photo) {
                alert.set(Some(Alert::error(rule.to_string())));
                return;
            }
            leptos::task::spawn_local(async move {
                match files::read_base64(&file).await {
                    Ok(encoded) => photo.set(Some(encoded)),
                    Err(rule) => alert.set(Some(Alert::error(rule.to_string()))),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

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
            let result = crate::net::api::create_user_by_admin(
                &email.get_untracked(),
                &password.get_untracked(),
                &full_name.get_untracked(),
                photo.get_untracked().as_deref(),
            )
            .await;
            match result {
                Ok(()) => on_created.run(()),
                Err(err) => {
                    log::warn!("admin user creation failed: {err}");
                    alert.set(Some(Alert::error("Error while adding user.")));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <AlertBanner alert=alert/>
                <h2>"Add User"</h2>
                <form class="dialog__form" on:submit=on_submit>
                    <label class="field">
                        "Email address"
                        <input
                            class="field__input"
                            type="text"
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
                            accept=".jpg,.jpeg,.png"
                            on:change=on_photo_change
                        />
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Add User"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
