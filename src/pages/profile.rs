//! Applicant profile editing page.
//!
//! Applicant-only: admins are bounced to the home route, signed-out
//! visitors to login. Submitting requires at least one changed field.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::alert::AlertBanner;
use crate::net::api::opt_text;
use crate::state::alert::Alert;
use crate::state::auth::{self, Access, AuthState};
#[cfg(feature = "csr")]
use crate::util::files::{self, MAX_FILE_BYTES, UploadError};
use crate::util::validate::MIN_PASSWORD_LEN;

/// Editable profile fields, compared against their loaded snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ProfileForm {
    pub full_name: String,
    pub password: String,
    pub confirm_password: String,
    pub photo: String,
}

/// Why a profile submission was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ProfileIssue {
    Unchanged,
    PasswordMismatch,
    PasswordTooShort,
}

/// Check the edited form against the loaded snapshot. A password is only
/// validated when one was entered.
pub(crate) fn validate_profile(form: &ProfileForm, original: &ProfileForm) -> Result<(), ProfileIssue> {
    if form == original {
        return Err(ProfileIssue::Unchanged);
    }
    if !form.password.is_empty() {
        if form.password != form.confirm_password {
            return Err(ProfileIssue::PasswordMismatch);
        }
        if form.password.len() < MIN_PASSWORD_LEN {
            return Err(ProfileIssue::PasswordTooShort);
        }
    }
    Ok(())
}

pub(crate) fn issue_message(issue: ProfileIssue) -> &'static str {
    match issue {
        ProfileIssue::Unchanged => "You must make at least one change to submit the form.",
        ProfileIssue::PasswordMismatch => "Passwords do not match",
        ProfileIssue::PasswordTooShort => "Password must be at least 6 characters",
    }
}

/// JSON payload for the update call. Blank fields fall out as `null`.
pub(crate) fn update_payload(form: &ProfileForm) -> serde_json::Value {
    serde_json::json!({
        "full_name": opt_text(&form.full_name),
        "password": if form.password.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::Value::String(form.password.clone())
        },
        "photo": if form.photo.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::Value::String(form.photo.clone())
        },
    })
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    auth::install_unauth_redirect(auth, navigate.clone());
    let navigate_home = navigate.clone();
    Effect::new(move || {
        if auth.get().access() == Access::Admin {
            navigate_home("/", NavigateOptions::default());
        }
    });

    let form = RwSignal::new(ProfileForm::default());
    let original = RwSignal::new(ProfileForm::default());
    let password_error = RwSignal::new(None::<&'static str>);
    let preview = RwSignal::new(None::<String>);
    let alert = RwSignal::new(None::<Alert>);
    let busy = RwSignal::new(false);

    // Load the current profile once.
    Effect::new(move || {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::profile().await {
                Ok(profile) => {
                    let loaded = ProfileForm {
                        full_name: profile.full_name.unwrap_or_default(),
                        photo: profile.photo.unwrap_or_default(),
                        ..ProfileForm::default()
                    };
                    original.set(loaded.clone());
                    form.set(loaded);
                }
                Err(err) => {
                    log::warn!("failed to load profile: {err}");
                    alert.set(Some(Alert::error("Failed to load profile. Please try again.")));
                }
            }
        });
    });

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
            if size > MAX_FILE_BYTES {
                alert.set(Some(Alert::error(UploadError::TooLarge.to_string())));
                return;
            }
            leptos::task::spawn_local(async move {
                match files::read_base64(&file).await {
                    Ok(encoded) => {
                        preview.set(Some(files::preview_data_url(files::mime_for(&name), &encoded)));
                        form.update(|f| f.photo = encoded);
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

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        password_error.set(None);
        match validate_profile(&form.get(), &original.get()) {
            Err(ProfileIssue::Unchanged) => {
                alert.set(Some(Alert::error(issue_message(ProfileIssue::Unchanged))));
                return;
            }
            Err(issue) => {
                password_error.set(Some(issue_message(issue)));
                return;
            }
            Ok(()) => {}
        }
        busy.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_profile(&update_payload(&form.get_untracked())).await {
                Ok(_) => {
                    alert.set(Some(Alert::success("Profile updated successfully")));
                    original.set(form.get_untracked());
                }
                Err(err) => {
                    log::warn!("profile update failed: {err}");
                    alert.set(Some(Alert::error("Failed to update profile. Please try again.")));
                }
            }
            busy.set(false);
        });
    };

    let navigate_cancel = navigate.clone();

    view! {
        <AlertBanner alert=alert/>
        <form class="application-form" on:submit=on_submit>
            <h2>"Edit Profile"</h2>
            <section class="application-form__section">
                <label class="field">
                    "Full Name"
                    <input
                        class="field__input"
                        type="text"
                        placeholder="Enter your full name"
                        prop:value=move || form.get().full_name
                        on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "New Password"
                    <input
                        class="field__input"
                        type="password"
                        prop:value=move || form.get().password
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <Show when=move || password_error.get().is_some()>
                        <p class="field__error">{move || password_error.get().unwrap_or_default()}</p>
                    </Show>
                </label>
                <label class="field">
                    "Confirm New Password"
                    <input
                        class="field__input"
                        type="password"
                        prop:value=move || form.get().confirm_password
                        on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                    />
                </label>
            </section>
            <section class="application-form__section">
                <h3>"Profile Photo"</h3>
                <div class="upload-box">
                    {move || {
                        let current = form.get().photo;
                        if let Some(url) = preview.get() {
                            view! { <img class="upload-box__preview" alt="Profile" src=url/> }.into_any()
                        } else if current.is_empty() {
                            view! { <div class="upload-box__placeholder">"No photo"</div> }.into_any()
                        } else {
                            view! {
                                <img class="upload-box__preview" alt="Profile" src=crate::net::http::asset_url(&current)/>
                            }
                            .into_any()
                        }
                    }}
                    <label class="upload-box__control">
                        "Upload a file"
                        <input
                            type="file"
                            class="upload-box__input"
                            accept=".jpg,.jpeg,.png"
                            on:change=on_photo_change
                        />
                    </label>
                    <p class="upload-box__hint">"PNG, JPG, JPEG up to 10MB"</p>
                </div>
            </section>
            <div class="application-form__actions">
                <button
                    class="btn"
                    type="button"
                    on:click=move |_| navigate_cancel("/", NavigateOptions::default())
                >
                    "Cancel"
                </button>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Save"
                </button>
            </div>
        </form>
    }
}
