//! Application form for the signed-in applicant.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the current submission on mount. An existing submission renders as
//! a locked summary card until the applicant explicitly opens the editable
//! form. Files are validated and base64-encoded before any form state
//! changes, so a rejected selection leaves the form untouched.

#[cfg(test)]
#[path = "application_form_test.rs"]
mod application_form_test;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::components::alert::AlertBanner;
use crate::data::countries;
use crate::net::http;
use crate::net::types::ApplicationRecord;
use crate::state::alert::Alert;
#[cfg(feature = "csr")]
use crate::util::files::{self, FileKind, UploadError};
use crate::util::validate::{browser_today, is_adult, parse_birth_date};

/// Editable form fields, mirroring the submission payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct FormFields {
    pub full_name: String,
    pub birth_date: String,
    pub country: String,
    pub city: String,
    pub gender: String,
    pub education: String,
    pub profile_picture: String,
    pub cv_files: Vec<String>,
}

impl FormFields {
    /// Form state from a stored submission, falling back to the account
    /// name when nothing has been submitted yet.
    pub fn from_record(record: Option<&ApplicationRecord>, fallback_name: &str) -> Self {
        match record {
            Some(r) => Self {
                full_name: if r.full_name.is_empty() {
                    fallback_name.to_owned()
                } else {
                    r.full_name.clone()
                },
                birth_date: r.birth_date.clone(),
                country: r.country.clone(),
                city: r.city.clone(),
                gender: r.gender.clone(),
                education: r.education.clone(),
                profile_picture: r.profile_picture.clone().unwrap_or_default(),
                cv_files: r.cv_files.clone(),
            },
            None => Self { full_name: fallback_name.to_owned(), ..Self::default() },
        }
    }

    /// JSON payload for the upsert call.
    pub fn payload(&self) -> serde_json::Value {
        serde_json::json!({
            "full_name": self.full_name.trim(),
            "birth_date": self.birth_date,
            "country": self.country,
            "city": self.city.trim(),
            "gender": self.gender,
            "education": self.education,
            "profile_picture": if self.profile_picture.is_empty() {
                serde_json::Value::Null
            } else {
                serde_json::Value::String(self.profile_picture.clone())
            },
            "cv_files": self.cv_files,
        })
    }
}

/// Inline errors keyed by field name.
pub(crate) type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Validate required fields, the age floor, and the CV requirement.
pub(crate) fn validate(fields: &FormFields, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let required: [(&'static str, &str, &'static str); 6] = [
        ("full_name", &fields.full_name, "full name is required"),
        ("birth_date", &fields.birth_date, "birth date is required"),
        ("country", &fields.country, "country is required"),
        ("city", &fields.city, "city is required"),
        ("gender", &fields.gender, "gender is required"),
        ("education", &fields.education, "education is required"),
    ];
    for (key, value, message) in required {
        if value.trim().is_empty() {
            errors.insert(key, message);
        }
    }
    if fields.profile_picture.is_empty() {
        errors.insert("profile_picture", "profile picture is required");
    }
    if fields.cv_files.is_empty() {
        errors.insert("cv_files", "At least one CV file is required");
    }
    match parse_birth_date(&fields.birth_date) {
        Some(birth) if is_adult(birth, today) => {}
        _ => {
            errors.insert("birth_date", "You must be at least 18 years old.");
        }
    }
    errors
}

#[component]
pub fn ApplicationFormPage() -> impl IntoView {
    let fields = RwSignal::new(FormFields::default());
    let errors = RwSignal::new(FieldErrors::new());
    let alert = RwSignal::new(None::<Alert>);
    let loading = RwSignal::new(true);
    let editing = RwSignal::new(false);
    let has_submission = RwSignal::new(false);
    let preview = RwSignal::new(None::<String>);
    // CV entries below this index came from the server and link to assets.
    let server_cv_count = RwSignal::new(0usize);

    let fetch = move || {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            loading.set(true);
            match crate::net::api::single_application().await {
                Ok(record) => {
                    let fallback = if record.is_none() {
                        crate::net::api::full_name().await.unwrap_or_default()
                    } else {
                        String::new()
                    };
                    has_submission.set(record.is_some());
                    server_cv_count.set(record.as_ref().map_or(0, |r| r.cv_files.len()));
                    fields.set(FormFields::from_record(record.as_ref(), &fallback));
                    preview.set(None);
                }
                Err(err) => {
                    log::warn!("failed to load application: {err}");
                    alert.set(Some(Alert::error("An error occurred, try again later")));
                }
            }
            loading.set(false);
        });
    };
    Effect::new(move || fetch());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let checked = validate(&fields.get(), browser_today());
        if !checked.is_empty() {
            errors.set(checked);
            return;
        }
        errors.set(FieldErrors::new());
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::upsert_application(&fields.get_untracked().payload()).await {
                Ok(_) => {
                    alert.set(Some(Alert::success("Form submitted successfully")));
                    editing.set(false);
                    fetch();
                }
                Err(err) => {
                    log::warn!("application submit failed: {err}");
                    alert.set(Some(Alert::error("Unable to send form, try again later")));
                }
            }
        });
    };

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
                        fields.update(|f| f.profile_picture = encoded);
                        errors.update(|e| {
                            e.remove("profile_picture");
                        });
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

    let on_cv_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;
            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let selected = files::files_from_input(&input);
            if selected.is_empty() {
                return;
            }
            // Every rule runs before any state changes.
            if !files::can_add_cvs(fields.get_untracked().cv_files.len(), selected.len()) {
                alert.set(Some(Alert::error(UploadError::TooManyCvs.to_string())));
                return;
            }
            for file in &selected {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let size = file.size() as u64;
                if let Err(rule) = files::check_file(&file.name(), size, FileKind::Cv) {
                    alert.set(Some(Alert::error(rule.to_string())));
                    return;
                }
            }
            leptos::task::spawn_local(async move {
                let mut encoded = Vec::with_capacity(selected.len());
                for file in &selected {
                    match files::read_base64(file).await {
                        Ok(data) => encoded.push(data),
                        Err(rule) => {
                            alert.set(Some(Alert::error(rule.to_string())));
                            return;
                        }
                    }
                }
                fields.update(|f| f.cv_files.extend(encoded));
                errors.update(|e| {
                    e.remove("cv_files");
                });
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let field_error = move |key: &'static str| {
        view! {
            <Show when=move || errors.get().contains_key(key)>
                <p class="field__error">
                    {move || errors.get().get(key).copied().unwrap_or_default()}
                </p>
            </Show>
        }
    };

    view! {
        <AlertBanner alert=alert/>
        <Show when=move || !loading.get() fallback=|| view! { <p class="page-notice">"Loading..."</p> }>
            <Show
                when=move || editing.get() || !has_submission.get()
                fallback=move || {
                    view! {
                        <div class="summary-card">
                            <h2>"Application Form"</h2>
                            <p>"You can open the job application form here."</p>
                            <button class="btn btn--primary" on:click=move |_| editing.set(true)>
                                "View / Edit Form"
                            </button>
                        </div>
                    }
                }
            >
                <form class="application-form" on:submit=on_submit>
                    <h2>"Application Form"</h2>
                    <section class="application-form__section">
                        <h3>"Personal Information"</h3>
                        <label class="field">
                            "Full Name"
                            <input
                                class="field__input"
                                type="text"
                                placeholder="Enter your full name"
                                prop:value=move || fields.get().full_name
                                on:input=move |ev| fields.update(|f| f.full_name = event_target_value(&ev))
                            />
                            {field_error("full_name")}
                        </label>
                        <label class="field">
                            "Date of Birth"
                            <input
                                class="field__input"
                                type="date"
                                prop:value=move || fields.get().birth_date
                                on:input=move |ev| fields.update(|f| f.birth_date = event_target_value(&ev))
                            />
                            {field_error("birth_date")}
                        </label>
                        <label class="field">
                            "Country"
                            <select
                                class="field__input"
                                prop:value=move || fields.get().country
                                on:change=move |ev| {
                                    fields.update(|f| {
                                        f.country = event_target_value(&ev);
                                        // Schools depend on the country.
                                        f.education = String::new();
                                    });
                                }
                            >
                                <option value="" disabled>"Select your country"</option>
                                {countries::COUNTRIES
                                    .iter()
                                    .map(|country| view! { <option value=country.name>{country.name}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                            {field_error("country")}
                        </label>
                        <label class="field">
                            "City"
                            <input
                                class="field__input"
                                type="text"
                                prop:value=move || fields.get().city
                                on:input=move |ev| fields.update(|f| f.city = event_target_value(&ev))
                            />
                            {field_error("city")}
                        </label>
                        <label class="field">
                            "Gender"
                            <select
                                class="field__input"
                                prop:value=move || fields.get().gender
                                on:change=move |ev| fields.update(|f| f.gender = event_target_value(&ev))
                            >
                                <option value="" disabled>"Select gender"</option>
                                <option>"male"</option>
                                <option>"female"</option>
                                <option>"other"</option>
                            </select>
                            {field_error("gender")}
                        </label>
                    </section>
                    <section class="application-form__section">
                        <h3>"Education"</h3>
                        <label class="field">
                            "School (city)"
                            <select
                                class="field__input"
                                prop:value=move || fields.get().education
                                on:change=move |ev| fields.update(|f| f.education = event_target_value(&ev))
                            >
                                <option value="" disabled>"Select school"</option>
                                {move || {
                                    countries::schools_for(&fields.get().country)
                                        .iter()
                                        .map(|school| {
                                            let label = school.label();
                                            view! { <option value=label.clone()>{label.clone()}</option> }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </select>
                            {field_error("education")}
                        </label>
                    </section>
                    <section class="application-form__section">
                        <h3>"Profile Photo"</h3>
                        <div class="upload-box">
                            {move || {
                                let current = fields.get().profile_picture;
                                if let Some(url) = preview.get() {
                                    view! { <img class="upload-box__preview" alt="Profile" src=url/> }.into_any()
                                } else if current.is_empty() {
                                    view! { <div class="upload-box__placeholder">"No photo"</div> }.into_any()
                                } else {
                                    view! { <img class="upload-box__preview" alt="Profile" src=http::asset_url(&current)/> }
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
                        {field_error("profile_picture")}
                    </section>
                    <section class="application-form__section">
                        <h3>"CV Upload"</h3>
                        <div class="upload-box">
                            <label class="upload-box__control">
                                "Upload a file"
                                <input
                                    type="file"
                                    class="upload-box__input"
                                    accept=".pdf,.docx"
                                    multiple
                                    on:change=on_cv_change
                                />
                            </label>
                            <p class="upload-box__hint">"PDF, DOCX up to 10MB"</p>
                        </div>
                        {field_error("cv_files")}
                        <ul class="cv-list">
                            {move || {
                                let from_server = server_cv_count.get();
                                fields
                                    .get()
                                    .cv_files
                                    .iter()
                                    .enumerate()
                                    .map(|(index, reference)| {
                                        let item = if index < from_server {
                                            view! {
                                                <a
                                                    class="cv-list__link"
                                                    href=http::asset_url(reference)
                                                    target="_blank"
                                                    rel="noreferrer"
                                                >
                                                    "Uploaded document"
                                                </a>
                                            }
                                            .into_any()
                                        } else {
                                            view! { <span>"Ready to upload"</span> }.into_any()
                                        };
                                        view! {
                                            <li class="cv-list__item">
                                                <span class="cv-list__label">{format!("File {}", index + 1)}</span>
                                                {item}
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </section>
                    <div class="application-form__actions">
                        <Show when=move || has_submission.get()>
                            <button class="btn" type="button" on:click=move |_| editing.set(false)>
                                "Cancel"
                            </button>
                        </Show>
                        <button class="btn btn--primary" type="submit">
                            "Save"
                        </button>
                    </div>
                </form>
            </Show>
        </Show>
    }
}
