//! Google Identity Services sign-in button.
//!
//! The GIS script (loaded from `index.html`) renders the button and invokes
//! a global callback with a credential object. The callback registered here
//! forwards the credential to the token-exchange endpoint and refreshes the
//! auth snapshot, which routes the user home.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Global callback name the GIS data attributes reference.
const CALLBACK_NAME: &str = "handleGoogleCredential";

/// Client id baked in at build time; the button is hidden without one.
fn client_id() -> &'static str {
    option_env!("APP_GOOGLE_CLIENT_ID").unwrap_or("")
}

/// Credential string out of the GIS response object.
#[cfg(feature = "csr")]
fn credential_of(payload: &wasm_bindgen::JsValue) -> Option<String> {
    js_sys::Reflect::get(payload, &wasm_bindgen::JsValue::from_str("credential"))
        .ok()?
        .as_string()
}

#[component]
pub fn GoogleSignIn(on_error: Callback<()>) -> impl IntoView {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::closure::Closure;

        let auth = expect_context::<RwSignal<AuthState>>();
        let callback = Closure::<dyn FnMut(wasm_bindgen::JsValue)>::new(
            move |payload: wasm_bindgen::JsValue| {
                let Some(credential) = credential_of(&payload) else {
                    on_error.run(());
                    return;
                };
                leptos::task::spawn_local(async move {
                    match crate::net::api::google_login(&credential).await {
                        Ok(()) => crate::state::auth::refresh(auth),
                        Err(err) => {
                            log::warn!("google login failed: {err}");
                            on_error.run(());
                        }
                    }
                });
            },
        );
        if let Some(window) = web_sys::window() {
            let target: &wasm_bindgen::JsValue = window.as_ref();
            let _ = js_sys::Reflect::set(
                target,
                &wasm_bindgen::JsValue::from_str(CALLBACK_NAME),
                callback.as_ref(),
            );
        }
        // The callback must outlive the component; GIS holds the only handle.
        callback.forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_error;
        let _ = expect_context::<RwSignal<AuthState>>();
    }

    view! {
        <Show when=move || !client_id().is_empty()>
            <div class="google-signin">
                <div
                    id="g_id_onload"
                    data-client_id=client_id()
                    data-callback=CALLBACK_NAME
                    data-auto_prompt="false"
                ></div>
                <div
                    class="g_id_signin"
                    data-type="standard"
                    data-theme="outline"
                    data-size="large"
                ></div>
            </div>
        </Show>
    }
}
