//! Read-only account details modal for the admin dashboard.

use leptos::prelude::*;

use crate::net::http;
use crate::net::types::UserAccount;

#[component]
pub fn UserDetailsDialog(user: UserAccount, on_close: Callback<()>) -> impl IntoView {
    let name = user.full_name.clone().unwrap_or_else(|| "N/A".to_owned());
    let email = user.email.clone().unwrap_or_else(|| "Email not provided".to_owned());
    let photo = user.photo.clone();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--details" on:click=move |ev| ev.stop_propagation()>
                <button class="dialog__close" aria-label="Close" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
                {match photo {
                    Some(reference) => view! {
                        <img class="dialog__portrait" alt="" src=http::asset_url(&reference)/>
                    }
                    .into_any(),
                    None => view! { <div class="dialog__portrait dialog__portrait--empty">"No Photo"</div> }
                        .into_any(),
                }}
                <h2>{name}</h2>
                <p class="dialog__subtext">{email}</p>
            </div>
        </div>
    }
}
