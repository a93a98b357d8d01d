//! Top navigation bar with role-dependent items and the account menu.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::http;
use crate::state::auth::{self, AuthState, Role};

const FALLBACK_AVATAR: &str =
    "https://www.gravatar.com/avatar/00000000000000000000000000000000?d=mp&f=y";

/// A navigation entry in the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

/// Items visible for the current role. Both roles land on the home route;
/// the home route itself dispatches on role.
pub fn nav_items(role: Option<Role>) -> &'static [NavItem] {
    match role {
        Some(Role::Admin) => &[NavItem { label: "Dashboard", href: "/" }],
        Some(Role::Applicant) => &[NavItem { label: "Application", href: "/" }],
        None => &[],
    }
}

/// Whether the account menu offers the profile entry. Applicant only.
pub fn offers_profile(role: Option<Role>) -> bool {
    matches!(role, Some(Role::Applicant))
}

/// Avatar image source: the stored photo reference or a neutral fallback.
pub fn avatar_src(photo: Option<&str>) -> String {
    photo.map_or_else(|| FALLBACK_AVATAR.to_owned(), http::asset_url)
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let photo = RwSignal::new(None::<String>);
    let menu_open = RwSignal::new(false);

    // Fetch the avatar once a role is known; drop it on sign-out.
    Effect::new(move || {
        if auth.get().role.is_none() {
            photo.set(None);
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if let Ok(profile) = crate::net::api::profile().await {
                photo.set(profile.photo);
            }
        });
    });

    let navigate_items = navigate.clone();
    let navigate_profile = StoredValue::new(navigate.clone());
    let navigate_logout = navigate.clone();

    let on_logout = move |_| {
        menu_open.set(false);
        auth::logout(auth);
        navigate_logout("/login", NavigateOptions::default());
    };

    view! {
        <nav class="header">
            <span class="header__brand">"Applicant Portal"</span>
            <div class="header__links">
                {move || {
                    let navigate = navigate_items.clone();
                    nav_items(auth.get().role)
                        .iter()
                        .map(|item| {
                            let navigate = navigate.clone();
                            view! {
                                <button
                                    class="header__link"
                                    on:click=move |_| navigate(item.href, NavigateOptions::default())
                                >
                                    {item.label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <span class="header__spacer"></span>
            <Show when=move || auth.get().role.is_some()>
                <div class="header__account">
                    <button
                        class="header__avatar-button"
                        aria-label="Open user menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        <img
                            class="header__avatar"
                            alt=""
                            src=move || avatar_src(photo.get().as_deref())
                        />
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="header__menu">
                            <Show when=move || offers_profile(auth.get().role)>
                                {move || {
                                    let navigate = navigate_profile;
                                    view! {
                                        <button
                                            class="header__menu-item"
                                            on:click=move |_| {
                                                menu_open.set(false);
                                                navigate.with_value(|n| {
                                                    n("/profile", NavigateOptions::default());
                                                });
                                            }
                                        >
                                            "Your Profile"
                                        </button>
                                    }
                                }}
                            </Show>
                            <button class="header__menu-item" on:click=on_logout.clone()>
                                "Sign out"
                            </button>
                        </div>
                    </Show>
                </div>
            </Show>
        </nav>
    }
}
