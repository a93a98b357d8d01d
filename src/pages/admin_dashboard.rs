//! Admin dashboard listing applications and unfinished users.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two server-backed tables share one pager: submitted applications
//! (filterable by name, city, and school) and registered users without a
//! submission (filterable by name). Any page, view, or filter change
//! refetches; destructive actions confirm first and refetch after.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;

use crate::components::add_user_dialog::AddUserDialog;
use crate::components::alert::AlertBanner;
use crate::components::confirm_delete::ConfirmDeleteDialog;
use crate::components::pagination::Pagination;
use crate::components::user_details::UserDetailsDialog;
use crate::net::api::ApplicationFilters;
use crate::net::http;
use crate::net::types::{ApplicationRecord, UserAccount};
use crate::state::alert::Alert;

/// Which listing the dashboard shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum DashboardView {
    #[default]
    Applications,
    UnfinishedUsers,
}

/// Rows per page.
pub(crate) const PAGE_SIZE: u64 = 5;

/// Account id a delete should target for an application row. Older rows may
/// miss the owning id and fall back to the record id.
pub(crate) fn delete_id_for(record: &ApplicationRecord) -> i64 {
    if record.user_id != 0 { record.user_id } else { record.id }
}

/// Table text with a placeholder for blank values.
pub(crate) fn text_or_na(value: &str) -> String {
    if value.trim().is_empty() { "N/A".to_owned() } else { value.to_owned() }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let view_mode = RwSignal::new(DashboardView::default());
    let page = RwSignal::new(1u64);
    let filters = RwSignal::new(ApplicationFilters::default());
    let applications = RwSignal::new(Vec::<ApplicationRecord>::new());
    let users = RwSignal::new(Vec::<UserAccount>::new());
    let total_count = RwSignal::new(0u64);
    let total_pages = RwSignal::new(0u64);
    let loading = RwSignal::new(false);
    let alert = RwSignal::new(None::<Alert>);
    let selected_user = RwSignal::new(None::<UserAccount>);
    let pending_delete = RwSignal::new(None::<(i64, DashboardView)>);
    let show_add_user = RwSignal::new(false);

    let fetch = move || {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            loading.set(true);
            let current_view = view_mode.get_untracked();
            let current_page = page.get_untracked();
            let current_filters = filters.get_untracked();
            let outcome = match current_view {
                DashboardView::Applications => crate::net::api::applications(current_page, PAGE_SIZE, &current_filters)
                    .await
                    .map(|listing| {
                        applications.set(listing.items);
                        (listing.total_count, listing.total_pages)
                    }),
                DashboardView::UnfinishedUsers => {
                    crate::net::api::unfinished_users(current_page, PAGE_SIZE, &current_filters.full_name)
                        .await
                        .map(|listing| {
                            users.set(listing.items);
                            (listing.total_count, listing.total_pages)
                        })
                }
            };
            match outcome {
                Ok((count, pages)) => {
                    total_count.set(count);
                    total_pages.set(pages);
                }
                Err(err) => {
                    log::warn!("dashboard fetch failed: {err}");
                    alert.set(Some(Alert::error("An error occurred, try again later")));
                }
            }
            loading.set(false);
        });
    };

    // Refetch on any page, view, or filter change.
    Effect::new(move || {
        page.track();
        view_mode.track();
        filters.track();
        fetch();
    });

    let on_toggle_view = move |_| {
        view_mode.update(|mode| {
            *mode = match mode {
                DashboardView::Applications => DashboardView::UnfinishedUsers,
                DashboardView::UnfinishedUsers => DashboardView::Applications,
            };
        });
        page.set(1);
    };

    let on_search = move |_| page.set(1);

    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some((id, target_view)) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = match target_view {
                DashboardView::Applications => crate::net::api::delete_user(id).await,
                DashboardView::UnfinishedUsers => crate::net::api::delete_unfinished_user(id).await,
            };
            match outcome {
                Ok(()) => fetch(),
                Err(err) => {
                    log::warn!("delete failed: {err}");
                    alert.set(Some(Alert::error("Problem with deleting user, try again later.")));
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, target_view);
        }
    });

    let on_details_close = Callback::new(move |()| selected_user.set(None));
    let on_add_close = Callback::new(move |()| show_add_user.set(false));
    let on_add_created = Callback::new(move |()| {
        show_add_user.set(false);
        alert.set(Some(Alert::success("User successfully added!")));
        fetch();
    });

    view! {
        <AlertBanner alert=alert/>
        <div class="dashboard">
            <div class="dashboard__bar">
                <div>
                    <h1>"Users"</h1>
                    <p class="dashboard__subtitle">"List of all applicants."</p>
                </div>
                <div class="dashboard__controls">
                    <label class="toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || view_mode.get() == DashboardView::UnfinishedUsers
                            on:change=on_toggle_view
                        />
                        "Users Without Application"
                    </label>
                    <button class="btn btn--primary" on:click=move |_| show_add_user.set(true)>
                        "Add User"
                    </button>
                </div>
            </div>

            <div class="dashboard__filters">
                <input
                    class="field__input"
                    type="text"
                    placeholder="Search by name"
                    prop:value=move || filters.get().full_name
                    on:input=move |ev| filters.update(|f| f.full_name = event_target_value(&ev))
                />
                <Show when=move || view_mode.get() == DashboardView::Applications>
                    <input
                        class="field__input"
                        type="text"
                        placeholder="Search by city"
                        prop:value=move || filters.get().city
                        on:input=move |ev| filters.update(|f| f.city = event_target_value(&ev))
                    />
                    <input
                        class="field__input"
                        type="text"
                        placeholder="Search by school"
                        prop:value=move || filters.get().education
                        on:input=move |ev| filters.update(|f| f.education = event_target_value(&ev))
                    />
                </Show>
                <button class="btn btn--primary" on:click=on_search>
                    "Search"
                </button>
            </div>

            <Show when=move || !loading.get() fallback=|| view! { <p class="page-notice">"Loading..."</p> }>
                <Show
                    when=move || view_mode.get() == DashboardView::Applications
                    fallback=move || {
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Email"</th>
                                        <th>"Photo"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        users
                                            .get()
                                            .into_iter()
                                            .map(|user| {
                                                let id = user.id;
                                                view! {
                                                    <tr>
                                                        <td>{text_or_na(user.full_name.as_deref().unwrap_or_default())}</td>
                                                        <td>{text_or_na(user.email.as_deref().unwrap_or_default())}</td>
                                                        <td>
                                                            {match user.photo.clone() {
                                                                Some(reference) => view! {
                                                                    <img class="data-table__photo" alt="" src=http::asset_url(&reference)/>
                                                                }
                                                                .into_any(),
                                                                None => view! { <span>"No Photo"</span> }.into_any(),
                                                            }}
                                                        </td>
                                                        <td class="data-table__actions">
                                                            <button
                                                                class="link link--danger"
                                                                on:click=move |_| pending_delete.set(Some((id, DashboardView::UnfinishedUsers)))
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </tbody>
                            </table>
                        }
                    }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Birth Date"</th>
                                <th>"Country"</th>
                                <th>"City"</th>
                                <th>"CV Files"</th>
                                <th>"Education"</th>
                                <th>"Gender"</th>
                                <th>"Application Photo"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                applications
                                    .get()
                                    .into_iter()
                                    .map(|record| {
                                        let delete_id = delete_id_for(&record);
                                        let owner = record.user.clone();
                                        view! {
                                            <tr>
                                                <td>{record.full_name.clone()}</td>
                                                <td>{record.birth_date.clone()}</td>
                                                <td>{record.country.clone()}</td>
                                                <td>{record.city.clone()}</td>
                                                <td>
                                                    {if record.cv_files.is_empty() {
                                                        view! { <span>"No CV Files"</span> }.into_any()
                                                    } else {
                                                        let links = record
                                                            .cv_files
                                                            .iter()
                                                            .enumerate()
                                                            .map(|(index, file)| {
                                                                view! {
                                                                    <a
                                                                        class="link"
                                                                        href=http::asset_url(file)
                                                                        target="_blank"
                                                                        rel="noreferrer"
                                                                    >
                                                                        {format!("CV File {} ", index + 1)}
                                                                    </a>
                                                                }
                                                            })
                                                            .collect::<Vec<_>>();
                                                        view! { <span>{links}</span> }.into_any()
                                                    }}
                                                </td>
                                                <td>{text_or_na(&record.education)}</td>
                                                <td>{text_or_na(&record.gender)}</td>
                                                <td>
                                                    {match record.profile_picture.clone() {
                                                        Some(reference) => view! {
                                                            <img class="data-table__photo" alt="" src=http::asset_url(&reference)/>
                                                        }
                                                        .into_any(),
                                                        None => view! { <span>"No Photo"</span> }.into_any(),
                                                    }}
                                                </td>
                                                <td class="data-table__actions">
                                                    <button
                                                        class="link"
                                                        on:click=move |_| selected_user.set(owner.clone())
                                                    >
                                                        "View User"
                                                    </button>
                                                    <button
                                                        class="link link--danger"
                                                        on:click=move |_| pending_delete.set(Some((delete_id, DashboardView::Applications)))
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>

            <Pagination page=page page_size=PAGE_SIZE total_pages=total_pages total_count=total_count/>

            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDeleteDialog
                    title="Are you sure you want to delete this user?"
                    message="This action is irreversible"
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
            <Show when=move || selected_user.get().is_some()>
                {move || {
                    selected_user
                        .get()
                        .map(|user| view! { <UserDetailsDialog user=user on_close=on_details_close/> })
                }}
            </Show>
            <Show when=move || show_add_user.get()>
                <AddUserDialog on_close=on_add_close on_created=on_add_created/>
            </Show>
        </div>
    }
}
