//! Root application component: context provisioning and routing.
//!
//! The home route dispatches on the session's access level through a pure
//! selection function, so role gating stays testable without a renderer.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::components::header::Header;
use crate::pages::admin_dashboard::AdminDashboardPage;
use crate::pages::application_form::ApplicationFormPage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::state::auth::{self, Access, AuthState};

/// Which screen the home route shows for a given access level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum HomeScreen {
    Login,
    AdminDashboard,
    ApplicationForm,
}

/// Pure selection of the home screen from the access level.
pub(crate) fn home_screen(access: Access) -> HomeScreen {
    match access {
        Access::Unauthenticated => HomeScreen::Login,
        Access::Admin => HomeScreen::AdminDashboard,
        Access::Applicant => HomeScreen::ApplicationForm,
    }
}

/// Root application component.
///
/// Computes the initial auth snapshot, provides it as context, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(auth::snapshot());
    provide_context(auth);

    view! {
        <Title text="Applicant Portal"/>
        <Router>
            <Header/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

/// Role-dispatched home route.
#[component]
fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    view! {
        {move || match home_screen(auth.get().access()) {
            HomeScreen::Login => view! { <LoginPage/> }.into_any(),
            HomeScreen::AdminDashboard => view! { <AdminDashboardPage/> }.into_any(),
            HomeScreen::ApplicationForm => view! { <ApplicationFormPage/> }.into_any(),
        }}
    }
}
