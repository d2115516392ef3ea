//! Top navigation bar with identity badge and logout.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::{DASHBOARD_ROUTE, ENTRY_ROUTE, HISTORY_ROUTE};
use crate::state::auth::AuthState;
use crate::util::auth::sign_out;
use crate::util::session_store::SessionStore;

/// CSS class for a nav link given the current path.
pub fn nav_link_class(current_path: &str, target: &str) -> &'static str {
    if current_path == target { "navbar__link navbar__link--active" } else { "navbar__link" }
}

/// Label and avatar letter for the signed-in user.
pub fn identity(auth: &AuthState) -> (String, String) {
    auth.session
        .as_ref()
        .map(|s| (s.display_label().to_owned(), s.initials()))
        .unwrap_or_else(|| ("User".to_owned(), "U".to_owned()))
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let link_class = move |target: &'static str| move || nav_link_class(&pathname.get(), target);
    let label = move || identity(&auth.get()).0;
    let initials = move || identity(&auth.get()).1;

    let logged_out = RwSignal::new(false);
    Effect::new(move || {
        if logged_out.get() {
            navigate(ENTRY_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_logout = move |_| {
        log::info!("logout");
        auth.set(sign_out(&SessionStore::browser()));
        logged_out.set(true);
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href=DASHBOARD_ROUTE>"Repo Analyzer"</a>
            <div class="navbar__links">
                <a class=link_class(DASHBOARD_ROUTE) href=DASHBOARD_ROUTE>"Dashboard"</a>
                <a class=link_class(HISTORY_ROUTE) href=HISTORY_ROUTE>"History"</a>
            </div>
            <div class="navbar__user">
                <span class="navbar__avatar">{initials}</span>
                <span class="navbar__name">{label}</span>
                <button class="navbar__logout" on:click=on_logout>"Logout"</button>
            </div>
        </nav>
    }
}
