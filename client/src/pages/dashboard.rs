//! Dashboard: GitHub connection state and the analyze-repository form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route, and where the backend's GitHub OAuth
//! callback lands (`/hero?auth=success&token_stored=true`). The connection
//! check runs once per mount; the view does not follow later changes.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::auth_guard::AuthGuard;
use crate::components::navbar::Navbar;
use crate::components::notice::NoticeBanner;
use crate::net::api::AnalyzeOutcome;
use crate::state::ui::{NoticeKind, UiState};

pub const EXAMPLE_REPO_URL: &str = "https://github.com/vercel/next.js";

/// Whether the analyze button should accept a click.
pub fn can_submit(repo_url: &str, busy: bool) -> bool {
    !busy && !repo_url.trim().is_empty()
}

/// Notice tone and title for an analysis trigger result.
pub fn analyze_notice(outcome: &AnalyzeOutcome) -> (NoticeKind, &'static str) {
    if outcome.success {
        (NoticeKind::Success, "Analysis Complete")
    } else {
        (NoticeKind::Error, "Analysis Failed")
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AuthGuard>
            <div class="page">
                <Navbar/>
                <NoticeBanner/>
                <DashboardContent/>
            </div>
        </AuthGuard>
    }
}

/// Connection-dependent body. `None` while the status check is pending.
#[component]
fn DashboardContent() -> impl IntoView {
    let connected = RwSignal::new(None::<bool>);

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use crate::config::DASHBOARD_ROUTE;
        use crate::net::api::ApiClient;
        use crate::util::connection::{
            AUTH_PARAM, TOKEN_STORED_PARAM, check_github_connection, oauth_callback_completed, strip_callback_params,
        };
        use crate::util::session_store::SessionStore;

        let query = leptos_router::hooks::use_query_map().get_untracked();
        let callback = oauth_callback_completed(
            query.get(AUTH_PARAM).as_deref(),
            query.get(TOKEN_STORED_PARAM).as_deref(),
        );
        if callback {
            strip_callback_params(DASHBOARD_ROUTE);
        }

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let token = SessionStore::browser().token();
            let state = check_github_connection(&ApiClient::browser(), callback, token.as_deref()).await;
            if alive_task.load(Ordering::Relaxed) {
                connected.set(Some(state));
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    move || match connected.get() {
        None => view! {
            <div class="dashboard__loading">
                <p>"Loading dashboard..."</p>
            </div>
        }
        .into_any(),
        Some(true) => view! { <AnalyzeForm/> }.into_any(),
        Some(false) => view! { <ConnectGithub/> }.into_any(),
    }
}

#[component]
fn AnalyzeForm() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let repo_url = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_analyze = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let url = repo_url.get_untracked().trim().to_owned();
        if !can_submit(&url, busy.get_untracked()) {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = crate::util::session_store::SessionStore::browser().token().unwrap_or_default();
            let outcome = crate::net::api::ApiClient::browser().trigger_analysis(&token, &url).await;
            let (kind, title) = analyze_notice(&outcome);
            if outcome.success {
                let _ = repo_url.try_set(String::new());
            }
            let _ = ui.try_update(|u| {
                u.show(kind, title, outcome.message);
            });
            let _ = busy.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, ui);
            busy.set(false);
        }
    };

    view! {
        <section class="dashboard">
            <h1>"Analyze GitHub Repository"</h1>
            <p class="dashboard__lead">
                "Enter a GitHub repository URL to get detailed contributor insights and analytics"
            </p>
            <form class="dashboard__form" on:submit=on_analyze>
                <input
                    class="dashboard__input"
                    placeholder="https://github.com/username/repository"
                    prop:value=move || repo_url.get()
                    on:input=move |ev| repo_url.set(event_target_value(&ev))
                    disabled=move || busy.get()
                />
                <button
                    class="dashboard__submit"
                    type="submit"
                    disabled=move || !can_submit(&repo_url.get(), busy.get())
                >
                    {move || if busy.get() { "Analyzing..." } else { "Analyze" }}
                </button>
            </form>
            <p class="dashboard__hint">"Example: " {EXAMPLE_REPO_URL}</p>
        </section>
    }
}

#[component]
fn ConnectGithub() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let connecting = RwSignal::new(false);

    let on_connect = move |_| {
        if connecting.get_untracked() {
            return;
        }
        connecting.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = crate::util::session_store::SessionStore::browser().token().unwrap_or_default();
            match crate::net::api::ApiClient::browser().github_oauth_url(&token).await {
                Ok(url) => {
                    log::info!("redirecting to GitHub OAuth");
                    let redirected = web_sys::window().is_some_and(|w| w.location().set_href(&url).is_ok());
                    if !redirected {
                        log::warn!("browser refused navigation to GitHub OAuth URL");
                        let _ = connecting.try_set(false);
                    }
                }
                Err(e) => {
                    log::warn!("could not start GitHub connection: {e}");
                    let _ = ui.try_update(|u| {
                        u.show(NoticeKind::Error, "Connection Failed", "Could not start GitHub connection. Please try again.");
                    });
                    let _ = connecting.try_set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ui;
            connecting.set(false);
        }
    };

    view! {
        <section class="dashboard">
            <h1>"Connect Your GitHub Account"</h1>
            <p class="dashboard__lead">
                "Link your GitHub account to start analyzing repositories and gain insights into contributor activity"
            </p>
            <button class="dashboard__connect" on:click=on_connect disabled=move || connecting.get()>
                {move || if connecting.get() { "Connecting..." } else { "Connect to GitHub" }}
            </button>
        </section>
    }
}
