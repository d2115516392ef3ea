//! Route guard gating protected pages on the stored session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every protected page. On mount it waits `GUARD_CHECK_DELAY`, samples
//! the Session Store once, and either renders its children or sends the
//! visitor to the entry page. There is no re-check until the guard remounts,
//! and the token is never validated against the backend here.

#[cfg(test)]
#[path = "auth_guard_test.rs"]
mod auth_guard_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;

use crate::state::auth::{GuardState, guard_transition};
use crate::state::session::Session;
use crate::util::session_store::SessionStore;
use crate::util::storage::KeyValueStorage;

/// Sample `store` once and redirect when no session is present.
///
/// Returns the guard's settled state and the session it saw.
pub fn settle_guard<S, F>(store: &SessionStore<S>, navigate: F) -> (GuardState, Option<Session>)
where
    S: KeyValueStorage,
    F: Fn(&str, NavigateOptions),
{
    let session = store.read();
    let (next, redirect) = guard_transition(session.is_some());
    match redirect {
        Some(path) => {
            log::info!("route guard: no session, redirecting to {path}");
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        None => log::debug!("route guard: session present"),
    }
    (next, session)
}

/// Render `children` only once a session is known to exist.
///
/// `fallback` is shown while checking; a plain loading line otherwise. Server
/// rendering always produces the checking placeholder.
#[component]
pub fn AuthGuard(children: ChildrenFn, #[prop(optional, into)] fallback: Option<ViewFn>) -> impl IntoView {
    let state = RwSignal::new(GuardState::Checking);

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use leptos_router::hooks::use_navigate;

        use crate::config::GUARD_CHECK_DELAY;
        use crate::state::auth::AuthState;

        let auth = expect_context::<RwSignal<AuthState>>();
        let navigate = use_navigate();
        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(GUARD_CHECK_DELAY).await;
            if !alive_task.load(Ordering::Relaxed) {
                return;
            }
            let (next, session) = settle_guard(&SessionStore::browser(), navigate);
            auth.set(AuthState::from_session(session));
            state.set(next);
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    move || match state.get() {
        GuardState::Checking => match fallback.as_ref() {
            Some(fallback) => fallback.run(),
            None => view! { <div class="auth-guard__checking">"Loading..."</div> }.into_any(),
        },
        GuardState::Authorized => children().into_any(),
        GuardState::Unauthorized => ().into_any(),
    }
}
