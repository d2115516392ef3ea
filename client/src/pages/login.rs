//! Entry page: email/password login and account registration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only public route. A successful login or registration writes the
//! session (inside the Auth Client), mirrors it into `AuthState`, and moves to
//! the dashboard after `AUTH_REDIRECT_DELAY` so the success line is readable.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

/// Inline feedback under the active form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormFeedback {
    #[default]
    None,
    Error(String),
    Success(String),
}

/// Trim the login fields; both must be non-empty.
pub fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.trim().is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterInput {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
}

/// Trim the registration fields; all four must be non-empty.
pub fn validate_register_input(
    first_name: &str,
    last_name: &str,
    username: &str,
    password: &str,
) -> Result<RegisterInput, &'static str> {
    let (first_name, last_name, username) = (first_name.trim(), last_name.trim(), username.trim());
    if [first_name, last_name, username, password.trim()].iter().any(|f| f.is_empty()) {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok(RegisterInput {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

/// Login/register tabs.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let tab = RwSignal::new(AuthTab::Login);
    let feedback = RwSignal::new(FormFeedback::None);
    let busy = RwSignal::new(false);

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let reg_username = RwSignal::new(String::new());
    let reg_password = RwSignal::new(String::new());

    // Set once the success line has been shown long enough.
    let authenticated = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let navigate = leptos_router::hooks::use_navigate();
        Effect::new(move || {
            let present = authenticated.get() || crate::util::session_store::SessionStore::browser().is_present();
            if let Some(path) = crate::util::auth::entry_redirect(present) {
                log::info!("signed in; redirecting to {path}");
                navigate(path, leptos_router::NavigateOptions::default());
            }
        });
    }

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (user, pass) = match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
            Ok(fields) => fields,
            Err(message) => {
                feedback.set(FormFeedback::Error(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        feedback.set(FormFeedback::None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let store = crate::util::session_store::SessionStore::browser();
            let outcome = crate::net::api::ApiClient::browser().login(&store, &user, &pass).await;
            settle(outcome, auth, feedback, busy, authenticated).await;
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, pass, auth, authenticated);
            busy.set(false);
        }
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = match validate_register_input(
            &first_name.get_untracked(),
            &last_name.get_untracked(),
            &reg_username.get_untracked(),
            &reg_password.get_untracked(),
        ) {
            Ok(input) => input,
            Err(message) => {
                feedback.set(FormFeedback::Error(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        feedback.set(FormFeedback::None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let store = crate::util::session_store::SessionStore::browser();
            let outcome = crate::net::api::ApiClient::browser()
                .register(&store, &input.first_name, &input.last_name, &input.username, &input.password)
                .await;
            settle(outcome, auth, feedback, busy, authenticated).await;
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
            busy.set(false);
        }
    };

    let select_tab = move |next: AuthTab| {
        tab.set(next);
        feedback.set(FormFeedback::None);
    };
    let tab_class = move |t: AuthTab| {
        move || if tab.get() == t { "auth-tabs__tab auth-tabs__tab--active" } else { "auth-tabs__tab" }
    };

    let feedback_view = move || {
        let (class, message) = match feedback.get() {
            FormFeedback::None => return None,
            FormFeedback::Error(message) => ("auth-message auth-message--error", message),
            FormFeedback::Success(message) => ("auth-message auth-message--success", message),
        };
        Some(view! { <p class=class>{message}</p> })
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"RepoAnalyzer"</h1>
                <p class="login-card__subtitle">"Analyze GitHub repositories and contributor insights"</p>
                <div class="auth-tabs">
                    <button class=tab_class(AuthTab::Login) on:click=move |_| select_tab(AuthTab::Login)>
                        "Login"
                    </button>
                    <button class=tab_class(AuthTab::Register) on:click=move |_| select_tab(AuthTab::Register)>
                        "Register"
                    </button>
                </div>
                <Show
                    when=move || tab.get() == AuthTab::Login
                    fallback=move || {
                        view! {
                            <form class="login-form" on:submit=on_register>
                                <input
                                    class="login-input"
                                    placeholder="John"
                                    prop:value=move || first_name.get()
                                    on:input=move |ev| first_name.set(event_target_value(&ev))
                                />
                                <input
                                    class="login-input"
                                    placeholder="Doe"
                                    prop:value=move || last_name.get()
                                    on:input=move |ev| last_name.set(event_target_value(&ev))
                                />
                                <input
                                    class="login-input"
                                    type="email"
                                    placeholder="john.doe@example.com"
                                    prop:value=move || reg_username.get()
                                    on:input=move |ev| reg_username.set(event_target_value(&ev))
                                />
                                <input
                                    class="login-input"
                                    type="password"
                                    placeholder="Create a password"
                                    prop:value=move || reg_password.get()
                                    on:input=move |ev| reg_password.set(event_target_value(&ev))
                                />
                                {feedback_view}
                                <button class="login-button" type="submit" disabled=move || busy.get()>
                                    "Create Account"
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="login-form" on:submit=on_login>
                        <input
                            class="login-input"
                            type="email"
                            placeholder="john.doe@example.com"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        {feedback_view}
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            "Sign In"
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}

/// Publish an auth outcome and, on success, flag the redirect to the dashboard.
#[cfg(feature = "hydrate")]
async fn settle(
    outcome: crate::net::api::AuthOutcome,
    auth: RwSignal<AuthState>,
    feedback: RwSignal<FormFeedback>,
    busy: RwSignal<bool>,
    authenticated: RwSignal<bool>,
) {
    busy.set(false);
    if !outcome.success {
        log::info!("authentication rejected: {}", outcome.message);
        feedback.set(FormFeedback::Error(outcome.message));
        return;
    }
    log::info!("authentication succeeded");
    auth.set(AuthState::from_session(outcome.session));
    feedback.set(FormFeedback::Success(outcome.message));
    gloo_timers::future::sleep(crate::config::AUTH_REDIRECT_DELAY).await;
    let _ = authenticated.try_set(true);
}
