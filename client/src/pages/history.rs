//! Analysis history table.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::auth_guard::AuthGuard;
use crate::components::navbar::Navbar;
use crate::config::{DASHBOARD_ROUTE, analysis_route};
use crate::net::types::{AnalysisRecord, AnalysisStatus};
use crate::util::format::{format_count, format_timestamp};

/// What the actions column offers for a row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowAction {
    InProgress,
    View(String),
    Failed,
    None,
}

pub fn row_action(record: &AnalysisRecord) -> RowAction {
    match record.status {
        AnalysisStatus::InProgress => RowAction::InProgress,
        AnalysisStatus::Completed => RowAction::View(analysis_route(record.id)),
        AnalysisStatus::Failed => RowAction::Failed,
        AnalysisStatus::Unknown => RowAction::None,
    }
}

/// Count cell text; `-` when the backend has not reported one.
pub fn count_label(count: Option<u64>) -> String {
    count.map_or_else(|| "-".to_owned(), format_count)
}

pub fn summary_line(count: usize) -> String {
    if count == 1 { "1 repository analyzed".to_owned() } else { format!("{count} repositories analyzed") }
}

#[component]
pub fn HistoryPage() -> impl IntoView {
    view! {
        <AuthGuard>
            <div class="page">
                <Navbar/>
                <HistoryContent/>
            </div>
        </AuthGuard>
    }
}

#[component]
fn HistoryContent() -> impl IntoView {
    let analyses = RwSignal::new(Vec::<AnalysisRecord>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        use crate::net::api::ApiClient;
        use crate::state::auth::AuthState;
        use crate::util::auth::expire_session;
        use crate::util::session_store::SessionStore;

        let auth = expect_context::<RwSignal<AuthState>>();
        let navigate = leptos_router::hooks::use_navigate();
        leptos::task::spawn_local(async move {
            let store = SessionStore::browser();
            let token = store.token().unwrap_or_default();
            match ApiClient::browser().list_analyses(&token).await {
                Ok(records) => {
                    let _ = analyses.try_set(records);
                }
                Err(e) if e.is_unauthorized() => {
                    log::warn!("analysis history rejected the session: {e}");
                    expire_session(&store, auth, navigate);
                }
                Err(e) => log::warn!("failed to load analysis history: {e}"),
            }
            let _ = loading.try_set(false);
        });
    }
    let rows = move || {
        analyses
            .get()
            .into_iter()
            .map(|record| view! { <HistoryRow record/> })
            .collect_view()
    };

    view! {
        <section class="history">
            <h1>"Analysis History"</h1>
            <p class="history__lead">"View all your previously analyzed repositories and their insights"</p>
            {move || {
                if loading.get() {
                    view! { <p class="history__loading">"Loading your analysis history..."</p> }.into_any()
                } else if analyses.with(Vec::is_empty) {
                    view! {
                        <div class="history__empty">
                            <p>"No repositories analyzed yet"</p>
                            <p>"Start by analyzing your first repository from the dashboard"</p>
                            <a class="history__cta" href=DASHBOARD_ROUTE>"Go to Dashboard"</a>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <p class="history__count">{move || summary_line(analyses.with(Vec::len))}</p>
                        <table class="history__table">
                            <thead>
                                <tr>
                                    <th>"Repository"</th>
                                    <th>"URL"</th>
                                    <th>"Contributors"</th>
                                    <th>"Commits"</th>
                                    <th>"Analyzed"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn HistoryRow(record: AnalysisRecord) -> impl IntoView {
    let name = record.repo_name().to_owned();
    let action = match row_action(&record) {
        RowAction::InProgress => view! { <button class="history__action" disabled=true>"In Progress…"</button> }.into_any(),
        RowAction::View(href) => view! { <a class="history__action history__action--view" href=href>"View Analysis"</a> }.into_any(),
        RowAction::Failed => view! { <span class="history__badge history__badge--failed">"Failed"</span> }.into_any(),
        RowAction::None => ().into_any(),
    };

    view! {
        <tr>
            <td class="history__repo">{name.clone()}</td>
            <td>
                <a href=record.repo_url.clone() target="_blank" rel="noopener noreferrer">{name}</a>
            </td>
            <td>{count_label(record.contributor_count())}</td>
            <td>{count_label(record.commit_count())}</td>
            <td>{format_timestamp(record.analyzed_at())}</td>
            <td class="history__actions">{action}</td>
        </tr>
    }
}
