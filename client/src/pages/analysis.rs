//! Single-analysis report: summary, totals, contributor impact, statistics.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from a completed history row (`/analyzer/{id}`); the older
//! `/analyzer?id=N` form is accepted too. A missing or
//! malformed id, or any load failure other than an expired session, sends the
//! visitor back to the history list.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::auth_guard::AuthGuard;
use crate::components::navbar::Navbar;
use crate::config::HISTORY_ROUTE;
use crate::net::types::{AnalysisRecord, AnalysisResult, ContributorImpact};
use crate::util::format::{clamp_percentage, format_count, format_percentage};

/// Positive numeric id from the route segment.
pub fn parse_analysis_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

/// Route id from the path segment, else the legacy `?id=` query value.
pub fn resolve_analysis_id(path_id: Option<&str>, query_id: Option<&str>) -> Option<i64> {
    parse_analysis_id(path_id).or_else(|| parse_analysis_id(query_id))
}

/// Inline style for a contribution bar.
pub fn bar_style(percentage: f64) -> String {
    format!("width: {}%", clamp_percentage(percentage))
}

#[derive(Clone, Debug, PartialEq)]
enum LoadState {
    Loading,
    Loaded(AnalysisRecord),
}

#[component]
pub fn AnalysisPage() -> impl IntoView {
    view! {
        <AuthGuard>
            <div class="page">
                <Navbar/>
                <AnalysisContent/>
            </div>
        </AuthGuard>
    }
}

#[component]
fn AnalysisContent() -> impl IntoView {
    let state = RwSignal::new(LoadState::Loading);

    #[cfg(feature = "hydrate")]
    {
        use leptos_router::NavigateOptions;

        use crate::net::api::ApiClient;
        use crate::state::auth::AuthState;
        use crate::util::auth::expire_session;
        use crate::util::session_store::SessionStore;

        let auth = expect_context::<RwSignal<AuthState>>();
        let navigate = leptos_router::hooks::use_navigate();
        let path_id = leptos_router::hooks::use_params_map().get_untracked().get("id");
        let query_id = leptos_router::hooks::use_query_map().get_untracked().get("id");
        let id = resolve_analysis_id(path_id.as_deref(), query_id.as_deref());
        leptos::task::spawn_local(async move {
            let back = || navigate(HISTORY_ROUTE, NavigateOptions::default());
            let Some(id) = id else {
                log::warn!("analysis route without a valid id");
                back();
                return;
            };
            let store = SessionStore::browser();
            let token = store.token().unwrap_or_default();
            match ApiClient::browser().fetch_analysis(&token, id).await {
                Ok(record) => {
                    let _ = state.try_set(LoadState::Loaded(record));
                }
                Err(e) if e.is_unauthorized() => {
                    log::warn!("analysis {id} rejected the session: {e}");
                    expire_session(&store, auth, &navigate);
                }
                Err(e) => {
                    log::warn!("failed to load analysis {id}: {e}");
                    back();
                }
            }
        });
    }

    move || match state.get() {
        LoadState::Loading => view! { <p class="analysis__loading">"Analyzing repository data..."</p> }.into_any(),
        LoadState::Loaded(record) => match record.result.clone() {
            Some(result) => view! { <AnalysisReport record result/> }.into_any(),
            None => view! {
                <div class="analysis__missing">
                    <p>"Failed to load analysis data"</p>
                    <a href=HISTORY_ROUTE>"Back to History"</a>
                </div>
            }
            .into_any(),
        },
    }
}

#[component]
fn AnalysisReport(record: AnalysisRecord, result: AnalysisResult) -> impl IntoView {
    let name = record.repo_name().to_owned();
    let contributor_total = result.contributors().len();
    let contributors = result
        .contributors()
        .iter()
        .map(|c| view! { <ContributorCard contributor=c.clone() result=result.clone()/> })
        .collect_view();
    let stats_rows = result
        .statistics
        .iter()
        .map(|s| {
            view! {
                <tr>
                    <td>{s.author.clone()}</td>
                    <td>{format_count(s.total_commits)}</td>
                    <td>{format_count(s.lines_changed)}</td>
                    <td>{format_count(s.avg_lines_per_commit())}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <section class="analysis">
            <a class="analysis__back" href=HISTORY_ROUTE>"Back to History"</a>
            <header class="analysis__header">
                <h1>{name}</h1>
                <p>"AI-powered repository analysis"</p>
                <a href=record.repo_url.clone() target="_blank" rel="noopener noreferrer">{record.repo_url.clone()}</a>
            </header>
            <div class="analysis__summary">
                <h2>"Project Analysis"</h2>
                <p>{result.overall_summary().to_owned()}</p>
            </div>
            <div class="analysis__totals">
                <div class="analysis__total">
                    <span>"Total Contributors"</span>
                    <strong>{contributor_total}</strong>
                </div>
                <div class="analysis__total">
                    <span>"Total Commits"</span>
                    <strong>{format_count(result.total_commits())}</strong>
                </div>
                <div class="analysis__total">
                    <span>"Total Lines Changed"</span>
                    <strong>{format_count(result.total_lines_changed())}</strong>
                </div>
            </div>
            <div class="analysis__contributors">
                <h2>"Contributor Impact Analysis"</h2>
                {contributors}
            </div>
            <table class="analysis__stats">
                <thead>
                    <tr>
                        <th>"Author"</th>
                        <th>"Commits"</th>
                        <th>"Lines Changed"</th>
                        <th>"Avg Lines/Commit"</th>
                    </tr>
                </thead>
                <tbody>{stats_rows}</tbody>
            </table>
        </section>
    }
}

#[component]
fn ContributorCard(contributor: ContributorImpact, result: AnalysisResult) -> impl IntoView {
    let stats = result
        .statistics_for(&contributor.name)
        .map(|s| format!("{} commits · {} lines", format_count(s.total_commits), format_count(s.lines_changed)));

    view! {
        <div class="contributor">
            <div class="contributor__head">
                <strong>{contributor.name.clone()}</strong>
                <span>{format_percentage(contributor.contribution_percentage)}</span>
            </div>
            <div class="contributor__bar">
                <div class="contributor__fill" style=bar_style(contributor.contribution_percentage)></div>
            </div>
            {stats.map(|line| view! { <p class="contributor__stats">{line}</p> })}
            <p class="contributor__impact">{contributor.impact_summary.clone()}</p>
        </div>
    }
}
