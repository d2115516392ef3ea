//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{analysis::AnalysisPage, dashboard::DashboardPage, history::HistoryPage, login::LoginPage};
use crate::state::{auth::AuthState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and UI contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(AuthState::default()));
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/repo-analyzer.css"/>
        <Title text="RepoAnalyzer"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("hero") view=DashboardPage/>
                <Route path=StaticSegment("history") view=HistoryPage/>
                <Route path=(StaticSegment("analyzer"), ParamSegment("id")) view=AnalysisPage/>
                // Legacy `/analyzer?id=N` links.
                <Route path=StaticSegment("analyzer") view=AnalysisPage/>
            </Routes>
        </Router>
    }
}
