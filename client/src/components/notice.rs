//! Dismissible notice banner driven by `UiState.notice`.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Renders the current notice, if any. Each new notice schedules its own
/// auto-dismiss after `NOTICE_DURATION`.
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(seq) = ui.with(|u| u.notice.as_ref().map(|n| n.seq)) else {
            return;
        };
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(crate::config::NOTICE_DURATION).await;
            let _ = ui.try_update(|u| u.expire(seq));
        });
    });

    let on_dismiss = move |_| ui.update(UiState::dismiss);

    view! {
        {move || {
            ui.get()
                .notice
                .map(|notice| {
                    view! {
                        <div class=notice.kind.css_class() role="status">
                            <strong class="notice__title">{notice.title}</strong>
                            <span class="notice__message">{notice.message}</span>
                            <button class="notice__close" aria-label="Dismiss" on:click=on_dismiss>
                                "×"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
