//! Single workbench page: tab bar plus the active panel.

use leptos::prelude::*;

use crate::components::augment_panel::AugmentPanel;
use crate::components::explore_panel::ExplorePanel;
use crate::components::preprocess_panel::PreprocessPanel;
use crate::components::result_view::ResultView;
use crate::components::tab_bar::TabBar;
use crate::state::explorer::ExplorerState;
use crate::state::ui::{Tab, UiState};

/// Workbench page. The default tab is active synchronously on startup;
/// the dataset fetch is spawned asynchronously and does not block it.
#[component]
pub fn WorkbenchPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let explorer = expect_context::<RwSignal<ExplorerState>>();

    // Populate the dataset list once on startup. On failure the select
    // stays empty and the error is logged and rendered.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_datasets().await {
                Ok(names) => explorer.update(|s| s.apply_datasets(names)),
                Err(err) => {
                    log::error!("dataset fetch failed: {err}");
                    explorer.update(|s| s.record_error(err));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = explorer;
    }

    let active_tab = move || ui.get().active_tab;

    view! {
        <div class="workbench">
            <header class="workbench__header">
                <h1>"textlab"</h1>
            </header>
            <TabBar/>
            <main class="workbench__panel">
                {move || match active_tab() {
                    Tab::Explore => view! { <ExplorePanel/> }.into_any(),
                    Tab::Preprocess => view! { <PreprocessPanel/> }.into_any(),
                    Tab::Augment => view! { <AugmentPanel/> }.into_any(),
                }}
            </main>
            <ResultView/>
        </div>
    }
}
