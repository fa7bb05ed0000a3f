//! Result display shared by the preprocess and augment panels.

use leptos::prelude::*;

use crate::state::explorer::ExplorerState;

/// Shows the latest processed text, overwritten on each action, plus a
/// visible error line when the last remote call failed.
#[component]
pub fn ResultView() -> impl IntoView {
    let explorer = expect_context::<RwSignal<ExplorerState>>();

    let error = move || explorer.get().error;
    let result = move || explorer.get().result;

    view! {
        <div class="result-view">
            <Show when=move || error().is_some()>
                <p class="result-view__error">{move || error().unwrap_or_default()}</p>
            </Show>
            <pre class="result-view__text">{result}</pre>
        </div>
    }
}
