//! Dataset selection and sample fetch panel.

use leptos::prelude::*;

use crate::state::explorer::ExplorerState;

/// Dataset `<select>` (options in server order, value = label), a fetch
/// button, and the sample display.
#[component]
pub fn ExplorePanel() -> impl IntoView {
    let explorer = expect_context::<RwSignal<ExplorerState>>();

    let selected = move || explorer.get().selected.unwrap_or_default();
    let sample = move || explorer.get().sample;

    let on_select = move |ev| {
        explorer.update(|s| s.select(event_target_value(&ev)));
    };

    view! {
        <div class="explore-panel">
            <label class="explore-panel__label">
                "Dataset"
                <select class="explore-panel__select" prop:value=selected on:change=on_select>
                    {move || {
                        explorer
                            .get()
                            .datasets
                            .into_iter()
                            .map(|name| {
                                view! { <option value=name.clone()>{name.clone()}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>
            <button class="btn btn--primary" on:click=move |_| fetch_sample(explorer)>
                "Fetch sample"
            </button>
            <p class="explore-panel__sample">{sample}</p>
        </div>
    }
}

/// Post the selected dataset and land the returned sample text, unless a
/// newer sample fetch was issued meanwhile.
fn fetch_sample(explorer: RwSignal<ExplorerState>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::explorer::RenderTarget;

        let Some(dataset) = explorer.with_untracked(|s| s.selected.clone()) else {
            return;
        };
        let token = explorer
            .try_update(|s| s.begin_request(RenderTarget::Sample))
            .unwrap_or_default();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_sample(&dataset).await {
                Ok(text) => explorer.update(|s| {
                    s.apply_response(RenderTarget::Sample, token, text);
                }),
                Err(err) => {
                    log::error!("sample fetch failed: {err}");
                    explorer.update(|s| {
                        s.apply_error(RenderTarget::Sample, token, err);
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = explorer;
    }
}
