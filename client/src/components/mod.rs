//! UI components for the workbench.

pub mod augment_panel;
pub mod explore_panel;
pub mod preprocess_panel;
pub mod result_view;
pub mod tab_bar;

use leptos::prelude::*;

use crate::net::api::TransformKind;
use crate::state::explorer::ExplorerState;

/// Shared post-and-render action behind every transform button: read the
/// current sample, post it with the fixed mode, and land the processed
/// text in the result display unless a newer request was issued meanwhile.
pub(crate) fn run_transform(explorer: RwSignal<ExplorerState>, kind: TransformKind) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::explorer::RenderTarget;

        let text = explorer.with_untracked(|s| s.sample.clone());
        let token = explorer
            .try_update(|s| s.begin_request(RenderTarget::Result))
            .unwrap_or_default();
        leptos::task::spawn_local(async move {
            match crate::net::api::transform(kind, &text).await {
                Ok(processed) => explorer.update(|s| {
                    s.apply_response(RenderTarget::Result, token, processed);
                }),
                Err(err) => {
                    log::error!("transform failed: {err}");
                    explorer.update(|s| {
                        s.apply_error(RenderTarget::Result, token, err);
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (explorer, kind);
    }
}
