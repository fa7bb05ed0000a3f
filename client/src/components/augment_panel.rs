//! Augmentation panel: synonym replacement and random insertion buttons.

use leptos::prelude::*;
use wire::AugmentMode;

use crate::components::run_transform;
use crate::net::api::TransformKind;
use crate::state::explorer::ExplorerState;

/// Fixed-mode bindings over the shared transform action.
const MODES: [(&str, AugmentMode); 2] = [
    ("Synonym replacement", AugmentMode::SynonymReplacement),
    ("Random insertion", AugmentMode::RandomInsertion),
];

#[component]
pub fn AugmentPanel() -> impl IntoView {
    let explorer = expect_context::<RwSignal<ExplorerState>>();

    view! {
        <div class="transform-panel">
            {MODES
                .into_iter()
                .map(|(label, mode)| {
                    view! {
                        <button
                            class="btn"
                            on:click=move |_| run_transform(
                                explorer,
                                TransformKind::Augment(mode),
                            )
                        >
                            {label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
