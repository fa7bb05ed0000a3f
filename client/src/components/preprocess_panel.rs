//! Preprocessing panel: tokenize, pad, and embed buttons.

use leptos::prelude::*;
use wire::PreprocessMode;

use crate::components::run_transform;
use crate::net::api::TransformKind;
use crate::state::explorer::ExplorerState;

/// Fixed-mode bindings over the shared transform action.
const MODES: [(&str, PreprocessMode); 3] = [
    ("Tokenize", PreprocessMode::Tokenize),
    ("Pad", PreprocessMode::Pad),
    ("Embed", PreprocessMode::Embed),
];

#[component]
pub fn PreprocessPanel() -> impl IntoView {
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
                                TransformKind::Preprocess(mode),
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
