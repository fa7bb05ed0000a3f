//! Tab bar marking exactly one button active.

use leptos::prelude::*;

use crate::state::ui::{Tab, UiState};

/// Tab buttons in display order; clicking one makes its panel the single
/// visible panel.
#[component]
pub fn TabBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let active = move || ui.get().active_tab;

    view! {
        <nav class="tab-bar">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="tab-bar__button"
                            class:tab-bar__button--active=move || active() == tab
                            on:click=move |_| ui.update(|u| u.active_tab = tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
