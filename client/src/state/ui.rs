#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the workbench tab region.
///
/// One `Tab` value means exactly one visible panel and exactly one active
/// tab button; an unknown panel identifier is unrepresentable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: Tab,
}

/// Tabbed panels of the workbench, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    /// Dataset selection and sample fetch.
    #[default]
    Explore,
    /// Tokenize / pad / embed actions.
    Preprocess,
    /// Synonym replacement / random insertion actions.
    Augment,
}

impl Tab {
    /// All tabs in display order; the first is the startup default.
    pub const ALL: [Self; 3] = [Self::Explore, Self::Preprocess, Self::Augment];

    /// Button label for this tab.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Explore => "Explore",
            Self::Preprocess => "Preprocess",
            Self::Augment => "Augment",
        }
    }
}
