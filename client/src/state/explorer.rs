//! Dataset explorer state: dataset list, selection, sample and result
//! text, and stale-response bookkeeping.
//!
//! DESIGN
//! ======
//! All mutation goes through pure methods on [`ExplorerState`] so the
//! render rules are testable without a browser. Each render target keeps
//! a monotonically increasing request token; a response only lands if its
//! token is still the latest issued for that target, so the most recently
//! issued request wins regardless of response arrival order.

#[cfg(test)]
#[path = "explorer_test.rs"]
mod explorer_test;

/// Text slots that in-flight requests race to overwrite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderTarget {
    /// The sample display, written by sample fetches.
    Sample,
    /// The result display, written by preprocess/augment actions.
    Result,
}

/// State behind the explorer, preprocess, and augment panels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExplorerState {
    /// Dataset names in server order.
    pub datasets: Vec<String>,
    /// Currently selected dataset, if any.
    pub selected: Option<String>,
    /// Last fetched sample text.
    pub sample: String,
    /// Last rendered transform result.
    pub result: String,
    /// Last remote-call error, cleared by the next successful response.
    pub error: Option<String>,
    sample_seq: u64,
    result_seq: u64,
}

impl ExplorerState {
    /// Replace the dataset list with `names` in server order, selecting
    /// the first name if nothing is selected yet. Replacement keeps the
    /// list duplicate-free if the fetch ever runs again (page remount).
    pub fn apply_datasets(&mut self, names: Vec<String>) {
        if self.selected.is_none() {
            self.selected = names.first().cloned();
        }
        self.datasets = names;
    }

    /// Record a failed dataset-list fetch. The list itself is untouched.
    pub fn record_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Select a dataset by name.
    pub fn select(&mut self, dataset: impl Into<String>) {
        self.selected = Some(dataset.into());
    }

    /// Issue a request token for `target`. Any response carrying an older
    /// token for the same target is dropped on arrival.
    pub fn begin_request(&mut self, target: RenderTarget) -> u64 {
        let seq = match target {
            RenderTarget::Sample => &mut self.sample_seq,
            RenderTarget::Result => &mut self.result_seq,
        };
        *seq += 1;
        *seq
    }

    /// Land a successful response. Returns `false` when the response was
    /// stale and dropped.
    pub fn apply_response(&mut self, target: RenderTarget, token: u64, text: String) -> bool {
        if !self.is_latest(target, token) {
            return false;
        }
        self.error = None;
        match target {
            RenderTarget::Sample => self.sample = text,
            RenderTarget::Result => self.result = text,
        }
        true
    }

    /// Land a failed response. Returns `false` when the failure was stale
    /// and dropped.
    pub fn apply_error(
        &mut self,
        target: RenderTarget,
        token: u64,
        message: impl Into<String>,
    ) -> bool {
        if !self.is_latest(target, token) {
            return false;
        }
        self.error = Some(message.into());
        true
    }

    fn is_latest(&self, target: RenderTarget, token: u64) -> bool {
        match target {
            RenderTarget::Sample => token == self.sample_seq,
            RenderTarget::Result => token == self.result_seq,
        }
    }
}
