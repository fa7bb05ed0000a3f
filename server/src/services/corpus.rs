//! Corpus service — named datasets and sample lookup.
//!
//! DESIGN
//! ======
//! Datasets are small built-in corpora held in memory for the lifetime of
//! the process. Registry order is the order clients see in `/datasets`,
//! and `sample` returns the first entry of a dataset, which keeps repeated
//! fetches stable for a given corpus.

#[cfg(test)]
#[path = "corpus_test.rs"]
mod corpus_test;

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("dataset not found: {0}")]
    NotFound(String),
    #[error("dataset has no samples: {0}")]
    Empty(String),
}

/// A named, ordered collection of sample texts.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub name: String,
    pub samples: Vec<String>,
}

/// In-memory dataset registry.
#[derive(Debug, Clone, Default)]
pub struct CorpusRegistry {
    datasets: Vec<Dataset>,
}

impl CorpusRegistry {
    /// Registry with the built-in corpora.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        registry.insert(
            "ag_news",
            &[
                "Wall St. Bears Claw Back Into the Black as short-sellers see green again.",
                "Oil prices soar to all-time record, posing new menace to US economy.",
                "Scientists discover distant galaxy cluster hidden behind the Milky Way.",
                "Champions crowned after dramatic penalty shootout in the cup final.",
            ],
        );
        registry.insert(
            "imdb",
            &[
                "I rented this film expecting very little and was pleasantly surprised by the acting.",
                "A bland, forgettable remake that wastes a talented cast on a script with no ideas.",
                "One of the finest performances of the decade anchors an otherwise quiet drama.",
            ],
        );
        registry
    }

    /// Register a dataset at the end of the listing order.
    /// Replaces an existing dataset with the same name in place.
    pub fn insert(&mut self, name: &str, samples: &[&str]) {
        let dataset = Dataset {
            name: name.to_owned(),
            samples: samples.iter().map(|s| (*s).to_owned()).collect(),
        };
        if let Some(existing) = self.datasets.iter_mut().find(|d| d.name == name) {
            *existing = dataset;
        } else {
            self.datasets.push(dataset);
        }
    }

    /// Dataset names in registry order.
    #[must_use]
    pub fn list(&self) -> Vec<String> {
        self.datasets.iter().map(|d| d.name.clone()).collect()
    }

    /// First sample of the named dataset.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown dataset name, `Empty` when the dataset
    /// has no samples.
    pub fn sample(&self, name: &str) -> Result<&str, CorpusError> {
        let dataset = self
            .datasets
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| CorpusError::NotFound(name.to_owned()))?;
        dataset
            .samples
            .first()
            .map(String::as_str)
            .ok_or_else(|| CorpusError::Empty(name.to_owned()))
    }
}
