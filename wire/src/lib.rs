//! Shared wire DTOs for the textlab client/server boundary.
//!
//! This crate owns the JSON request/response shapes used by both `server`
//! and `client`, so the two sides cannot drift apart. Field names are wire
//! contract and must not be renamed.


use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a mode string on the wire is not recognized.
#[derive(Debug, thiserror::Error)]
#[error("unknown mode: {0:?}")]
pub struct ParseModeError(pub String);

/// Response body of `GET /datasets`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetList {
    /// Dataset names in registry order.
    pub datasets: Vec<String>,
}

/// Request body of `POST /fetch_sample`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRequest {
    /// Name of the dataset to sample from.
    pub dataset: String,
}

/// Response body of `POST /fetch_sample`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleResponse {
    /// Raw sample text.
    pub text: String,
}

/// Request body of `POST /preprocess` and `POST /augment`.
///
/// The `dataset` field carries the mode string (`"tokenize"`,
/// `"synonym_replacement"`, ...). The field name is historical and kept
/// for wire compatibility.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRequest {
    /// Mode selector (see [`PreprocessMode`] / [`AugmentMode`]).
    pub dataset: String,
    /// Text to transform.
    pub text: String,
}

/// Response body of `POST /preprocess` and `POST /augment`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformResponse {
    /// The input text, echoed back.
    pub original_text: String,
    /// The transformed text.
    pub processed_text: String,
}

/// Preprocessing modes accepted by `POST /preprocess`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreprocessMode {
    Tokenize,
    Pad,
    Embed,
}

impl PreprocessMode {
    /// Wire string for this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tokenize => "tokenize",
            Self::Pad => "pad",
            Self::Embed => "embed",
        }
    }
}

impl FromStr for PreprocessMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tokenize" => Ok(Self::Tokenize),
            "pad" => Ok(Self::Pad),
            "embed" => Ok(Self::Embed),
            other => Err(ParseModeError(other.to_owned())),
        }
    }
}

impl fmt::Display for PreprocessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Augmentation modes accepted by `POST /augment`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AugmentMode {
    SynonymReplacement,
    RandomInsertion,
}

impl AugmentMode {
    /// Wire string for this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SynonymReplacement => "synonym_replacement",
            Self::RandomInsertion => "random_insertion",
        }
    }
}

impl FromStr for AugmentMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "synonym_replacement" => Ok(Self::SynonymReplacement),
            "random_insertion" => Ok(Self::RandomInsertion),
            other => Err(ParseModeError(other.to_owned())),
        }
    }
}

impl fmt::Display for AugmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TransformRequest {
    /// Build a preprocess request for `mode` over `text`.
    #[must_use]
    pub fn preprocess(mode: PreprocessMode, text: impl Into<String>) -> Self {
        Self { dataset: mode.as_str().to_owned(), text: text.into() }
    }

    /// Build an augment request for `mode` over `text`.
    #[must_use]
    pub fn augment(mode: AugmentMode, text: impl Into<String>) -> Self {
        Self { dataset: mode.as_str().to_owned(), text: text.into() }
    }
}
