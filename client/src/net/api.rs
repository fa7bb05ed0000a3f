//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>` so callers log and render a
//! visible error state instead of panicking; the original script caught
//! failures only on the dataset-list fetch, which is standardized here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use wire::{AugmentMode, PreprocessMode, TransformRequest};
#[cfg(feature = "hydrate")]
use wire::{DatasetList, SampleResponse, TransformResponse};

/// A transform routed to one of the two transform endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformKind {
    Preprocess(PreprocessMode),
    Augment(AugmentMode),
}

impl TransformKind {
    /// Endpoint path this transform posts to.
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Preprocess(_) => "/preprocess",
            Self::Augment(_) => "/augment",
        }
    }

    /// Wire request body for this transform over `text`.
    #[must_use]
    pub fn request(self, text: &str) -> TransformRequest {
        match self {
            Self::Preprocess(mode) => TransformRequest::preprocess(mode, text),
            Self::Augment(mode) => TransformRequest::augment(mode, text),
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Fetch the dataset names from `GET /datasets`, in server order.
///
/// # Errors
///
/// Returns an error string on transport failure, non-OK status, or an
/// unexpected body; the caller's dataset list is left untouched.
pub async fn fetch_datasets() -> Result<Vec<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/datasets")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("datasets", resp.status()));
        }
        let body: DatasetList = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.datasets)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch a sample text for `dataset` via `POST /fetch_sample`.
///
/// # Errors
///
/// Returns an error string on transport failure, non-OK status, or an
/// unexpected body.
pub async fn fetch_sample(dataset: &str) -> Result<String, String> {
    let payload = wire::SampleRequest { dataset: dataset.to_owned() };
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/fetch_sample")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("sample fetch", resp.status()));
        }
        let body: SampleResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}

/// Post `text` to the transform endpoint selected by `kind` and return the
/// processed text. Every preprocess/augment button goes through this one
/// post-and-render operation.
///
/// # Errors
///
/// Returns an error string on transport failure, non-OK status, or an
/// unexpected body.
pub async fn transform(kind: TransformKind, text: &str) -> Result<String, String> {
    let payload = kind.request(text);
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(kind.endpoint())
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("transform", resp.status()));
        }
        let body: TransformResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.processed_text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}
