//! Preprocess and augment routes.
//!
//! ERROR HANDLING
//! ==============
//! The mode string arrives in the request's `dataset` field; anything the
//! typed mode enums reject maps to 400 before any transform runs.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use axum::http::StatusCode;
use axum::response::Json;
use rand::Rng;
use tracing::{info, warn};
use wire::{AugmentMode, PreprocessMode, TransformRequest, TransformResponse};

use crate::services;

/// `POST /preprocess` — tokenize, pad, or embed the submitted text.
pub async fn preprocess(
    Json(req): Json<TransformRequest>,
) -> Result<Json<TransformResponse>, StatusCode> {
    info!(mode = %req.dataset, "preprocessing text");
    Ok(Json(run_preprocess(&req)?))
}

/// `POST /augment` — synonym replacement or random insertion.
pub async fn augment(
    Json(req): Json<TransformRequest>,
) -> Result<Json<TransformResponse>, StatusCode> {
    info!(mode = %req.dataset, "augmenting text");
    let mut rng = rand::rng();
    Ok(Json(run_augment(&req, &mut rng)?))
}

fn run_preprocess(req: &TransformRequest) -> Result<TransformResponse, StatusCode> {
    let mode: PreprocessMode = req.dataset.parse().map_err(invalid_mode)?;
    Ok(response(&req.text, services::preprocess::apply(mode, &req.text)))
}

fn run_augment<R: Rng>(
    req: &TransformRequest,
    rng: &mut R,
) -> Result<TransformResponse, StatusCode> {
    let mode: AugmentMode = req.dataset.parse().map_err(invalid_mode)?;
    Ok(response(&req.text, services::augment::apply(mode, &req.text, rng)))
}

fn response(original: &str, processed: String) -> TransformResponse {
    TransformResponse { original_text: original.to_owned(), processed_text: processed }
}

fn invalid_mode(err: wire::ParseModeError) -> StatusCode {
    warn!(error = %err, "rejecting transform request");
    StatusCode::BAD_REQUEST
}
