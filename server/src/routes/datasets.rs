//! Dataset listing and sample fetch routes.

#[cfg(test)]
#[path = "datasets_test.rs"]
mod datasets_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use tracing::info;
use wire::{DatasetList, SampleRequest, SampleResponse};

use crate::services::corpus::{CorpusError, CorpusRegistry};
use crate::state::AppState;

/// `GET /datasets` — dataset names in registry order.
pub async fn list_datasets(State(state): State<AppState>) -> Json<DatasetList> {
    info!("listing datasets");
    Json(DatasetList { datasets: state.corpus.list() })
}

/// `POST /fetch_sample` — first sample of the requested dataset.
pub async fn fetch_sample(
    State(state): State<AppState>,
    Json(req): Json<SampleRequest>,
) -> Result<Json<SampleResponse>, StatusCode> {
    info!(dataset = %req.dataset, "fetching sample");
    let response = sample_response(&state.corpus, &req.dataset)?;
    Ok(Json(response))
}

fn sample_response(
    corpus: &CorpusRegistry,
    dataset: &str,
) -> Result<SampleResponse, StatusCode> {
    let text = corpus.sample(dataset).map_err(corpus_error_to_status)?;
    Ok(SampleResponse { text: text.to_owned() })
}

fn corpus_error_to_status(err: CorpusError) -> StatusCode {
    match err {
        CorpusError::NotFound(_) => StatusCode::NOT_FOUND,
        CorpusError::Empty(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
