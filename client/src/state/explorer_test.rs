use super::*;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

// =============================================================
// Dataset list
// =============================================================

#[test]
fn apply_datasets_populates_in_server_order() {
    let mut state = ExplorerState::default();
    state.apply_datasets(names(&["ag_news", "imdb", "yelp"]));
    assert_eq!(state.datasets, names(&["ag_news", "imdb", "yelp"]));
}

#[test]
fn apply_datasets_twice_does_not_duplicate() {
    let mut state = ExplorerState::default();
    state.apply_datasets(names(&["ag_news", "imdb"]));
    state.apply_datasets(names(&["ag_news", "imdb"]));
    assert_eq!(state.datasets, names(&["ag_news", "imdb"]));
    assert_eq!(state.selected.as_deref(), Some("ag_news"));
}

#[test]
fn apply_datasets_selects_first_name() {
    let mut state = ExplorerState::default();
    state.apply_datasets(names(&["ag_news", "imdb"]));
    assert_eq!(state.selected.as_deref(), Some("ag_news"));
}

#[test]
fn apply_datasets_keeps_existing_selection() {
    let mut state = ExplorerState::default();
    state.select("imdb");
    state.apply_datasets(names(&["ag_news", "imdb"]));
    assert_eq!(state.selected.as_deref(), Some("imdb"));
}

#[test]
fn failed_dataset_fetch_leaves_list_unchanged() {
    let mut state = ExplorerState::default();
    state.record_error("datasets failed: 500");
    assert!(state.datasets.is_empty());
    assert_eq!(state.error.as_deref(), Some("datasets failed: 500"));
}

// =============================================================
// Responses and tokens
// =============================================================

#[test]
fn sample_response_lands_in_sample_slot() {
    let mut state = ExplorerState::default();
    let token = state.begin_request(RenderTarget::Sample);
    assert!(state.apply_response(RenderTarget::Sample, token, "hello".to_owned()));
    assert_eq!(state.sample, "hello");
    assert!(state.result.is_empty());
}

#[test]
fn result_response_lands_in_result_slot() {
    let mut state = ExplorerState::default();
    let token = state.begin_request(RenderTarget::Result);
    assert!(state.apply_response(RenderTarget::Result, token, "[cat][sat]".to_owned()));
    assert_eq!(state.result, "[cat][sat]");
}

#[test]
fn successful_response_clears_previous_error() {
    let mut state = ExplorerState::default();
    state.record_error("transient");
    let token = state.begin_request(RenderTarget::Result);
    assert!(state.apply_response(RenderTarget::Result, token, "ok".to_owned()));
    assert!(state.error.is_none());
}

#[test]
fn stale_response_is_dropped() {
    let mut state = ExplorerState::default();
    let first = state.begin_request(RenderTarget::Result);
    let second = state.begin_request(RenderTarget::Result);
    // Second request resolves first; then the first resolves late.
    assert!(state.apply_response(RenderTarget::Result, second, "newer".to_owned()));
    assert!(!state.apply_response(RenderTarget::Result, first, "older".to_owned()));
    assert_eq!(state.result, "newer");
}

#[test]
fn latest_issued_request_wins_regardless_of_arrival_order() {
    let mut state = ExplorerState::default();
    let first = state.begin_request(RenderTarget::Result);
    let second = state.begin_request(RenderTarget::Result);
    // Late arrival of the older response after the newer already landed.
    assert!(!state.apply_response(RenderTarget::Result, first, "older".to_owned()));
    assert!(state.apply_response(RenderTarget::Result, second, "newer".to_owned()));
    assert_eq!(state.result, "newer");
}

#[test]
fn targets_track_tokens_independently() {
    let mut state = ExplorerState::default();
    let sample_token = state.begin_request(RenderTarget::Sample);
    let _result_token = state.begin_request(RenderTarget::Result);
    assert!(state.apply_response(RenderTarget::Sample, sample_token, "s".to_owned()));
}

#[test]
fn stale_error_is_dropped() {
    let mut state = ExplorerState::default();
    let first = state.begin_request(RenderTarget::Sample);
    let second = state.begin_request(RenderTarget::Sample);
    assert!(state.apply_response(RenderTarget::Sample, second, "fresh".to_owned()));
    assert!(!state.apply_error(RenderTarget::Sample, first, "late failure"));
    assert!(state.error.is_none());
}

#[test]
fn current_error_is_recorded() {
    let mut state = ExplorerState::default();
    let token = state.begin_request(RenderTarget::Result);
    assert!(state.apply_error(RenderTarget::Result, token, "transform failed: 400"));
    assert_eq!(state.error.as_deref(), Some("transform failed: 400"));
}
