use wire::{AugmentMode, PreprocessMode};

use super::*;

#[test]
fn preprocess_kinds_target_the_preprocess_endpoint() {
    for mode in [PreprocessMode::Tokenize, PreprocessMode::Pad, PreprocessMode::Embed] {
        assert_eq!(TransformKind::Preprocess(mode).endpoint(), "/preprocess");
    }
}

#[test]
fn augment_kinds_target_the_augment_endpoint() {
    for mode in [AugmentMode::SynonymReplacement, AugmentMode::RandomInsertion] {
        assert_eq!(TransformKind::Augment(mode).endpoint(), "/augment");
    }
}

#[test]
fn tokenize_request_body_matches_wire_shape() {
    let req = TransformKind::Preprocess(PreprocessMode::Tokenize).request("cat sat");
    assert_eq!(
        serde_json::to_string(&req).unwrap(),
        r#"{"dataset":"tokenize","text":"cat sat"}"#
    );
}

#[test]
fn augment_request_carries_mode_string() {
    let req = TransformKind::Augment(AugmentMode::SynonymReplacement).request("a good film");
    assert_eq!(req.dataset, "synonym_replacement");
    assert_eq!(req.text, "a good film");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("datasets", 500), "datasets failed: 500");
    assert_eq!(request_failed_message("transform", 400), "transform failed: 400");
}
