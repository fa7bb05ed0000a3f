use super::*;

// =============================================================
// tokenize
// =============================================================

#[test]
fn tokenize_lowercases_and_splits_on_whitespace() {
    assert_eq!(tokenize("The Cat SAT"), vec!["the", "cat", "sat"]);
}

#[test]
fn tokenize_separates_punctuation() {
    assert_eq!(
        tokenize("Hello, world!"),
        vec!["hello", ",", "world", "!"]
    );
}

#[test]
fn tokenize_collapses_repeated_whitespace() {
    assert_eq!(tokenize("a   b\t\nc"), vec!["a", "b", "c"]);
}

#[test]
fn tokenize_empty_input_is_empty() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   ").is_empty());
}

#[test]
fn tokenize_splits_contractions_at_apostrophe() {
    assert_eq!(tokenize("don't"), vec!["don", "'", "t"]);
}

// =============================================================
// pad
// =============================================================

#[test]
fn pad_extends_short_sequences() {
    let tokens = pad(vec!["cat".to_owned(), "sat".to_owned()]);
    assert_eq!(tokens.len(), PAD_LENGTH);
    assert_eq!(tokens[0], "cat");
    assert_eq!(tokens[1], "sat");
    assert!(tokens[2..].iter().all(|t| t == PAD_TOKEN));
}

#[test]
fn pad_truncates_long_sequences() {
    let long: Vec<String> = (0..15).map(|i| format!("w{i}")).collect();
    let tokens = pad(long);
    assert_eq!(tokens.len(), PAD_LENGTH);
    assert_eq!(tokens.last().unwrap(), "w9");
}

#[test]
fn pad_exact_length_is_unchanged() {
    let exact: Vec<String> = (0..PAD_LENGTH).map(|i| format!("w{i}")).collect();
    assert_eq!(pad(exact.clone()), exact);
}

// =============================================================
// embed
// =============================================================

#[test]
fn embed_token_is_deterministic() {
    assert_eq!(embed_token("cat"), embed_token("cat"));
}

#[test]
fn embed_token_distinguishes_tokens() {
    assert_ne!(embed_token("cat"), embed_token("dog"));
}

#[test]
fn embed_token_values_are_bounded() {
    for value in embed_token("boundary") {
        assert!((-1.0..=1.0).contains(&value), "out of range: {value}");
    }
}

// =============================================================
// apply
// =============================================================

#[test]
fn apply_tokenize_joins_with_spaces() {
    assert_eq!(
        apply(wire::PreprocessMode::Tokenize, "The cat sat."),
        "the cat sat ."
    );
}

#[test]
fn apply_pad_renders_pad_tokens() {
    let out = apply(wire::PreprocessMode::Pad, "cat sat");
    assert_eq!(out.split(' ').count(), PAD_LENGTH);
    assert!(out.starts_with("cat sat <pad>"));
}

#[test]
fn apply_embed_renders_one_row_per_token() {
    let out = apply(wire::PreprocessMode::Embed, "cat sat");
    assert!(out.starts_with("[["));
    assert!(out.ends_with("]]"));
    // Two tokens, one bracketed row each inside the outer brackets.
    assert_eq!(out.matches("], [").count(), 1);
}

#[test]
fn apply_embed_of_empty_text_is_empty_list() {
    assert_eq!(apply(wire::PreprocessMode::Embed, ""), "[]");
}
