use super::*;

fn small_registry() -> CorpusRegistry {
    let mut registry = CorpusRegistry::default();
    registry.insert("alpha", &["first alpha sample", "second alpha sample"]);
    registry.insert("beta", &["only beta sample"]);
    registry
}

#[test]
fn list_preserves_registration_order() {
    let registry = small_registry();
    assert_eq!(registry.list(), vec!["alpha".to_owned(), "beta".to_owned()]);
}

#[test]
fn sample_returns_first_entry() {
    let registry = small_registry();
    assert_eq!(registry.sample("alpha").unwrap(), "first alpha sample");
}

#[test]
fn sample_unknown_dataset_is_not_found() {
    let registry = small_registry();
    let err = registry.sample("gamma").unwrap_err();
    assert!(matches!(err, CorpusError::NotFound(ref name) if name == "gamma"));
}

#[test]
fn sample_empty_dataset_is_empty_error() {
    let mut registry = CorpusRegistry::default();
    registry.insert("hollow", &[]);
    let err = registry.sample("hollow").unwrap_err();
    assert!(matches!(err, CorpusError::Empty(ref name) if name == "hollow"));
}

#[test]
fn insert_replaces_in_place_without_reordering() {
    let mut registry = small_registry();
    registry.insert("alpha", &["replacement"]);
    assert_eq!(registry.list(), vec!["alpha".to_owned(), "beta".to_owned()]);
    assert_eq!(registry.sample("alpha").unwrap(), "replacement");
}

#[test]
fn builtin_registry_has_stable_listing() {
    let registry = CorpusRegistry::builtin();
    assert_eq!(registry.list(), vec!["ag_news".to_owned(), "imdb".to_owned()]);
    assert!(registry.sample("ag_news").is_ok());
    assert!(registry.sample("imdb").is_ok());
}
