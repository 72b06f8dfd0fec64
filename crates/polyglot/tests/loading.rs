//! Integration tests for load paths, reloading and store fingerprints.

use std::fs;

use polyglot::{Backend, Entry, LoadError, LocaleStore, PluralKey, TranslateOptions};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path.display().to_string()
}

// =========================================================================
// Load paths
// =========================================================================

#[test]
fn loads_plain_file_paths() {
    let dir = TempDir::new().unwrap();
    let en = write(&dir, "en.yml", "en:\n  hello: Hello\n");
    let backend = Backend::load([en]).unwrap();
    assert_eq!(
        backend
            .translate("en", "hello", &TranslateOptions::default())
            .unwrap(),
        "Hello"
    );
}

#[test]
fn loads_glob_patterns_in_sorted_order() {
    let dir = TempDir::new().unwrap();
    write(&dir, "general/a.yml", "en:\n  word: first\n");
    write(&dir, "general/b.yml", "en:\n  word: second\n");
    let pattern = format!("{}/general/*.yml", dir.path().display());
    let backend = Backend::load([pattern]).unwrap();
    assert_eq!(backend.snapshot().files().len(), 2);
    assert_eq!(
        backend
            .translate("en", "word", &TranslateOptions::default())
            .unwrap(),
        "second"
    );
}

#[test]
fn later_files_merge_into_earlier_ones() {
    let dir = TempDir::new().unwrap();
    let base = write(&dir, "base.yml", "en:\n  in:\n    a: A\n    b: B\n");
    let patch = write(&dir, "patch.yml", "en:\n  in:\n    b: Patched\n    c: C\n");
    let backend = Backend::load([base, patch]).unwrap();
    let result = backend
        .translate("en", "in", &TranslateOptions::default())
        .unwrap();
    let map = result.as_map().unwrap();
    assert_eq!(map["a"], "A");
    assert_eq!(map["b"], "Patched");
    assert_eq!(map["c"], "C");
}

#[test]
fn loads_json_files() {
    let dir = TempDir::new().unwrap();
    let json = write(
        &dir,
        "en.json",
        r#"{"en": {"users": {"one": "1 user", "other": "%{count} users"}}}"#,
    );
    let backend = Backend::load([json]).unwrap();
    assert_eq!(
        backend
            .translate("en", "users", &TranslateOptions::with_count(3))
            .unwrap(),
        "3 users"
    );
}

#[test]
fn rails_and_tagged_plurals_load_to_the_same_node() {
    let rails = LocaleStore::from_yaml("en:\n  n:\n    zero: none\n    one: one\n    few: few\n    other: many\n").unwrap();
    let tagged = LocaleStore::from_yaml("en:\n  n: !pl\n    0: none\n    1: one\n    2: few\n    n: many\n").unwrap();
    let en = "en".parse().unwrap();
    assert_eq!(rails.root(&en), tagged.root(&en));
    assert_eq!(rails.fingerprint(), tagged.fingerprint());

    let Some(Entry::Plural(forms)) = rails.root(&en).unwrap().get("n") else {
        panic!("expected plural node");
    };
    assert_eq!(forms.get(PluralKey::Exact(2)), Some("few"));
    assert_eq!(forms.get(PluralKey::Other), Some("many"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.yml").display().to_string();
    assert!(matches!(Backend::load([path]), Err(LoadError::Io { .. })));
}

#[test]
fn malformed_yaml_reports_location() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "en.yml", "en:\n  a: [unclosed\n");
    match Backend::load([path.clone()]) {
        Err(err @ LoadError::Parse { .. }) => assert!(err.to_string().starts_with(&path)),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn invalid_top_level_locale_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "bad.yml", "not a locale!:\n  a: b\n");
    assert!(matches!(
        Backend::load([path]),
        Err(LoadError::InvalidLocale { .. })
    ));
}

// =========================================================================
// Reloading
// =========================================================================

#[test]
fn reload_picks_up_pushed_load_path() {
    let dir = TempDir::new().unwrap();
    let general = write(&dir, "general/en.yml", "en:\n  in:\n    default: Default\n");
    let other = write(&dir, "other/en.yml", "en:\n  other: Other\n");

    let mut backend = Backend::load([general]).unwrap();
    assert!(backend.translate("en", "other", &TranslateOptions::default()).is_err());

    backend.push_load_path(other);
    assert!(backend.reload().unwrap());
    assert_eq!(
        backend
            .translate("en", "other", &TranslateOptions::default())
            .unwrap(),
        "Other"
    );
}

#[test]
fn fingerprint_changes_only_with_content() {
    let dir = TempDir::new().unwrap();
    let en = write(&dir, "en.yml", "en:\n  hello: Hello\n");
    let backend = Backend::load([en.clone()]).unwrap();
    let before = backend.fingerprint();

    assert!(!backend.reload().unwrap());
    assert_eq!(backend.fingerprint(), before);

    fs::write(&en, "en:\n  hello: Hi\n").unwrap();
    assert!(backend.reload().unwrap());
    assert_ne!(backend.fingerprint(), before);
}

#[test]
fn fingerprint_ignores_file_layout() {
    let dir = TempDir::new().unwrap();
    let single = write(&dir, "single/en.yml", "en:\n  a: A\n  b: B\n");
    let first = write(&dir, "split/a.yml", "en:\n  a: A\n");
    let second = write(&dir, "split/b.yml", "en:\n  b: B\n");
    let one = Backend::load([single]).unwrap();
    let two = Backend::load([first, second]).unwrap();
    assert_eq!(one.fingerprint(), two.fingerprint());
}

#[test]
fn failed_reload_keeps_previous_snapshot() {
    let dir = TempDir::new().unwrap();
    let en = write(&dir, "en.yml", "en:\n  hello: Hello\n");
    let mut backend = Backend::load([en]).unwrap();
    let before = backend.fingerprint();

    backend.push_load_path(dir.path().join("absent.yml").display().to_string());
    assert!(backend.reload().is_err());
    assert_eq!(backend.fingerprint(), before);
    assert_eq!(
        backend
            .translate("en", "hello", &TranslateOptions::default())
            .unwrap(),
        "Hello"
    );
}

#[test]
fn snapshots_survive_reload() {
    let dir = TempDir::new().unwrap();
    let en = write(&dir, "en.yml", "en:\n  hello: Hello\n");
    let backend = Backend::load([en.clone()]).unwrap();
    let old = backend.snapshot();

    fs::write(&en, "en:\n  hello: Hi\n").unwrap();
    backend.reload().unwrap();

    let tag = "en".parse().unwrap();
    assert_eq!(old.root(&tag).unwrap()["hello"], Entry::text("Hello"));
    assert_eq!(backend.snapshot().root(&tag).unwrap()["hello"], Entry::text("Hi"));
}

#[test]
fn set_load_path_replaces_entries() {
    let dir = TempDir::new().unwrap();
    let en = write(&dir, "en.yml", "en:\n  hello: Hello\n");
    let ru = write(&dir, "ru.yml", "ru:\n  hello: Привет\n");
    let mut backend = Backend::load([en]).unwrap();
    backend.set_load_path(vec![ru.clone()]);
    assert_eq!(backend.load_path(), [ru]);
    backend.reload().unwrap();
    let locales: Vec<String> = backend
        .available_locales()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(locales, vec!["ru"]);
}

// =========================================================================
// Coverage
// =========================================================================

#[test]
fn missing_keys_lists_untranslated_paths() {
    let dir = TempDir::new().unwrap();
    let en = write(
        &dir,
        "en.yml",
        "en:\n  a: A\n  in:\n    b: B\n    c: C\n  users:\n    one: one\n    other: many\n",
    );
    let ru = write(&dir, "ru.yml", "ru:\n  a: А\n  in:\n    c: В\n");
    let backend = Backend::load([en, ru]).unwrap();
    assert_eq!(backend.missing_keys("en", "ru"), vec!["in.b", "users"]);
    assert!(backend.missing_keys("ru", "en").is_empty());
    assert_eq!(backend.missing_keys("en", "fr").len(), 4);
    assert_eq!(backend.keys("en"), vec!["a", "in.b", "in.c", "users"]);
}
