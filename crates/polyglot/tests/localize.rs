//! Integration tests for date, time and number localization.

use std::fs;

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use polyglot::{Backend, LocaleFormatter, LocaleStore, transliterate};
use tempfile::TempDir;

fn backend(files: &[(&str, &str)]) -> (TempDir, Backend) {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    let backend = Backend::load([dir.path().display().to_string()]).unwrap();
    (dir, backend)
}

fn general() -> (TempDir, Backend) {
    backend(&[("en.yml", "en:\n  hello: Hello\n"), ("ru.yml", "ru:\n  hello: Привет\n")])
}

fn epoch() -> DateTime<Utc> {
    Utc.timestamp_opt(0, 0).unwrap()
}

fn new_year() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
}

// =========================================================================
// Times
// =========================================================================

#[test]
fn time_default_format() {
    let (_dir, backend) = general();
    assert_eq!(
        backend.localize("en", epoch(), None).unwrap(),
        "Thu, 01 Jan 1970 00:00:00 +0000"
    );
}

#[test]
fn time_short_format() {
    let (_dir, backend) = general();
    assert_eq!(
        backend.localize("en", epoch(), Some("short")).unwrap(),
        "01 Jan 00:00"
    );
}

#[test]
fn time_full_format_uses_ordinal_day() {
    let (_dir, backend) = general();
    assert_eq!(
        backend.localize("en", epoch(), Some("full")).unwrap(),
        "1st of January, 1970 00:00"
    );
}

#[test]
fn time_keeps_its_offset() {
    let (_dir, backend) = general();
    let offset = FixedOffset::east_opt(3 * 3600).unwrap();
    let time = offset.with_ymd_and_hms(2024, 3, 22, 15, 4, 5).unwrap();
    assert_eq!(
        backend.localize("en", time, None).unwrap(),
        "Fri, 22 Mar 2024 15:04:05 +0300"
    );
}

#[test]
fn unknown_format_is_missing_translation() {
    let (_dir, backend) = general();
    let err = backend.localize("en", epoch(), Some("nope")).unwrap_err();
    assert_eq!(err.path, "time.formats.nope");
    assert_eq!(err.scope.as_deref(), Some("time.formats"));
}

// =========================================================================
// Dates
// =========================================================================

#[test]
fn date_default_format() {
    let (_dir, backend) = general();
    assert_eq!(backend.localize("en", new_year(), None).unwrap(), "1970-01-01");
}

#[test]
fn russian_date_default_format() {
    let (_dir, backend) = general();
    assert_eq!(backend.localize("ru", new_year(), None).unwrap(), "01.01.1970");
}

#[test]
fn russian_month_names() {
    let (_dir, backend) = general();
    let date = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
    assert_eq!(backend.localize("ru", date, Some("full")).unwrap(), "8 марта 2024");
}

#[test]
fn locale_files_override_formats_and_names() {
    let (_dir, backend) = backend(&[(
        "en.yml",
        "en:\n  date:\n    formats:\n      default: '%A, %-d. %B'\n      custom: '%j/%y'\n    \
         month_names: [~, Jan-uary, Feb, Mar, Apr, May, Jun, Jul, Aug, Sep, Oct, Nov, Dec]\n    \
         day_names: [Sun, Mon, Tue, Wed, Thursday!, Fri, Sat]\n",
    )]);
    assert_eq!(
        backend.localize("en", new_year(), None).unwrap(),
        "Thursday!, 1. Jan-uary"
    );
    assert_eq!(backend.localize("en", new_year(), Some("custom")).unwrap(), "001/70");
}

#[test]
fn twelve_hour_clock_and_meridian() {
    let (_dir, backend) = backend(&[(
        "en.yml",
        "en:\n  time:\n    formats:\n      clock: '%I:%M %p'\n",
    )]);
    let afternoon = Utc.with_ymd_and_hms(2024, 1, 1, 13, 30, 0).unwrap();
    let midnight = Utc.with_ymd_and_hms(2024, 1, 1, 0, 5, 0).unwrap();
    assert_eq!(backend.localize("en", afternoon, Some("clock")).unwrap(), "01:30 pm");
    assert_eq!(backend.localize("en", midnight, Some("clock")).unwrap(), "12:05 am");
}

#[test]
fn dialect_uses_base_language_rules() {
    let (_dir, backend) = backend(&[("de-CH.yml", "de-CH:\n  a: b\n")]);
    assert_eq!(backend.localize("de-CH", new_year(), None).unwrap(), "01.01.1970");
}

#[test]
fn base_language_file_beats_builtin_rules_for_dialect() {
    let (_dir, backend) = backend(&[
        ("de.yml", "de:\n  date:\n    formats:\n      default: '%Y/%m/%d'\n"),
        ("de-CH.yml", "de-CH:\n  a: b\n"),
    ]);
    assert_eq!(backend.localize("de", new_year(), None).unwrap(), "1970/01/01");
    assert_eq!(backend.localize("de-CH", new_year(), None).unwrap(), "1970/01/01");
    assert_eq!(
        backend.localize("de-CH", new_year(), Some("short")).unwrap(),
        backend.localize("de", new_year(), Some("short")).unwrap()
    );
}

// =========================================================================
// Numbers
// =========================================================================

#[test]
fn negative_float_uses_minus_sign_and_grouping() {
    let (_dir, backend) = general();
    assert_eq!(backend.localize("en", -5000.5, None).unwrap(), "\u{2212}5,000.5");
}

#[test]
fn integers_group_by_thousands() {
    let (_dir, backend) = general();
    assert_eq!(backend.localize("en", 1_234_567_i64, None).unwrap(), "1,234,567");
    assert_eq!(backend.localize("en", 999, None).unwrap(), "999");
}

#[test]
fn russian_number_symbols() {
    let (_dir, backend) = general();
    assert_eq!(
        backend.localize("ru", 1234.5, None).unwrap(),
        "1\u{a0}234,5"
    );
}

#[test]
fn number_symbols_from_locale_data() {
    let (_dir, backend) = backend(&[(
        "en.yml",
        "en:\n  number:\n    format:\n      delimiter: \"'\"\n      separator: ','\n",
    )]);
    assert_eq!(backend.localize("en", 12345.25, None).unwrap(), "12'345,25");
}

#[test]
fn formatter_works_on_bare_store() {
    let store = LocaleStore::from_yaml("en:\n  hello: Hello\n").unwrap();
    let chain = vec!["en".parse().unwrap()];
    let formatter = LocaleFormatter::new(&store, &chain);
    assert_eq!(
        formatter.localize(&new_year().into(), "long"),
        Some("January 01, 1970".to_string())
    );
}

// =========================================================================
// Transliteration
// =========================================================================

#[test]
fn transliterate_strips_accents() {
    let (_dir, backend) = general();
    assert_eq!(backend.transliterate("café"), "cafe");
    assert_eq!(transliterate("Ærøskøbing"), "Ærøskøbing");
}
