// Messager - tests/e2e_catalog.rs
//
// End-to-end tests for catalog loading, resolution, and emission.
//
// These tests exercise the real filesystem and the public library surface
// only: a catalog file on disk, a MessageCatalog built from it, and a
// MemorySink standing in for the host's logger.

use messager::{CatalogError, LoadWarning, MemorySink, MessageCatalog, Severity};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to an on-disk fixture file.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_fixture() -> (MessageCatalog, MemorySink) {
    let sink = MemorySink::new();
    let catalog =
        MessageCatalog::load(sink.clone(), fixture("messages.txt")).expect("load fixture");
    (catalog, sink)
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn e2e_fixture_loads_every_entry_line() {
    let (catalog, sink) = load_fixture();

    assert_eq!(
        catalog.keys(),
        vec![
            "blank.message",
            "duplicate",
            "farewell",
            "greeting",
            "indented.key",
            "plugin.disabled",
            "plugin.enabled",
            "server.url",
            "spacer",
        ]
    );
    assert!(sink.is_empty(), "clean file should forward no warnings");
}

#[test]
fn e2e_values_trimmed_and_split_on_first_colon() {
    let (catalog, _) = load_fixture();
    assert_eq!(catalog.get("indented.key"), Some("trimmed value"));
    assert_eq!(catalog.get("server.url"), Some("http://localhost:8080/status"));
    assert_eq!(catalog.get("duplicate"), Some("second"));
}

#[test]
fn e2e_comments_with_colons_not_loaded() {
    let (catalog, _) = load_fixture();
    assert!(catalog
        .keys()
        .iter()
        .all(|k| !k.starts_with('#')), "{:?}", catalog.keys());
}

#[test]
fn e2e_missing_file_returns_not_found() {
    let sink = MemorySink::new();
    let result = MessageCatalog::load(sink.clone(), fixture("does_not_exist.txt"));
    assert!(
        matches!(result, Err(CatalogError::NotFound { .. })),
        "expected NotFound, got {result:?}"
    );
    assert!(sink.is_empty());
}

#[test]
fn e2e_failed_reinit_leaves_catalog_empty() {
    let (mut catalog, _) = load_fixture();
    assert!(!catalog.is_empty());

    let dir = tempfile::tempdir().unwrap();
    let err = catalog.init(dir.path().join("gone.txt")).unwrap_err();
    assert!(err.to_string().contains("gone.txt"));
    assert!(catalog.is_empty());
    assert_eq!(catalog.get("greeting"), None);
    assert_eq!(catalog.resolve_plain("greeting"), "");
}

#[test]
fn e2e_malformed_lines_reported_and_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.txt");
    fs::write(
        &path,
        b"first: one\n# bad comment \xFF: ignored\nbroken: \xFF\xFF\nsecond: two\n",
    )
    .unwrap();

    let sink = MemorySink::new();
    let mut catalog = MessageCatalog::new(sink.clone());
    let report = catalog.init(&path).unwrap();

    assert_eq!(report.entries_loaded, 2);
    assert_eq!(report.warnings.len(), 1);
    assert!(matches!(
        report.warnings[0],
        LoadWarning::MalformedLine { line_number: 3, .. }
    ));

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].0, Severity::Warning);
}

// =============================================================================
// Resolution and emission
// =============================================================================

#[test]
fn e2e_greeting_scenario() {
    let (catalog, _) = load_fixture();
    let mut replacements = HashMap::new();
    replacements.insert("&User&".to_string(), "Alice".to_string());

    assert_eq!(
        catalog.resolve("greeting", &replacements),
        "Hello\u{00A7}World, Alice"
    );
}

#[test]
fn e2e_multiple_replacements() {
    let (catalog, _) = load_fixture();
    assert_eq!(
        catalog.resolve("farewell", [("&User&", "Bob"), ("&When&", "tomorrow")]),
        "Goodbye, Bob. See you tomorrow."
    );
}

#[test]
fn e2e_emit_uses_requested_severity() {
    let (catalog, sink) = load_fixture();

    catalog.info_with("plugin.enabled", [("&Name&", "Maps")]);
    catalog.severe_with("plugin.disabled", [("&Name&", "Maps")]);

    assert_eq!(
        sink.records(),
        vec![
            (Severity::Info, "§aPlugin Maps enabled".to_string()),
            (Severity::Severe, "§cPlugin Maps disabled".to_string()),
        ]
    );
}

#[test]
fn e2e_blank_and_unknown_messages_never_reach_sink() {
    let (catalog, sink) = load_fixture();

    catalog.info("blank.message");
    catalog.severe("spacer");
    catalog.info("no.such.key");
    catalog.emit("greeting", [("Hello\u{00A7}World, &User&", "  ")], Severity::Severe);

    assert!(sink.is_empty(), "got {:?}", sink.records());
}

#[test]
fn e2e_reload_reflects_edits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("messages.txt");
    fs::write(&path, "motd: Welcome\nold: remove me\n").unwrap();

    let sink = MemorySink::new();
    let mut catalog = MessageCatalog::load(sink.clone(), &path).unwrap();
    assert_eq!(catalog.get("motd"), Some("Welcome"));

    fs::write(&path, "motd: Welcome back\n").unwrap();
    let report = catalog.reload().unwrap();

    assert!(report.is_clean());
    assert_eq!(catalog.get("motd"), Some("Welcome back"));
    assert_eq!(catalog.get("old"), None);
}
