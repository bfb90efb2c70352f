//! End-to-end detection over the committed language fixtures.

use dupscan_engine::detect_duplicates;
use dupscan_types::Language;

use crate::common::{fixture_dir, options_for, FIXTURE_LANGUAGES};

#[test]
fn every_language_fixture_reports_its_clone_pair() {
    for language in FIXTURE_LANGUAGES {
        let report = detect_duplicates(&options_for(fixture_dir(language)))
            .unwrap_or_else(|e| panic!("detection over {language} fixtures failed: {e}"));

        assert!(
            !report.is_empty(),
            "expected duplicates in {language} fixtures"
        );
        assert!(
            report
                .records
                .iter()
                .any(|group| group.blocks.len() >= 2),
            "expected a group with at least two blocks for {language}"
        );
        assert!(report.summary.duplicate_blocks >= 2);
        assert!(report.summary.duplicate_lines > 0);
        assert!(report.summary.duplicate_files >= 1);
    }
}

#[test]
fn rust_fixtures_group_across_files_and_suppress_nested_blocks() {
    let report = detect_duplicates(&options_for(fixture_dir("rust"))).expect("detection runs");

    // Two routines in greeting_pair.rs plus one in greeting_extra.rs, all
    // structurally identical. Everything nested inside them (body, loop,
    // branch) must be folded into the outermost group.
    assert_eq!(report.records.len(), 1);
    let group = &report.records[0];
    assert_eq!(group.blocks.len(), 3);
    assert_eq!(group.line_count, 11);

    let mut files: Vec<&str> = group
        .blocks
        .iter()
        .map(|block| block.source_file.as_str())
        .collect();
    files.dedup();
    assert_eq!(files.len(), 2, "pair file and extra file");

    assert_eq!(report.summary.duplicate_blocks, 3);
    assert_eq!(report.summary.duplicate_lines, 33);
    assert_eq!(report.summary.duplicate_files, 2);
}

#[test]
fn renamed_identifiers_do_not_hide_the_clone() {
    // greeting_extra.rs names its routine differently from greeting_pair.rs;
    // it must land in the same group regardless.
    let report = detect_duplicates(&options_for(fixture_dir("rust"))).expect("detection runs");
    let group = &report.records[0];
    assert!(group
        .blocks
        .iter()
        .any(|block| block.source_file.ends_with("greeting_extra.rs")));
}

#[test]
fn high_threshold_silences_the_fixtures() {
    let mut options = options_for(fixture_dir("rust"));
    options.min_lines = 100;
    let report = detect_duplicates(&options).expect("detection runs");
    assert!(report.is_empty());
    assert_eq!(report.summary.duplicate_blocks, 0);
    assert_eq!(report.summary.duplicate_lines, 0);
    assert_eq!(report.summary.duplicate_files, 0);
}

#[test]
fn excludes_remove_every_candidate() {
    let mut options = options_for(fixture_dir("rust"));
    options.excludes = vec!["**/*.rs".to_string()];
    let report = detect_duplicates(&options).expect("detection runs");
    assert!(report.is_empty());
}

#[test]
fn language_filter_limits_detection() {
    let mut options = options_for(fixture_dir("rust"));
    options.languages = vec![Language::Python];
    let report = detect_duplicates(&options).expect("detection runs");
    assert!(report.is_empty(), "no python files under the rust fixtures");
}

#[test]
fn empty_tree_yields_the_empty_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let report = detect_duplicates(&options_for(dir.path())).expect("detection runs");
    assert!(report.is_empty());
    assert_eq!(report.summary.duplicate_blocks, 0);
}

#[test]
fn unreadable_file_is_skipped_not_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    // Not valid UTF-8, so reading it as source fails and the file is skipped.
    std::fs::write(dir.path().join("binary.rs"), [0xff, 0xfe, 0x00, 0x80]).unwrap();
    std::fs::copy(
        fixture_dir("rust").join("greeting_pair.rs"),
        dir.path().join("greeting_pair.rs"),
    )
    .unwrap();

    let report = detect_duplicates(&options_for(dir.path())).expect("detection still runs");
    assert!(!report.is_empty(), "the healthy file still yields its pair");
}

#[test]
fn runs_are_deterministic() {
    let options = options_for(fixture_dir("rust"));
    let first = detect_duplicates(&options).expect("first run");
    let second = detect_duplicates(&options).expect("second run");
    assert_eq!(first, second);
}
