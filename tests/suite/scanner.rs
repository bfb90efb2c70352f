//! Scanning behavior over the committed fixtures.

use dupscan_engine::scan_files;
use dupscan_types::Language;

use crate::common::{fixture_dir, fixtures_root, options_for, FIXTURE_LANGUAGES};

#[test]
fn full_fixture_tree_is_discovered() {
    let files = scan_files(&options_for(fixtures_root())).expect("scan succeeds");
    // One pair file per language, plus the extra rust file.
    assert_eq!(files.len(), FIXTURE_LANGUAGES.len() + 1);
}

#[test]
fn language_filter_selects_one_directory() {
    let mut options = options_for(fixtures_root());
    options.languages = vec![Language::Rust];
    let files = scan_files(&options).expect("scan succeeds");
    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| f.extension().unwrap() == "rs"));
}

#[test]
fn scan_results_are_sorted() {
    let files = scan_files(&options_for(fixtures_root())).expect("scan succeeds");
    let mut sorted = files.clone();
    sorted.sort();
    assert_eq!(files, sorted);
}

#[test]
fn single_file_root_passes_the_same_filters() {
    let pair = fixture_dir("rust").join("greeting_pair.rs");
    let files = scan_files(&options_for(&pair)).expect("scan succeeds");
    assert_eq!(files, vec![pair]);

    let mut options = options_for(fixture_dir("rust").join("greeting_pair.rs"));
    options.excludes = vec!["**/*.rs".to_string()];
    let files = scan_files(&options).expect("scan succeeds");
    assert!(files.is_empty());
}
