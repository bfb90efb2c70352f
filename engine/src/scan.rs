use std::collections::HashSet;
use std::path::{Path, PathBuf};

use dupscan_types::Language;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::detect::DetectOptions;
use crate::EngineError;

/// Collect the files a detection run should parse.
///
/// A file survives when its extension maps to a requested language (any
/// language when none were requested), it matches no exclude glob, and it is
/// within the size limit. Hidden and ignore-filtered paths are skipped by the
/// walker. The result is sorted so runs are reproducible.
pub fn scan_files(options: &DetectOptions) -> Result<Vec<PathBuf>, EngineError> {
    if !options.root.exists() {
        return Err(EngineError::MissingRoot {
            path: options.root.clone(),
        });
    }

    let excludes = build_exclude_set(&options.excludes)?;
    let extensions = requested_extensions(&options.languages);

    let mut files = Vec::new();
    for entry in WalkBuilder::new(&options.root).build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("skipping unwalkable entry: {err}");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let path = entry.path();
        if !has_requested_extension(path, &extensions) || excludes.is_match(path) {
            continue;
        }

        match entry.metadata() {
            Ok(metadata) if metadata.len() <= options.max_file_size => {
                files.push(path.to_path_buf());
            }
            Ok(metadata) => {
                tracing::debug!(path = %path.display(), size = metadata.len(), "file over size limit");
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), "skipping, no metadata: {err}");
            }
        }
    }

    files.sort();
    Ok(files)
}

fn build_exclude_set(patterns: &[String]) -> Result<GlobSet, EngineError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| EngineError::ExcludePattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| EngineError::ExcludePattern {
        pattern: patterns.join(","),
        source,
    })
}

fn requested_extensions(languages: &[Language]) -> HashSet<&'static str> {
    let selected: &[Language] = if languages.is_empty() {
        &Language::ALL
    } else {
        languages
    };
    selected
        .iter()
        .flat_map(|language| language.extensions().iter().copied())
        .collect()
}

fn has_requested_extension(path: &Path, extensions: &HashSet<&'static str>) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.contains(ext))
}
