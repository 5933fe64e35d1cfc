//! Merging reqstool's files into Poetry's include list

use crate::paths::{annotations_path, path_string, MANIFEST_FILE_NAME};
use reqstool_config::{IncludeEntry, ReqstoolConfig};
use std::collections::HashSet;

/// Entries the source distribution needs for reqstool to find its data
///
/// Order: the manifest, the annotations file, the dataset directory, then one
/// entry per test result pattern. All are sdist-only.
pub fn required_includes(config: &ReqstoolConfig) -> Vec<IncludeEntry> {
    let mut entries = vec![
        IncludeEntry::sdist(MANIFEST_FILE_NAME),
        IncludeEntry::sdist(path_string(&annotations_path(config))),
        IncludeEntry::sdist(path_string(&config.dataset_directory)),
    ];
    entries.extend(config.test_results.iter().cloned().map(IncludeEntry::sdist));
    entries
}

/// Append each new entry whose path is not already included.
///
/// Existing entries keep their position and shape; new entries keep their
/// relative order. Running it again on its own output changes nothing.
pub fn merge(existing: Vec<IncludeEntry>, new: Vec<IncludeEntry>) -> Vec<IncludeEntry> {
    let mut seen: HashSet<String> = existing.iter().map(|e| e.path().to_string()).collect();
    let mut merged = existing;
    for entry in new {
        if seen.insert(entry.path().to_string()) {
            merged.push(entry);
        }
    }
    merged
}
