//! Aggregation of result files into per instance solution histories.

#[cfg(test)]
#[path = "../../tests/unit/aggregate/scan_test.rs"]
mod scan_test;

use crate::naming::{self, InstanceName};
use crate::utils::{Float, GenericResult, compare_floats};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use walkdir::WalkDir;

/// Solution histories per instance: achieved `(route count, distance)` pairs, ascending by
/// `(k, dist)`, so that the first element of a history is the best result of the scan.
pub type InstanceHistories = BTreeMap<InstanceName, Vec<(usize, Float)>>;

/// Recursively scans the directory tree for result files and groups the decoded results by
/// instance name. Files which do not match the result name grammar are skipped silently. A
/// file whose encoded span was already seen is a physical duplicate: it is reported and
/// skipped, the first occurrence wins.
pub fn scan_solutions(root: &Path) -> GenericResult<InstanceHistories> {
    let mut histories = InstanceHistories::default();
    let mut seen = BTreeSet::<String>::default();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(filename) = entry.file_name().to_str() else { continue };
        let Some((span, record)) = naming::decode_spanned(filename) else { continue };

        if !seen.insert(span.to_string()) {
            log::warn!("duplicate result '{span}' at '{}'", entry.path().display());
            continue;
        }

        log::debug!("found result for '{}' in '{filename}'", record.instance);
        histories.entry(record.instance).or_default().push((record.k, record.dist));
    }

    histories
        .values_mut()
        .for_each(|results| results.sort_by(|a, b| a.0.cmp(&b.0).then(compare_floats(a.1, b.1))));

    Ok(histories)
}
