//! Generic set algebra over line sets read from plain files, unaware of benchmark semantics.

#[cfg(test)]
#[path = "../../tests/unit/sets/sets_test.rs"]
mod sets_test;

use crate::utils::GenericResult;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

/// Reads the file as the set of its trimmed, non empty lines.
pub fn read_as_set(path: &Path) -> GenericResult<BTreeSet<String>> {
    let content = std::fs::read_to_string(path)
        .map_err(|err| format!("cannot read '{}': {err}", path.display()))?;

    Ok(content.lines().map(str::trim).filter(|line| !line.is_empty()).map(String::from).collect())
}

/// The three pairwise disjoint parts of a two set comparison.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CompareReport {
    /// Elements only in the first set.
    pub only_in_first: BTreeSet<String>,
    /// Elements only in the second set.
    pub only_in_second: BTreeSet<String>,
    /// Elements in both sets.
    pub in_both: BTreeSet<String>,
}

/// Compares two sets into three pairwise disjoint parts whose union equals the union of both.
pub fn compare(first: &BTreeSet<String>, second: &BTreeSet<String>) -> CompareReport {
    CompareReport {
        only_in_first: first.difference(second).cloned().collect(),
        only_in_second: second.difference(first).cloned().collect(),
        in_both: first.intersection(second).cloned().collect(),
    }
}

/// Returns the union of all sets.
pub fn union_all(sets: &[BTreeSet<String>]) -> BTreeSet<String> {
    sets.iter().flat_map(|set| set.iter().cloned()).collect()
}

/// Returns the intersection of all sets; the intersection of no sets is empty.
pub fn intersect_all(sets: &[BTreeSet<String>]) -> BTreeSet<String> {
    match sets.split_first() {
        Some((first, rest)) => {
            rest.iter().fold(first.clone(), |acc, set| acc.intersection(set).cloned().collect())
        }
        None => BTreeSet::default(),
    }
}

/// One step of an order sensitive progression: the elements of a source which were not seen
/// in any earlier source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressStep {
    /// Label of the source, usually its file name.
    pub source: String,
    /// Elements first seen in this source.
    pub novel: BTreeSet<String>,
}

/// Walks the labeled sets in order and reports, for each, only the elements not seen before.
/// The reported sets are pairwise disjoint and their union equals the union of all inputs.
pub fn progress(sources: &[(String, BTreeSet<String>)]) -> Vec<ProgressStep> {
    let mut total = BTreeSet::new();

    sources
        .iter()
        .map(|(source, set)| {
            let novel: BTreeSet<_> = set.difference(&total).cloned().collect();
            total.extend(novel.iter().cloned());
            ProgressStep { source: source.clone(), novel }
        })
        .collect()
}
