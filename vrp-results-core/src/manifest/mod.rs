//! Persistence and reconciliation of the observed result file manifest.

#[cfg(test)]
#[path = "../../tests/unit/manifest/manifest_test.rs"]
mod manifest_test;

use crate::sets::read_as_set;
use crate::utils::GenericResult;
use std::collections::BTreeSet;
use std::path::Path;

/// Name of the persisted manifest listing every result file ever observed.
pub const MANIFEST_FILE: &str = "all_list.txt";

/// Outcome of one manifest reconciliation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Files observed on disk but absent from the persisted manifest.
    pub added: BTreeSet<String>,
    /// The full manifest content after reconciliation.
    pub manifest: BTreeSet<String>,
    /// Whether the manifest had to be created from scratch.
    pub created: bool,
}

/// Reconciles the persisted manifest against the currently observed files. The manifest only
/// ever grows: observed files absent from it are reported and merged in, entries are never
/// removed. A shrinking manifest signals data loss and is left to manual investigation.
pub fn reconcile(path: &Path, observed: &BTreeSet<String>) -> GenericResult<ReconcileReport> {
    if !path.exists() {
        write_line_set(path, observed)?;
        return Ok(ReconcileReport { added: observed.clone(), manifest: observed.clone(), created: true });
    }

    let manifest = read_as_set(path)?;
    let added: BTreeSet<_> = observed.difference(&manifest).cloned().collect();
    if added.is_empty() {
        return Ok(ReconcileReport { added, manifest, created: false });
    }

    let merged: BTreeSet<_> = manifest.union(observed).cloned().collect();
    write_line_set(path, &merged)?;

    Ok(ReconcileReport { added, manifest: merged, created: false })
}

/// Compares a persisted derived file against its freshly recomputed content. An absent file
/// is created; a matching file is left alone; a differing file is left untouched and the
/// symmetric difference is returned for reporting.
pub fn check_against(
    path: &Path,
    recomputed: &BTreeSet<String>,
) -> GenericResult<Option<BTreeSet<String>>> {
    if !path.exists() {
        write_line_set(path, recomputed)?;
        return Ok(None);
    }

    let present = read_as_set(path)?;
    if present == *recomputed {
        Ok(None)
    } else {
        log::warn!("derived file '{}' is inconsistent with recomputed content", path.display());
        Ok(Some(present.symmetric_difference(recomputed).cloned().collect()))
    }
}

/// Writes the set as sorted, newline separated lines.
pub fn write_line_set(path: &Path, lines: &BTreeSet<String>) -> GenericResult<()> {
    std::fs::write(path, lines.iter().map(String::as_str).collect::<Vec<_>>().join("\n"))
        .map_err(|err| format!("cannot write '{}': {err}", path.display()).into())
}
