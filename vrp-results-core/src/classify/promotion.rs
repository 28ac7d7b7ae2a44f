#[cfg(test)]
#[path = "../../tests/unit/classify/promotion_test.rs"]
mod promotion_test;

use crate::naming::{InstanceName, instance_name_of};
use crate::utils::GenericResult;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Name of the subdirectory which holds promoted best quality results.
pub const BEST_RESULTS_DIR: &str = "100s";

lazy_static! {
    static ref FULLY_OPTIMAL: Regex =
        Regex::new(r"^[^-]+-100\.0-").expect("invalid promotion pattern");
}

/// A planned relocation of one result file into the best results subdirectory.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Promotion {
    /// Current file location.
    pub from: PathBuf,
    /// Destination inside the best results subdirectory.
    pub to: PathBuf,
}

/// Plans the promotion of best quality result files from the given directory into
/// [`BEST_RESULTS_DIR`]. Companion files share the encoded name and are planned alongside.
/// Planning touches no files; pass the plan to [`execute_promotions`]. The move is one way:
/// once promoted, a file is no longer present to be planned again.
pub fn plan_promotions(dir: &Path) -> GenericResult<Vec<Promotion>> {
    let best_dir = dir.join(BEST_RESULTS_DIR);
    let mut plans = Vec::default();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };

        if FULLY_OPTIMAL.is_match(name) {
            plans.push(Promotion { from: entry.path(), to: best_dir.join(name) });
        }
    }

    plans.sort();
    Ok(plans)
}

/// Moves the planned files into the best results subdirectory.
pub fn execute_promotions(plans: &[Promotion]) -> GenericResult<()> {
    for plan in plans {
        std::fs::rename(&plan.from, &plan.to).map_err(|err| {
            format!("cannot move '{}' to '{}': {err}", plan.from.display(), plan.to.display())
        })?;
    }

    Ok(())
}

/// Plans the deletion of medium quality duplicate result files: for every instance, all its
/// `*.p` files in the directory except the first and the last in name order. Deletion is
/// destructive and must be gated by an explicit confirmation at execution time.
pub fn plan_medium_deletions(
    dir: &Path,
    instances: &BTreeSet<InstanceName>,
) -> GenericResult<Vec<PathBuf>> {
    let mut by_instance = BTreeMap::<InstanceName, Vec<(String, PathBuf)>>::default();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if !name.ends_with(".p") {
            continue;
        }

        let instance = instance_name_of(name);
        if instances.contains(&instance) {
            by_instance.entry(instance).or_default().push((name.to_string(), entry.path()));
        }
    }

    let mut doomed = Vec::default();
    for (_, mut files) in by_instance {
        files.sort();
        if files.len() > 2 {
            doomed.extend(files.drain(1..files.len() - 1).map(|(_, path)| path));
        }
    }

    Ok(doomed)
}

/// Deletes the planned files if the injected confirmation agrees, returning whether the batch
/// ran. Any non affirmative answer cancels the whole batch: deletion is all or nothing per
/// invocation, never per file.
pub fn execute_deletions(
    doomed: &[PathBuf],
    confirm: impl FnOnce() -> bool,
) -> GenericResult<bool> {
    if doomed.is_empty() || !confirm() {
        return Ok(false);
    }

    for path in doomed {
        log::info!("removing '{}'", path.display());
        std::fs::remove_file(path)
            .map_err(|err| format!("cannot remove '{}': {err}", path.display()))?;
    }

    Ok(true)
}
