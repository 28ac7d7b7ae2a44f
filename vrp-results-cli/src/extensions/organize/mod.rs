//! The maintenance routine: promote best results, reconcile the manifest, classify the
//! benchmark instances and persist the derived instance lists.
//!
//! The routine mutates the working directory (promotion moves, optional deletion of medium
//! quality duplicates) and holds no lock: callers must serialize invocations per directory.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/organize_test.rs"]
mod organize_test;

use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;
use vrp_results_core::classify::{
    BEST_RESULTS_DIR, ClassificationSets, classify, execute_deletions, execute_promotions,
    plan_medium_deletions, plan_promotions,
};
use vrp_results_core::manifest::{MANIFEST_FILE, check_against, reconcile};
use vrp_results_core::reporting::{format_grouped, write_benchmark_report};
use vrp_results_core::utils::GenericResult;

/// Derived file with instances never solved optimally.
const NEVER_FILE: &str = "never.txt";
/// Derived file with every attempted instance.
const BAD_FILE: &str = "bad.txt";
/// Derived file with promoted instances, kept in the best results subdirectory.
const GOOD_FILE: &str = "good.txt";
/// Derived file with instances only ever solved optimally, kept in the best results
/// subdirectory.
const ALWAYS_FILE: &str = "always.txt";

/// Runs the maintenance routine in the given directory and returns the classification.
/// Destructive deletion of medium quality duplicates is gated by the injected confirmation;
/// any non affirmative answer skips the whole deletion batch.
pub fn run_organize(
    dir: &Path,
    writer: &mut dyn Write,
    confirm: impl FnOnce() -> bool,
) -> GenericResult<ClassificationSets> {
    let best_dir = dir.join(BEST_RESULTS_DIR);

    // no nested best results directory when the routine runs inside one
    let is_best_dir = dir.file_name().is_some_and(|name| name == BEST_RESULTS_DIR);
    if !best_dir.exists() && !is_best_dir {
        writeln!(writer, "Creating directory {BEST_RESULTS_DIR} (best-k results)")?;
        std::fs::create_dir_all(&best_dir)?;
    } else {
        writeln!(writer, "Directory {BEST_RESULTS_DIR} already present")?;
    }

    let promotions = plan_promotions(dir)?;
    if promotions.is_empty() {
        writeln!(writer, "No best-k results found here.")?;
    } else {
        writeln!(writer, "Moving {} best-k results to {BEST_RESULTS_DIR}:", promotions.len())?;
        for promotion in &promotions {
            writeln!(writer, "{}", promotion.from.display())?;
        }
        execute_promotions(&promotions)?;
    }

    let present = list_result_files(dir)?;
    let report = reconcile(&dir.join(MANIFEST_FILE), &present)?;
    if !report.created && !report.added.is_empty() {
        writeln!(writer, "{MANIFEST_FILE} missing files:")?;
        writeln!(writer, "{}", format_grouped(&report.added))?;
    }

    let promoted = list_result_files(&best_dir)?;
    let classification = classify(&report.manifest, &promoted);

    writeln!(writer, "\nBad results:")?;
    write_benchmark_report(writer, &classification.bad)?;
    writeln!(writer, "\nGood results:")?;
    write_benchmark_report(writer, &classification.good)?;
    if !classification.inconsistent.is_empty() {
        writeln!(writer, "\nInconsistent results (both promoted and not):")?;
        writeln!(writer, "{}", format_grouped(&classification.inconsistent))?;
    }

    // medium quality duplicates pile up quickly; offer the cleanup once they dominate
    if present.len() > 2 * classification.bad.len() {
        let doomed = plan_medium_deletions(dir, &classification.bad)?;
        writer.flush()?;
        if execute_deletions(&doomed, confirm)? {
            writeln!(writer, "Deleted {} medium quality files.", doomed.len())?;
        }
    }

    check_derived(&dir.join(NEVER_FILE), &classification.never, writer)?;
    check_derived(&dir.join(BAD_FILE), &classification.bad, writer)?;
    check_derived(&best_dir.join(GOOD_FILE), &classification.good, writer)?;
    check_derived(&best_dir.join(ALWAYS_FILE), &classification.always, writer)?;

    Ok(classification)
}

fn check_derived(
    path: &Path,
    recomputed: &BTreeSet<String>,
    writer: &mut dyn Write,
) -> GenericResult<()> {
    if let Some(differences) = check_against(path, recomputed)? {
        writeln!(writer, "File {} present, but inconsistent, differences:", path.display())?;
        writeln!(writer, "{}", format_grouped(&differences))?;
    }

    Ok(())
}

fn list_result_files(dir: &Path) -> GenericResult<BTreeSet<String>> {
    let mut files = BTreeSet::default();
    if !dir.exists() {
        return Ok(files);
    }

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if name.ends_with(".p") {
                files.insert(name.to_string());
            }
        }
    }

    Ok(files)
}
