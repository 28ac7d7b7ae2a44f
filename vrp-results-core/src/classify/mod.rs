//! Classification of benchmark instances by how well they have ever been solved.

#[cfg(test)]
#[path = "../../tests/unit/classify/classify_test.rs"]
mod classify_test;

mod promotion;
pub use self::promotion::*;

use crate::benchmark::{all_names, homberger_names, solomon_names};
use crate::naming::{InstanceName, instance_name_of};
use serde::Serialize;
use std::collections::BTreeSet;

/// The classification of the benchmark instance universes, computed from the set of all
/// result file names ever observed and the set of file names promoted into the best results
/// subdirectory.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ClassificationSets {
    /// Instances derived from every observed result file name.
    pub bad: BTreeSet<InstanceName>,
    /// Instances derived from promoted result file names.
    pub good: BTreeSet<InstanceName>,
    /// Instances whose recorded attempts are all promoted: `good \ bad`.
    pub always: BTreeSet<InstanceName>,
    /// Instances with recorded attempts which never reached promotion: `bad \ good`.
    pub never: BTreeSet<InstanceName>,
    /// Instances observed both promoted and not: `bad ∩ good`. Reported as a diagnostic,
    /// never merged into `always` or `never`.
    pub inconsistent: BTreeSet<InstanceName>,
    /// Instances of either universe never attempted at all.
    pub missing: BTreeSet<InstanceName>,
}

/// Computes the classification from observed and promoted result file names.
pub fn classify(
    observed_files: &BTreeSet<String>,
    promoted_files: &BTreeSet<String>,
) -> ClassificationSets {
    let bad: BTreeSet<_> = observed_files.iter().map(|name| instance_name_of(name)).collect();
    let good: BTreeSet<_> = promoted_files.iter().map(|name| instance_name_of(name)).collect();

    let always = good.difference(&bad).cloned().collect();
    let never = bad.difference(&good).cloned().collect();
    let inconsistent = bad.intersection(&good).cloned().collect();

    let attempted: BTreeSet<_> = bad.union(&good).cloned().collect();
    let missing = all_names().difference(&attempted).cloned().collect();

    ClassificationSets { bad, good, always, never, inconsistent, missing }
}

/// Returns the instances of the Homberger and the Solomon universe, in that order, which do
/// not appear in the given union of observed instance names.
pub fn missing_against(
    observed: &BTreeSet<InstanceName>,
) -> (BTreeSet<InstanceName>, BTreeSet<InstanceName>) {
    let homberger = homberger_names().difference(observed).cloned().collect();
    let solomon = solomon_names().difference(observed).cloned().collect();

    (homberger, solomon)
}
