#[cfg(test)]
#[path = "../../tests/unit/benchmark/universe_test.rs"]
mod universe_test;

use crate::naming::InstanceName;
use std::collections::BTreeSet;

/// Families and per family instance counts of the Solomon suite.
const SOLOMON_GROUPS: &[(&str, usize)] =
    &[("c1", 9), ("c2", 8), ("r1", 12), ("r2", 11), ("rc1", 8), ("rc2", 8)];

/// Returns all 56 instance names of the Solomon benchmark suite, `family + two digit index`.
pub fn solomon_names() -> BTreeSet<InstanceName> {
    SOLOMON_GROUPS
        .iter()
        .flat_map(|&(family, count)| (1..=count).map(move |index| format!("{family}{index:02}")))
        .collect()
}

/// Returns all 300 instance names of the Homberger benchmark suite,
/// `family + class + size suffix + index`.
pub fn homberger_names() -> BTreeSet<InstanceName> {
    ["c", "r", "rc"]
        .into_iter()
        .flat_map(|family| {
            ["1", "2"].into_iter().flat_map(move |class| {
                ["_2", "_4", "_6", "_8", "10"].into_iter().flat_map(move |size| {
                    (1..=10).map(move |index| match index {
                        10 => format!("{family}{class}{size}10"),
                        _ => format!("{family}{class}{size}_{index}"),
                    })
                })
            })
        })
        .collect()
}

/// Returns the union of both benchmark universes.
pub fn all_names() -> BTreeSet<InstanceName> {
    solomon_names().into_iter().chain(homberger_names()).collect()
}
