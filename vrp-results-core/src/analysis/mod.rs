//! Quality analyses of aggregated results against the best known references.

#[cfg(test)]
#[path = "../../tests/unit/analysis/analysis_test.rs"]
mod analysis_test;

use crate::aggregate::InstanceHistories;
use crate::benchmark::{BestKnown, best_known_of};
use crate::naming::InstanceName;
use crate::utils::GenericResult;
use serde::Serialize;
use std::collections::BTreeMap;

/// Route count quality of the best observed result relative to the best known one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RouteQuality {
    /// The best known route count was reached.
    AtBest,
    /// One route more than the best known count.
    OneExcess,
    /// More than one route in excess.
    Worse,
}

/// Distance quality of the best observed result relative to the best known one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DistanceQuality {
    /// The route count does not even match the best known one, so the distance comparison
    /// is void.
    WrongRouteCount,
    /// Within one percent of the best known distance.
    WithinOnePercent,
    /// Within five percent of the best known distance.
    WithinFivePercent,
    /// More than five percent away.
    Worse,
}

/// Counts results by their route excess over the best known count: bucket `n` holds the
/// number of de-duplicated results using `n` extra routes. A result better than the
/// reference lands in bucket `0`.
pub fn excess_route_histogram(
    histories: &InstanceHistories,
    best: &BestKnown,
) -> GenericResult<Vec<usize>> {
    let mut buckets = vec![0];

    for (instance, results) in histories {
        let (best_k, _) = best_known_of(best, instance)?;
        for &(k, _) in results {
            let excess = k.saturating_sub(best_k);
            if excess >= buckets.len() {
                buckets.resize(excess + 1, 0);
            }
            buckets[excess] += 1;
        }
    }

    Ok(buckets)
}

/// Rates every scanned instance by the route count of its best observed result.
pub fn route_quality(
    histories: &InstanceHistories,
    best: &BestKnown,
) -> GenericResult<BTreeMap<InstanceName, RouteQuality>> {
    histories
        .iter()
        .filter_map(|(instance, results)| results.first().map(|result| (instance, result)))
        .map(|(instance, &(k, _))| {
            let (best_k, _) = best_known_of(best, instance)?;
            let quality = if best_k >= k {
                RouteQuality::AtBest
            } else if best_k + 1 == k {
                RouteQuality::OneExcess
            } else {
                RouteQuality::Worse
            };

            Ok((instance.clone(), quality))
        })
        .collect()
}

/// Rates every scanned instance by the distance of its best observed result.
pub fn distance_quality(
    histories: &InstanceHistories,
    best: &BestKnown,
) -> GenericResult<BTreeMap<InstanceName, DistanceQuality>> {
    histories
        .iter()
        .filter_map(|(instance, results)| results.first().map(|result| (instance, result)))
        .map(|(instance, &(k, dist))| {
            let (best_k, best_dist) = best_known_of(best, instance)?;
            let quality = if best_k < k {
                DistanceQuality::WrongRouteCount
            } else if best_dist * 1.01 >= dist {
                DistanceQuality::WithinOnePercent
            } else if best_dist * 1.05 >= dist {
                DistanceQuality::WithinFivePercent
            } else {
                DistanceQuality::Worse
            };

            Ok((instance.clone(), quality))
        })
        .collect()
}
