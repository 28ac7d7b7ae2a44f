//! Quality analyses of scanned result trees against the best known dataset.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/analyze_test.rs"]
mod analyze_test;

use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::{Path, PathBuf};
use vrp_results_core::aggregate::scan_solutions;
use vrp_results_core::analysis::{
    DistanceQuality, RouteQuality, distance_quality, excess_route_histogram, route_quality,
};
use vrp_results_core::benchmark::BestKnown;
use vrp_results_core::naming::InstanceName;
use vrp_results_core::reporting::format_grouped;
use vrp_results_core::utils::GenericResult;

/// Scans each directory and writes its histogram of excess routes over the best known counts.
pub fn run_excess_routes(
    dirs: &[PathBuf],
    best: &BestKnown,
    writer: &mut dyn Write,
) -> GenericResult<()> {
    for dir in dirs {
        let histories = scan_solutions(dir)?;
        let buckets = excess_route_histogram(&histories, best)?;

        writeln!(writer, "Excess routes in '{}':", dir.display())?;
        for (excess, count) in buckets.iter().enumerate() {
            writeln!(writer, "  +{excess}: {count}")?;
        }
    }

    Ok(())
}

/// Scans the directory and writes instances grouped by the route count quality of their best
/// observed result.
pub fn run_route_quality(
    dir: &Path,
    best: &BestKnown,
    writer: &mut dyn Write,
) -> GenericResult<BTreeMap<InstanceName, RouteQuality>> {
    let histories = scan_solutions(dir)?;
    let qualities = route_quality(&histories, best)?;

    let sections = [
        ("Solved at best known route count:", RouteQuality::AtBest),
        ("One excess route:", RouteQuality::OneExcess),
        ("More excess routes:", RouteQuality::Worse),
    ];
    write_sections(writer, &qualities, &sections)?;

    Ok(qualities)
}

/// Scans the directory and writes instances grouped by the distance quality of their best
/// observed result.
pub fn run_distance_quality(
    dir: &Path,
    best: &BestKnown,
    writer: &mut dyn Write,
) -> GenericResult<BTreeMap<InstanceName, DistanceQuality>> {
    let histories = scan_solutions(dir)?;
    let qualities = distance_quality(&histories, best)?;

    let sections = [
        ("Route count above best known (distance not comparable):", DistanceQuality::WrongRouteCount),
        ("Within one percent of best known distance:", DistanceQuality::WithinOnePercent),
        ("Within five percent of best known distance:", DistanceQuality::WithinFivePercent),
        ("More than five percent away:", DistanceQuality::Worse),
    ];
    write_sections(writer, &qualities, &sections)?;

    Ok(qualities)
}

fn write_sections<T: Copy + PartialEq>(
    writer: &mut dyn Write,
    qualities: &BTreeMap<InstanceName, T>,
    sections: &[(&str, T)],
) -> GenericResult<()> {
    for &(title, quality) in sections {
        let names: BTreeSet<_> = qualities
            .iter()
            .filter(|&(_, &value)| value == quality)
            .map(|(name, _)| name.clone())
            .collect();

        writeln!(writer, "{title}")?;
        writeln!(writer, "{}", format_grouped(&names))?;
    }

    Ok(())
}
