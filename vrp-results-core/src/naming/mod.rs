//! Decoding of the file names the solver gives to its results.
//!
//! A result file name carries, in order: the benchmark instance name, the route count and
//! distance parameters the run was configured with, and the achieved route count and total
//! distance, all separated by `-`. Anything after the last separator is run specific and
//! ignored here.

#[cfg(test)]
#[path = "../../tests/unit/naming/codec_test.rs"]
mod codec_test;

use crate::utils::Float;
use lazy_static::lazy_static;
use regex::Regex;

/// A canonical, lowercase benchmark instance name, e.g. `rc208` or `c1_210`.
pub type InstanceName = String;

lazy_static! {
    static ref RESULT_NAME: Regex = Regex::new(
        r"(?P<name>[rcRC]{1,2}[12](?:\d{2}|[\d_]{4}))-(?P<pk>[\d.]+)-(?P<pdist>[\d.]+)-(?P<k>\d+)-(?P<dist>[\d.]+)-",
    )
    .expect("invalid result name pattern");
}

/// A single solver run decoded from a result file name.
#[derive(Clone, Debug, PartialEq)]
pub struct SolutionFileRecord {
    /// Canonical instance name the result belongs to.
    pub instance: InstanceName,
    /// Route count parameter the run was configured with, not the achieved quality.
    pub primary_k: Float,
    /// Distance parameter the run was configured with, not the achieved quality.
    pub primary_dist: Float,
    /// Achieved route count.
    pub k: usize,
    /// Achieved total distance.
    pub dist: Float,
}

/// Decodes a result file name into a record. A name which does not match the grammar yields
/// `None`: unrelated files are routinely present in a results tree and are not an error.
pub fn decode(filename: &str) -> Option<SolutionFileRecord> {
    decode_spanned(filename).map(|(_, record)| record)
}

/// Decodes a result file name returning also the exact span matched by the grammar, which
/// serves as the de-duplication key during aggregation.
pub fn decode_spanned(filename: &str) -> Option<(&str, SolutionFileRecord)> {
    let captures = RESULT_NAME.captures(filename)?;
    let record = SolutionFileRecord {
        instance: captures["name"].to_lowercase(),
        primary_k: captures["pk"].parse().ok()?,
        primary_dist: captures["pdist"].parse().ok()?,
        k: captures["k"].parse().ok()?,
        dist: captures["dist"].parse().ok()?,
    };

    Some((captures.get(0)?.as_str(), record))
}

/// Derives the instance name from a file name by cutting everything from the first `-` on.
/// Deliberately more permissive than [`decode`]: classification needs only the instance
/// identity, not the quality fields.
pub fn instance_name_of(filename: &str) -> InstanceName {
    filename.split('-').next().unwrap_or(filename).to_lowercase()
}
