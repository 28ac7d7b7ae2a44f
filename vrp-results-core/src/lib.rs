//! Core crate contains bookkeeping and classification logic for result files produced by
//! repeated runs of a VRPTW solver against the *Solomon* and *Homberger* benchmark suites.
//!
//! Result files encode the benchmark instance and the achieved quality (route count, total
//! distance) in their names. This crate decodes such names into records, aggregates them per
//! instance across a directory tree, compares them against best known results, and classifies
//! every benchmark instance as always solved optimally, never solved optimally, or untested,
//! reconciling the outcome against a persisted manifest to detect data loss between runs.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub mod aggregate;
pub mod analysis;
pub mod benchmark;
pub mod classify;
pub mod manifest;
pub mod naming;
pub mod reporting;
pub mod sets;
pub mod utils;
