//! A library with the logic behind the VRPTW benchmark results command line interface.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod extensions;
