//! Theoretical instance universes and best known results of the two benchmark suites.

mod best_known;
pub use self::best_known::*;

mod universe;
pub use self::universe::*;
