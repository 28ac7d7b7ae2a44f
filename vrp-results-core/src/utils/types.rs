/// Alias to a scalar floating type used for distances.
pub type Float = f64;
