/// A basic error type which, essentially, is a wrapper on String type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl std::fmt::Display for GenericError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<walkdir::Error> for GenericError {
    fn from(value: walkdir::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<glob::PatternError> for GenericError {
    fn from(value: glob::PatternError) -> Self {
        Self(value.to_string())
    }
}

impl From<glob::GlobError> for GenericError {
    fn from(value: glob::GlobError) -> Self {
        Self(value.to_string())
    }
}
