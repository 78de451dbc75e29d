use std::error;
use std::fmt;

/// Error type for JSON to Go type transformation.
#[derive(Debug)]
pub enum TransformError {
    /// The requested root type name is not a valid identifier.
    InvalidStructName(String),

    /// The input is not syntactically valid JSON.
    InvalidJson(serde_json::Error),

    /// I/O error (e.g., reading the input file, writing the output).
    IoError(std::io::Error),
}

impl TransformError {
    /// Returns true if the root type name was rejected.
    #[must_use]
    pub fn is_invalid_struct_name(&self) -> bool {
        matches!(self, Self::InvalidStructName(_))
    }

    /// Returns true if the input failed to decode as JSON.
    #[must_use]
    pub fn is_invalid_json(&self) -> bool {
        matches!(self, Self::InvalidJson(_))
    }
}

impl error::Error for TransformError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidStructName(_) => None,
            Self::InvalidJson(json_error) => Some(json_error),
            Self::IoError(io_error) => Some(io_error),
        }
    }
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStructName(name) => write!(f, "invalid struct name: {name:?}"),
            Self::InvalidJson(json_error) => write!(f, "invalid json: {json_error}"),
            Self::IoError(io_error) => fmt::Display::fmt(io_error, f),
        }
    }
}

impl From<std::io::Error> for TransformError {
    fn from(io_error: std::io::Error) -> Self {
        Self::IoError(io_error)
    }
}

impl From<serde_json::Error> for TransformError {
    fn from(json_error: serde_json::Error) -> Self {
        Self::InvalidJson(json_error)
    }
}
