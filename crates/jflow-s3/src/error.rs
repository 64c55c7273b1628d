//! Error types for object storage operations.

/// Specialized [`Result`] type for object storage operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type for object storage operations.
#[derive(Debug, thiserror::Error)]
#[must_use = "errors should be handled appropriately"]
pub enum Error {
    /// Configuration error.
    ///
    /// Missing credentials, an unparseable endpoint, or settings the
    /// storage SDK refused while building the client.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The URL does not address an object on the configured endpoint.
    #[error("Invalid object URL: {0}")]
    InvalidUrl(String),

    /// Invalid request or malformed data.
    ///
    /// This occurs when the request parameters are invalid or when the
    /// uploaded data does not match its declared length.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The bucket or object does not exist.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The credentials are not allowed to perform the operation.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Reading the upload source failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other failure reported by the storage SDK.
    #[error("Storage error: {0}")]
    Storage(opendal::Error),
}

impl Error {
    /// Returns whether this error indicates a configuration issue.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Returns whether this error indicates a missing resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Returns whether repeating the operation may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Storage(err) => err.is_temporary(),
            Error::Io(_) => true,
            Error::Config(_)
            | Error::InvalidUrl(_)
            | Error::InvalidRequest(_)
            | Error::NotFound(_)
            | Error::PermissionDenied(_) => false,
        }
    }
}

impl From<opendal::Error> for Error {
    fn from(err: opendal::Error) -> Self {
        use opendal::ErrorKind;

        match err.kind() {
            ErrorKind::NotFound => Self::NotFound(err.to_string()),
            ErrorKind::PermissionDenied => Self::PermissionDenied(err.to_string()),
            ErrorKind::ConfigInvalid => Self::Config(err.to_string()),
            _ => Self::Storage(err),
        }
    }
}
