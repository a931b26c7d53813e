use thiserror::Error;

/// Failures raised by the ECDF pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EcdfError {
    /// Caller misuse: malformed invocation, bad extension, unsorted or
    /// wrongly sized percentile input.
    #[error("{0}")]
    InvalidArgument(String),

    /// Anything caused by external data: unreadable files, malformed lines,
    /// non-numeric fields, no records for the requested school.
    #[error("{0}")]
    File(String),
}

impl EcdfError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        EcdfError::InvalidArgument(msg.into())
    }

    pub fn file(msg: impl Into<String>) -> Self {
        EcdfError::File(msg.into())
    }

    /// Process exit code for this error kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            EcdfError::InvalidArgument(_) => 2,
            EcdfError::File(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, EcdfError>;
