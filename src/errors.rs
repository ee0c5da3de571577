use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    /// An out-of-enumeration value reached a boundary that validates raw input
    InvalidArgument(String),
    /// The structured backend was selected where the platform does not
    /// declare structured capability support. Caller programming error.
    UnsupportedBackend(String),
    /// The external capability source itself failed. Propagated unchanged,
    /// never retried, never cached.
    CollaboratorFailure(String),
}

impl fmt::Display for CapabilityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CapabilityError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CapabilityError::UnsupportedBackend(msg) => write!(f, "Unsupported backend: {}", msg),
            CapabilityError::CollaboratorFailure(msg) => {
                write!(f, "Capability source failure: {}", msg)
            }
        }
    }
}

impl std::error::Error for CapabilityError {}
