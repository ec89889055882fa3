//! Error kinds shared across the domain, adapter, provider, and IaC
//! emitter layers. Callers branch on [`ErrorKind`], never on the message.

use std::fmt;

/// The category of a failure. See the crate-level docs of each layer
/// for which phase raises which kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A domain invariant was violated.
    DomainValidation,
    /// Domain was internally consistent but violates a provider-specific rule.
    ProviderValidation,
    /// The provider rejected the request or failed to execute it.
    ProviderCall,
    /// A read targeted an unknown id.
    NotFound,
    /// The active provider variant has not implemented this verb.
    Unsupported,
    /// No IaC mapper is registered for the given kind.
    EmitterDispatch,
    /// A mapper produced a malformed Terraform block.
    EmitterMalformed,
    /// The operation was cancelled before completion.
    Cancelled,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::DomainValidation => "domain_validation",
            ErrorKind::ProviderValidation => "provider_validation",
            ErrorKind::ProviderCall => "provider_call",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Unsupported => "unsupported",
            ErrorKind::EmitterDispatch => "emitter_dispatch",
            ErrorKind::EmitterMalformed => "emitter_malformed",
            ErrorKind::Cancelled => "cancelled",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn domain_validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DomainValidation, message)
    }

    pub fn provider_validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ProviderValidation, message)
    }

    /// Wraps an underlying provider failure, preserving its message.
    pub fn provider_call(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ProviderCall, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unsupported, message)
    }

    pub fn emitter_dispatch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EmitterDispatch, message)
    }

    pub fn emitter_malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EmitterMalformed, message)
    }

    pub fn cancelled() -> Self {
        Self::new(ErrorKind::Cancelled, "operation cancelled")
    }

    pub fn is_kind(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = Error::domain_validation("cidr must be non-empty");
        assert_eq!(
            err.to_string(),
            "domain_validation: cidr must be non-empty"
        );
    }

    #[test]
    fn is_kind_matches_only_same_variant() {
        let err = Error::not_found("vpc-x");
        assert!(err.is_kind(ErrorKind::NotFound));
        assert!(!err.is_kind(ErrorKind::ProviderCall));
    }
}
