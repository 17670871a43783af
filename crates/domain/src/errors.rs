use std::fmt;
use thiserror::Error;

/// Why a single UDP query did not produce a usable response.
///
/// Only used for diagnostics. The walker treats every kind the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryFailureKind {
    Timeout,
    Transport,
    Decode,
}

impl fmt::Display for QueryFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryFailureKind::Timeout => f.write_str("timeout"),
            QueryFailureKind::Transport => f.write_str("transport error"),
            QueryFailureKind::Decode => f.write_str("decode error"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Query to {server} failed ({kind}): {detail}")]
    QueryFailed {
        server: String,
        kind: QueryFailureKind,
        detail: String,
    },

    #[error("Domain not found (NXDOMAIN): {0}")]
    NxDomain(String),

    #[error("The DNS response does not contain an answer to the question: {0}")]
    NoAnswer(String),

    #[error("Lookup timed out: {0}")]
    LookupTimeout(String),

    #[error("Lookup failed for {hostname}: {reason}")]
    LookupFailed { hostname: String, reason: String },

    #[error("Record type {0} is not supported by this lookup backend")]
    UnsupportedRecordType(String),
}

impl DomainError {
    pub fn query_failed(
        server: impl fmt::Display,
        kind: QueryFailureKind,
        detail: impl fmt::Display,
    ) -> Self {
        DomainError::QueryFailed {
            server: server.to_string(),
            kind,
            detail: detail.to_string(),
        }
    }

    /// True for the failures a referral lookup is allowed to swallow.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            DomainError::NxDomain(_)
                | DomainError::NoAnswer(_)
                | DomainError::LookupTimeout(_)
                | DomainError::LookupFailed { .. }
                | DomainError::UnsupportedRecordType(_)
                | DomainError::QueryFailed { .. }
        )
    }
}
