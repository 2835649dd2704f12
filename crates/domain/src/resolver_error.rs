use thiserror::Error;

/// Failure categories a resolver can report, independent of the transport that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolverErrorKind {
    Timeout,
    NotFound,
    NxDomain,
    ConnectionRefused,
    ServerFailure,
    Other,
}

impl ResolverErrorKind {
    /// Maps a conventional resolver error code (`ETIMEOUT`, `NXDOMAIN`, ...) to a kind.
    pub fn from_code(code: &str) -> Self {
        match code {
            "ETIMEOUT" => ResolverErrorKind::Timeout,
            "ENOTFOUND" => ResolverErrorKind::NotFound,
            "NXDOMAIN" => ResolverErrorKind::NxDomain,
            "ECONNREFUSED" => ResolverErrorKind::ConnectionRefused,
            "SERVFAIL" => ResolverErrorKind::ServerFailure,
            _ => ResolverErrorKind::Other,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ResolverErrorKind::Timeout => "ETIMEOUT",
            ResolverErrorKind::NotFound => "ENOTFOUND",
            ResolverErrorKind::NxDomain => "NXDOMAIN",
            ResolverErrorKind::ConnectionRefused => "ECONNREFUSED",
            ResolverErrorKind::ServerFailure => "SERVFAIL",
            ResolverErrorKind::Other => "EOTHER",
        }
    }

    /// The fixed user-facing message for this kind, or `None` when the raw message should be shown.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            ResolverErrorKind::Timeout => Some("DNS query timed out."),
            ResolverErrorKind::NotFound => Some("DNS server could not find the domain."),
            ResolverErrorKind::NxDomain => Some("The domain does not exist (NXDOMAIN)."),
            ResolverErrorKind::ConnectionRefused => Some("Connection refused by DNS server."),
            ResolverErrorKind::ServerFailure => Some("DNS server failed to resolve the query."),
            ResolverErrorKind::Other => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ResolverError {
    pub kind: ResolverErrorKind,
    pub message: String,
}

impl ResolverError {
    pub fn new(kind: ResolverErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ResolverErrorKind::Timeout, message)
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(ResolverErrorKind::Other, message)
    }

    pub fn user_message(&self) -> String {
        classify(self.kind, &self.message)
    }
}

/// Total mapping from a failure kind to the message shown to users.
pub fn classify(kind: ResolverErrorKind, fallback_message: &str) -> String {
    kind.user_message()
        .map(str::to_string)
        .unwrap_or_else(|| fallback_message.to_string())
}
