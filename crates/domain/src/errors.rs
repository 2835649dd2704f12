use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Missing domain or record type")]
    MissingQueryInput,

    #[error("Unsupported DNS record type")]
    UnsupportedRecordType(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
