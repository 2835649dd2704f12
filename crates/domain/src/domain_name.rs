use crate::DomainError;
use fancy_regex::Regex;
use std::sync::LazyLock;

static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?!://)([a-zA-Z0-9_-]+\.)+[a-zA-Z]{2,}$").expect("domain pattern is valid")
});

pub const INVALID_DOMAIN_HINT: &str = "Please enter a valid domain name (e.g. facebook.com)";

/// Syntactic check applied before a domain is handed to the resolver.
pub struct DomainName;

impl DomainName {
    pub fn is_valid(domain: &str) -> bool {
        DOMAIN_PATTERN.is_match(domain).unwrap_or(false)
    }

    pub fn validate(domain: &str) -> Result<&str, DomainError> {
        if Self::is_valid(domain) {
            Ok(domain)
        } else {
            Err(DomainError::InvalidDomainName(domain.to_string()))
        }
    }
}
