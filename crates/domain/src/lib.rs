//! Ferrous Lookup Domain Layer
pub mod config;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod query_result;
pub mod resolver_error;
pub mod trace;

pub use config::{CliOverrides, Config, ConfigError, DnsConfig, LoggingConfig, ServerConfig};
pub use dns_record::{MxRecord, RawRecords, RecordFormatter, RecordType};
pub use domain_name::{DomainName, INVALID_DOMAIN_HINT};
pub use errors::DomainError;
pub use query_result::{format_elapsed_ms, QueryEnvelope, QueryMode, QueryResult};
pub use resolver_error::{classify, ResolverError, ResolverErrorKind};
pub use trace::{generate_trace, merge_traces};
