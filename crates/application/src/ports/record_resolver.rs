use async_trait::async_trait;
use ferrous_lookup_domain::{RawRecords, RecordType, ResolverError};

/// Performs the actual network lookup for one record type of a domain.
#[async_trait]
pub trait RecordResolver: Send + Sync {
    async fn resolve(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<RawRecords, ResolverError>;
}
