use crate::ports::RecordResolver;
use ferrous_lookup_domain::{QueryResult, RecordFormatter, RecordType};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Runs one resolver call and turns its outcome into a `QueryResult`.
///
/// Resolver failures never escape: they are classified and stored in the result.
pub struct TimedQueryUseCase {
    resolver: Arc<dyn RecordResolver>,
}

impl TimedQueryUseCase {
    pub fn new(resolver: Arc<dyn RecordResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, domain: &str, record_type: RecordType) -> QueryResult {
        let start = Instant::now();
        let outcome = self.resolver.resolve(domain, record_type).await;
        let elapsed = start.elapsed();

        match outcome {
            Ok(raw) => {
                let records = RecordFormatter::format(&raw);
                debug!(
                    domain = %domain,
                    record_type = %record_type,
                    records = records.len(),
                    elapsed_us = elapsed.as_micros() as u64,
                    "Query succeeded"
                );
                QueryResult::success(record_type, records, elapsed)
            }
            Err(e) => {
                debug!(
                    domain = %domain,
                    record_type = %record_type,
                    kind = e.kind.code(),
                    error = %e,
                    "Query failed"
                );
                QueryResult::failure(record_type, e.user_message())
            }
        }
    }
}
