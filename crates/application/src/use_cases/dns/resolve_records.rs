use super::TimedQueryUseCase;
use crate::ports::RecordResolver;
use ferrous_lookup_domain::{DomainError, QueryEnvelope, QueryMode, QueryResult, RecordType};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

const DEFAULT_SLOW_QUERY_THRESHOLD: Duration = Duration::from_millis(200);

/// Fans a domain out to one timed query per record type and collects the envelope.
pub struct ResolveRecordsUseCase {
    timed_query: TimedQueryUseCase,
    supported: Vec<RecordType>,
    slow_query_threshold: Duration,
}

impl ResolveRecordsUseCase {
    pub fn new(resolver: Arc<dyn RecordResolver>, supported: impl Into<Vec<RecordType>>) -> Self {
        Self {
            timed_query: TimedQueryUseCase::new(resolver),
            supported: supported.into(),
            slow_query_threshold: DEFAULT_SLOW_QUERY_THRESHOLD,
        }
    }

    pub fn with_slow_query_threshold(mut self, threshold: Duration) -> Self {
        self.slow_query_threshold = threshold;
        self
    }

    pub fn supported_types(&self) -> &[RecordType] {
        &self.supported
    }

    pub fn slow_query_threshold(&self) -> Duration {
        self.slow_query_threshold
    }

    /// Looks up a record type by its exact name, rejecting anything outside this entry point's
    /// supported set.
    pub fn parse_record_type(&self, name: &str) -> Result<RecordType, DomainError> {
        RecordType::from_name(name)
            .filter(|record_type| self.supported.contains(record_type))
            .ok_or_else(|| DomainError::UnsupportedRecordType(name.to_string()))
    }

    /// Checks the request and collapses duplicate types, keeping first occurrences.
    pub fn validate(
        &self,
        domain: &str,
        types: &[RecordType],
    ) -> Result<Vec<RecordType>, DomainError> {
        if domain.is_empty() || types.is_empty() {
            return Err(DomainError::MissingQueryInput);
        }

        let mut unique = Vec::with_capacity(types.len());
        for record_type in types {
            if !self.supported.contains(record_type) {
                return Err(DomainError::UnsupportedRecordType(
                    record_type.as_str().to_string(),
                ));
            }
            if !unique.contains(record_type) {
                unique.push(*record_type);
            }
        }

        Ok(unique)
    }

    /// Single-type lookup used by the per-type HTTP endpoint.
    pub async fn execute_one(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<QueryResult, DomainError> {
        self.validate(domain, &[record_type])?;

        let result = self.timed_query.execute(domain, record_type).await;
        self.note_slow(domain, &result);
        Ok(result)
    }

    pub async fn resolve_all(
        &self,
        domain: &str,
        types: &[RecordType],
        mode: QueryMode,
    ) -> Result<QueryEnvelope, DomainError> {
        match mode {
            QueryMode::Concurrent => self.execute(domain, types).await,
            QueryMode::Sequential => self.execute_sequential(domain, types, |_| {}).await,
        }
    }

    /// Runs every lookup concurrently and waits for all of them.
    #[instrument(skip(self, types), fields(types = types.len()))]
    pub async fn execute(
        &self,
        domain: &str,
        types: &[RecordType],
    ) -> Result<QueryEnvelope, DomainError> {
        let types = self.validate(domain, types)?;

        let results = join_all(
            types
                .iter()
                .map(|record_type| self.timed_query.execute(domain, *record_type)),
        )
        .await;

        for result in &results {
            self.note_slow(domain, result);
        }

        let envelope = QueryEnvelope::assemble(domain, results);
        debug!(
            successes = envelope.successes(),
            failures = envelope.failures(),
            "Concurrent resolution finished"
        );
        Ok(envelope)
    }

    /// Runs lookups one after another; `on_result` sees each result before the next query starts.
    #[instrument(skip(self, types, on_result), fields(types = types.len()))]
    pub async fn execute_sequential<F>(
        &self,
        domain: &str,
        types: &[RecordType],
        mut on_result: F,
    ) -> Result<QueryEnvelope, DomainError>
    where
        F: FnMut(&QueryResult) + Send,
    {
        let types = self.validate(domain, types)?;

        let mut results = Vec::with_capacity(types.len());
        for record_type in types {
            let result = self.timed_query.execute(domain, record_type).await;
            self.note_slow(domain, &result);
            on_result(&result);
            results.push(result);
        }

        let envelope = QueryEnvelope::assemble(domain, results);
        debug!(
            successes = envelope.successes(),
            failures = envelope.failures(),
            "Sequential resolution finished"
        );
        Ok(envelope)
    }

    pub fn is_slow(&self, result: &QueryResult) -> bool {
        result.is_slow(self.slow_query_threshold)
    }

    fn note_slow(&self, domain: &str, result: &QueryResult) {
        if let Some(elapsed_ms) = result.elapsed_ms().filter(|_| self.is_slow(result)) {
            warn!(
                domain = %domain,
                record_type = %result.record_type(),
                elapsed_ms = %elapsed_ms,
                threshold_ms = self.slow_query_threshold.as_millis() as u64,
                "Slow DNS response"
            );
        }
    }
}
