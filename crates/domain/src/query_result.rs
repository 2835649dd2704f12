use crate::trace::{generate_trace, merge_traces};
use crate::RecordType;
use std::time::Duration;

/// Outcome of a single (domain, record type) lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    Success {
        record_type: RecordType,
        records: Vec<String>,
        elapsed: Duration,
    },
    Failure {
        record_type: RecordType,
        error: String,
    },
}

impl QueryResult {
    pub fn success(record_type: RecordType, records: Vec<String>, elapsed: Duration) -> Self {
        QueryResult::Success {
            record_type,
            records,
            elapsed,
        }
    }

    pub fn failure(record_type: RecordType, error: impl Into<String>) -> Self {
        QueryResult::Failure {
            record_type,
            error: error.into(),
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            QueryResult::Success { record_type, .. } | QueryResult::Failure { record_type, .. } => {
                *record_type
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, QueryResult::Success { .. })
    }

    pub fn records(&self) -> Option<&[String]> {
        match self {
            QueryResult::Success { records, .. } => Some(records),
            QueryResult::Failure { .. } => None,
        }
    }

    pub fn elapsed(&self) -> Option<Duration> {
        match self {
            QueryResult::Success { elapsed, .. } => Some(*elapsed),
            QueryResult::Failure { .. } => None,
        }
    }

    /// Elapsed milliseconds with two fraction digits, e.g. `"12.34"`.
    pub fn elapsed_ms(&self) -> Option<String> {
        self.elapsed().map(format_elapsed_ms)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QueryResult::Success { .. } => None,
            QueryResult::Failure { error, .. } => Some(error),
        }
    }

    pub fn is_slow(&self, threshold: Duration) -> bool {
        self.elapsed().is_some_and(|elapsed| elapsed > threshold)
    }
}

pub fn format_elapsed_ms(elapsed: Duration) -> String {
    format!("{:.2}", elapsed.as_secs_f64() * 1000.0)
}

/// How one session schedules its per-type lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryMode {
    /// All lookups in flight at once, joined before returning.
    #[default]
    Concurrent,
    /// Each lookup completes before the next one starts.
    Sequential,
}

/// Everything produced by one query session for a domain.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryEnvelope {
    pub domain: String,
    pub results: Vec<QueryResult>,
    pub trace: Vec<String>,
}

impl QueryEnvelope {
    /// Builds the envelope, attaching the trace only when at least one lookup succeeded.
    pub fn assemble(domain: impl Into<String>, results: Vec<QueryResult>) -> Self {
        let domain = domain.into();
        let trace = if results.iter().any(QueryResult::is_success) {
            merge_traces([generate_trace(&domain)])
        } else {
            Vec::new()
        };

        Self {
            domain,
            results,
            trace,
        }
    }

    pub fn successes(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failures(&self) -> usize {
        self.results.len() - self.successes()
    }
}
