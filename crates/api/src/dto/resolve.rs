use ferrous_lookup_domain::{QueryEnvelope, QueryResult, RecordType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct ResolveQuery {
    pub domain: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResolveAllQuery {
    pub domain: Option<String>,
    /// Comma separated, e.g. `A,AAAA,MX`.
    pub types: Option<String>,
}

impl ResolveAllQuery {
    pub fn type_names(&self) -> Vec<&str> {
        self.types
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub records: Vec<String>,
    pub time: String,
    pub trace: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct QueryResultDto {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<QueryResult> for QueryResultDto {
    fn from(result: QueryResult) -> Self {
        let time = result.elapsed_ms();
        match result {
            QueryResult::Success {
                record_type,
                records,
                ..
            } => Self {
                record_type,
                records: Some(records),
                time,
                error: None,
            },
            QueryResult::Failure { record_type, error } => Self {
                record_type,
                records: None,
                time: None,
                error: Some(error),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EnvelopeResponse {
    pub domain: String,
    pub results: Vec<QueryResultDto>,
    pub trace: Vec<String>,
}

impl From<QueryEnvelope> for EnvelopeResponse {
    fn from(envelope: QueryEnvelope) -> Self {
        Self {
            domain: envelope.domain,
            results: envelope.results.into_iter().map(Into::into).collect(),
            trace: envelope.trace,
        }
    }
}
