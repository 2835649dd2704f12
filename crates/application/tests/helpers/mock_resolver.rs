#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_lookup_application::ports::RecordResolver;
use ferrous_lookup_domain::{RawRecords, RecordType, ResolverError, ResolverErrorKind};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone, Default)]
pub struct MockRecordResolver {
    responses: Arc<Mutex<HashMap<RecordType, Result<RawRecords, ResolverError>>>>,
    delays: Arc<Mutex<HashMap<RecordType, Duration>>>,
    calls: Arc<Mutex<Vec<(String, RecordType)>>>,
    completed: Arc<Mutex<Vec<RecordType>>>,
}

impl MockRecordResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, record_type: RecordType, records: RawRecords) {
        self.responses
            .lock()
            .unwrap()
            .insert(record_type, Ok(records));
    }

    pub fn set_error(&self, record_type: RecordType, kind: ResolverErrorKind, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(record_type, Err(ResolverError::new(kind, message)));
    }

    pub fn set_delay(&self, record_type: RecordType, delay: Duration) {
        self.delays.lock().unwrap().insert(record_type, delay);
    }

    pub fn calls(&self) -> Vec<(String, RecordType)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Record types in the order their lookups finished.
    pub fn completion_order(&self) -> Vec<RecordType> {
        self.completed.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordResolver for MockRecordResolver {
    async fn resolve(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<RawRecords, ResolverError> {
        self.calls
            .lock()
            .unwrap()
            .push((domain.to_string(), record_type));

        let delay = self.delays.lock().unwrap().get(&record_type).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.completed.lock().unwrap().push(record_type);

        self.responses
            .lock()
            .unwrap()
            .get(&record_type)
            .cloned()
            .unwrap_or_else(|| {
                Err(ResolverError::new(
                    ResolverErrorKind::NotFound,
                    format!("query{} ENOTFOUND {}", record_type, domain),
                ))
            })
    }
}
