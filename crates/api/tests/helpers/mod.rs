#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use ferrous_lookup_api::{create_api_routes, AppState};
use ferrous_lookup_application::{ports::RecordResolver, use_cases::ResolveRecordsUseCase};
use ferrous_lookup_domain::{RawRecords, RecordType, ResolverError, ResolverErrorKind};
use http_body_util::BodyExt;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Clone, Default)]
pub struct StubResolver {
    responses: Arc<Mutex<HashMap<RecordType, Result<RawRecords, ResolverError>>>>,
    calls: Arc<AtomicUsize>,
    domains: Arc<Mutex<Vec<String>>>,
}

impl StubResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(self, record_type: RecordType, records: RawRecords) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(record_type, Ok(records));
        self
    }

    pub fn with_error(self, record_type: RecordType, kind: ResolverErrorKind, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(record_type, Err(ResolverError::new(kind, message)));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn domains(&self) -> Vec<String> {
        self.domains.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordResolver for StubResolver {
    async fn resolve(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<RawRecords, ResolverError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.domains.lock().unwrap().push(domain.to_string());
        self.responses
            .lock()
            .unwrap()
            .get(&record_type)
            .cloned()
            .unwrap_or_else(|| Err(ResolverError::new(ResolverErrorKind::NotFound, "ENOTFOUND")))
    }
}

pub fn create_app(resolver: &StubResolver) -> Router {
    let use_case = ResolveRecordsUseCase::new(Arc::new(resolver.clone()), RecordType::WEB_DEFAULT);
    create_api_routes(AppState::new(Arc::new(use_case)))
}

pub async fn get(app: Router, uri: &str) -> (u16, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status().as_u16();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

pub async fn get_json(app: Router, uri: &str) -> (u16, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}
