use ferrous_lookup_application::use_cases::ResolveRecordsUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub resolve_records: Arc<ResolveRecordsUseCase>,
}

impl AppState {
    pub fn new(resolve_records: Arc<ResolveRecordsUseCase>) -> Self {
        Self { resolve_records }
    }
}
