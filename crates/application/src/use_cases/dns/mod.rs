mod resolve_records;
mod timed_query;

pub use resolve_records::ResolveRecordsUseCase;
pub use timed_query::TimedQueryUseCase;
