pub mod dns;

pub use dns::{ResolveRecordsUseCase, TimedQueryUseCase};
