pub mod resolve;

pub use resolve::{
    EnvelopeResponse, QueryResultDto, ResolveAllQuery, ResolveQuery, ResolveResponse,
};
