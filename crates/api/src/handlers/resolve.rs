use crate::{
    dto::{EnvelopeResponse, ResolveAllQuery, ResolveQuery, ResolveResponse},
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ferrous_lookup_domain::{
    format_elapsed_ms, generate_trace, DomainError, DomainName, QueryMode, QueryResult,
};
use serde_json::json;
use tracing::{debug, instrument, warn};

/// Present and non-empty; the value itself is passed on untouched.
fn required(value: Option<&str>) -> Result<&str, DomainError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(DomainError::MissingQueryInput)
}

#[instrument(skip(state), name = "api_resolve_record")]
pub async fn resolve_record(
    State(state): State<AppState>,
    Query(params): Query<ResolveQuery>,
) -> Result<Response, ApiError> {
    let domain = required(params.domain.as_deref())?;
    let type_name = required(params.record_type.as_deref())?;
    let record_type = state.resolve_records.parse_record_type(type_name)?;

    match state.resolve_records.execute_one(domain, record_type).await? {
        QueryResult::Success {
            records, elapsed, ..
        } => {
            debug!(
                domain = %domain,
                record_type = %record_type,
                records = records.len(),
                "Records resolved"
            );

            Ok(Json(ResolveResponse {
                records,
                time: format_elapsed_ms(elapsed),
                trace: generate_trace(domain),
            })
            .into_response())
        }
        QueryResult::Failure { error, .. } => {
            warn!(domain = %domain, record_type = %record_type, error = %error, "Resolution failed");
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": error })),
            )
                .into_response())
        }
    }
}

#[instrument(skip(state), name = "api_resolve_all")]
pub async fn resolve_all(
    State(state): State<AppState>,
    Query(params): Query<ResolveAllQuery>,
) -> Result<Json<EnvelopeResponse>, ApiError> {
    let domain = required(params.domain.as_deref())?;
    let type_names = params.type_names();
    if type_names.is_empty() {
        return Err(DomainError::MissingQueryInput.into());
    }

    DomainName::validate(domain)?;

    let types = type_names
        .iter()
        .map(|name| state.resolve_records.parse_record_type(name))
        .collect::<Result<Vec<_>, _>>()?;

    let envelope = state
        .resolve_records
        .resolve_all(domain, &types, QueryMode::Concurrent)
        .await?;

    debug!(
        domain = %domain,
        successes = envelope.successes(),
        failures = envelope.failures(),
        "Envelope assembled"
    );

    Ok(Json(envelope.into()))
}
