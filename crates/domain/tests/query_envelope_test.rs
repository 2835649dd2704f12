use ferrous_lookup_domain::{
    classify, generate_trace, QueryEnvelope, QueryResult, RecordType, ResolverErrorKind,
};
use std::time::Duration;

#[test]
fn test_partial_failure_is_representable() {
    let results = vec![
        QueryResult::success(
            RecordType::A,
            vec!["93.184.216.34".to_string()],
            Duration::from_micros(4_210),
        ),
        QueryResult::failure(
            RecordType::MX,
            classify(ResolverErrorKind::NotFound, "queryMx ENOTFOUND example.com"),
        ),
    ];

    let envelope = QueryEnvelope::assemble("example.com", results);

    assert_eq!(envelope.results.len(), 2);
    assert_eq!(envelope.results[0].record_type(), RecordType::A);
    assert_eq!(envelope.results[0].elapsed_ms().as_deref(), Some("4.21"));
    assert_eq!(
        envelope.results[1].error(),
        Some("DNS server could not find the domain.")
    );
    assert_eq!(envelope.trace, generate_trace("example.com"));
}

#[test]
fn test_all_failures_have_empty_trace() {
    let envelope = QueryEnvelope::assemble(
        "nope.invalid",
        vec![
            QueryResult::failure(RecordType::A, "The domain does not exist (NXDOMAIN)."),
            QueryResult::failure(RecordType::NS, "The domain does not exist (NXDOMAIN)."),
        ],
    );

    assert!(envelope.trace.is_empty());
    assert_eq!(envelope.failures(), 2);
    assert_eq!(envelope.successes(), 0);
}

#[test]
fn test_elapsed_format_is_two_decimals() {
    for micros in [0u64, 1, 999, 10_000, 199_999, 1_234_567] {
        let result = QueryResult::success(RecordType::A, vec![], Duration::from_micros(micros));
        let ms = result.elapsed_ms().unwrap();
        let (_, fraction) = ms.split_once('.').unwrap();
        assert_eq!(fraction.len(), 2, "{} has wrong precision", ms);
        assert!(!ms.starts_with('-'));
    }
}
