use super::DnsServices;
use ferrous_lookup_application::use_cases::ResolveRecordsUseCase;
use ferrous_lookup_domain::{Config, RecordType};
use std::sync::Arc;

pub struct UseCases {
    /// Restricted to `dns.web_record_types`.
    pub web_resolve: Arc<ResolveRecordsUseCase>,
    /// Every record type, in report order.
    pub console_resolve: Arc<ResolveRecordsUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, dns: &DnsServices) -> Self {
        let threshold = config.dns.slow_query_threshold();

        Self {
            web_resolve: Arc::new(
                ResolveRecordsUseCase::new(
                    dns.resolver.clone(),
                    config.dns.web_record_types.clone(),
                )
                .with_slow_query_threshold(threshold),
            ),
            console_resolve: Arc::new(
                ResolveRecordsUseCase::new(dns.resolver.clone(), RecordType::ALL)
                    .with_slow_query_threshold(threshold),
            ),
        }
    }
}
