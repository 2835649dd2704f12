//! Heuristic resolution path derived from the labels of a domain name.
//!
//! No network activity is involved: the hops only mirror the delegation
//! chain a recursive resolver would normally walk.

use rustc_hash::FxHashSet;

pub const ROOT_HOP: &str = "Root DNS Server";

pub fn generate_trace(domain: &str) -> Vec<String> {
    let labels: Vec<&str> = domain.split('.').collect();
    let tld = labels.last().copied().unwrap_or_default();
    let second_level = labels
        .len()
        .checked_sub(2)
        .map(|idx| labels[idx])
        .unwrap_or_default();
    let subdomain = labels[..labels.len().saturating_sub(2)].join(".");

    let mut trace = vec![ROOT_HOP.to_string()];

    if !tld.is_empty() {
        trace.push(format!("TLD Server (.{})", tld));
    }
    if !second_level.is_empty() {
        trace.push(format!("Authoritative Server ({}.{})", second_level, tld));
    }
    if !subdomain.is_empty() {
        trace.push(format!("Subdomain ({})", subdomain));
    }
    trace.push(format!("Domain Queried ({})", domain));

    trace
}

/// Flattens several traces into one, keeping the first occurrence of each hop.
pub fn merge_traces<I, T>(traces: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: IntoIterator<Item = String>,
{
    let mut seen = FxHashSet::default();
    let mut merged = Vec::new();

    for hop in traces.into_iter().flatten() {
        if seen.insert(hop.clone()) {
            merged.push(hop);
        }
    }

    merged
}
