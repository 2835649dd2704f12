use super::RawRecords;

/// Turns raw resolver output into display strings, one per record.
pub struct RecordFormatter;

impl RecordFormatter {
    pub fn format(raw: &RawRecords) -> Vec<String> {
        match raw {
            RawRecords::Addresses(addrs) => addrs.iter().map(|ip| ip.to_string()).collect(),
            RawRecords::Names(names) => names
                .iter()
                .map(|name| strip_root_dot(name).to_string())
                .collect(),
            RawRecords::Mail(entries) => entries
                .iter()
                .map(|mx| {
                    format!(
                        "{} (Priority: {})",
                        strip_root_dot(&mx.exchange),
                        mx.priority
                    )
                })
                .collect(),
            RawRecords::Text(records) => records.iter().map(|chunks| chunks.concat()).collect(),
        }
    }
}

fn strip_root_dot(name: &str) -> &str {
    match name.strip_suffix('.') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => name,
    }
}
