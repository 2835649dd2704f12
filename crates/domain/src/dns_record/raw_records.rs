use std::net::IpAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxRecord {
    pub exchange: String,
    pub priority: u16,
}

impl MxRecord {
    pub fn new(exchange: impl Into<String>, priority: u16) -> Self {
        Self {
            exchange: exchange.into(),
            priority,
        }
    }
}

/// Records exactly as the resolver returned them, before display formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawRecords {
    /// A / AAAA answers.
    Addresses(Vec<IpAddr>),
    /// NS / CNAME targets.
    Names(Vec<String>),
    Mail(Vec<MxRecord>),
    /// One entry per TXT record, each holding its character-strings.
    Text(Vec<Vec<String>>),
}

impl RawRecords {
    pub fn len(&self) -> usize {
        match self {
            RawRecords::Addresses(v) => v.len(),
            RawRecords::Names(v) => v.len(),
            RawRecords::Mail(v) => v.len(),
            RawRecords::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
