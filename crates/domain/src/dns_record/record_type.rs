use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RecordType {
    A,
    AAAA,
    MX,
    NS,
    CNAME,
    TXT,
}

impl RecordType {
    /// Every supported type, in the order the console report queries them.
    pub const ALL: [RecordType; 6] = [
        RecordType::A,
        RecordType::AAAA,
        RecordType::MX,
        RecordType::NS,
        RecordType::TXT,
        RecordType::CNAME,
    ];

    /// Types offered by the web API unless configured otherwise.
    pub const WEB_DEFAULT: [RecordType; 5] = [
        RecordType::A,
        RecordType::AAAA,
        RecordType::MX,
        RecordType::NS,
        RecordType::CNAME,
    ];

    /// Exact, case-sensitive lookup by canonical name (`"MX"` matches, `"mx"` does not).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|record_type| record_type.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::MX => "MX",
            RecordType::NS => "NS",
            RecordType::CNAME => "CNAME",
            RecordType::TXT => "TXT",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "MX" => Ok(RecordType::MX),
            "NS" => Ok(RecordType::NS),
            "CNAME" => Ok(RecordType::CNAME),
            "TXT" => Ok(RecordType::TXT),
            _ => Err(format!("Unknown record type: {}", s)),
        }
    }
}

impl TryFrom<String> for RecordType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RecordType> for String {
    fn from(value: RecordType) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("mx".parse::<RecordType>().unwrap(), RecordType::MX);
        assert_eq!("Aaaa".parse::<RecordType>().unwrap(), RecordType::AAAA);
        assert_eq!(" cname ".parse::<RecordType>().unwrap(), RecordType::CNAME);
    }

    #[test]
    fn test_from_name_is_exact() {
        assert_eq!(RecordType::from_name("CNAME"), Some(RecordType::CNAME));
        assert_eq!(RecordType::from_name("cname"), None);
        assert_eq!(RecordType::from_name(" A"), None);
        assert_eq!(RecordType::from_name("SOA"), None);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("SOA".parse::<RecordType>().is_err());
        assert!("".parse::<RecordType>().is_err());
    }

    #[test]
    fn test_console_order() {
        let names: Vec<&str> = RecordType::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(names, vec!["A", "AAAA", "MX", "NS", "TXT", "CNAME"]);
    }

    #[test]
    fn test_web_default_excludes_txt() {
        assert!(!RecordType::WEB_DEFAULT.contains(&RecordType::TXT));
        assert_eq!(RecordType::WEB_DEFAULT.len(), 5);
    }
}
