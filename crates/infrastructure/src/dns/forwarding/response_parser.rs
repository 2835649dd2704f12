use ferrous_lookup_domain::{
    MxRecord, RawRecords, RecordType, ResolverError, ResolverErrorKind,
};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use std::net::IpAddr;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    /// Answers of the queried type only; CNAME hops in front of them are dropped.
    pub records: RawRecords,
}

impl DnsResponse {
    pub fn is_nodata(&self) -> bool {
        self.rcode == ResponseCode::NoError && self.records.is_empty()
    }

    /// Converts the response into the records for `domain`, or the failure the rcode describes.
    pub fn into_records(
        self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<RawRecords, ResolverError> {
        let kind = match self.rcode {
            // NODATA: the name exists but has no records of this type.
            ResponseCode::NoError if self.is_nodata() => ResolverErrorKind::Other,
            ResponseCode::NoError => return Ok(self.records),
            ResponseCode::NXDomain => ResolverErrorKind::NxDomain,
            ResponseCode::ServFail => ResolverErrorKind::ServerFailure,
            ResponseCode::Refused => ResolverErrorKind::ConnectionRefused,
            _ => ResolverErrorKind::Other,
        };

        Err(ResolverError::new(
            kind,
            format!(
                "query{} {} {}",
                record_type,
                ResponseParser::rcode_to_status(self.rcode, self.records.is_empty()),
                domain
            ),
        ))
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(
        response_bytes: &[u8],
        record_type: RecordType,
    ) -> Result<DnsResponse, ResolverError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            ResolverError::other(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();
        let records = Self::extract(message.answers(), record_type);

        debug!(
            rcode = ?rcode,
            record_type = %record_type,
            answers = records.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            rcode,
            truncated,
            records,
        })
    }

    fn extract(answers: &[Record], record_type: RecordType) -> RawRecords {
        let data = answers.iter().map(|record| record.data());

        match record_type {
            RecordType::A | RecordType::AAAA => RawRecords::Addresses(
                data.filter_map(|rdata| match (record_type, rdata) {
                    (RecordType::A, RData::A(a)) => Some(IpAddr::V4(a.0)),
                    (RecordType::AAAA, RData::AAAA(aaaa)) => Some(IpAddr::V6(aaaa.0)),
                    _ => None,
                })
                .collect(),
            ),
            RecordType::NS | RecordType::CNAME => RawRecords::Names(
                data.filter_map(|rdata| match (record_type, rdata) {
                    (RecordType::NS, RData::NS(ns)) => Some(ns.to_utf8()),
                    (RecordType::CNAME, RData::CNAME(cname)) => Some(cname.to_utf8()),
                    _ => None,
                })
                .collect(),
            ),
            RecordType::MX => RawRecords::Mail(
                data.filter_map(|rdata| match rdata {
                    RData::MX(mx) => Some(MxRecord::new(mx.exchange().to_utf8(), mx.preference())),
                    _ => None,
                })
                .collect(),
            ),
            RecordType::TXT => RawRecords::Text(
                data.filter_map(|rdata| match rdata {
                    RData::TXT(txt) => Some(
                        txt.iter()
                            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
                            .collect(),
                    ),
                    _ => None,
                })
                .collect(),
            ),
        }
    }

    pub fn rcode_to_status(rcode: ResponseCode, no_answers: bool) -> &'static str {
        match rcode {
            ResponseCode::NoError if no_answers => "ENODATA",
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
