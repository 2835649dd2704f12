//! DNS Message Builder
//!
//! Constructs recursive DNS query messages in wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use ferrous_lookup_domain::{RecordType, ResolverError};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query with a random ID and return the ID alongside the bytes
    ///
    /// The ID is needed to match the upstream response to this query.
    pub fn build_query_with_id(
        domain: &str,
        record_type: &RecordType,
    ) -> Result<(u16, Vec<u8>), ResolverError> {
        let id = fastrand::u16(..);
        let bytes = Self::build_query_for_id(id, domain, record_type)?;
        Ok((id, bytes))
    }

    /// Standard recursive query: RD flag set, single IN-class question.
    pub fn build_query_for_id(
        id: u16,
        domain: &str,
        record_type: &RecordType,
    ) -> Result<Vec<u8>, ResolverError> {
        let name = Name::from_str(domain).map_err(|e| {
            ResolverError::other(format!("Invalid domain '{}': {}", domain, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        Self::serialize_message(&message)
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, ResolverError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            ResolverError::other(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
