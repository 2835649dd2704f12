mod formatter;
mod raw_records;
mod record_type;

pub use formatter::RecordFormatter;
pub use raw_records::{MxRecord, RawRecords};
pub use record_type::RecordType;
