pub mod dns_server_mock;

pub use dns_server_mock::{MockAnswer, MockDnsServer, MockResponse};
