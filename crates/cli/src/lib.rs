//! Shared wiring for the `ferrous-lookup` console report and the
//! `ferrous-lookup-server` web service.

pub mod bootstrap;
pub mod di;
pub mod report;
pub mod server;
