pub mod health;
pub mod resolve;

pub use health::health_check;
pub use resolve::{resolve_all, resolve_record};
