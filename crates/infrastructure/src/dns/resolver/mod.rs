pub mod system_conf;
pub mod upstream;

pub use upstream::UpstreamResolver;
