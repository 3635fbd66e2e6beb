pub mod host_resolver;
pub mod pacer;

pub use host_resolver::HostResolver;
pub use pacer::JitterPacer;
