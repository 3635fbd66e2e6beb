pub mod dispatcher;
pub mod forwarding;
pub mod nameserver;
pub mod transport;

pub use dispatcher::RetryPolicy;
pub use nameserver::NameserverClient;
