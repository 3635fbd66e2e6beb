#![allow(dead_code)]

pub mod dns_server_mock;
pub mod scripted_transport;

pub use dns_server_mock::{a_record, ns_record, reply_to, MockDnsServer};
pub use scripted_transport::ScriptedTransport;
