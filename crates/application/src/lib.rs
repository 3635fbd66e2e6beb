//! zonediff application layer: ports and the reconciliation driver
pub mod ports;
pub mod use_cases;
