//! zonediff infrastructure: DNS wire handling, zone files and system adapters
pub mod dns;
pub mod system;
pub mod zone;
