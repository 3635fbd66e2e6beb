pub mod loader;
mod order;

pub use loader::ZoneFileLoader;
