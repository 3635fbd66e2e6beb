pub mod reconcile_zone;

pub use reconcile_zone::{ReconcileReport, ReconcileZoneUseCase};
