pub mod format;
pub mod recommendation;
pub mod vehicle;

pub use recommendation::{result_severity, Recommendation, Severity};
pub use vehicle::VehicleDescriptor;
