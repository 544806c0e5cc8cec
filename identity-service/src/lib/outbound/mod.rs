pub mod audit;
pub mod repositories;

pub use audit::TracingAuditLog;
