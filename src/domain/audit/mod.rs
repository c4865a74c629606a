pub mod entity;
pub mod repository;

pub use entity::{AuditAction, AuditLog, NewAuditLog};
pub use repository::AuditLogRepository;
