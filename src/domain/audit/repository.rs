use crate::domain::audit::entity::{AuditLog, NewAuditLog};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Write-once, read-many. Entries are never edited or deleted.
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    async fn insert(&self, entry: NewAuditLog) -> DomainResult<()>;
    async fn list(&self, limit: i64, offset: i64) -> DomainResult<Vec<AuditLog>>;
}
