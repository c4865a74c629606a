use crate::domain::audit::entity::AuditLog;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AuditLogDto {
    pub id: i64,
    pub actor: Option<String>,
    pub action: String,
    pub table_affected: String,
    pub object_id: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<AuditLog> for AuditLogDto {
    fn from(a: AuditLog) -> Self {
        Self {
            id: a.id,
            actor: a.actor,
            action: a.action.as_str().to_string(),
            table_affected: a.table_affected,
            object_id: a.object_id,
            note: a.note,
            created_at: a.created_at,
        }
    }
}
