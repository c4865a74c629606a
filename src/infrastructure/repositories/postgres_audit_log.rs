// src/infrastructure/repositories/postgres_audit_log.rs
use super::map_sqlx;
use crate::domain::audit::entity::{AuditAction, AuditLog, NewAuditLog};
use crate::domain::audit::repository::AuditLogRepository;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresAuditLogRepository {
    pool: PgPool,
}

impl PostgresAuditLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuditLogRow {
    id: i64,
    actor: Option<String>,
    action: String,
    table_affected: String,
    object_id: String,
    note: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<AuditLogRow> for AuditLog {
    type Error = DomainError;

    fn try_from(row: AuditLogRow) -> Result<Self, Self::Error> {
        Ok(AuditLog {
            id: row.id,
            actor: row.actor,
            action: AuditAction::parse(&row.action)?,
            table_affected: row.table_affected,
            object_id: row.object_id,
            note: row.note,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl AuditLogRepository for PostgresAuditLogRepository {
    async fn insert(&self, entry: NewAuditLog) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO audit_logs (actor, action, table_affected, object_id, note, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&entry.actor)
        .bind(entry.action.as_str())
        .bind(&entry.table_affected)
        .bind(&entry.object_id)
        .bind(&entry.note)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn list(&self, limit: i64, offset: i64) -> DomainResult<Vec<AuditLog>> {
        let rows = sqlx::query_as::<_, AuditLogRow>(
            "SELECT id, actor, action, table_affected, object_id, note, created_at
             FROM audit_logs ORDER BY id DESC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(AuditLog::try_from).collect()
    }
}
