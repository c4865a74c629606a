// src/application/queries/audit.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{
            AuditLogDto, Page,
            pagination::{normalize_limit, normalize_offset},
        },
        error::ApplicationResult,
    },
    domain::audit::AuditLogRepository,
};

pub struct AuditQueryService {
    repo: Arc<dyn AuditLogRepository>,
}

impl AuditQueryService {
    pub fn new(repo: Arc<dyn AuditLogRepository>) -> Self {
        Self { repo }
    }

    /// Newest entries first.
    pub async fn list_audit_logs(
        &self,
        limit: i64,
        offset: i64,
    ) -> ApplicationResult<Page<AuditLogDto>> {
        let limit = normalize_limit(limit);
        let offset = normalize_offset(offset);
        let items = self.repo.list(limit, offset).await?;
        Ok(Page::new(
            items.into_iter().map(Into::into).collect(),
            limit,
            offset,
        ))
    }
}
