// src/application/commands/catalog/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::Actor,
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::{
        audit::{AuditAction, AuditLogRepository, NewAuditLog},
        catalog::{
            ProductCategoryRepository, ProductRepository, UnitOfMeasureRepository,
            WarehouseRepository, WarehouseZoneRepository, services::CodeGeneratorService,
        },
    },
};
use chrono::{DateTime, Utc};

/// Creates catalog entities, generating their immutable identifiers (SKU,
/// barcode, warehouse and zone codes) at creation time.
pub struct CatalogCommandService {
    pub(super) products: Arc<dyn ProductRepository>,
    pub(super) warehouses: Arc<dyn WarehouseRepository>,
    pub(super) zones: Arc<dyn WarehouseZoneRepository>,
    pub(super) categories: Arc<dyn ProductCategoryRepository>,
    pub(super) units: Arc<dyn UnitOfMeasureRepository>,
    pub(super) generator: Arc<CodeGeneratorService>,
    pub(super) audit: Arc<dyn AuditLogRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CatalogCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        products: Arc<dyn ProductRepository>,
        warehouses: Arc<dyn WarehouseRepository>,
        zones: Arc<dyn WarehouseZoneRepository>,
        categories: Arc<dyn ProductCategoryRepository>,
        units: Arc<dyn UnitOfMeasureRepository>,
        generator: Arc<CodeGeneratorService>,
        audit: Arc<dyn AuditLogRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            products,
            warehouses,
            zones,
            categories,
            units,
            generator,
            audit,
            clock,
        }
    }

    pub(super) async fn audit_creation(
        &self,
        actor: Option<&Actor>,
        action: AuditAction,
        table_affected: &str,
        object_id: String,
        note: String,
        created_at: DateTime<Utc>,
    ) -> ApplicationResult<()> {
        self.audit
            .insert(NewAuditLog {
                actor: actor.map(Actor::label),
                action,
                table_affected: table_affected.into(),
                object_id,
                note: Some(note),
                created_at,
            })
            .await?;
        Ok(())
    }
}
