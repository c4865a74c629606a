// src/application/commands/catalog/create_zone.rs
use super::CatalogCommandService;
use crate::{
    application::{
        dto::{Actor, WarehouseZoneDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        audit::AuditAction,
        catalog::{NewWarehouseZone, value_objects::WarehouseId},
    },
};

pub struct CreateZoneCommand {
    pub warehouse_id: i64,
    pub name: String,
}

impl CatalogCommandService {
    pub async fn create_zone(
        &self,
        actor: Option<&Actor>,
        command: CreateZoneCommand,
    ) -> ApplicationResult<WarehouseZoneDto> {
        if command.name.trim().is_empty() {
            return Err(ApplicationError::validation("zone name cannot be empty"));
        }

        let warehouse_id = WarehouseId::new(command.warehouse_id)?;
        let warehouse = self.warehouses.find_by_id(warehouse_id).await?.ok_or_else(|| {
            ApplicationError::not_found(format!("warehouse {warehouse_id} not found"))
        })?;

        if self
            .zones
            .exists_by_name_in_warehouse(warehouse_id, &command.name)
            .await?
        {
            return Err(ApplicationError::conflict(format!(
                "a zone named '{}' already exists in this warehouse",
                command.name
            )));
        }

        let code = self
            .generator
            .generate_zone_code(&warehouse.code, &command.name)
            .await?;
        let now = self.clock.now();

        let created = self
            .zones
            .insert(NewWarehouseZone {
                warehouse_id,
                code,
                name: command.name,
                created_at: now,
            })
            .await?;

        self.audit_creation(
            actor,
            AuditAction::CreateZone,
            "warehouse_zones",
            created.id.to_string(),
            format!(
                "Created zone '{}' in warehouse '{}'",
                created.name, warehouse.name
            ),
            now,
        )
        .await?;

        tracing::info!(zone_id = %created.id, code = %created.code, "warehouse zone created");
        Ok(created.into())
    }
}
