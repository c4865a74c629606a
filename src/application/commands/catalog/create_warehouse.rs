// src/application/commands/catalog/create_warehouse.rs
use super::CatalogCommandService;
use crate::{
    application::{
        dto::{Actor, WarehouseDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{audit::AuditAction, catalog::NewWarehouse},
};

pub struct CreateWarehouseCommand {
    pub name: String,
    pub address: Option<String>,
}

impl CatalogCommandService {
    pub async fn create_warehouse(
        &self,
        actor: Option<&Actor>,
        command: CreateWarehouseCommand,
    ) -> ApplicationResult<WarehouseDto> {
        if command.name.trim().is_empty() {
            return Err(ApplicationError::validation(
                "warehouse name cannot be empty",
            ));
        }

        let code = self.generator.generate_warehouse_code(&command.name).await?;
        let now = self.clock.now();

        let created = self
            .warehouses
            .insert(NewWarehouse {
                code,
                name: command.name,
                address: command.address,
                created_at: now,
                updated_at: now,
            })
            .await?;

        self.audit_creation(
            actor,
            AuditAction::CreateWarehouse,
            "warehouses",
            created.id.to_string(),
            format!(
                "Created warehouse '{}' with code '{}'",
                created.name, created.code
            ),
            now,
        )
        .await?;

        tracing::info!(warehouse_id = %created.id, code = %created.code, "warehouse created");
        Ok(created.into())
    }
}
