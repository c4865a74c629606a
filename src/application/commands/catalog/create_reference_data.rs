// src/application/commands/catalog/create_reference_data.rs
use super::CatalogCommandService;
use crate::{
    application::{
        dto::{Actor, ProductCategoryDto, UnitOfMeasureDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        audit::AuditAction,
        catalog::{NewProductCategory, NewUnitOfMeasure},
    },
};

pub struct CreateProductCategoryCommand {
    pub name: String,
}

pub struct CreateUnitOfMeasureCommand {
    pub name: String,
    pub abbreviation: String,
}

impl CatalogCommandService {
    pub async fn create_category(
        &self,
        actor: Option<&Actor>,
        command: CreateProductCategoryCommand,
    ) -> ApplicationResult<ProductCategoryDto> {
        if command.name.trim().is_empty() {
            return Err(ApplicationError::validation(
                "category name cannot be empty",
            ));
        }

        let now = self.clock.now();
        let created = self
            .categories
            .insert(NewProductCategory {
                name: command.name,
                created_at: now,
            })
            .await?;

        self.audit_creation(
            actor,
            AuditAction::CreateProductCategory,
            "product_categories",
            created.id.to_string(),
            format!("Created product category '{}'", created.name),
            now,
        )
        .await?;

        Ok(created.into())
    }

    pub async fn create_unit(
        &self,
        actor: Option<&Actor>,
        command: CreateUnitOfMeasureCommand,
    ) -> ApplicationResult<UnitOfMeasureDto> {
        if command.name.trim().is_empty() || command.abbreviation.trim().is_empty() {
            return Err(ApplicationError::validation(
                "unit name and abbreviation cannot be empty",
            ));
        }

        let now = self.clock.now();
        let created = self
            .units
            .insert(NewUnitOfMeasure {
                name: command.name,
                abbreviation: command.abbreviation,
                created_at: now,
            })
            .await?;

        self.audit_creation(
            actor,
            AuditAction::CreateUnitOfMeasure,
            "units_of_measure",
            created.id.to_string(),
            format!("Created unit of measure '{}'", created.name),
            now,
        )
        .await?;

        Ok(created.into())
    }
}
