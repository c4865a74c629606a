// src/application/commands/catalog/create_product.rs
use super::CatalogCommandService;
use crate::{
    application::{
        dto::{Actor, ProductDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        audit::AuditAction,
        catalog::{
            NewProduct, Sku,
            value_objects::{CategoryId, UnitId},
        },
    },
};

pub struct CreateProductCommand {
    /// Explicit SKU; generated from category, name and unit when absent.
    pub sku: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub category_id: i64,
    pub unit_id: i64,
    pub minimum_stock: i64,
    pub is_active: bool,
}

impl CatalogCommandService {
    pub async fn create_product(
        &self,
        actor: Option<&Actor>,
        command: CreateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        if command.name.trim().is_empty() {
            return Err(ApplicationError::validation("product name cannot be empty"));
        }
        if command.minimum_stock < 0 {
            return Err(ApplicationError::validation(
                "minimum stock cannot be negative",
            ));
        }

        let category_id = CategoryId::new(command.category_id)?;
        let unit_id = UnitId::new(command.unit_id)?;

        let category = self.categories.find_by_id(category_id).await?.ok_or_else(|| {
            ApplicationError::not_found(format!("product category {category_id} not found"))
        })?;
        let unit = self.units.find_by_id(unit_id).await?.ok_or_else(|| {
            ApplicationError::not_found(format!("unit of measure {unit_id} not found"))
        })?;

        let sku = match command.sku {
            Some(explicit) => {
                let sku = Sku::new(explicit)?;
                if self.products.exists_by_sku(sku.as_str()).await? {
                    return Err(ApplicationError::conflict(format!(
                        "a product with sku '{sku}' already exists"
                    )));
                }
                sku
            }
            None => {
                self.generator
                    .generate_sku(&category.name, &command.name, &unit.abbreviation)
                    .await?
            }
        };

        let barcode = self.generator.generate_ean13_barcode().await?;
        let now = self.clock.now();

        let created = self
            .products
            .insert(NewProduct {
                sku,
                barcode,
                name: command.name,
                description: command.description,
                category_id,
                unit_id,
                minimum_stock: command.minimum_stock,
                is_active: command.is_active,
                created_at: now,
                updated_at: now,
            })
            .await?;

        self.audit_creation(
            actor,
            AuditAction::CreateProduct,
            "products",
            created.id.to_string(),
            format!(
                "Created product '{}' with SKU '{}'",
                created.name, created.sku
            ),
            now,
        )
        .await?;

        tracing::info!(product_id = %created.id, sku = %created.sku, "product created");
        Ok(created.into())
    }
}
