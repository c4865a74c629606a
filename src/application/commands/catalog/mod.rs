// src/application/commands/catalog/mod.rs
mod create_product;
mod create_reference_data;
mod create_warehouse;
mod create_zone;
mod service;

pub use create_product::CreateProductCommand;
pub use create_reference_data::{CreateProductCategoryCommand, CreateUnitOfMeasureCommand};
pub use create_warehouse::CreateWarehouseCommand;
pub use create_zone::CreateZoneCommand;
pub use service::CatalogCommandService;
