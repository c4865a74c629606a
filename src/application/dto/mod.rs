pub mod actor;
pub mod audit;
pub mod catalog;
pub mod inventory;
pub mod pagination;

pub use actor::Actor;
pub use audit::AuditLogDto;
pub use catalog::{
    ProductCategoryDto, ProductDto, UnitOfMeasureDto, WarehouseDto, WarehouseZoneDto,
};
pub use inventory::{ProductInventoryDto, StockLogDto};
pub use pagination::Page;
