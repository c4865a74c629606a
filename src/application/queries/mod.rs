pub mod audit;
pub mod catalog;
pub mod inventory;

pub use audit::AuditQueryService;
pub use catalog::CatalogQueryService;
pub use inventory::InventoryQueryService;
