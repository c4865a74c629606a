use crate::domain::catalog::entity::{
    NewProduct, NewProductCategory, NewUnitOfMeasure, NewWarehouse, NewWarehouseZone, Product,
    ProductCategory, UnitOfMeasure, Warehouse, WarehouseZone,
};
use crate::domain::catalog::value_objects::{CategoryId, ProductId, UnitId, WarehouseId, ZoneId};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// The `exists_*` methods double as the uniqueness oracle for identifier
/// generation: read-only probes, any I/O failure propagates.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product>;
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>>;
    async fn list(&self, limit: i64, offset: i64) -> DomainResult<Vec<Product>>;
    async fn exists_by_sku(&self, sku: &str) -> DomainResult<bool>;
    async fn exists_by_barcode(&self, barcode: &str) -> DomainResult<bool>;
}

#[async_trait]
pub trait WarehouseRepository: Send + Sync {
    async fn insert(&self, warehouse: NewWarehouse) -> DomainResult<Warehouse>;
    async fn find_by_id(&self, id: WarehouseId) -> DomainResult<Option<Warehouse>>;
    async fn list(&self, limit: i64, offset: i64) -> DomainResult<Vec<Warehouse>>;
    async fn exists_by_code(&self, code: &str) -> DomainResult<bool>;
}

#[async_trait]
pub trait WarehouseZoneRepository: Send + Sync {
    async fn insert(&self, zone: NewWarehouseZone) -> DomainResult<WarehouseZone>;
    /// Zone lookup scoped to its warehouse; absent also when the zone exists
    /// but belongs to a different warehouse.
    async fn find_in_warehouse(
        &self,
        warehouse_id: WarehouseId,
        zone_id: ZoneId,
    ) -> DomainResult<Option<WarehouseZone>>;
    async fn list_for_warehouse(&self, warehouse_id: WarehouseId) -> DomainResult<Vec<WarehouseZone>>;
    async fn exists_by_code(&self, code: &str) -> DomainResult<bool>;
    async fn exists_by_name_in_warehouse(
        &self,
        warehouse_id: WarehouseId,
        name: &str,
    ) -> DomainResult<bool>;
}

#[async_trait]
pub trait ProductCategoryRepository: Send + Sync {
    async fn insert(&self, category: NewProductCategory) -> DomainResult<ProductCategory>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<ProductCategory>>;
    async fn list(&self) -> DomainResult<Vec<ProductCategory>>;
}

#[async_trait]
pub trait UnitOfMeasureRepository: Send + Sync {
    async fn insert(&self, unit: NewUnitOfMeasure) -> DomainResult<UnitOfMeasure>;
    async fn find_by_id(&self, id: UnitId) -> DomainResult<Option<UnitOfMeasure>>;
    async fn list(&self) -> DomainResult<Vec<UnitOfMeasure>>;
}
