use crate::domain::catalog::value_objects::{
    Barcode, CategoryId, ProductId, Sku, UnitId, WarehouseCode, WarehouseId, ZoneCode, ZoneId,
};
use chrono::{DateTime, Utc};

/// A sellable or storable item. The SKU and barcode are assigned once at
/// creation and never regenerated.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub sku: Sku,
    pub barcode: Barcode,
    pub name: String,
    pub description: Option<String>,
    pub category_id: CategoryId,
    pub unit_id: UnitId,
    pub minimum_stock: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub sku: Sku,
    pub barcode: Barcode,
    pub name: String,
    pub description: Option<String>,
    pub category_id: CategoryId,
    pub unit_id: UnitId,
    pub minimum_stock: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ProductCategory {
    pub id: CategoryId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewProductCategory {
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UnitOfMeasure {
    pub id: UnitId,
    pub name: String,
    pub abbreviation: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUnitOfMeasure {
    pub name: String,
    pub abbreviation: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Warehouse {
    pub id: WarehouseId,
    pub code: WarehouseCode,
    pub name: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewWarehouse {
    pub code: WarehouseCode,
    pub name: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A named storage area inside one warehouse. Zone codes embed the parent
/// warehouse code.
#[derive(Debug, Clone)]
pub struct WarehouseZone {
    pub id: ZoneId,
    pub warehouse_id: WarehouseId,
    pub code: ZoneCode,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewWarehouseZone {
    pub warehouse_id: WarehouseId,
    pub code: ZoneCode,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
