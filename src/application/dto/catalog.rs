use crate::domain::catalog::{Product, ProductCategory, UnitOfMeasure, Warehouse, WarehouseZone};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ProductDto {
    pub id: i64,
    pub sku: String,
    pub barcode: String,
    pub name: String,
    pub description: Option<String>,
    pub category_id: i64,
    pub unit_id: i64,
    pub minimum_stock: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id.into(),
            sku: p.sku.into(),
            barcode: p.barcode.into(),
            name: p.name,
            description: p.description,
            category_id: p.category_id.into(),
            unit_id: p.unit_id.into(),
            minimum_stock: p.minimum_stock,
            is_active: p.is_active,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductCategoryDto {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<ProductCategory> for ProductCategoryDto {
    fn from(c: ProductCategory) -> Self {
        Self {
            id: c.id.into(),
            name: c.name,
            created_at: c.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UnitOfMeasureDto {
    pub id: i64,
    pub name: String,
    pub abbreviation: String,
    pub created_at: DateTime<Utc>,
}

impl From<UnitOfMeasure> for UnitOfMeasureDto {
    fn from(u: UnitOfMeasure) -> Self {
        Self {
            id: u.id.into(),
            name: u.name,
            abbreviation: u.abbreviation,
            created_at: u.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WarehouseDto {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Warehouse> for WarehouseDto {
    fn from(w: Warehouse) -> Self {
        Self {
            id: w.id.into(),
            code: w.code.into(),
            name: w.name,
            address: w.address,
            created_at: w.created_at,
            updated_at: w.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WarehouseZoneDto {
    pub id: i64,
    pub warehouse_id: i64,
    pub code: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<WarehouseZone> for WarehouseZoneDto {
    fn from(z: WarehouseZone) -> Self {
        Self {
            id: z.id.into(),
            warehouse_id: z.warehouse_id.into(),
            code: z.code.into(),
            name: z.name,
            created_at: z.created_at,
        }
    }
}
