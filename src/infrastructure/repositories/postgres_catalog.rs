// src/infrastructure/repositories/postgres_catalog.rs
use super::map_sqlx;
use crate::domain::catalog::{
    Barcode, CategoryId, NewProduct, NewProductCategory, NewUnitOfMeasure, NewWarehouse,
    NewWarehouseZone, Product, ProductCategory, ProductCategoryRepository, ProductId,
    ProductRepository, Sku, UnitId, UnitOfMeasure, UnitOfMeasureRepository, Warehouse,
    WarehouseCode, WarehouseId, WarehouseRepository, WarehouseZone, WarehouseZoneRepository,
    ZoneCode, ZoneId,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    sku: String,
    barcode: String,
    name: String,
    description: Option<String>,
    category_id: i64,
    unit_id: i64,
    minimum_stock: i64,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product {
            id: ProductId::new(row.id)?,
            sku: Sku::new(row.sku)?,
            barcode: Barcode::new(row.barcode)?,
            name: row.name,
            description: row.description,
            category_id: CategoryId::new(row.category_id)?,
            unit_id: UnitId::new(row.unit_id)?,
            minimum_stock: row.minimum_stock,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const PRODUCT_COLUMNS: &str = "id, sku, barcode, name, description, category_id, unit_id, minimum_stock, is_active, created_at, updated_at";

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(
            "INSERT INTO products (sku, barcode, name, description, category_id, unit_id, minimum_stock, is_active, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING id, sku, barcode, name, description, category_id, unit_id, minimum_stock, is_active, created_at, updated_at",
        )
        .bind(product.sku.as_str())
        .bind(product.barcode.as_str())
        .bind(&product.name)
        .bind(&product.description)
        .bind(i64::from(product.category_id))
        .bind(i64::from(product.unit_id))
        .bind(product.minimum_stock)
        .bind(product.is_active)
        .bind(product.created_at)
        .bind(product.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Product::try_from(row)
    }

    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Product::try_from).transpose()
    }

    async fn list(&self, limit: i64, offset: i64) -> DomainResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Product::try_from).collect()
    }

    async fn exists_by_sku(&self, sku: &str) -> DomainResult<bool> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM products WHERE sku = $1)")
                .bind(sku)
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;
        Ok(exists.0)
    }

    async fn exists_by_barcode(&self, barcode: &str) -> DomainResult<bool> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM products WHERE barcode = $1)")
                .bind(barcode)
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;
        Ok(exists.0)
    }
}

#[derive(Clone)]
pub struct PostgresWarehouseRepository {
    pool: PgPool,
}

impl PostgresWarehouseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct WarehouseRow {
    id: i64,
    code: String,
    name: String,
    address: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<WarehouseRow> for Warehouse {
    type Error = DomainError;

    fn try_from(row: WarehouseRow) -> Result<Self, Self::Error> {
        Ok(Warehouse {
            id: WarehouseId::new(row.id)?,
            code: WarehouseCode::new(row.code)?,
            name: row.name,
            address: row.address,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl WarehouseRepository for PostgresWarehouseRepository {
    async fn insert(&self, warehouse: NewWarehouse) -> DomainResult<Warehouse> {
        let row = sqlx::query_as::<_, WarehouseRow>(
            "INSERT INTO warehouses (code, name, address, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, code, name, address, created_at, updated_at",
        )
        .bind(warehouse.code.as_str())
        .bind(&warehouse.name)
        .bind(&warehouse.address)
        .bind(warehouse.created_at)
        .bind(warehouse.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Warehouse::try_from(row)
    }

    async fn find_by_id(&self, id: WarehouseId) -> DomainResult<Option<Warehouse>> {
        let row = sqlx::query_as::<_, WarehouseRow>(
            "SELECT id, code, name, address, created_at, updated_at FROM warehouses WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Warehouse::try_from).transpose()
    }

    async fn list(&self, limit: i64, offset: i64) -> DomainResult<Vec<Warehouse>> {
        let rows = sqlx::query_as::<_, WarehouseRow>(
            "SELECT id, code, name, address, created_at, updated_at FROM warehouses
             ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Warehouse::try_from).collect()
    }

    async fn exists_by_code(&self, code: &str) -> DomainResult<bool> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM warehouses WHERE code = $1)")
                .bind(code)
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;
        Ok(exists.0)
    }
}

#[derive(Clone)]
pub struct PostgresWarehouseZoneRepository {
    pool: PgPool,
}

impl PostgresWarehouseZoneRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct WarehouseZoneRow {
    id: i64,
    warehouse_id: i64,
    code: String,
    name: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<WarehouseZoneRow> for WarehouseZone {
    type Error = DomainError;

    fn try_from(row: WarehouseZoneRow) -> Result<Self, Self::Error> {
        Ok(WarehouseZone {
            id: ZoneId::new(row.id)?,
            warehouse_id: WarehouseId::new(row.warehouse_id)?,
            code: ZoneCode::new(row.code)?,
            name: row.name,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl WarehouseZoneRepository for PostgresWarehouseZoneRepository {
    async fn insert(&self, zone: NewWarehouseZone) -> DomainResult<WarehouseZone> {
        let row = sqlx::query_as::<_, WarehouseZoneRow>(
            "INSERT INTO warehouse_zones (warehouse_id, code, name, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, warehouse_id, code, name, created_at",
        )
        .bind(i64::from(zone.warehouse_id))
        .bind(zone.code.as_str())
        .bind(&zone.name)
        .bind(zone.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        WarehouseZone::try_from(row)
    }

    async fn find_in_warehouse(
        &self,
        warehouse_id: WarehouseId,
        zone_id: ZoneId,
    ) -> DomainResult<Option<WarehouseZone>> {
        let row = sqlx::query_as::<_, WarehouseZoneRow>(
            "SELECT id, warehouse_id, code, name, created_at FROM warehouse_zones
             WHERE warehouse_id = $1 AND id = $2",
        )
        .bind(i64::from(warehouse_id))
        .bind(i64::from(zone_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(WarehouseZone::try_from).transpose()
    }

    async fn list_for_warehouse(
        &self,
        warehouse_id: WarehouseId,
    ) -> DomainResult<Vec<WarehouseZone>> {
        let rows = sqlx::query_as::<_, WarehouseZoneRow>(
            "SELECT id, warehouse_id, code, name, created_at FROM warehouse_zones
             WHERE warehouse_id = $1 ORDER BY id",
        )
        .bind(i64::from(warehouse_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(WarehouseZone::try_from).collect()
    }

    async fn exists_by_code(&self, code: &str) -> DomainResult<bool> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM warehouse_zones WHERE code = $1)")
                .bind(code)
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;
        Ok(exists.0)
    }

    async fn exists_by_name_in_warehouse(
        &self,
        warehouse_id: WarehouseId,
        name: &str,
    ) -> DomainResult<bool> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM warehouse_zones WHERE warehouse_id = $1 AND name = $2)",
        )
        .bind(i64::from(warehouse_id))
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(exists.0)
    }
}

#[derive(Clone)]
pub struct PostgresProductCategoryRepository {
    pool: PgPool,
}

impl PostgresProductCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductCategoryRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ProductCategoryRow> for ProductCategory {
    type Error = DomainError;

    fn try_from(row: ProductCategoryRow) -> Result<Self, Self::Error> {
        Ok(ProductCategory {
            id: CategoryId::new(row.id)?,
            name: row.name,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ProductCategoryRepository for PostgresProductCategoryRepository {
    async fn insert(&self, category: NewProductCategory) -> DomainResult<ProductCategory> {
        let row = sqlx::query_as::<_, ProductCategoryRow>(
            "INSERT INTO product_categories (name, created_at)
             VALUES ($1, $2)
             RETURNING id, name, created_at",
        )
        .bind(&category.name)
        .bind(category.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ProductCategory::try_from(row)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<ProductCategory>> {
        let row = sqlx::query_as::<_, ProductCategoryRow>(
            "SELECT id, name, created_at FROM product_categories WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ProductCategory::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<ProductCategory>> {
        let rows = sqlx::query_as::<_, ProductCategoryRow>(
            "SELECT id, name, created_at FROM product_categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ProductCategory::try_from).collect()
    }
}

#[derive(Clone)]
pub struct PostgresUnitOfMeasureRepository {
    pool: PgPool,
}

impl PostgresUnitOfMeasureRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UnitOfMeasureRow {
    id: i64,
    name: String,
    abbreviation: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UnitOfMeasureRow> for UnitOfMeasure {
    type Error = DomainError;

    fn try_from(row: UnitOfMeasureRow) -> Result<Self, Self::Error> {
        Ok(UnitOfMeasure {
            id: UnitId::new(row.id)?,
            name: row.name,
            abbreviation: row.abbreviation,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UnitOfMeasureRepository for PostgresUnitOfMeasureRepository {
    async fn insert(&self, unit: NewUnitOfMeasure) -> DomainResult<UnitOfMeasure> {
        let row = sqlx::query_as::<_, UnitOfMeasureRow>(
            "INSERT INTO units_of_measure (name, abbreviation, created_at)
             VALUES ($1, $2, $3)
             RETURNING id, name, abbreviation, created_at",
        )
        .bind(&unit.name)
        .bind(&unit.abbreviation)
        .bind(unit.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        UnitOfMeasure::try_from(row)
    }

    async fn find_by_id(&self, id: UnitId) -> DomainResult<Option<UnitOfMeasure>> {
        let row = sqlx::query_as::<_, UnitOfMeasureRow>(
            "SELECT id, name, abbreviation, created_at FROM units_of_measure WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(UnitOfMeasure::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<UnitOfMeasure>> {
        let rows = sqlx::query_as::<_, UnitOfMeasureRow>(
            "SELECT id, name, abbreviation, created_at FROM units_of_measure ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(UnitOfMeasure::try_from).collect()
    }
}
