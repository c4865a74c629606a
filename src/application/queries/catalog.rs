// src/application/queries/catalog.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{
            Page, ProductCategoryDto, ProductDto, UnitOfMeasureDto, WarehouseDto, WarehouseZoneDto,
            pagination::{normalize_limit, normalize_offset},
        },
        error::{ApplicationError, ApplicationResult},
    },
    domain::catalog::{
        ProductCategoryRepository, ProductRepository, UnitOfMeasureRepository, WarehouseRepository,
        WarehouseZoneRepository, value_objects::WarehouseId,
    },
};

pub struct CatalogQueryService {
    products: Arc<dyn ProductRepository>,
    warehouses: Arc<dyn WarehouseRepository>,
    zones: Arc<dyn WarehouseZoneRepository>,
    categories: Arc<dyn ProductCategoryRepository>,
    units: Arc<dyn UnitOfMeasureRepository>,
}

impl CatalogQueryService {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        warehouses: Arc<dyn WarehouseRepository>,
        zones: Arc<dyn WarehouseZoneRepository>,
        categories: Arc<dyn ProductCategoryRepository>,
        units: Arc<dyn UnitOfMeasureRepository>,
    ) -> Self {
        Self {
            products,
            warehouses,
            zones,
            categories,
            units,
        }
    }

    pub async fn list_products(
        &self,
        limit: i64,
        offset: i64,
    ) -> ApplicationResult<Page<ProductDto>> {
        let limit = normalize_limit(limit);
        let offset = normalize_offset(offset);
        let items = self.products.list(limit, offset).await?;
        Ok(Page::new(
            items.into_iter().map(Into::into).collect(),
            limit,
            offset,
        ))
    }

    pub async fn list_warehouses(
        &self,
        limit: i64,
        offset: i64,
    ) -> ApplicationResult<Page<WarehouseDto>> {
        let limit = normalize_limit(limit);
        let offset = normalize_offset(offset);
        let items = self.warehouses.list(limit, offset).await?;
        Ok(Page::new(
            items.into_iter().map(Into::into).collect(),
            limit,
            offset,
        ))
    }

    pub async fn list_zones(&self, warehouse_id: i64) -> ApplicationResult<Vec<WarehouseZoneDto>> {
        let warehouse_id = WarehouseId::new(warehouse_id)?;
        self.warehouses
            .find_by_id(warehouse_id)
            .await?
            .ok_or_else(|| {
                ApplicationError::not_found(format!("warehouse {warehouse_id} not found"))
            })?;

        let zones = self.zones.list_for_warehouse(warehouse_id).await?;
        Ok(zones.into_iter().map(Into::into).collect())
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<ProductCategoryDto>> {
        let items = self.categories.list().await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn list_units(&self) -> ApplicationResult<Vec<UnitOfMeasureDto>> {
        let items = self.units.list().await?;
        Ok(items.into_iter().map(Into::into).collect())
    }
}
