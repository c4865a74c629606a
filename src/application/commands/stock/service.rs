// src/application/commands/stock/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        catalog::{
            ProductRepository, WarehouseRepository, WarehouseZone, WarehouseZoneRepository,
            value_objects::{ProductId, WarehouseId, ZoneId},
        },
        inventory::StockLedgerStore,
    },
};

/// Orchestrates the two mutating ledger operations. Holds no state between
/// calls; every load and write happens inside the unit of work it opens.
pub struct StockCommandService {
    pub(super) store: Arc<dyn StockLedgerStore>,
    pub(super) products: Arc<dyn ProductRepository>,
    pub(super) warehouses: Arc<dyn WarehouseRepository>,
    pub(super) zones: Arc<dyn WarehouseZoneRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl StockCommandService {
    pub fn new(
        store: Arc<dyn StockLedgerStore>,
        products: Arc<dyn ProductRepository>,
        warehouses: Arc<dyn WarehouseRepository>,
        zones: Arc<dyn WarehouseZoneRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            products,
            warehouses,
            zones,
            clock,
        }
    }

    /// Product, warehouse and zone must all exist, and the zone must belong
    /// to the warehouse. Checked before any unit of work opens.
    pub(super) async fn resolve_zone(
        &self,
        product_id: ProductId,
        warehouse_id: WarehouseId,
        zone_id: ZoneId,
    ) -> ApplicationResult<WarehouseZone> {
        self.products
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("product {product_id} not found")))?;

        self.warehouses.find_by_id(warehouse_id).await?.ok_or_else(|| {
            ApplicationError::not_found(format!("warehouse {warehouse_id} not found"))
        })?;

        let zone = self
            .zones
            .find_in_warehouse(warehouse_id, zone_id)
            .await?
            .ok_or_else(|| {
                ApplicationError::not_found(format!(
                    "zone {zone_id} not found in warehouse {warehouse_id}"
                ))
            })?;

        Ok(zone)
    }
}
