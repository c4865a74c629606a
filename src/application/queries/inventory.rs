// src/application/queries/inventory.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{
            Page, ProductInventoryDto, StockLogDto,
            pagination::{normalize_limit, normalize_offset},
        },
        error::{ApplicationError, ApplicationResult},
    },
    domain::inventory::{InventoryId, StockLedgerReader},
};

pub struct InventoryQueryService {
    reader: Arc<dyn StockLedgerReader>,
}

impl InventoryQueryService {
    pub fn new(reader: Arc<dyn StockLedgerReader>) -> Self {
        Self { reader }
    }

    pub async fn list_inventory(
        &self,
        limit: i64,
        offset: i64,
    ) -> ApplicationResult<Page<ProductInventoryDto>> {
        let limit = normalize_limit(limit);
        let offset = normalize_offset(offset);
        let items = self.reader.list(limit, offset).await?;
        Ok(Page::new(
            items.into_iter().map(Into::into).collect(),
            limit,
            offset,
        ))
    }

    /// Ledger history for one inventory record, oldest first.
    pub async fn list_stock_logs(
        &self,
        inventory_id: i64,
        limit: i64,
        offset: i64,
    ) -> ApplicationResult<Page<StockLogDto>> {
        let inventory_id = InventoryId::new(inventory_id)?;
        self.reader
            .find_by_id(inventory_id)
            .await?
            .ok_or_else(|| {
                ApplicationError::not_found(format!("inventory {inventory_id} not found"))
            })?;

        let limit = normalize_limit(limit);
        let offset = normalize_offset(offset);
        let items = self
            .reader
            .list_stock_logs(inventory_id, limit, offset)
            .await?;
        Ok(Page::new(
            items.into_iter().map(Into::into).collect(),
            limit,
            offset,
        ))
    }
}
