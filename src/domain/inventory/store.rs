use crate::domain::audit::entity::NewAuditLog;
use crate::domain::catalog::value_objects::{ProductId, WarehouseId, ZoneId};
use crate::domain::errors::DomainResult;
use crate::domain::inventory::entity::{
    InventoryId, NewProductInventory, NewStockLog, ProductInventory, StockLog,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Durable home of current-quantity records and their ledger rows. Every
/// mutating ledger operation runs inside one unit of work obtained from
/// [`StockLedgerStore::begin`].
#[async_trait]
pub trait StockLedgerStore: Send + Sync {
    async fn begin(&self) -> DomainResult<Box<dyn StockLedgerTx>>;
}

/// One atomic unit of work. All writes issued through a tx commit together
/// via [`StockLedgerTx::commit`]; dropping the tx without committing rolls
/// everything back.
///
/// `find_*_for_update` lock the returned rows for the remainder of the tx so
/// concurrent writers against the same location serialize instead of both
/// reading the same `quantity_before`.
#[async_trait]
pub trait StockLedgerTx: Send {
    async fn find_inventory_for_update(
        &mut self,
        product_id: ProductId,
        warehouse_id: WarehouseId,
        zone_id: ZoneId,
    ) -> DomainResult<Option<ProductInventory>>;

    /// Locks both rows of a move in one call. Implementations must acquire
    /// the row locks in increasing inventory-id order so two opposite moves
    /// across the same pair of zones cannot deadlock.
    async fn find_zone_pair_for_update(
        &mut self,
        product_id: ProductId,
        warehouse_id: WarehouseId,
        source_zone_id: ZoneId,
        destination_zone_id: ZoneId,
    ) -> DomainResult<(Option<ProductInventory>, Option<ProductInventory>)>;

    async fn create_inventory(
        &mut self,
        inventory: NewProductInventory,
    ) -> DomainResult<ProductInventory>;

    async fn save_quantity(
        &mut self,
        id: InventoryId,
        quantity: i64,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()>;

    async fn append_stock_log(&mut self, log: NewStockLog) -> DomainResult<StockLog>;

    /// Audit writes ride in the same unit of work: an unaudited mutation is
    /// worse than a failed one, so an audit failure aborts the whole tx.
    async fn append_audit_log(&mut self, entry: NewAuditLog) -> DomainResult<()>;

    async fn commit(self: Box<Self>) -> DomainResult<()>;
}

/// Read side of the ledger, outside any unit of work.
#[async_trait]
pub trait StockLedgerReader: Send + Sync {
    async fn find_by_id(&self, id: InventoryId) -> DomainResult<Option<ProductInventory>>;
    async fn list(&self, limit: i64, offset: i64) -> DomainResult<Vec<ProductInventory>>;
    /// History for one inventory, ordered by `created_at` then id.
    async fn list_stock_logs(
        &self,
        inventory_id: InventoryId,
        limit: i64,
        offset: i64,
    ) -> DomainResult<Vec<StockLog>>;
}
