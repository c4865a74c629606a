// src/infrastructure/repositories/postgres_stock_ledger.rs
use super::map_sqlx;
use crate::domain::audit::entity::NewAuditLog;
use crate::domain::catalog::value_objects::{ProductId, WarehouseId, ZoneId};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::inventory::entity::{
    InventoryId, NewProductInventory, NewStockLog, ProductInventory, ReferenceKind, StockLog,
    StockLogType,
};
use crate::domain::inventory::store::{StockLedgerReader, StockLedgerStore, StockLedgerTx};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, Transaction};

#[derive(Clone)]
pub struct PostgresStockLedgerStore {
    pool: PgPool,
}

impl PostgresStockLedgerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct InventoryRow {
    id: i64,
    product_id: i64,
    warehouse_id: i64,
    zone_id: i64,
    quantity: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<InventoryRow> for ProductInventory {
    type Error = DomainError;

    fn try_from(row: InventoryRow) -> Result<Self, Self::Error> {
        Ok(ProductInventory {
            id: InventoryId::new(row.id)?,
            product_id: ProductId::new(row.product_id)?,
            warehouse_id: WarehouseId::new(row.warehouse_id)?,
            zone_id: ZoneId::new(row.zone_id)?,
            quantity: row.quantity,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct StockLogRow {
    id: i64,
    inventory_id: i64,
    log_type: String,
    quantity_before: i64,
    quantity_change: i64,
    quantity_after: i64,
    reference_kind: Option<String>,
    reference_id: Option<String>,
    note: Option<String>,
    actor: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<StockLogRow> for StockLog {
    type Error = DomainError;

    fn try_from(row: StockLogRow) -> Result<Self, Self::Error> {
        Ok(StockLog {
            id: row.id,
            inventory_id: InventoryId::new(row.inventory_id)?,
            log_type: StockLogType::parse(&row.log_type)?,
            quantity_before: row.quantity_before,
            quantity_change: row.quantity_change,
            quantity_after: row.quantity_after,
            reference_kind: row
                .reference_kind
                .as_deref()
                .map(ReferenceKind::parse)
                .transpose()?,
            reference_id: row.reference_id,
            note: row.note,
            actor: row.actor,
            created_at: row.created_at,
        })
    }
}

const INVENTORY_COLUMNS: &str =
    "id, product_id, warehouse_id, zone_id, quantity, created_at, updated_at";
const STOCK_LOG_COLUMNS: &str = "id, inventory_id, log_type, quantity_before, quantity_change, quantity_after, reference_kind, reference_id, note, actor, created_at";

#[async_trait]
impl StockLedgerStore for PostgresStockLedgerStore {
    async fn begin(&self) -> DomainResult<Box<dyn StockLedgerTx>> {
        let tx = self.pool.begin().await.map_err(map_sqlx)?;
        Ok(Box::new(PostgresStockLedgerTx { tx }))
    }
}

#[async_trait]
impl StockLedgerReader for PostgresStockLedgerStore {
    async fn find_by_id(&self, id: InventoryId) -> DomainResult<Option<ProductInventory>> {
        let row = sqlx::query_as::<_, InventoryRow>(&format!(
            "SELECT {INVENTORY_COLUMNS} FROM product_inventories WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ProductInventory::try_from).transpose()
    }

    async fn list(&self, limit: i64, offset: i64) -> DomainResult<Vec<ProductInventory>> {
        let rows = sqlx::query_as::<_, InventoryRow>(&format!(
            "SELECT {INVENTORY_COLUMNS} FROM product_inventories ORDER BY id LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ProductInventory::try_from).collect()
    }

    async fn list_stock_logs(
        &self,
        inventory_id: InventoryId,
        limit: i64,
        offset: i64,
    ) -> DomainResult<Vec<StockLog>> {
        let rows = sqlx::query_as::<_, StockLogRow>(&format!(
            "SELECT {STOCK_LOG_COLUMNS} FROM stock_logs WHERE inventory_id = $1
             ORDER BY created_at, id LIMIT $2 OFFSET $3"
        ))
        .bind(i64::from(inventory_id))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(StockLog::try_from).collect()
    }
}

struct PostgresStockLedgerTx {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl StockLedgerTx for PostgresStockLedgerTx {
    async fn find_inventory_for_update(
        &mut self,
        product_id: ProductId,
        warehouse_id: WarehouseId,
        zone_id: ZoneId,
    ) -> DomainResult<Option<ProductInventory>> {
        let row = sqlx::query_as::<_, InventoryRow>(&format!(
            "SELECT {INVENTORY_COLUMNS} FROM product_inventories
             WHERE product_id = $1 AND warehouse_id = $2 AND zone_id = $3
             FOR UPDATE"
        ))
        .bind(i64::from(product_id))
        .bind(i64::from(warehouse_id))
        .bind(i64::from(zone_id))
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        row.map(ProductInventory::try_from).transpose()
    }

    async fn find_zone_pair_for_update(
        &mut self,
        product_id: ProductId,
        warehouse_id: WarehouseId,
        source_zone_id: ZoneId,
        destination_zone_id: ZoneId,
    ) -> DomainResult<(Option<ProductInventory>, Option<ProductInventory>)> {
        // ORDER BY id gives every transaction the same lock acquisition
        // order regardless of move direction.
        let rows = sqlx::query_as::<_, InventoryRow>(&format!(
            "SELECT {INVENTORY_COLUMNS} FROM product_inventories
             WHERE product_id = $1 AND warehouse_id = $2 AND zone_id IN ($3, $4)
             ORDER BY id
             FOR UPDATE"
        ))
        .bind(i64::from(product_id))
        .bind(i64::from(warehouse_id))
        .bind(i64::from(source_zone_id))
        .bind(i64::from(destination_zone_id))
        .fetch_all(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        let mut source = None;
        let mut destination = None;
        for row in rows {
            let inventory = ProductInventory::try_from(row)?;
            if inventory.zone_id == source_zone_id {
                source = Some(inventory);
            } else if inventory.zone_id == destination_zone_id {
                destination = Some(inventory);
            }
        }
        Ok((source, destination))
    }

    async fn create_inventory(
        &mut self,
        inventory: NewProductInventory,
    ) -> DomainResult<ProductInventory> {
        let row = sqlx::query_as::<_, InventoryRow>(&format!(
            "INSERT INTO product_inventories (product_id, warehouse_id, zone_id, quantity, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {INVENTORY_COLUMNS}"
        ))
        .bind(i64::from(inventory.product_id))
        .bind(i64::from(inventory.warehouse_id))
        .bind(i64::from(inventory.zone_id))
        .bind(inventory.quantity)
        .bind(inventory.created_at)
        .bind(inventory.updated_at)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        ProductInventory::try_from(row)
    }

    async fn save_quantity(
        &mut self,
        id: InventoryId,
        quantity: i64,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let result =
            sqlx::query("UPDATE product_inventories SET quantity = $2, updated_at = $3 WHERE id = $1")
                .bind(i64::from(id))
                .bind(quantity)
                .bind(updated_at)
                .execute(&mut *self.tx)
                .await
                .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "inventory record {id} not found"
            )));
        }
        Ok(())
    }

    async fn append_stock_log(&mut self, log: NewStockLog) -> DomainResult<StockLog> {
        let row = sqlx::query_as::<_, StockLogRow>(&format!(
            "INSERT INTO stock_logs (inventory_id, log_type, quantity_before, quantity_change, quantity_after, reference_kind, reference_id, note, actor, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {STOCK_LOG_COLUMNS}"
        ))
        .bind(i64::from(log.inventory_id))
        .bind(log.log_type.as_str())
        .bind(log.quantity_before)
        .bind(log.quantity_change)
        .bind(log.quantity_after)
        .bind(log.reference_kind.map(ReferenceKind::as_str))
        .bind(&log.reference_id)
        .bind(&log.note)
        .bind(&log.actor)
        .bind(log.created_at)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        StockLog::try_from(row)
    }

    async fn append_audit_log(&mut self, entry: NewAuditLog) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO audit_logs (actor, action, table_affected, object_id, note, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&entry.actor)
        .bind(entry.action.as_str())
        .bind(&entry.table_affected)
        .bind(&entry.object_id)
        .bind(&entry.note)
        .bind(entry.created_at)
        .execute(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        self.tx.commit().await.map_err(map_sqlx)
    }
}
