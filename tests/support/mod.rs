// tests/support/mod.rs
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::OwnedMutexGuard;

use stockroom::application::ports::{random::BarcodePayloadSource, time::Clock};
use stockroom::domain::audit::entity::NewAuditLog;
use stockroom::domain::audit::repository::AuditLogRepository;
use stockroom::domain::audit::AuditLog;
use stockroom::domain::catalog::value_objects::{
    CategoryId, ProductId, UnitId, WarehouseId, ZoneId,
};
use stockroom::domain::catalog::{
    NewProduct, NewProductCategory, NewUnitOfMeasure, NewWarehouse, NewWarehouseZone, Product,
    ProductCategory, ProductCategoryRepository, ProductRepository, UnitOfMeasure,
    UnitOfMeasureRepository, Warehouse, WarehouseRepository, WarehouseZone,
    WarehouseZoneRepository,
};
use stockroom::domain::errors::{DomainError, DomainResult};
use stockroom::domain::inventory::entity::{
    InventoryId, NewProductInventory, NewStockLog, ProductInventory, StockLog,
};
use stockroom::domain::inventory::store::{StockLedgerReader, StockLedgerStore, StockLedgerTx};

pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
}

pub struct FixedClock {
    pub at: DateTime<Utc>,
}

impl FixedClock {
    pub fn new() -> Self {
        Self { at: fixed_instant() }
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at
    }
}

/// Replays a fixed script of 12-digit payloads, panicking when it runs dry.
pub struct ScriptedBarcodeSource {
    payloads: Mutex<VecDeque<u64>>,
}

impl ScriptedBarcodeSource {
    pub fn new(payloads: impl IntoIterator<Item = u64>) -> Self {
        Self {
            payloads: Mutex::new(payloads.into_iter().collect()),
        }
    }
}

impl BarcodePayloadSource for ScriptedBarcodeSource {
    fn next_payload(&self) -> u64 {
        self.payloads
            .lock()
            .unwrap()
            .pop_front()
            .expect("barcode payload script exhausted")
    }
}

/* ------------------------------ catalog fakes ------------------------------ */

#[derive(Default)]
pub struct InMemoryProductRepository {
    inner: Mutex<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn seed(&self, products: Vec<Product>) {
        *self.inner.lock().unwrap() = products;
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        let mut items = self.inner.lock().unwrap();
        if items.iter().any(|p| p.sku == product.sku) {
            return Err(DomainError::Conflict("sku already exists".into()));
        }
        let created = Product {
            id: ProductId::new(items.len() as i64 + 1)?,
            sku: product.sku,
            barcode: product.barcode,
            name: product.name,
            description: product.description,
            category_id: product.category_id,
            unit_id: product.unit_id,
            minimum_stock: product.minimum_stock,
            is_active: product.is_active,
            created_at: product.created_at,
            updated_at: product.updated_at,
        };
        items.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn list(&self, limit: i64, offset: i64) -> DomainResult<Vec<Product>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn exists_by_sku(&self, sku: &str) -> DomainResult<bool> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .any(|p| p.sku.as_str() == sku))
    }

    async fn exists_by_barcode(&self, barcode: &str) -> DomainResult<bool> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .any(|p| p.barcode.as_str() == barcode))
    }
}

#[derive(Default)]
pub struct InMemoryWarehouseRepository {
    inner: Mutex<Vec<Warehouse>>,
}

impl InMemoryWarehouseRepository {
    pub fn seed(&self, warehouses: Vec<Warehouse>) {
        *self.inner.lock().unwrap() = warehouses;
    }
}

#[async_trait]
impl WarehouseRepository for InMemoryWarehouseRepository {
    async fn insert(&self, warehouse: NewWarehouse) -> DomainResult<Warehouse> {
        let mut items = self.inner.lock().unwrap();
        let created = Warehouse {
            id: WarehouseId::new(items.len() as i64 + 1)?,
            code: warehouse.code,
            name: warehouse.name,
            address: warehouse.address,
            created_at: warehouse.created_at,
            updated_at: warehouse.updated_at,
        };
        items.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: WarehouseId) -> DomainResult<Option<Warehouse>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.id == id)
            .cloned())
    }

    async fn list(&self, limit: i64, offset: i64) -> DomainResult<Vec<Warehouse>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn exists_by_code(&self, code: &str) -> DomainResult<bool> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .any(|w| w.code.as_str() == code))
    }
}

#[derive(Default)]
pub struct InMemoryWarehouseZoneRepository {
    inner: Mutex<Vec<WarehouseZone>>,
}

impl InMemoryWarehouseZoneRepository {
    pub fn seed(&self, zones: Vec<WarehouseZone>) {
        *self.inner.lock().unwrap() = zones;
    }
}

#[async_trait]
impl WarehouseZoneRepository for InMemoryWarehouseZoneRepository {
    async fn insert(&self, zone: NewWarehouseZone) -> DomainResult<WarehouseZone> {
        let mut items = self.inner.lock().unwrap();
        let created = WarehouseZone {
            id: ZoneId::new(items.len() as i64 + 1)?,
            warehouse_id: zone.warehouse_id,
            code: zone.code,
            name: zone.name,
            created_at: zone.created_at,
        };
        items.push(created.clone());
        Ok(created)
    }

    async fn find_in_warehouse(
        &self,
        warehouse_id: WarehouseId,
        zone_id: ZoneId,
    ) -> DomainResult<Option<WarehouseZone>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .find(|z| z.id == zone_id && z.warehouse_id == warehouse_id)
            .cloned())
    }

    async fn list_for_warehouse(
        &self,
        warehouse_id: WarehouseId,
    ) -> DomainResult<Vec<WarehouseZone>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .filter(|z| z.warehouse_id == warehouse_id)
            .cloned()
            .collect())
    }

    async fn exists_by_code(&self, code: &str) -> DomainResult<bool> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .any(|z| z.code.as_str() == code))
    }

    async fn exists_by_name_in_warehouse(
        &self,
        warehouse_id: WarehouseId,
        name: &str,
    ) -> DomainResult<bool> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .any(|z| z.warehouse_id == warehouse_id && z.name == name))
    }
}

#[derive(Default)]
pub struct InMemoryProductCategoryRepository {
    inner: Mutex<Vec<ProductCategory>>,
}

impl InMemoryProductCategoryRepository {
    pub fn seed(&self, categories: Vec<ProductCategory>) {
        *self.inner.lock().unwrap() = categories;
    }
}

#[async_trait]
impl ProductCategoryRepository for InMemoryProductCategoryRepository {
    async fn insert(&self, category: NewProductCategory) -> DomainResult<ProductCategory> {
        let mut items = self.inner.lock().unwrap();
        let created = ProductCategory {
            id: CategoryId::new(items.len() as i64 + 1)?,
            name: category.name,
            created_at: category.created_at,
        };
        items.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<ProductCategory>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<ProductCategory>> {
        Ok(self.inner.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct InMemoryUnitOfMeasureRepository {
    inner: Mutex<Vec<UnitOfMeasure>>,
}

impl InMemoryUnitOfMeasureRepository {
    pub fn seed(&self, units: Vec<UnitOfMeasure>) {
        *self.inner.lock().unwrap() = units;
    }
}

#[async_trait]
impl UnitOfMeasureRepository for InMemoryUnitOfMeasureRepository {
    async fn insert(&self, unit: NewUnitOfMeasure) -> DomainResult<UnitOfMeasure> {
        let mut items = self.inner.lock().unwrap();
        let created = UnitOfMeasure {
            id: UnitId::new(items.len() as i64 + 1)?,
            name: unit.name,
            abbreviation: unit.abbreviation,
            created_at: unit.created_at,
        };
        items.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: UnitId) -> DomainResult<Option<UnitOfMeasure>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<UnitOfMeasure>> {
        Ok(self.inner.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct InMemoryAuditLogRepository {
    inner: Mutex<Vec<NewAuditLog>>,
}

impl InMemoryAuditLogRepository {
    pub fn entries(&self) -> Vec<NewAuditLog> {
        self.inner.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuditLogRepository for InMemoryAuditLogRepository {
    async fn insert(&self, entry: NewAuditLog) -> DomainResult<()> {
        self.inner.lock().unwrap().push(entry);
        Ok(())
    }

    async fn list(&self, limit: i64, offset: i64) -> DomainResult<Vec<AuditLog>> {
        let items = self.inner.lock().unwrap();
        Ok(items
            .iter()
            .enumerate()
            .rev()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|(idx, entry)| AuditLog {
                id: idx as i64 + 1,
                actor: entry.actor.clone(),
                action: entry.action,
                table_affected: entry.table_affected.clone(),
                object_id: entry.object_id.clone(),
                note: entry.note.clone(),
                created_at: entry.created_at,
            })
            .collect())
    }
}

/* ------------------------------ ledger fake ------------------------------ */

#[derive(Default, Clone)]
pub struct LedgerState {
    pub inventories: Vec<ProductInventory>,
    pub stock_logs: Vec<StockLog>,
    pub audit_entries: Vec<NewAuditLog>,
}

/// In-memory stand-in for the Postgres-backed ledger. `begin` takes an owned
/// async lock for the lifetime of the unit of work, so concurrent
/// transactions serialize the way row locks make them in Postgres; writes go
/// to a staged copy that replaces the shared state only on commit.
#[derive(Default)]
pub struct InMemoryLedger {
    state: Arc<tokio::sync::Mutex<LedgerState>>,
}

impl InMemoryLedger {
    pub async fn snapshot(&self) -> LedgerState {
        self.state.lock().await.clone()
    }

    pub async fn stock_logs(&self) -> Vec<StockLog> {
        self.state.lock().await.stock_logs.clone()
    }

    pub async fn audit_entries(&self) -> Vec<NewAuditLog> {
        self.state.lock().await.audit_entries.clone()
    }

    pub async fn inventories(&self) -> Vec<ProductInventory> {
        self.state.lock().await.inventories.clone()
    }
}

#[async_trait]
impl StockLedgerStore for InMemoryLedger {
    async fn begin(&self) -> DomainResult<Box<dyn StockLedgerTx>> {
        let guard = Arc::clone(&self.state).lock_owned().await;
        let staged = guard.clone();
        Ok(Box::new(InMemoryLedgerTx { guard, staged }))
    }
}

#[async_trait]
impl StockLedgerReader for InMemoryLedger {
    async fn find_by_id(&self, id: InventoryId) -> DomainResult<Option<ProductInventory>> {
        Ok(self
            .state
            .lock()
            .await
            .inventories
            .iter()
            .find(|inv| inv.id == id)
            .cloned())
    }

    async fn list(&self, limit: i64, offset: i64) -> DomainResult<Vec<ProductInventory>> {
        Ok(self
            .state
            .lock()
            .await
            .inventories
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn list_stock_logs(
        &self,
        inventory_id: InventoryId,
        limit: i64,
        offset: i64,
    ) -> DomainResult<Vec<StockLog>> {
        Ok(self
            .state
            .lock()
            .await
            .stock_logs
            .iter()
            .filter(|log| log.inventory_id == inventory_id)
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

struct InMemoryLedgerTx {
    guard: OwnedMutexGuard<LedgerState>,
    staged: LedgerState,
}

#[async_trait]
impl StockLedgerTx for InMemoryLedgerTx {
    async fn find_inventory_for_update(
        &mut self,
        product_id: ProductId,
        warehouse_id: WarehouseId,
        zone_id: ZoneId,
    ) -> DomainResult<Option<ProductInventory>> {
        Ok(self
            .staged
            .inventories
            .iter()
            .find(|inv| {
                inv.product_id == product_id
                    && inv.warehouse_id == warehouse_id
                    && inv.zone_id == zone_id
            })
            .cloned())
    }

    async fn find_zone_pair_for_update(
        &mut self,
        product_id: ProductId,
        warehouse_id: WarehouseId,
        source_zone_id: ZoneId,
        destination_zone_id: ZoneId,
    ) -> DomainResult<(Option<ProductInventory>, Option<ProductInventory>)> {
        let source = self
            .find_inventory_for_update(product_id, warehouse_id, source_zone_id)
            .await?;
        let destination = self
            .find_inventory_for_update(product_id, warehouse_id, destination_zone_id)
            .await?;
        Ok((source, destination))
    }

    async fn create_inventory(
        &mut self,
        inventory: NewProductInventory,
    ) -> DomainResult<ProductInventory> {
        let created = ProductInventory {
            id: InventoryId::new(self.staged.inventories.len() as i64 + 1)?,
            product_id: inventory.product_id,
            warehouse_id: inventory.warehouse_id,
            zone_id: inventory.zone_id,
            quantity: inventory.quantity,
            created_at: inventory.created_at,
            updated_at: inventory.updated_at,
        };
        self.staged.inventories.push(created.clone());
        Ok(created)
    }

    async fn save_quantity(
        &mut self,
        id: InventoryId,
        quantity: i64,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let inventory = self
            .staged
            .inventories
            .iter_mut()
            .find(|inv| inv.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("inventory record {id} not found")))?;
        inventory.quantity = quantity;
        inventory.updated_at = updated_at;
        Ok(())
    }

    async fn append_stock_log(&mut self, log: NewStockLog) -> DomainResult<StockLog> {
        let created = StockLog {
            id: self.staged.stock_logs.len() as i64 + 1,
            inventory_id: log.inventory_id,
            log_type: log.log_type,
            quantity_before: log.quantity_before,
            quantity_change: log.quantity_change,
            quantity_after: log.quantity_after,
            reference_kind: log.reference_kind,
            reference_id: log.reference_id,
            note: log.note,
            actor: log.actor,
            created_at: log.created_at,
        };
        self.staged.stock_logs.push(created.clone());
        Ok(created)
    }

    async fn append_audit_log(&mut self, entry: NewAuditLog) -> DomainResult<()> {
        self.staged.audit_entries.push(entry);
        Ok(())
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        let mut guard = self.guard;
        *guard = self.staged;
        Ok(())
    }
}
