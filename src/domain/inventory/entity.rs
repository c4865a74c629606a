use crate::domain::catalog::value_objects::{ProductId, WarehouseId, ZoneId};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InventoryId(pub i64);

impl InventoryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "inventory id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<InventoryId> for i64 {
    fn from(value: InventoryId) -> Self {
        value.0
    }
}

impl fmt::Display for InventoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Current-quantity record for one (product, warehouse, zone) location.
/// Created lazily on first movement into the location; `quantity` never
/// drops below zero once an operation has committed.
#[derive(Debug, Clone)]
pub struct ProductInventory {
    pub id: InventoryId,
    pub product_id: ProductId,
    pub warehouse_id: WarehouseId,
    pub zone_id: ZoneId,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewProductInventory {
    pub product_id: ProductId,
    pub warehouse_id: WarehouseId,
    pub zone_id: ZoneId,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Closed set of movement kinds the ledger records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLogType {
    AdjustmentIn,
    AdjustmentOut,
    GoodsIssue,
    GoodsReceipt,
}

impl StockLogType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AdjustmentIn => "ADJUSTMENT_IN",
            Self::AdjustmentOut => "ADJUSTMENT_OUT",
            Self::GoodsIssue => "GOODS_ISSUE",
            Self::GoodsReceipt => "GOODS_RECEIPT",
        }
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        match value {
            "ADJUSTMENT_IN" => Ok(Self::AdjustmentIn),
            "ADJUSTMENT_OUT" => Ok(Self::AdjustmentOut),
            "GOODS_ISSUE" => Ok(Self::GoodsIssue),
            "GOODS_RECEIPT" => Ok(Self::GoodsReceipt),
            other => Err(DomainError::Validation(format!(
                "unknown stock log type '{other}'"
            ))),
        }
    }
}

impl fmt::Display for StockLogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of originating document a log row points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    PurchaseOrder,
    SalesOrder,
    WorkOrder,
    ReturnAuthorization,
    StockTakeDocument,
    /// The paired inventory record of a zone-to-zone move.
    TransferCounterpart,
}

impl ReferenceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PurchaseOrder => "PURCHASE_ORDER",
            Self::SalesOrder => "SALES_ORDER",
            Self::WorkOrder => "WORK_ORDER",
            Self::ReturnAuthorization => "RETURN_AUTHORIZATION",
            Self::StockTakeDocument => "STOCK_TAKE_DOCUMENT",
            Self::TransferCounterpart => "TRANSFER_COUNTERPART",
        }
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        match value {
            "PURCHASE_ORDER" => Ok(Self::PurchaseOrder),
            "SALES_ORDER" => Ok(Self::SalesOrder),
            "WORK_ORDER" => Ok(Self::WorkOrder),
            "RETURN_AUTHORIZATION" => Ok(Self::ReturnAuthorization),
            "STOCK_TAKE_DOCUMENT" => Ok(Self::StockTakeDocument),
            "TRANSFER_COUNTERPART" => Ok(Self::TransferCounterpart),
            other => Err(DomainError::Validation(format!(
                "unknown reference kind '{other}'"
            ))),
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable ledger row. Rows are only ever appended; corrections are
/// new compensating rows.
#[derive(Debug, Clone)]
pub struct StockLog {
    pub id: i64,
    pub inventory_id: InventoryId,
    pub log_type: StockLogType,
    pub quantity_before: i64,
    pub quantity_change: i64,
    pub quantity_after: i64,
    pub reference_kind: Option<ReferenceKind>,
    pub reference_id: Option<String>,
    pub note: Option<String>,
    /// `None` marks a system-initiated change.
    pub actor: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewStockLog {
    pub inventory_id: InventoryId,
    pub log_type: StockLogType,
    pub quantity_before: i64,
    pub quantity_change: i64,
    pub quantity_after: i64,
    pub reference_kind: Option<ReferenceKind>,
    pub reference_id: Option<String>,
    pub note: Option<String>,
    pub actor: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewStockLog {
    /// `quantity_after` is always recomputed here, never taken from a caller.
    /// A change that would push the counter past `i64::MAX` is a validation
    /// error rather than a wrap.
    #[allow(clippy::too_many_arguments)]
    pub fn record(
        inventory_id: InventoryId,
        log_type: StockLogType,
        quantity_before: i64,
        quantity_change: i64,
        reference_kind: Option<ReferenceKind>,
        reference_id: Option<String>,
        note: Option<String>,
        actor: Option<String>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let quantity_after = quantity_before.checked_add(quantity_change).ok_or_else(|| {
            DomainError::Validation("quantity change overflows the stock counter".into())
        })?;

        Ok(Self {
            inventory_id,
            log_type,
            quantity_before,
            quantity_change,
            quantity_after,
            reference_kind,
            reference_id,
            note,
            actor,
            created_at,
        })
    }
}
