pub mod entity;
pub mod store;

pub use entity::{
    InventoryId, NewProductInventory, NewStockLog, ProductInventory, ReferenceKind, StockLog,
    StockLogType,
};
pub use store::{StockLedgerReader, StockLedgerStore, StockLedgerTx};
