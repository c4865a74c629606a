// src/application/commands/stock/mod.rs
mod adjust;
mod move_stock;
mod service;

pub use adjust::AdjustStockCommand;
pub use move_stock::MoveStockCommand;
pub use service::StockCommandService;
