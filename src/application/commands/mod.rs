pub mod catalog;
pub mod stock;
