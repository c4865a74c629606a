pub mod audit;
pub mod catalog;
pub mod errors;
pub mod inventory;
