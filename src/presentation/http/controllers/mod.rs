// src/presentation/http/controllers/mod.rs
pub mod audit;
pub mod catalog;
pub mod inventory;
