// src/application/ports/mod.rs
pub mod identity;
pub mod random;
pub mod time;
