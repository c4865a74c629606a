pub mod database;
pub mod identity;
pub mod random;
pub mod repositories;
pub mod time;
