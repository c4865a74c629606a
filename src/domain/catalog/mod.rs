pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{
    NewProduct, NewProductCategory, NewUnitOfMeasure, NewWarehouse, NewWarehouseZone, Product,
    ProductCategory, UnitOfMeasure, Warehouse, WarehouseZone,
};
pub use repository::{
    ProductCategoryRepository, ProductRepository, UnitOfMeasureRepository, WarehouseRepository,
    WarehouseZoneRepository,
};
pub use value_objects::{
    Barcode, CategoryId, ProductId, Sku, UnitId, WarehouseCode, WarehouseId, ZoneCode, ZoneId,
};
