// src/domain/audit/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::fmt;

/// Closed set of auditable operations; one entry per logical operation, not
/// per internal write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    CreateProduct,
    CreateWarehouse,
    CreateZone,
    CreateProductCategory,
    CreateUnitOfMeasure,
    AdjustStock,
    MoveStock,
}

impl AuditAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreateProduct => "CREATE_PRODUCT",
            Self::CreateWarehouse => "CREATE_WAREHOUSE",
            Self::CreateZone => "CREATE_ZONE",
            Self::CreateProductCategory => "CREATE_PRODUCT_CATEGORY",
            Self::CreateUnitOfMeasure => "CREATE_UNIT_OF_MEASURE",
            Self::AdjustStock => "ADJUST_STOCK",
            Self::MoveStock => "MOVE_STOCK",
        }
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        match value {
            "CREATE_PRODUCT" => Ok(Self::CreateProduct),
            "CREATE_WAREHOUSE" => Ok(Self::CreateWarehouse),
            "CREATE_ZONE" => Ok(Self::CreateZone),
            "CREATE_PRODUCT_CATEGORY" => Ok(Self::CreateProductCategory),
            "CREATE_UNIT_OF_MEASURE" => Ok(Self::CreateUnitOfMeasure),
            "ADJUST_STOCK" => Ok(Self::AdjustStock),
            "MOVE_STOCK" => Ok(Self::MoveStock),
            other => Err(DomainError::Validation(format!(
                "unknown audit action '{other}'"
            ))),
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct AuditLog {
    pub id: i64,
    /// `None` marks a system-initiated action.
    pub actor: Option<String>,
    pub action: AuditAction,
    pub table_affected: String,
    pub object_id: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAuditLog {
    pub actor: Option<String>,
    pub action: AuditAction,
    pub table_affected: String,
    pub object_id: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}
