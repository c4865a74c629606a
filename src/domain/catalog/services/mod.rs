// src/domain/catalog/services/mod.rs
use std::sync::Arc;

use crate::application::ports::random::BarcodePayloadSource;
use crate::domain::catalog::repository::{
    ProductRepository, WarehouseRepository, WarehouseZoneRepository,
};
use crate::domain::catalog::value_objects::{Barcode, Sku, WarehouseCode, ZoneCode};
use crate::domain::errors::{DomainError, DomainResult};

/// Probe loops are capped; past the cap we surface a conflict instead of
/// looping forever.
const MAX_SUFFIX_PROBES: u32 = 1000;
const MAX_BARCODE_DRAWS: u32 = 100;

/// Domain service producing unique, pattern-conformant identifiers for newly
/// created catalog entities. Stateless apart from its repository handles,
/// which serve as the uniqueness oracle.
pub struct CodeGeneratorService {
    products: Arc<dyn ProductRepository>,
    warehouses: Arc<dyn WarehouseRepository>,
    zones: Arc<dyn WarehouseZoneRepository>,
    barcode_source: Arc<dyn BarcodePayloadSource>,
}

impl CodeGeneratorService {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        warehouses: Arc<dyn WarehouseRepository>,
        zones: Arc<dyn WarehouseZoneRepository>,
        barcode_source: Arc<dyn BarcodePayloadSource>,
    ) -> Self {
        Self {
            products,
            warehouses,
            zones,
            barcode_source,
        }
    }

    /// Builds a SKU like `ELE-GAMEMO-PCS` from category, product name and
    /// unit abbreviation, then probes `-001`, `-002`, ... until unused.
    pub async fn generate_sku(
        &self,
        category_name: &str,
        product_name: &str,
        unit_abbreviation: &str,
    ) -> DomainResult<Sku> {
        let base = format!(
            "{}-{}-{}",
            sanitize_and_shorten(category_name, 3),
            sanitize_and_shorten(product_name, 6),
            sanitize_and_shorten(unit_abbreviation, 3),
        );

        if !self.products.exists_by_sku(&base).await? {
            return Sku::new(base);
        }

        for counter in 1..=MAX_SUFFIX_PROBES {
            let candidate = format!("{base}-{counter:03}");
            if !self.products.exists_by_sku(&candidate).await? {
                return Sku::new(candidate);
            }
        }

        Err(DomainError::Conflict(format!(
            "no free sku found for base '{base}' after {MAX_SUFFIX_PROBES} probes"
        )))
    }

    /// Warehouse code: up to ten sanitized characters of the name, `WH` when
    /// the name is blank, three-digit suffix on collision.
    pub async fn generate_warehouse_code(&self, name: &str) -> DomainResult<WarehouseCode> {
        let sanitized = sanitize_and_shorten(name, 10);
        let base = if sanitized.is_empty() {
            "WH".to_string()
        } else {
            sanitized
        };

        if !self.warehouses.exists_by_code(&base).await? {
            return WarehouseCode::new(base);
        }

        for counter in 1..=MAX_SUFFIX_PROBES {
            let candidate = format!("{base}-{counter:03}");
            if !self.warehouses.exists_by_code(&candidate).await? {
                return WarehouseCode::new(candidate);
            }
        }

        Err(DomainError::Conflict(format!(
            "no free warehouse code found for base '{base}' after {MAX_SUFFIX_PROBES} probes"
        )))
    }

    /// Zone code: parent warehouse code plus up to four sanitized characters
    /// of the zone name, e.g. `WH-MAIN-RECE`. Collisions get a two-digit
    /// suffix.
    pub async fn generate_zone_code(
        &self,
        warehouse_code: &WarehouseCode,
        zone_name: &str,
    ) -> DomainResult<ZoneCode> {
        let base = format!(
            "{}-{}",
            warehouse_code.as_str(),
            sanitize_and_shorten(zone_name, 4)
        );

        if !self.zones.exists_by_code(&base).await? {
            return ZoneCode::new(base);
        }

        for counter in 1..=MAX_SUFFIX_PROBES {
            let candidate = format!("{base}-{counter:02}");
            if !self.zones.exists_by_code(&candidate).await? {
                return ZoneCode::new(candidate);
            }
        }

        Err(DomainError::Conflict(format!(
            "no free zone code found for base '{base}' after {MAX_SUFFIX_PROBES} probes"
        )))
    }

    /// Draws random 12-digit payloads, appends the EAN-13 check digit and
    /// redraws on the (vanishingly unlikely) collision.
    pub async fn generate_ean13_barcode(&self) -> DomainResult<Barcode> {
        for _ in 0..MAX_BARCODE_DRAWS {
            let payload = self.barcode_source.next_payload();
            let digits = format!("{payload:012}");
            let candidate = format!("{digits}{}", ean13_check_digit(&digits));

            if !self.products.exists_by_barcode(&candidate).await? {
                return Barcode::new(candidate);
            }
        }

        Err(DomainError::Conflict(format!(
            "no free barcode found after {MAX_BARCODE_DRAWS} draws"
        )))
    }
}

/// Drops every non-alphanumeric character, upper-cases the rest and truncates
/// to `max_len`. Blank input yields an empty part, which keeps identifier
/// shapes stable (`ELE--PCS`).
fn sanitize_and_shorten(input: &str, max_len: usize) -> String {
    input
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .take(max_len)
        .collect()
}

/// EAN-13 check digit over a 12-digit payload: odd (1-based) positions weigh
/// 1, even positions weigh 3, and the digit completes the sum to a multiple
/// of ten.
fn ean13_check_digit(payload: &str) -> u32 {
    debug_assert_eq!(payload.len(), 12);

    let sum: u32 = payload
        .bytes()
        .enumerate()
        .map(|(idx, byte)| {
            let digit = u32::from(byte - b'0');
            if idx % 2 == 0 { digit } else { digit * 3 }
        })
        .sum();

    (10 - sum % 10) % 10
}
