//! Farm field models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::GpsCoordinates;

/// A cultivated field, located by its GPS coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldLocation {
    pub field_id: Uuid,
    pub name: String,
    pub coordinates: Option<GpsCoordinates>,
    pub area_hectares: Option<Decimal>,
}

impl FieldLocation {
    /// Coordinates are required before any climate data can be requested
    pub fn require_coordinates(&self) -> Result<&GpsCoordinates, &'static str> {
        self.coordinates
            .as_ref()
            .ok_or("Field has no GPS coordinates")
    }
}
