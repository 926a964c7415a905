//! Field location lookup

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::FieldLocation;
use shared::{validate_coordinates, GpsCoordinates};

/// Field service for reading field locations
#[derive(Clone)]
pub struct FieldService {
    db: PgPool,
}

/// Field record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Field {
    pub id: Uuid,
    pub name: String,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub area_hectares: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Field {
    pub fn location(&self) -> FieldLocation {
        let coordinates = match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(GpsCoordinates::new(latitude, longitude)),
            _ => None,
        };

        FieldLocation {
            field_id: self.id,
            name: self.name.clone(),
            coordinates,
            area_hectares: self.area_hectares,
        }
    }
}

impl FieldService {
    /// Create a new FieldService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get a field by ID
    pub async fn get_field(&self, field_id: Uuid) -> AppResult<Field> {
        let field = sqlx::query_as::<_, Field>(
            r#"
            SELECT id, name, latitude, longitude, area_hectares, created_at, updated_at
            FROM fields
            WHERE id = $1
            "#,
        )
        .bind(field_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Field".to_string()))?;

        Ok(field)
    }

    /// Get the coordinates of a field, failing if it has none
    pub async fn get_coordinates(&self, field_id: Uuid) -> AppResult<GpsCoordinates> {
        let location = self.get_field(field_id).await?.location();
        let coordinates = location
            .require_coordinates()
            .map_err(|_| AppError::MissingCoordinates(location.name.clone()))?
            .clone();

        validate_coordinates(coordinates.latitude, coordinates.longitude)
            .map_err(|msg| AppError::invalid("coordinates", msg))?;

        Ok(coordinates)
    }
}
