//! Crop tolerance lookup

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{CropConditions, GrowthPeriod};

/// Crop service for reading stored crop tolerance profiles
#[derive(Clone)]
pub struct CropService {
    db: PgPool,
}

/// Crop record with its environmental tolerance fields
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Crop {
    pub id: Uuid,
    pub name: String,
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub min_rainfall: Option<f64>,
    pub max_rainfall: Option<f64>,
    pub growth_period_days: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Crop {
    /// Tolerance band used by the suitability analysis
    pub fn conditions(&self) -> CropConditions {
        CropConditions {
            min_temperature: self.min_temperature,
            max_temperature: self.max_temperature,
            min_rainfall: self.min_rainfall,
            max_rainfall: self.max_rainfall,
        }
    }

    /// Stored growth period, rejected if it cannot drive the window ranking
    pub fn growth_period(&self) -> AppResult<GrowthPeriod> {
        let days = usize::try_from(self.growth_period_days)
            .map_err(|_| AppError::invalid("growth_period_days", "Growth period cannot be negative"))?;
        GrowthPeriod::new(days).map_err(|msg| AppError::invalid("growth_period_days", msg))
    }
}

impl CropService {
    /// Create a new CropService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get a crop by ID
    pub async fn get_crop(&self, crop_id: Uuid) -> AppResult<Crop> {
        let crop = sqlx::query_as::<_, Crop>(
            r#"
            SELECT id, name, min_temperature, max_temperature,
                   min_rainfall, max_rainfall, growth_period_days,
                   created_at, updated_at
            FROM crops
            WHERE id = $1
            "#,
        )
        .bind(crop_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Crop".to_string()))?;

        Ok(crop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crop(growth_period_days: i32) -> Crop {
        Crop {
            id: Uuid::new_v4(),
            name: "Maize".to_string(),
            min_temperature: 10.0,
            max_temperature: 30.0,
            min_rainfall: Some(2.0),
            max_rainfall: None,
            growth_period_days,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_conditions_from_crop() {
        let conditions = crop(120).conditions();
        assert_eq!(conditions.min_temperature, 10.0);
        assert_eq!(conditions.max_temperature, 30.0);
        assert_eq!(conditions.min_rainfall, Some(2.0));
        assert_eq!(conditions.max_rainfall, None);
    }

    #[test]
    fn test_growth_period_from_crop() {
        assert_eq!(crop(120).growth_period().unwrap().days(), 120);
        assert!(crop(0).growth_period().is_err());
        assert!(crop(-5).growth_period().is_err());
    }
}
