//! Climate archive client for fetching daily climate history
//!
//! Integrates with an Open-Meteo compatible archive API. A year is requested
//! as several date-range chunks fetched concurrently and reassembled in date
//! order before it is handed to the analysis.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{ClimateDay, DateRange, GpsCoordinates};
use tokio::task::JoinSet;

use crate::config::ClimateConfig;
use crate::error::{AppError, AppResult};

const DAILY_VARIABLES: &str = "temperature_2m_min,temperature_2m_max,precipitation_sum";

/// Climate archive API client
#[derive(Clone)]
pub struct ClimateArchiveClient {
    client: Client,
    base_url: String,
    chunk_days: usize,
    timeout: Duration,
}

/// Archive API response
#[derive(Debug, Deserialize)]
struct ArchiveResponse {
    daily: DailySeries,
}

/// Column-oriented daily values; any entry may be null
#[derive(Debug, Deserialize)]
struct DailySeries {
    time: Vec<NaiveDate>,
    #[serde(default)]
    temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    precipitation_sum: Vec<Option<f64>>,
}

impl ClimateArchiveClient {
    /// Create a new ClimateArchiveClient
    pub fn new(config: &ClimateConfig) -> AppResult<Self> {
        if config.archive_url.trim().is_empty() {
            return Err(AppError::Configuration(
                "climate.archive_url is not set".to_string(),
            ));
        }

        Ok(Self {
            client: Client::new(),
            base_url: config.archive_url.trim_end_matches('/').to_string(),
            chunk_days: config.chunk_days.max(1),
            timeout: Duration::from_secs(config.request_timeout_secs),
        })
    }

    /// Fetch January 1st through December 31st of `year`
    pub async fn fetch_year(
        &self,
        coordinates: &GpsCoordinates,
        year: i32,
    ) -> AppResult<Vec<ClimateDay>> {
        let range = DateRange::calendar_year(year)
            .ok_or_else(|| AppError::invalid("year", format!("{} is not a valid year", year)))?;
        self.fetch_range(coordinates, range).await
    }

    /// Fetch a date range as concurrent chunks, sorted ascending by date
    pub async fn fetch_range(
        &self,
        coordinates: &GpsCoordinates,
        range: DateRange,
    ) -> AppResult<Vec<ClimateDay>> {
        let chunks = range.chunks(self.chunk_days);
        tracing::info!(
            "Fetching climate {}..{} at ({}, {}) in {} chunks",
            range.start,
            range.end,
            coordinates.latitude,
            coordinates.longitude,
            chunks.len()
        );

        let mut requests = JoinSet::new();
        for chunk in chunks {
            let client = self.clone();
            let latitude = coordinates.latitude;
            let longitude = coordinates.longitude;
            requests.spawn(async move { client.fetch_chunk(latitude, longitude, chunk).await });
        }

        let collected = tokio::time::timeout(self.timeout, async {
            let mut days = Vec::with_capacity(range.len_days());
            while let Some(joined) = requests.join_next().await {
                let chunk_days = joined
                    .map_err(|e| AppError::Internal(format!("Climate fetch task failed: {}", e)))??;
                days.extend(chunk_days);
            }
            Ok::<_, AppError>(days)
        })
        .await;

        let days = match collected {
            Ok(result) => result?,
            Err(_) => {
                tracing::warn!("Climate fetch timed out after {:?}", self.timeout);
                return Err(AppError::ClimateServiceUnavailable);
            }
        };

        let days = assemble_series(days, range);
        tracing::debug!("Assembled {} climate days", days.len());
        Ok(days)
    }

    /// Fetch one chunk of the range
    async fn fetch_chunk(
        &self,
        latitude: Decimal,
        longitude: Decimal,
        chunk: DateRange,
    ) -> AppResult<Vec<ClimateDay>> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("start_date", chunk.start.to_string()),
                ("end_date", chunk.end.to_string()),
                ("daily", DAILY_VARIABLES.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Climate archive request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Climate archive error: {} - {}",
                status, body
            )));
        }

        let data: ArchiveResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse climate archive response: {}", e))
        })?;

        Ok(convert_daily_series(data.daily))
    }
}

/// Convert column-oriented archive values to climate days.
///
/// Missing temperatures become NaN so the day is judged unsuitable; missing
/// precipitation counts as a dry day.
fn convert_daily_series(series: DailySeries) -> Vec<ClimateDay> {
    let value = |column: &[Option<f64>], i: usize| column.get(i).copied().flatten();

    series
        .time
        .iter()
        .enumerate()
        .map(|(i, &date)| ClimateDay {
            date,
            temp_min: value(&series.temperature_2m_min, i).unwrap_or(f64::NAN),
            temp_max: value(&series.temperature_2m_max, i).unwrap_or(f64::NAN),
            precipitation: value(&series.precipitation_sum, i).unwrap_or(0.0),
        })
        .collect()
}

/// Sort chunk results ascending by date, dropping duplicated dates and days
/// outside the requested range
fn assemble_series(mut days: Vec<ClimateDay>, range: DateRange) -> Vec<ClimateDay> {
    days.retain(|d| range.contains(d.date));
    days.sort_by_key(|d| d.date);
    days.dedup_by_key(|d| d.date);
    days
}
