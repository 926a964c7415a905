//! Common types used across the platform

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Inclusive date range for queries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// January 1st through December 31st of `year`
    pub fn calendar_year(year: i32) -> Option<Self> {
        Some(Self {
            start: NaiveDate::from_ymd_opt(year, 1, 1)?,
            end: NaiveDate::from_ymd_opt(year, 12, 31)?,
        })
    }

    /// Number of days covered, zero when the range is inverted
    pub fn len_days(&self) -> usize {
        let span = (self.end - self.start).num_days();
        if span < 0 {
            0
        } else {
            span as usize + 1
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Split into consecutive sub-ranges of at most `chunk_days` days.
    /// The chunks cover the range exactly once, in order.
    pub fn chunks(&self, chunk_days: usize) -> Vec<DateRange> {
        // never wider than the range itself, so the cast cannot overflow
        let chunk_days = chunk_days.clamp(1, self.len_days().max(1)) as i64;
        let mut chunks = Vec::new();
        let mut start = self.start;

        while start <= self.end {
            let end = (start + Duration::days(chunk_days - 1)).min(self.end);
            chunks.push(DateRange { start, end });
            start = end + Duration::days(1);
        }

        chunks
    }
}
